// Derived from `pinocchio-token-interface` – commit 75116550519a9ee3fdfa6c819aca91e383fffa39, Apache-2.0.
// Modifications by DASMAC, 2025. See: https://github.com/solana-program/token

/// Marker trait for a zero-copy view of bytes as `&Self` via an unchecked cast
/// (e.g., `&*(bytes.as_ptr() as *const Self)`).
///
/// # Safety
/// **Implementor guarantees:**
/// - A stable layout (`#[repr(C)]` or `#[repr(transparent)]`).
/// - Any `LEN` bytes form a valid `Self`. Prefer `[u8; N]` and/or transparent byte wrappers.
/// - `size_of::<Self> == LEN`
/// - `align_of::<Self> == 1`
pub unsafe trait Transmutable: Sized {
    /// The cumulative size in bytes of all fields in the struct.
    const LEN: usize;
}

/// The byte slice passed to [`load`] or [`load_mut`] wasn't exactly `T::LEN` bytes long.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InsufficientByteLength;

/// Returns a reference to a `T: Transmutable` from the given bytes after checking the byte length.
#[inline(always)]
pub fn load<T: Transmutable>(bytes: &[u8]) -> Result<&T, InsufficientByteLength> {
    if bytes.len() != T::LEN {
        return Err(InsufficientByteLength);
    }
    // Safety: the length matches, the alignment is 1 and all bit patterns are valid for `T`.
    Ok(unsafe { &*(bytes.as_ptr() as *const T) })
}

/// Returns a mutable reference to a `T: Transmutable` from the given bytes after checking the byte
/// length.
#[inline(always)]
pub fn load_mut<T: Transmutable>(bytes: &mut [u8]) -> Result<&mut T, InsufficientByteLength> {
    if bytes.len() != T::LEN {
        return Err(InsufficientByteLength);
    }
    // Safety: the length matches, the alignment is 1 and all bit patterns are valid for `T`.
    Ok(unsafe { &mut *(bytes.as_mut_ptr() as *mut T) })
}

/// Views a `T: Transmutable` as its raw bytes.
#[inline(always)]
pub fn as_bytes<T: Transmutable>(value: &T) -> &[u8] {
    // Safety: `T` has no padding and is exactly `T::LEN` bytes.
    unsafe { core::slice::from_raw_parts(value as *const T as *const u8, T::LEN) }
}
