use mollusk_svm::result::Check;
use tollgate_interface::error::{
    FortuneCookieError,
    MessageBoardError,
};

/// Extension trait for converting a program error directly into a [`Check`] that asserts the
/// instruction failed with that error.
pub trait IntoCheckFailure {
    fn into_check_failure(self) -> Check<'static>;
}

impl IntoCheckFailure for MessageBoardError {
    fn into_check_failure(self) -> Check<'static> {
        Check::err(self.into())
    }
}

impl IntoCheckFailure for FortuneCookieError {
    fn into_check_failure(self) -> Check<'static> {
        Check::err(self.into())
    }
}
