/// The maximum fortune length in bytes.
pub const MAX_FORTUNE_LEN: usize = 128;

/// The fixed, ordered fortune list. Indices are part of the on-chain contract: reordering or
/// removing entries changes which fortune an existing (user, counter) pair maps to.
pub const FORTUNES: [&str; 28] = [
    "You will find a bug in your code today!",
    "A mysterious PR will fix your issues tomorrow.",
    "Your CPU cycle will bring great joy soon.",
    "Beware of off-by-one errors in your future!",
    "The blockchain gods smile upon your transactions.",
    "A segfault in your past will become a feature in your future.",
    "Your next commit will break production... but in a good way?",
    "The only constant in your life will be changing requirements.",
    "You will be promoted to Senior Senior Software Engineer, reporting to the cat.",
    "A rubber duck will finally understand your code comments.",
    "You will discover that the bug was actually a feature requested by the client 3 years ago.",
    "Your coffee will compile faster than your actual code.",
    "You will achieve enlightenment after refactoring the same function for the 42nd time.",
    "A merge conflict will arise between your code and reality.",
    "You will be knighted by the Queen of England for your exceptional use of Comic Sans in production.",
    "Your pull request will be approved by a ghost.",
    "You will find the missing semicolon in your paycheck.",
    "Your code will run perfectly on the first try, but only in production.",
    "You will be offered a job at the Department of Redundancy Department.",
    "You will realize that the documentation was lying, but you were too.",
    "Your keyboard will finally forgive you for the spilled coffee.",
    "You will be given the keys to the production server... by accident.",
    "A Stack Overflow answer from 2009 will perfectly solve your cutting-edge problem.",
    "You will be praised for your innovative use of infinite loops.",
    "Your code review will be conducted by Skynet.",
    "You will be awarded a Nobel Prize in Debugging for finding that typo.",
    "Your YAML indentation will finally be correct, just this once.",
    "You will discover that 'It works on my machine' is a valid deployment strategy in at least 3 parallel universes.",
];

const fn all_fit(fortunes: &[&str]) -> bool {
    let mut i = 0;
    while i < fortunes.len() {
        if fortunes[i].is_empty() || fortunes[i].len() > MAX_FORTUNE_LEN {
            return false;
        }
        i += 1;
    }
    true
}

static_assertions::const_assert!(all_fit(&FORTUNES));
