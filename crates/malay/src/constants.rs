use crate::affix::sort_affixes;
use lazy_static::lazy_static;

/// Common Malay prefixes. Some entries are listed twice, which is harmless:
/// they collapse when a `PrefixSet` is built.
pub const PREFIX_LIBRARY: [&str; 37] = [
    "ber", "ter", "se", "be", "ke", "pe", "mem", "men", "meng", "meny",
    "pem", "pen", "peng", "peny", "penge", "pel", "per", "juru",
    "dwi", "eka", "pasca", "pra", "swa",

    // older list
    "ke", "pe", "pem", "pen", "peng", "penge", "pel", "per", "juru",
    "dwi", "eka", "pasca", "pra", "swa",
];

/// Colloquial discourse particles that show up at the end of words.
pub const PARTICLE_LIBRARY: [&str; 9] = [
    "lah", "kan", "je", "pun", "tu", "keh", "dik", "tau", "nak",
];

lazy_static! {
    pub(crate) static ref SORTED_PREFIX_LIBRARY: Vec<String> = sort_affixes(
        PREFIX_LIBRARY.iter().map(|p| p.to_string()).collect(),
    );

    pub(crate) static ref SORTED_PARTICLE_LIBRARY: Vec<String> = sort_affixes(
        PARTICLE_LIBRARY.iter().map(|p| p.to_string()).collect(),
    );
}
