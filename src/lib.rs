use std::collections::HashMap;
use serde::{Deserialize, Serialize};

mod config;
mod constant;
mod error;
mod json_type;
mod tokenizer;
mod vocab;

#[cfg(test)]
mod tests;

pub use config::{PrefixPolicy, TokenizerConfig};
pub use constant::*;
pub use error::Error;
pub use json_type::{JsonType, get_type};
pub use sukatoken_malay::{
    PARTICLE_LIBRARY,
    PREFIX_LIBRARY,
    ParticleSet,
    PrefixSet,
    prefix_marker,
    segment,
};
pub use tokenizer::{Tokenizer, is_separator, split_punctuation};
pub use vocab::{Vocabulary, parse_token_id};

// Same rule as the crate version, plus a `-dev` suffix while a version is being worked on.
pub const VERSION: &str = "0.1.0";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BuildOptions {
    pub version: String,
    pub profile: String,  // debug | release | production
    pub features: HashMap<String, bool>,
}

pub fn get_build_options() -> BuildOptions {
    let profile = if cfg!(feature = "production") {
        "production"
    } else if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    BuildOptions {
        version: VERSION.to_string(),
        profile: profile.to_string(),
        features: vec![
            (String::from("production"), cfg!(feature = "production")),
        ].into_iter().collect(),
    }
}
