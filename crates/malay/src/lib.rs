/*
rules

- suku kata: (?<S>[bcdfghjklmnpqrstvwxyz][aeiou])(?<C>[bcdfghjklmnpqrstvwxyz] that doesn't start a new CV pair)*
- prefix: the longest known prefix at the front of the remaining word, repeated until nothing matches
- particle: the longest known particle at the end of a suku kata, only if the suku kata is longer than the particle

1. A character that cannot start a CV pair (vowel, digit, symbol, non-latin letter) becomes a token by itself.
2. Segmentation is lossless. Concatenating the suku kata always gives back the input.
3. Prefix detection never removes anything from the word, unless the caller asks for `strip_single_prefix`.
4. Particle splitting happens at most once per token.
*/

mod affix;
mod constants;
mod error;
mod letter;
mod particle;
mod prefix;
mod syllable;


pub use crate::constants::{PARTICLE_LIBRARY, PREFIX_LIBRARY};
pub use crate::error::Error;
pub use crate::letter::{LetterKind, get_letter_kind, is_consonant, is_vowel};
pub use crate::particle::ParticleSet;
pub use crate::prefix::{PrefixSet, prefix_marker};
pub use crate::syllable::segment;
