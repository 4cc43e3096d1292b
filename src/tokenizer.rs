use crate::config::{PrefixPolicy, TokenizerConfig};
use crate::error::Error;
use crate::vocab::Vocabulary;
use std::borrow::Cow;
use sukatoken_malay::{ParticleSet, PrefixSet, segment};

/// Splits malay text into suku kata, prefix markers and particles.
///
/// It has no mutable state. Build one from a config and pass it around
/// (or share it between threads) by reference.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    prefixes: PrefixSet,
    particles: ParticleSet,
    config: TokenizerConfig,
}

impl Tokenizer {
    /// It fails if the config has an empty prefix or particle.
    pub fn new(config: TokenizerConfig) -> Result<Self, Error> {
        Ok(Tokenizer {
            prefixes: PrefixSet::builtin().extend(&config.extra_prefixes)?,
            particles: ParticleSet::builtin().extend(&config.extra_particles)?,
            config,
        })
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn prefixes(&self) -> &PrefixSet {
        &self.prefixes
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    /// `"Memperbaiki kerosakanlah, kan?"` ->\
    /// `["[PREFIX=mem]", "[PREFIX=per]", "mem", "per", "ba", "i", "ki", "[PREFIX=ke]", "ke", "ro", "sa", "kan", "lah", ",", "kan", "?"]`
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.config.split_punctuation {
            split_punctuation(text)
        } else {
            Cow::Borrowed(text)
        };
        let mut result = vec![];

        for word in text.split(is_separator).filter(|word| !word.is_empty()) {
            self.tokenize_word(&word.to_lowercase(), &mut result);
        }

        result
    }

    /// Texts are independent of each other, and so are the results.
    pub fn tokenize_corpus<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|text| self.tokenize(text.as_ref())).collect()
    }

    fn tokenize_word(&self, word: &str, result: &mut Vec<String>) {
        let body = match self.config.prefix_policy {
            PrefixPolicy::Contextual => {
                let (markers, word) = self.prefixes.strip_prefixes(word);
                result.extend(markers);
                word
            },
            PrefixPolicy::Strip => {
                let (prefix, root) = self.prefixes.strip_single_prefix(word);

                if let Some(prefix) = prefix {
                    result.push(prefix.to_string());
                }

                root
            },
        };

        for syllable in segment(body) {
            for token in self.particles.split_particle(syllable) {
                if !token.chars().all(is_separator) {
                    result.push(token.to_string());
                }
            }
        }
    }

    pub fn build_vocab<S: AsRef<str>>(&self, corpus: &[S]) -> Vocabulary {
        Vocabulary::build(self, corpus)
    }

    /// Tokens that are not in `vocab` are `vocab.unk_id()`.
    pub fn encode(&self, text: &str, vocab: &Vocabulary) -> Vec<u32> {
        self.tokenize(text).iter().map(|token| vocab.get_id_or_unk(token)).collect()
    }

    /// Ids that are not in `vocab` are `<UNK>`. Tokens are joined with a single space,
    /// so the original spacing and casing are lost.
    pub fn decode(&self, ids: &[u32], vocab: &Vocabulary) -> String {
        vocab.decode(ids)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer {
            prefixes: PrefixSet::builtin(),
            particles: ParticleSet::builtin(),
            config: TokenizerConfig::default(),
        }
    }
}

/// Unicode whitespace, plus the ascii information separators (U+001C..=U+001F),
/// which also separate words in a corpus.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// `"kan?"` -> `"kan ? "`
pub fn split_punctuation(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.is_ascii_punctuation()) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if c.is_ascii_punctuation() {
            result.push(' ');
            result.push(c);
            result.push(' ');
        }

        else {
            result.push(c);
        }
    }

    Cow::Owned(result)
}
