use crate::error::Error;
use crate::json_type::get_type;
use json::JsonValue;
use serde::{Deserialize, Serialize};
use sukatoken_fs::{
    WriteMode,
    exists,
    read_string,
    write_log,
    write_string,
};

/// What the tokenizer does with the prefixes of a word.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixPolicy {
    /// `memperbaiki` -> `[PREFIX=mem] [PREFIX=per] mem per ba i ki`
    ///
    /// All the prefixes are reported as markers, and the word is kept intact.
    #[default]
    Contextual,

    /// `keberhasilan` -> `ke ber ha si lan`
    ///
    /// At most one prefix is cut off the word and emitted as a plain token.
    Strip,
}

impl PrefixPolicy {
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s {
            "contextual" => Ok(PrefixPolicy::Contextual),
            "strip" => Ok(PrefixPolicy::Strip),
            _ => Err(Error::InvalidPrefixPolicy(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixPolicy::Contextual => "contextual",
            PrefixPolicy::Strip => "strip",
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct TokenizerConfig {
    // if set, every ascii punctuation character becomes a token
    pub split_punctuation: bool,

    pub prefix_policy: PrefixPolicy,

    // appended to the built-in libraries
    pub extra_prefixes: Vec<String>,
    pub extra_particles: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            split_punctuation: true,
            prefix_policy: PrefixPolicy::Contextual,
            extra_prefixes: vec![],
            extra_particles: vec![],
        }
    }
}

impl TokenizerConfig {
    /// A missing file is not an error: it's the default config.
    pub fn load_from_file(path: &str) -> Result<Self, Error> {
        if !exists(path) {
            return Ok(TokenizerConfig::default());
        }

        Ok(serde_json::from_str::<TokenizerConfig>(&read_string(path)?)?)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        write_string(
            path,
            &self.to_json()?.pretty(4),
            WriteMode::CreateOrTruncate,
        )?;
        write_log("config", &format!("saved config to `{path}`"));
        Ok(())
    }

    fn to_json(&self) -> Result<JsonValue, Error> {
        Ok(json::parse(&serde_json::to_string(self)?)?)
    }

    pub fn get_by_key(&self, key: &str) -> Result<JsonValue, Error> {
        match self.to_json()? {
            JsonValue::Object(obj) => match obj.get(key) {
                Some(value) => Ok(value.clone()),
                None => Err(Error::InvalidConfigKey(key.to_string())),
            },
            _ => unreachable!(),
        }
    }

    pub fn get_all(&self) -> Result<Vec<(String, JsonValue)>, Error> {
        match self.to_json()? {
            JsonValue::Object(obj) => Ok(obj.iter().map(
                |(key, value)| (key.to_string(), value.clone())
            ).collect()),
            _ => unreachable!(),
        }
    }

    /// It returns the previous value. `value` is parsed with the type of the previous value.
    pub fn set_by_key(&mut self, key: &str, value: &str) -> Result<JsonValue, Error> {
        let mut j = self.to_json()?;

        let JsonValue::Object(obj) = &mut j else { unreachable!() };
        let Some(previous_value) = obj.get(key).cloned() else {
            return Err(Error::InvalidConfigKey(key.to_string()));
        };

        if key == "prefix_policy" {
            PrefixPolicy::parse(value)?;
        }

        obj.insert(key, get_type(&previous_value).parse(value)?);
        *self = serde_json::from_str::<TokenizerConfig>(&j.dump())?;

        Ok(previous_value)
    }
}
