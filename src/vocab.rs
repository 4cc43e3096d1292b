use crate::constant::UNK_TOKEN;
use crate::error::Error;
use crate::tokenizer::Tokenizer;
use json::JsonValue;
use std::collections::{BTreeSet, HashMap};
use sukatoken_fs::{
    WriteMode,
    read_string,
    write_log,
    write_string,
};

/// A closed token -> id table.
///
/// Tokens are sorted in code point order and numbered from 0. `<UNK>` comes
/// last, so its id is the number of the other tokens. It's never updated:
/// build a new one instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vocabulary {
    ids: HashMap<String, u32>,

    // `tokens[id]` is the token of `id`. It's the reverse of `ids`.
    tokens: Vec<String>,
}

impl Vocabulary {
    /// It tokenizes every text in `corpus` and collects all the tokens.
    pub fn build<S: AsRef<str>>(tokenizer: &Tokenizer, corpus: &[S]) -> Self {
        let mut tokens = BTreeSet::new();

        for text in corpus.iter() {
            tokens.extend(tokenizer.tokenize(text.as_ref()));
        }

        let result = Vocabulary::from_tokens(tokens);
        write_log(
            "build_vocab",
            &format!("{} texts, {} tokens", corpus.len(), result.token_count()),
        );
        result
    }

    /// Tokens are deduplicated and sorted, then `<UNK>` is appended.
    /// If `tokens` has `<UNK>`, it's ignored.
    pub fn from_tokens<I: IntoIterator<Item = String>>(tokens: I) -> Self {
        let mut tokens = tokens.into_iter().filter(
            |token| token != UNK_TOKEN
        ).collect::<BTreeSet<_>>().into_iter().collect::<Vec<_>>();
        tokens.push(UNK_TOKEN.to_string());

        let ids = tokens.iter().enumerate().map(
            |(id, token)| (token.to_string(), id as u32)
        ).collect();

        Vocabulary { ids, tokens }
    }

    /// It's the inverse of `Vocabulary::to_map`. It fails unless the ids are
    /// exactly `0..map.len()`, the tokens are sorted and `<UNK>` has the last id.
    pub fn from_map(map: HashMap<String, u32>) -> Result<Self, Error> {
        let mut tokens: Vec<Option<String>> = vec![None; map.len()];

        for (token, id) in map.iter() {
            match tokens.get_mut(*id as usize) {
                Some(slot @ None) => {
                    *slot = Some(token.to_string());
                },
                Some(Some(prev)) => {
                    return Err(corrupted(format!("`{prev}` and `{token}` have the same id: {id}")));
                },
                None => {
                    return Err(corrupted(format!("id of `{token}` is out of range: {id}")));
                },
            }
        }

        // every slot is filled, because there are `map.len()` distinct ids below `map.len()`
        let tokens = tokens.into_iter().flatten().collect::<Vec<_>>();

        match map.get(UNK_TOKEN) {
            Some(id) if *id as usize + 1 == tokens.len() => {},
            Some(id) => {
                return Err(corrupted(format!("`{UNK_TOKEN}` must have the last id, but has {id}")));
            },
            None => {
                return Err(corrupted(format!("`{UNK_TOKEN}` is missing")));
            },
        }

        if let Some(pair) = tokens[..(tokens.len() - 1)].windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(corrupted(format!("`{}` and `{}` are not sorted", pair[0], pair[1])));
        }

        Ok(Vocabulary { ids: map, tokens })
    }

    pub fn to_map(&self) -> HashMap<String, u32> {
        self.ids.clone()
    }

    /// It includes `<UNK>`.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// It doesn't include `<UNK>`.
    pub fn token_count(&self) -> usize {
        self.tokens.len() - 1
    }

    pub fn unk_id(&self) -> u32 {
        self.token_count() as u32
    }

    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.ids.get(token).copied()
    }

    pub fn get_id_or_unk(&self, token: &str) -> u32 {
        self.get_id(token).unwrap_or_else(|| self.unk_id())
    }

    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(|token| token.as_str())
    }

    /// (token, id), in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.tokens.iter().enumerate().map(|(id, token)| (token.as_str(), id as u32))
    }

    pub fn decode(&self, ids: &[u32]) -> String {
        ids.iter().map(
            |id| self.get_token(*id).unwrap_or(UNK_TOKEN)
        ).collect::<Vec<_>>().join(" ")
    }

    /// `{"[PREFIX=ber]": 0, "ber": 1, ..., "<UNK>": 9}`, in id order
    pub fn to_json(&self) -> JsonValue {
        let mut result = JsonValue::new_object();

        for (token, id) in self.iter() {
            result[token] = id.into();
        }

        result
    }

    /// Indented with 4 spaces. Non-ascii characters are not escaped.
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        write_string(
            path,
            &self.to_json().pretty(4),
            WriteMode::CreateOrTruncate,
        )?;
        write_log("save_vocab", &format!("saved {} tokens to `{path}`", self.len()));
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self, Error> {
        let j = json::parse(&read_string(path)?)?;
        let mut map = HashMap::new();

        let JsonValue::Object(obj) = &j else {
            return Err(Error::CorruptedVocab(path.to_string(), String::from("not a json object")));
        };

        for (token, id) in obj.iter() {
            match id.as_u32() {
                Some(id) => {
                    map.insert(token.to_string(), id);
                },
                None => {
                    return Err(Error::CorruptedVocab(
                        path.to_string(),
                        format!("id of `{token}` is not a non-negative integer: {}", id.dump()),
                    ));
                },
            }
        }

        let result = Vocabulary::from_map(map).map_err(
            |e| match e {
                Error::CorruptedVocab(_, message) => Error::CorruptedVocab(path.to_string(), message),
                e => e,
            }
        )?;
        write_log("load_vocab", &format!("loaded {} tokens from `{path}`", result.len()));
        Ok(result)
    }
}

impl Default for Vocabulary {
    /// only `<UNK>`
    fn default() -> Self {
        Vocabulary::from_tokens(vec![])
    }
}

/// `"12"` -> `12`
///
/// Anything that's not a valid id (`"-1"`, `"satu"`, `"99999999999"`) becomes
/// `u32::MAX`, which is never assigned, so it's decoded to `<UNK>`.
pub fn parse_token_id(s: &str) -> u32 {
    s.trim().parse::<u32>().unwrap_or(u32::MAX)
}

fn corrupted(message: String) -> Error {
    Error::CorruptedVocab(String::new(), message)
}
