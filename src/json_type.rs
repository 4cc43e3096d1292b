use crate::error::Error;
use json::JsonValue;

/// This enum is solely for error messages and `suku config --set`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum JsonType {
    Null,
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl JsonType {
    // It's used to parse the input of `suku config --set`. `s` is parsed as
    // a value of the type of the old value.
    pub fn parse(&self, s: &str) -> Result<JsonValue, Error> {
        match self {
            JsonType::String => Ok(JsonValue::from(s)),
            JsonType::Boolean => match s {
                "true" => Ok(true.into()),
                "false" => Ok(false.into()),
                _ => Err(self.type_error(s)),
            },
            // `kan,lah` and `["kan", "lah"]` are both fine
            JsonType::Array => match json::parse(s) {
                Ok(v @ JsonValue::Array(_)) => Ok(v),
                Ok(v) => Err(Error::JsonTypeError {
                    expected: *self,
                    got: get_type(&v),
                }),
                Err(_) => Ok(JsonValue::Array(
                    s.split(',').map(
                        |s| s.trim()
                    ).filter(
                        |s| !s.is_empty()
                    ).map(
                        JsonValue::from
                    ).collect()
                )),
            },
            JsonType::Number
            | JsonType::Null
            | JsonType::Object => match json::parse(s) {
                Ok(v) if get_type(&v) == *self => Ok(v),
                Ok(v) => Err(Error::JsonTypeError {
                    expected: *self,
                    got: get_type(&v),
                }),
                Err(e) => Err(e.into()),
            },
        }
    }

    fn type_error(&self, s: &str) -> Error {
        match json::parse(s) {
            Ok(v) => Error::JsonTypeError {
                expected: *self,
                got: get_type(&v),
            },
            // a bare word is a string to a shell user
            Err(_) => Error::JsonTypeError {
                expected: *self,
                got: JsonType::String,
            },
        }
    }
}

pub fn get_type(j: &JsonValue) -> JsonType {
    match j {
        JsonValue::Null => JsonType::Null,
        JsonValue::Short(_)
        | JsonValue::String(_) => JsonType::String,
        JsonValue::Number(_) => JsonType::Number,
        JsonValue::Boolean(_) => JsonType::Boolean,
        JsonValue::Object(_) => JsonType::Object,
        JsonValue::Array(_) => JsonType::Array,
    }
}
