use crate::json_type::JsonType;
use sukatoken_cli::Span;
use sukatoken_fs::FileError;

pub type Path = String;

#[derive(Debug)]
pub enum Error {
    JsonTypeError {
        expected: JsonType,
        got: JsonType,
    },
    InvalidConfigKey(String),
    InvalidPrefixPolicy(String),

    // a vocabulary file that's not a valid token -> id map
    CorruptedVocab(Path, String),

    CliError {
        message: String,

        // (joined args, start, end)
        span: (String, usize, usize),
    },

    /// an empty prefix or particle in the config
    RuleError(sukatoken_malay::Error),

    /// see <https://docs.rs/json/latest/json/enum.Error.html>
    JsonError(json::Error),

    /// see <https://docs.rs/serde_json/latest/serde_json/struct.Error.html>
    JsonSerdeError(serde_json::Error),

    FileError(FileError),
}

impl From<sukatoken_malay::Error> for Error {
    fn from(e: sukatoken_malay::Error) -> Error {
        Error::RuleError(e)
    }
}

impl From<sukatoken_cli::Error> for Error {
    fn from(e: sukatoken_cli::Error) -> Error {
        Error::CliError {
            message: e.kind.render(),
            span: match e.span {
                Span::Rendered(span) => span,

                // `ParsedArgs::get_args_exact` doesn't know the raw args
                _ => (String::new(), 0, 0),
            },
        }
    }
}

impl From<json::Error> for Error {
    fn from(e: json::Error) -> Error {
        Error::JsonError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::JsonSerdeError(e)
    }
}

impl From<FileError> for Error {
    fn from(e: FileError) -> Error {
        Error::FileError(e)
    }
}
