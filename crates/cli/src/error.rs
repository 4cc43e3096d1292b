use crate::{ArgCount, ArgType, Span};

#[derive(Clone, Debug)]
pub struct Error {
    pub span: Span,
    pub kind: ErrorKind,
}

#[derive(Clone, Debug)]
pub enum ErrorKind {
    /// an `ArgType::Integer` value that's not an integer
    NotAnInteger(String),

    /// (first, second): two flags from the same group, or the same flag twice
    ConflictingFlags(String, String),

    /// `--vocab` at the end, without a path
    MissingFlagValue {
        flag: String,
        arg_type: ArgType,
    },

    WrongArgCount {
        expected: ArgCount,
        got: usize,
    },
    MissingFlag(String),
    UnknownFlag(String),
}

impl ErrorKind {
    pub fn render(&self) -> String {
        match self {
            ErrorKind::NotAnInteger(arg) => format!("`{arg}` is not an integer."),
            ErrorKind::ConflictingFlags(first, second) if first == second => format!("`{first}` is given more than once."),
            ErrorKind::ConflictingFlags(first, second) => format!("`{first}` and `{second}` are mutually exclusive."),
            ErrorKind::MissingFlagValue { flag, arg_type } => format!(
                "`{flag}` needs a value ({}).",
                match arg_type {
                    ArgType::String => "string",
                    ArgType::Path => "path",
                    ArgType::Integer => "integer",
                },
            ),
            ErrorKind::WrongArgCount { expected, got } => {
                let expected = match expected {
                    ArgCount::Exact(n) => format!("{n}"),
                    ArgCount::Geq(n) => format!("{n} or more"),
                    ArgCount::Leq(n) => format!("{n} or fewer"),
                    ArgCount::None => String::from("no"),
                    ArgCount::Any => String::from("any number of"),
                };

                format!("It takes {expected} argument(s), but {got} were given.")
            },
            ErrorKind::MissingFlag(flag) => format!("`{flag}` is required."),
            ErrorKind::UnknownFlag(flag) => format!("`{flag}` is not a valid flag."),
        }
    }
}
