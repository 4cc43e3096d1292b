use std::collections::HashMap;

mod error;
mod span;


pub use error::{Error, ErrorKind};
pub use span::{Span, underline_span};

/// ```nohighlight
/// ArgParser::new()
///     .optional_flag(&["--no-punct-split"])       // get_flag(0)
///     .optional_flag(&["--contextual", "--strip"])  // get_flag(1)
///     .optional_arg_flag("--config", "sukatoken.json", ArgType::Path)
///     .args(ArgType::String, ArgCount::Geq(1))
///     .parse(&args[2..])?
/// ```
pub struct ArgParser {
    args: (ArgType, ArgCount),
    flags: Vec<Flag>,

    // `--vocab vocab.json`, `--vocab=vocab.json`
    arg_flags: HashMap<String, ArgFlag>,
}

impl ArgParser {
    pub fn new() -> Self {
        ArgParser {
            args: (ArgType::String, ArgCount::None),
            flags: vec![],
            arg_flags: HashMap::new(),
        }
    }

    pub fn args(&mut self, arg_type: ArgType, arg_count: ArgCount) -> &mut Self {
        self.args = (arg_type, arg_count);
        self
    }

    /// Exactly one of `flags` must be given.
    pub fn flag(&mut self, flags: &[&str]) -> &mut Self {
        self.push_flag(flags, false, None)
    }

    /// At most one of `flags` may be given.
    pub fn optional_flag(&mut self, flags: &[&str]) -> &mut Self {
        self.push_flag(flags, true, None)
    }

    /// At most one of `flags` may be given. If none is, it's `flags[0]`.
    pub fn flag_with_default(&mut self, flags: &[&str]) -> &mut Self {
        self.push_flag(flags, true, Some(0))
    }

    pub fn arg_flag(&mut self, flag: &str, arg_type: ArgType) -> &mut Self {
        self.arg_flags.insert(flag.to_string(), ArgFlag { default: None, arg_type });
        self
    }

    pub fn optional_arg_flag(&mut self, flag: &str, default: &str, arg_type: ArgType) -> &mut Self {
        self.arg_flags.insert(flag.to_string(), ArgFlag { default: Some(default.to_string()), arg_type });
        self
    }

    fn push_flag(&mut self, flags: &[&str], optional: bool, default: Option<usize>) -> &mut Self {
        self.flags.push(Flag {
            values: flags.iter().map(|flag| flag.to_string()).collect(),
            optional,
            default,
        });
        self
    }

    pub fn parse(&self, raw_args: &[String]) -> Result<ParsedArgs, Error> {
        self.parse_worker(raw_args).map_err(
            |mut e| {
                e.span = e.span.render(raw_args);
                e
            }
        )
    }

    fn parse_worker(&self, raw_args: &[String]) -> Result<ParsedArgs, Error> {
        let mut args = vec![];
        let mut flags: Vec<Option<String>> = vec![None; self.flags.len()];
        let mut arg_flags: HashMap<String, String> = HashMap::new();

        if raw_args.first().map(|arg| arg.as_str()) == Some("--help") {
            return Ok(ParsedArgs {
                args,
                flags,
                arg_flags,
                show_help: true,
            });
        }

        let mut index = 0;

        while index < raw_args.len() {
            let raw_arg = &raw_args[index];

            if !raw_arg.starts_with("--") {
                args.push(self.args.0.parse(raw_arg, Span::Exact(index))?);
                index += 1;
                continue;
            }

            if let Some(flag_index) = self.flags.iter().position(|flag| flag.values.contains(raw_arg)) {
                if let Some(prev) = &flags[flag_index] {
                    return Err(Error {
                        span: Span::Exact(index),
                        kind: ErrorKind::ConflictingFlags(prev.to_string(), raw_arg.to_string()),
                    });
                }

                flags[flag_index] = Some(raw_arg.to_string());
                index += 1;
                continue;
            }

            // `--flag value` or `--flag=value`
            let (flag, value, value_index) = match raw_arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string()), index),
                None => (raw_arg.to_string(), raw_args.get(index + 1).cloned(), index + 1),
            };

            let Some(ArgFlag { arg_type, .. }) = self.arg_flags.get(&flag) else {
                return Err(Error {
                    span: Span::Exact(index),
                    kind: ErrorKind::UnknownFlag(flag),
                });
            };

            let Some(value) = value else {
                return Err(Error {
                    span: Span::End,
                    kind: ErrorKind::MissingFlagValue { flag, arg_type: *arg_type },
                });
            };

            let value = arg_type.parse(&value, Span::Exact(value_index))?;

            if arg_flags.insert(flag.clone(), value).is_some() {
                return Err(Error {
                    span: Span::Exact(index),
                    kind: ErrorKind::ConflictingFlags(flag.clone(), flag),
                });
            }

            index = value_index + 1;
        }

        for (flag_index, flag) in self.flags.iter().enumerate() {
            if flags[flag_index].is_some() {
                continue;
            }

            match flag.default {
                Some(default) => {
                    flags[flag_index] = Some(flag.values[default].clone());
                },
                None if !flag.optional => {
                    return Err(Error {
                        span: Span::End,
                        kind: ErrorKind::MissingFlag(flag.values.join(" | ")),
                    });
                },
                None => {},
            }
        }

        let (_, arg_count) = self.args;

        if !arg_count.accepts(args.len()) {
            return Err(Error {
                span: match arg_count {
                    ArgCount::Geq(_) => Span::End,
                    ArgCount::None => Span::FirstArg,
                    ArgCount::Leq(n) | ArgCount::Exact(n) => Span::NthArg(n),
                    ArgCount::Any => unreachable!(),
                },
                kind: ErrorKind::WrongArgCount {
                    expected: arg_count,
                    got: args.len(),
                },
            });
        }

        for (flag, ArgFlag { default, .. }) in self.arg_flags.iter() {
            if arg_flags.contains_key(flag) {
                continue;
            }

            match default {
                Some(default) => {
                    arg_flags.insert(flag.to_string(), default.to_string());
                },
                None => {
                    return Err(Error {
                        span: Span::End,
                        kind: ErrorKind::MissingFlag(flag.to_string()),
                    });
                },
            }
        }

        Ok(ParsedArgs {
            args,
            flags,
            arg_flags,
            show_help: false,
        })
    }
}

impl Default for ArgParser {
    fn default() -> Self {
        ArgParser::new()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgCount {
    Geq(usize),
    Leq(usize),
    Exact(usize),
    Any,
    None,
}

impl ArgCount {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            ArgCount::Geq(n) => count >= *n,
            ArgCount::Leq(n) => count <= *n,
            ArgCount::Exact(n) => count == *n,
            ArgCount::Any => true,
            ArgCount::None => count == 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgType {
    String,
    Path,
    Integer,
}

impl ArgType {
    pub fn parse(&self, arg: &str, span: Span) -> Result<String, Error> {
        match self {
            ArgType::Integer if arg.parse::<i64>().is_err() => Err(Error {
                span,
                kind: ErrorKind::NotAnInteger(arg.to_string()),
            }),
            ArgType::Integer
            | ArgType::String
            | ArgType::Path => Ok(arg.to_string()),
        }
    }
}

struct Flag {
    values: Vec<String>,
    optional: bool,

    // index of `values`
    default: Option<usize>,
}

struct ArgFlag {
    default: Option<String>,
    arg_type: ArgType,
}

pub struct ParsedArgs {
    args: Vec<String>,
    flags: Vec<Option<String>>,
    arg_flags: HashMap<String, String>,
    show_help: bool,
}

impl ParsedArgs {
    pub fn get_args(&self) -> Vec<String> {
        self.args.clone()
    }

    pub fn get_args_exact(&self, count: usize) -> Result<Vec<String>, Error> {
        if self.args.len() == count {
            Ok(self.args.clone())
        }

        else {
            Err(Error {
                span: Span::FirstArg,
                kind: ErrorKind::WrongArgCount {
                    expected: ArgCount::Exact(count),
                    got: self.args.len(),
                },
            })
        }
    }

    // It panics if `index` is out of range.
    // `None` means that the flag is optional and not given.
    pub fn get_flag(&self, index: usize) -> Option<String> {
        self.flags[index].clone()
    }

    // It's always `Some` for registered arg flags, unless `show_help` is set.
    pub fn get_arg_flag(&self, flag: &str) -> Option<String> {
        self.arg_flags.get(flag).cloned()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }
}
