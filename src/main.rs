use sukatoken::{
    CONFIG_FILE_NAME,
    Error,
    LOG_ENV_VAR,
    PrefixPolicy,
    Tokenizer,
    TokenizerConfig,
    VERSION,
    Vocabulary,
    get_build_options,
    parse_token_id,
};
use sukatoken_cli::{
    ArgCount,
    ArgParser,
    ArgType,
    ParsedArgs,
    underline_span,
};
use sukatoken_fs::{read_lines, set_log_file_path, write_log};
use std::env;

fn main() {
    let args = env::args().collect::<Vec<_>>();

    if let Ok(path) = env::var(LOG_ENV_VAR) {
        set_log_file_path(Some(path));
    }

    match run(args) {
        Ok(()) => {},
        Err(e) => {
            match e {
                Error::CliError { message, span } => {
                    eprintln!("cli error: {message}");

                    if !span.0.is_empty() {
                        eprintln!("{}", underline_span("    ", &span.0, span.1, span.2));
                    }
                },
                Error::InvalidConfigKey(s) => {
                    eprintln!(
                        "{s:?} is not a valid key for config. Valid keys are\n{}",
                        TokenizerConfig::default().get_all().unwrap_or_default().iter().map(
                            |(key, _)| key.to_string()
                        ).collect::<Vec<_>>().join("\n"),
                    );
                },
                Error::InvalidPrefixPolicy(s) => {
                    eprintln!("{s:?} is not a valid prefix policy. Valid policies are `contextual` and `strip`.");
                },
                Error::CorruptedVocab(path, message) => {
                    eprintln!("`{path}` is not a valid vocabulary file: {message}");
                },
                Error::RuleError(e) => {
                    eprintln!("{}", e.render());
                },
                Error::FileError(e) => {
                    eprintln!("{e}");
                },
                e => {
                    eprintln!("{e:?}");
                },
            }

            write_log("main", "exited with an error");
            std::process::exit(1);
        },
    }
}

fn run(args: Vec<String>) -> Result<(), Error> {
    match args.get(1).map(|arg| arg.as_str()) {
        Some("tokenize") => {
            let parsed_args = ArgParser::new()
                .optional_flag(&["--no-punct-split"])
                .optional_flag(&["--contextual", "--strip"])
                .optional_arg_flag("--config", CONFIG_FILE_NAME, ArgType::Path)
                .args(ArgType::String, ArgCount::Geq(1))
                .parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/tokenize.txt"));
                return Ok(());
            }

            let mut config = load_config(&parsed_args)?;

            if parsed_args.get_flag(0).is_some() {
                config.split_punctuation = false;
            }

            match parsed_args.get_flag(1).as_deref() {
                Some("--contextual") => { config.prefix_policy = PrefixPolicy::Contextual; },
                Some("--strip") => { config.prefix_policy = PrefixPolicy::Strip; },
                _ => {},
            }

            let tokenizer = Tokenizer::new(config)?;
            let tokens = tokenizer.tokenize(&parsed_args.get_args().join(" "));
            println!("{}", serde_json::to_string(&tokens)?);
        },
        Some("build-vocab") => {
            let parsed_args = ArgParser::new()
                .arg_flag("--output", ArgType::Path)
                .optional_arg_flag("--config", CONFIG_FILE_NAME, ArgType::Path)
                .args(ArgType::Path, ArgCount::Geq(1))
                .parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/build-vocab.txt"));
                return Ok(());
            }

            let tokenizer = Tokenizer::new(load_config(&parsed_args)?)?;
            let mut corpus = vec![];

            for path in parsed_args.get_args().iter() {
                corpus.extend(read_lines(path)?);
            }

            let vocab = tokenizer.build_vocab(&corpus);
            let output = parsed_args.get_arg_flag("--output").unwrap_or_default();
            vocab.save_to_file(&output)?;
            println!("{} texts, {} tokens (including `<UNK>`), saved to `{output}`", corpus.len(), vocab.len());
        },
        Some("encode") => {
            let parsed_args = ArgParser::new()
                .arg_flag("--vocab", ArgType::Path)
                .optional_arg_flag("--config", CONFIG_FILE_NAME, ArgType::Path)
                .args(ArgType::String, ArgCount::Geq(1))
                .parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/encode.txt"));
                return Ok(());
            }

            let tokenizer = Tokenizer::new(load_config(&parsed_args)?)?;
            let vocab = Vocabulary::load_from_file(&parsed_args.get_arg_flag("--vocab").unwrap_or_default())?;
            let ids = tokenizer.encode(&parsed_args.get_args().join(" "), &vocab);
            println!("{}", serde_json::to_string(&ids)?);
        },
        Some("decode") => {
            let parsed_args = ArgParser::new()
                .arg_flag("--vocab", ArgType::Path)
                .optional_arg_flag("--config", CONFIG_FILE_NAME, ArgType::Path)
                .args(ArgType::String, ArgCount::Any)
                .parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/decode.txt"));
                return Ok(());
            }

            let tokenizer = Tokenizer::new(load_config(&parsed_args)?)?;
            let vocab = Vocabulary::load_from_file(&parsed_args.get_arg_flag("--vocab").unwrap_or_default())?;
            let ids = parsed_args.get_args().iter().map(
                |id| parse_token_id(id)
            ).collect::<Vec<_>>();
            println!("{}", tokenizer.decode(&ids, &vocab));
        },
        Some("compare") => {
            let parsed_args = ArgParser::new()
                .optional_arg_flag("--config", CONFIG_FILE_NAME, ArgType::Path)
                .args(ArgType::String, ArgCount::Geq(1))
                .parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/compare.txt"));
                return Ok(());
            }

            let config = load_config(&parsed_args)?;
            let contextual = Tokenizer::new(TokenizerConfig { prefix_policy: PrefixPolicy::Contextual, ..config.clone() })?;
            let strip = Tokenizer::new(TokenizerConfig { prefix_policy: PrefixPolicy::Strip, ..config })?;

            for word in parsed_args.get_args().iter() {
                let contextual_tokens = contextual.tokenize(word);
                let strip_tokens = strip.tokenize(word);

                println!("{word}");
                println!("{}", "-".repeat(30));
                println!("contextual: {:?} ({} tokens)", contextual_tokens, contextual_tokens.len());
                println!("strip:      {:?} ({} tokens)", strip_tokens, strip_tokens.len());
                println!();
            }
        },
        Some("config") => {
            let parsed_args = ArgParser::new()
                .flag(&["--set", "--get", "--get-all"])
                .optional_arg_flag("--config", CONFIG_FILE_NAME, ArgType::Path)
                .args(ArgType::String, ArgCount::Leq(2))
                .parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/config.txt"));
                return Ok(());
            }

            let path = parsed_args.get_arg_flag("--config").unwrap_or_default();
            let mut config = TokenizerConfig::load_from_file(&path)?;

            match parsed_args.get_flag(0).unwrap_or_default().as_str() {
                "--set" => {
                    let args = parsed_args.get_args_exact(2)?;
                    let previous_value = config.set_by_key(&args[0], &args[1])?;

                    // validates extra prefixes and particles
                    Tokenizer::new(config.clone())?;
                    config.save_to_file(&path)?;
                    println!("set `{}`: `{}` -> `{}`", args[0], previous_value.dump(), config.get_by_key(&args[0])?.dump());
                },
                "--get" => {
                    let args = parsed_args.get_args_exact(1)?;
                    println!("{}", config.get_by_key(&args[0])?.dump());
                },
                "--get-all" => {
                    parsed_args.get_args_exact(0)?;  // make sure that there's no dangling args
                    let kv = config.get_all()?;

                    println!("{}", '{');

                    for (k, v) in kv.iter() {
                        println!("    {k:?}: {},", v.dump());
                    }

                    println!("{}", '}');
                },
                _ => unreachable!(),
            }
        },
        Some("version") => {
            let parsed_args = ArgParser::new().optional_flag(&["--build-options"]).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/version.txt"));
                return Ok(());
            }

            if parsed_args.get_flag(0).is_some() {
                println!("{}", serde_json::to_string_pretty(&get_build_options())?);
            }

            else {
                println!("sukatoken {VERSION}");
            }
        },
        Some("help") | Some("--help") | None => {
            println!("{}", include_str!("../docs/intro.txt"));
        },
        Some(invalid_command) => {
            eprintln!("`{invalid_command}` is not a valid command. Run `suku help` to see the commands.");
            std::process::exit(1);
        },
    }

    Ok(())
}

fn load_config(parsed_args: &ParsedArgs) -> Result<TokenizerConfig, Error> {
    TokenizerConfig::load_from_file(&parsed_args.get_arg_flag("--config").unwrap_or_default())
}
