use crate::{
    Error,
    JsonType,
    PrefixPolicy,
    Tokenizer,
    TokenizerConfig,
    UNK_TOKEN,
    Vocabulary,
    is_separator,
    parse_token_id,
};
use std::collections::HashMap;
use sukatoken_fs::{WriteMode, remove_file, write_string};

fn tmp_path(name: &str) -> String {
    std::env::temp_dir().join(format!("sukatoken-{}-{name}", std::process::id())).to_string_lossy().to_string()
}

fn tokenizer_with(f: impl FnOnce(&mut TokenizerConfig)) -> Tokenizer {
    let mut config = TokenizerConfig::default();
    f(&mut config);
    Tokenizer::new(config).unwrap()
}

#[test]
fn tokenize_malay() {
    let tokenizer = Tokenizer::default();
    let sample = [
        ("memperbaiki", vec!["[PREFIX=mem]", "[PREFIX=per]", "mem", "per", "ba", "i", "ki"]),
        ("buatlah", vec!["bu", "a", "t", "lah"]),
        ("kucing berlari", vec!["ku", "cing", "[PREFIX=ber]", "ber", "la", "ri"]),
        ("pembelajaran", vec!["[PREFIX=pem]", "[PREFIX=be]", "pem", "be", "la", "ja", "ran"]),
        ("menyelamatkan", vec!["[PREFIX=meny]", "men", "ye", "la", "mat", "kan"]),
        ("berjalanlah", vec!["[PREFIX=ber]", "ber", "ja", "lan", "lah"]),
        ("pohon besar tumbang semalam", vec!["po", "hon", "[PREFIX=be]", "be", "sar", "tum", "bang", "[PREFIX=se]", "se", "ma", "lam"]),
        (
            "Memperbaiki kerosakanlah, kan?",
            vec!["[PREFIX=mem]", "[PREFIX=per]", "mem", "per", "ba", "i", "ki", "[PREFIX=ke]", "ke", "ro", "sa", "kan", "lah", ",", "kan", "?"],
        ),
        ("Selamat pagi.", vec!["[PREFIX=se]", "se", "la", "mat", "pa", "gi", "."]),
        ("hello, world!", vec!["hel", "lo", ",", "world", "!"]),
        ("ke-2", vec!["[PREFIX=ke]", "ke", "-", "2"]),
        ("se", vec!["[PREFIX=se]", "se"]),
        ("xyz123", vec!["x", "y", "z", "1", "2", "3"]),
        ("", vec![]),
        ("  \n\t ", vec![]),
    ];

    for (text, answer) in sample.into_iter() {
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, answer, "{text:?}");
    }
}

#[test]
fn tokenize_without_punctuation_splitting() {
    let tokenizer = tokenizer_with(|config| { config.split_punctuation = false; });
    let sample = [
        (
            "Memperbaiki kerosakanlah, kan?",
            vec!["[PREFIX=mem]", "[PREFIX=per]", "mem", "per", "ba", "i", "ki", "[PREFIX=ke]", "ke", "ro", "sa", "kan", "lah,", "kan?"],
        ),
        ("hello, world!", vec!["hel", "lo,", "world!"]),

        // it's a plain word, not a marker
        ("[PREFIX=mem]", vec!["[", "p", "re", "fix=", "mem]"]),
    ];

    for (text, answer) in sample.into_iter() {
        assert_eq!(tokenizer.tokenize(text), answer, "{text:?}");
    }

    // no punctuation, no difference
    for text in ["kucing berlari", "saya suka makan nasi lemak", ""] {
        assert_eq!(tokenizer.tokenize(text), Tokenizer::default().tokenize(text));
    }
}

#[test]
fn tokenize_with_strip_policy() {
    let tokenizer = tokenizer_with(|config| { config.prefix_policy = PrefixPolicy::Strip; });
    let sample = [
        ("keberhasilan", vec!["ke", "ber", "ha", "si", "lan"]),
        ("menyelamatkan", vec!["meny", "e", "la", "mat", "kan"]),
        ("memperbaiki kucing", vec!["mem", "per", "ba", "i", "ki", "ku", "cing"]),
        ("Pembelajaran!", vec!["pem", "be", "la", "ja", "ran", "!"]),
        ("se", vec!["se"]),
    ];

    for (text, answer) in sample.into_iter() {
        assert_eq!(tokenizer.tokenize(text), answer, "{text:?}");
    }
}

#[test]
fn tokenize_with_extra_affixes() {
    let tokenizer = tokenizer_with(|config| {
        config.extra_prefixes = vec![String::from("di")];
        config.extra_particles = vec![String::from("cing")];
    });

    assert_eq!(tokenizer.tokenize("dimakan"), vec!["[PREFIX=di]", "di", "ma", "kan"]);

    // `cing` is a whole suku kata, so it's not split
    assert_eq!(tokenizer.tokenize("kucing"), vec!["ku", "cing"]);

    let mut config = TokenizerConfig::default();
    config.extra_particles = vec![String::new()];
    assert!(matches!(Tokenizer::new(config), Err(Error::RuleError(_))));
}

#[test]
fn tokenize_preserves_word_order() {
    let tokenizer = Tokenizer::default();
    let text = "Pengembangan persekolahan, kebersamaannya mempermainkan";
    let tokens = tokenizer.tokenize(text);
    let mut per_word = vec![];

    for word in text.split_whitespace() {
        let word_tokens = tokenizer.tokenize(word);
        let marker_count = word_tokens.iter().take_while(|token| token.starts_with("[PREFIX=")).count();

        // markers come first, and the rest is the lowercased word
        assert!(word_tokens[marker_count..].iter().all(|token| !token.starts_with("[PREFIX=")));
        assert_eq!(
            word_tokens[marker_count..].concat(),
            word.to_lowercase(),
        );

        per_word.extend(word_tokens);
    }

    assert_eq!(tokens, per_word);
}

#[test]
fn tokenize_with_separator_characters() {
    let tokenizer = Tokenizer::default();
    let sample = [
        ("kj\u{1c}", vec!["k", "j"]),
        ("kucing\u{1f}berlari", vec!["ku", "cing", "[PREFIX=ber]", "ber", "la", "ri"]),
        ("\u{1d}\u{1e}", vec![]),
        ("saya\u{a0}suka\u{3000}makan", vec!["sa", "ya", "su", "ka", "ma", "kan"]),
    ];

    for (text, answer) in sample.into_iter() {
        assert_eq!(tokenizer.tokenize(text), answer, "{text:?}");
    }

    for c in ['\u{1c}', '\u{1f}', ' ', '\t', '\u{85}', '\u{2028}'] {
        assert!(is_separator(c), "{c:?}");
    }

    for c in ['\u{1b}', '\u{0}', '\u{200b}', 'a', '-'] {
        assert!(!is_separator(c), "{c:?}");
    }
}

#[test]
fn tokenize_corpus() {
    let tokenizer = Tokenizer::default();
    let corpus = ["kucing berlari", "", "Selamat pagi."];
    let result = tokenizer.tokenize_corpus(&corpus);

    assert_eq!(result.len(), 3);
    assert!(result[1].is_empty());

    for (text, tokens) in corpus.iter().zip(result.iter()) {
        assert_eq!(tokens, &tokenizer.tokenize(text));
    }

    // a tokenizer is shared by reference between threads
    let shared = &tokenizer;
    let per_thread = std::thread::scope(|s| {
        let handles = corpus.iter().map(
            |text| s.spawn(move || shared.tokenize(text))
        ).collect::<Vec<_>>();

        handles.into_iter().map(|handle| handle.join().unwrap()).collect::<Vec<_>>()
    });

    assert_eq!(per_thread, result);
}

#[test]
fn build_vocab() {
    let tokenizer = Tokenizer::default();
    let vocab = tokenizer.build_vocab(&["kucing berlari di taman"]);
    let answer = ["[PREFIX=ber]", "ber", "cing", "di", "ku", "la", "man", "ri", "ta", UNK_TOKEN];

    assert_eq!(vocab.len(), 10);
    assert_eq!(vocab.token_count(), 9);
    assert_eq!(vocab.unk_id(), 9);
    assert_eq!(vocab.get_id(UNK_TOKEN), Some(9));

    for (id, token) in answer.iter().enumerate() {
        assert_eq!(vocab.get_id(token), Some(id as u32));
        assert_eq!(vocab.get_token(id as u32), Some(*token));
    }

    assert_eq!(vocab.iter().map(|(token, _)| token).collect::<Vec<_>>(), answer);
    assert_eq!(vocab.get_token(10), None);
}

#[test]
fn build_vocab_is_deterministic() {
    let tokenizer = Tokenizer::default();
    let corpus = [
        "saya suka makan nasi lemak",
        "pohon besar tumbang semalam",
        "kucing berlari di taman",
    ];
    let vocab = tokenizer.build_vocab(&corpus);
    let mut reversed = corpus.to_vec();
    reversed.reverse();

    assert_eq!(vocab, tokenizer.build_vocab(&reversed));
    assert_eq!(vocab.len(), 30);
    assert_eq!(vocab.get_id("[PREFIX=be]"), Some(0));
    assert_eq!(vocab.get_id("ya"), Some(28));

    for text in corpus.iter() {
        for token in tokenizer.tokenize(text) {
            assert!(vocab.get_id(&token).is_some());
        }
    }

    let mut ids = vocab.iter().map(|(_, id)| id).collect::<Vec<_>>();
    ids.sort();
    assert_eq!(ids, (0..30).collect::<Vec<u32>>());

    // empty corpus
    let vocab = tokenizer.build_vocab::<&str>(&[]);
    assert_eq!(vocab, Vocabulary::default());
    assert_eq!(vocab.unk_id(), 0);
}

#[test]
fn encode_and_decode() {
    let tokenizer = Tokenizer::default();
    let vocab = tokenizer.build_vocab(&["kucing berlari di taman"]);

    assert_eq!(tokenizer.encode("kucing di taman", &vocab), vec![4, 2, 3, 8, 6]);
    assert_eq!(tokenizer.decode(&[4, 2, 3, 8, 6], &vocab), "ku cing di ta man");

    for text in ["Kucing berlari", "di   taman", ""] {
        assert_eq!(
            tokenizer.decode(&tokenizer.encode(text, &vocab), &vocab),
            tokenizer.tokenize(text).join(" "),
        );
    }

    let unknown = tokenizer.encode("unseen_nonmalay_token_xyz123", &vocab);
    assert_eq!(unknown, vec![9; 19]);
    assert_eq!(tokenizer.decode(&unknown, &vocab), vec![UNK_TOKEN; 19].join(" "));

    // ids that were never assigned
    assert_eq!(tokenizer.decode(&[4, 100, u32::MAX, 9], &vocab), "ku <UNK> <UNK> <UNK>");

    // ids from the command line
    let raw_ids = ["4", "2", "-1", "4294967296", "99999999999999999999", "satu", ""];
    let ids = raw_ids.iter().map(|id| parse_token_id(id)).collect::<Vec<_>>();
    assert_eq!(ids, vec![4, 2, u32::MAX, u32::MAX, u32::MAX, u32::MAX, u32::MAX]);
    assert_eq!(tokenizer.decode(&ids, &vocab), "ku cing <UNK> <UNK> <UNK> <UNK> <UNK>");
    assert_eq!(tokenizer.decode(&[], &vocab), "");
}

#[test]
fn vocab_from_map() {
    let vocab = Tokenizer::default().build_vocab(&["saya suka makan"]);
    assert_eq!(Vocabulary::from_map(vocab.to_map()).unwrap(), vocab);

    let to_map = |entries: &[(&str, u32)]| entries.iter().map(
        |(token, id)| (token.to_string(), *id)
    ).collect::<HashMap<_, _>>();
    let samples = [
        to_map(&[]),
        to_map(&[("ka", 0), ("sa", 1)]),
        to_map(&[("ka", 0), ("sa", 2), (UNK_TOKEN, 3)]),
        to_map(&[("ka", 0), ("sa", 0), (UNK_TOKEN, 2)]),
        to_map(&[("ka", 0), ("sa", 2), (UNK_TOKEN, 1)]),
        to_map(&[("sa", 0), ("ka", 1), (UNK_TOKEN, 2)]),
    ];

    for sample in samples.into_iter() {
        assert!(matches!(Vocabulary::from_map(sample), Err(Error::CorruptedVocab(_, _))));
    }

    assert!(Vocabulary::from_map(to_map(&[(UNK_TOKEN, 0)])).is_ok());
}

#[test]
fn vocab_file() {
    let tokenizer = Tokenizer::default();
    let vocab = tokenizer.build_vocab(&["kucing berlari di taman", "ñandú café"]);
    let path = tmp_path("vocab.json");

    vocab.save_to_file(&path).unwrap();
    let content = sukatoken_fs::read_string(&path).unwrap();

    assert!(content.starts_with("{\n    \"[PREFIX=ber]\": 0,\n"));
    assert!(content.contains("\"café\": "));
    assert!(content.contains(&format!("\"{UNK_TOKEN}\": {}", vocab.unk_id())));
    assert_eq!(Vocabulary::load_from_file(&path).unwrap(), vocab);

    for broken in ["[1, 2, 3]", "{\"ka\": 0, \"<UNK>\": -1}", "{\"ka\": 0}", "{\"ka\": \"0\", \"<UNK>\": 1}"] {
        write_string(&path, broken, WriteMode::CreateOrTruncate).unwrap();

        match Vocabulary::load_from_file(&path) {
            Err(Error::CorruptedVocab(p, _)) => { assert_eq!(p, path); },
            r => panic!("{broken:?}: {r:?}"),
        }
    }

    write_string(&path, "{", WriteMode::CreateOrTruncate).unwrap();
    assert!(matches!(Vocabulary::load_from_file(&path), Err(Error::JsonError(_))));

    remove_file(&path).unwrap();
    assert!(matches!(Vocabulary::load_from_file(&path), Err(Error::FileError(_))));
}

#[test]
fn config_by_key() {
    let mut config = TokenizerConfig::default();

    assert_eq!(config.get_by_key("split_punctuation").unwrap(), json::JsonValue::from(true));
    assert_eq!(config.get_by_key("prefix_policy").unwrap(), json::JsonValue::from("contextual"));
    assert!(matches!(config.get_by_key("chunk_size"), Err(Error::InvalidConfigKey(_))));

    let previous = config.set_by_key("split_punctuation", "false").unwrap();
    assert_eq!(previous, json::JsonValue::from(true));
    assert!(!config.split_punctuation);

    config.set_by_key("prefix_policy", "strip").unwrap();
    assert_eq!(config.prefix_policy, PrefixPolicy::Strip);
    assert!(matches!(config.set_by_key("prefix_policy", "Strip"), Err(Error::InvalidPrefixPolicy(_))));

    config.set_by_key("extra_prefixes", "di, ter").unwrap();
    assert_eq!(config.extra_prefixes, vec!["di", "ter"]);
    config.set_by_key("extra_particles", "[\"dong\"]").unwrap();
    assert_eq!(config.extra_particles, vec!["dong"]);

    assert!(matches!(
        config.set_by_key("split_punctuation", "1"),
        Err(Error::JsonTypeError { expected: JsonType::Boolean, got: JsonType::Number }),
    ));
    assert!(matches!(
        config.set_by_key("extra_prefixes", "true"),
        Err(Error::JsonTypeError { expected: JsonType::Array, got: JsonType::Boolean }),
    ));
    assert!(matches!(config.set_by_key("vocab_size", "1"), Err(Error::InvalidConfigKey(_))));

    // failed updates don't touch the config
    assert!(!config.split_punctuation);
    assert_eq!(config.extra_prefixes, vec!["di", "ter"]);

    let keys = config.get_all().unwrap().into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    assert_eq!(keys, vec!["split_punctuation", "prefix_policy", "extra_prefixes", "extra_particles"]);
}

#[test]
fn config_file() {
    let path = tmp_path("config.json");
    let _ = remove_file(&path);

    // a missing file is the default config
    assert_eq!(TokenizerConfig::load_from_file(&path).unwrap(), TokenizerConfig::default());

    let mut config = TokenizerConfig::default();
    config.prefix_policy = PrefixPolicy::Strip;
    config.extra_particles = vec![String::from("dong")];
    config.save_to_file(&path).unwrap();
    assert_eq!(TokenizerConfig::load_from_file(&path).unwrap(), config);

    // missing fields are filled with the default values
    write_string(&path, "{ \"split_punctuation\": false }", WriteMode::CreateOrTruncate).unwrap();
    let config = TokenizerConfig::load_from_file(&path).unwrap();
    assert!(!config.split_punctuation);
    assert_eq!(config.prefix_policy, PrefixPolicy::Contextual);

    write_string(&path, "{ \"prefix_policy\": \"merge\" }", WriteMode::CreateOrTruncate).unwrap();
    assert!(matches!(TokenizerConfig::load_from_file(&path), Err(Error::JsonSerdeError(_))));

    remove_file(&path).unwrap();
}
