#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LetterKind {
    Consonant,
    Vowel,

    // digits, symbols, uppercase and non-latin letters
    Other,
}

pub fn get_letter_kind(c: char) -> LetterKind {
    match c {
        'a' | 'e' | 'i' | 'o' | 'u' => LetterKind::Vowel,
        'b'..='z' => LetterKind::Consonant,
        _ => LetterKind::Other,
    }
}

pub fn is_vowel(c: char) -> bool {
    get_letter_kind(c) == LetterKind::Vowel
}

pub fn is_consonant(c: char) -> bool {
    get_letter_kind(c) == LetterKind::Consonant
}
