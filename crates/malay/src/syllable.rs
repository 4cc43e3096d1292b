use crate::letter::{is_consonant, is_vowel};

enum SegmentState {
    // looking for a CV pair
    Scan,

    // read a CV pair that starts at `start`, reading trailing consonants
    InSyllable { start: usize },
}

/// `kucing` -> `["ku", "cing"]`\
/// `strategi` -> `["s", "t", "ra", "te", "gi"]`
///
/// It's lossless: `segment(s).concat() == s`.
pub fn segment(text: &str) -> Vec<&str> {
    let chars = text.char_indices().collect::<Vec<_>>();
    let byte_offset = |index: usize| chars.get(index).map(|(offset, _)| *offset).unwrap_or(text.len());
    let mut result = vec![];
    let mut curr_state = SegmentState::Scan;
    let mut index = 0;

    while index < chars.len() {
        match curr_state {
            SegmentState::Scan => {
                if starts_cv_pair(&chars, index) {
                    curr_state = SegmentState::InSyllable { start: index };
                    index += 2;
                }

                else {
                    result.push(&text[byte_offset(index)..byte_offset(index + 1)]);
                    index += 1;
                }
            },
            SegmentState::InSyllable { start } => {
                // the character at `index` belongs to the next token
                if is_vowel(chars[index].1) || starts_cv_pair(&chars, index) {
                    result.push(&text[byte_offset(start)..byte_offset(index)]);
                    curr_state = SegmentState::Scan;
                }

                else {
                    index += 1;
                }
            },
        }
    }

    if let SegmentState::InSyllable { start } = curr_state {
        result.push(&text[byte_offset(start)..]);
    }

    result
}

fn starts_cv_pair(chars: &[(usize, char)], index: usize) -> bool {
    match (chars.get(index), chars.get(index + 1)) {
        (Some((_, c)), Some((_, v))) => is_consonant(*c) && is_vowel(*v),
        _ => false,
    }
}
