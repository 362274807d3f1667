use unicode_general_category::{get_general_category, GeneralCategory};

/// Whether `word` is non-empty and made only of letters.
///
/// A letter is any character in one of the Unicode letter categories
/// (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`). Words in non-Latin scripts pass, while
/// digits, punctuation, whitespace, combining marks and letter-like numerals
/// (`Nl`, e.g. `ⅻ`) do not.
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_letter)
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
