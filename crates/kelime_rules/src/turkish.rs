//! Turkish-locale case mapping.
//!
//! Turkish has two distinct `i` letters: dotted `İ/i` and dotless `I/ı`.
//! The generic Unicode mappings pair `I` with `i` and lowercase `İ` to
//! `i` plus a combining dot, so neither round-trips a Turkish word. These
//! helpers special-case the four letters and defer to the standard library
//! for everything else.

/// Lowercases one character under Turkish rules.
///
/// Characters whose generic lowercase expands to several code points keep
/// only the first one.
pub fn lower_char(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Uppercases one character under Turkish rules.
pub fn upper_char(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Lowercases a word under Turkish rules. This is the dictionary folding.
pub fn fold(word: &str) -> String {
    word.chars().map(lower_char).collect()
}

/// Uppercases a word under Turkish rules.
pub fn upper(word: &str) -> String {
    word.chars().map(upper_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_and_dotless_i_stay_apart() {
        assert_eq!(fold("KEDİ"), "kedi");
        assert_eq!(fold("KIR"), "kır");
        assert_eq!(upper("kedi"), "KEDİ");
        assert_eq!(upper("kır"), "KIR");
    }

    #[test]
    fn other_turkish_letters_use_unicode_mapping() {
        assert_eq!(fold("ÇĞÖŞÜ"), "çğöşü");
        assert_eq!(upper("çğöşü"), "ÇĞÖŞÜ");
    }

    #[test]
    fn folding_is_idempotent() {
        let once = fold("İSTANBUL");
        assert_eq!(once, "istanbul");
        assert_eq!(fold(&once), once);
    }

    #[test]
    fn generic_lowercase_would_differ() {
        // The standard mapping of İ yields two code points.
        assert_ne!("İ".to_lowercase(), fold("İ"));
        assert_ne!("I".to_lowercase(), fold("I"));
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(fold("A-1"), "a-1");
        assert_eq!(upper_char('7'), '7');
    }
}
