/// Check if a rune is a vowel, including accented forms and 'Y'.
pub fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'A' | 'E'
            | 'I'
            | 'O'
            | 'U'
            | 'Y'
            | 'À'
            | 'Á'
            | 'Â'
            | 'Ã'
            | 'Ä'
            | 'Å'
            | 'Æ'
            | 'È'
            | 'É'
            | 'Ê'
            | 'Ë'
            | 'Ì'
            | 'Í'
            | 'Î'
            | 'Ï'
            | 'Ò'
            | 'Ó'
            | 'Ô'
            | 'Õ'
            | 'Ö'
            | 'Ø'
            | 'Ù'
            | 'Ú'
            | 'Û'
            | 'Ü'
            | 'Ý'
            | '\u{C29F}'
            | '\u{C28C}'
    )
}

/// Uppercase a single rune. When the uppercase form expands to several runes
/// (as 'ß' does) the original rune is kept, so the folded input stays the same
/// length as the original and cursor offsets line up.
pub fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Check whether `word` is `root` itself or a regular english inflection of
/// it, e.g. "ache" matches "ache", "achy", "aches", "ached". This is for
/// cases where only the root and its inflected forms should match, and not
/// unrelated words that happen to contain the same substring.
pub fn root_or_inflections(word: &[char], root: &str) -> bool {
    let root: Vec<char> = root.chars().collect();

    if word.len() < root.len() {
        // there's no inflection shorter than the root itself
        return false;
    }
    let len_diff = word.len() - root.len();

    // word must start with all the letters of root except the last
    let last = root.len() - 1;
    for i in 0..last {
        if word[i] != root[i] {
            return false;
        }
    }

    let word = &word[last..];

    // check the last root letter and the simple plural
    if word[0] == root[last] {
        if len_diff == 0 {
            return true;
        }
        if len_diff == 1 && word[1] == 'S' {
            return true;
        }
    }

    // different paths if the last letter is 'E' or not
    if root[last] == 'E' {
        // check +D
        if len_diff == 1 && word[0] == 'E' && word[1] == 'D' {
            return true;
        }
    } else {
        // the last character must match if the root doesn't end in E
        if word[0] != root[last] {
            return false;
        }

        // check +ES and +ED
        if len_diff == 2 && word[1] == 'E' && (word[2] == 'S' || word[2] == 'D') {
            return true;
        }
    }

    // root and word match, check the remaining endings
    if len_diff == 3 && word.iter().copied().eq("ING".chars()) {
        true
    } else if len_diff == 5 && word.iter().copied().eq("INGLY".chars()) {
        true
    } else {
        len_diff == 1 && word[0] == 'Y'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn test_is_vowel() {
        assert!(is_vowel('A'));
        assert!(is_vowel('Y'));
        assert!(is_vowel('É'));
        assert!(!is_vowel('B'));
        assert!(!is_vowel('W'));
    }

    #[test]
    fn test_to_upper() {
        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_upper('ç'), 'Ç');
        assert_eq!(to_upper('ñ'), 'Ñ');
        // 'ß' uppercases to "SS", the original rune is kept
        assert_eq!(to_upper('ß'), 'ß');
    }

    #[test]
    fn test_root_or_inflections() {
        assert!(root_or_inflections(&chars("ACHE"), "ACHE"));
        assert!(root_or_inflections(&chars("ACHES"), "ACHE"));
        assert!(root_or_inflections(&chars("ACHED"), "ACHE"));
        // the 'Y' ending only matches when the word is one letter longer
        // than the root, so "ACHY" does not count as an inflection of "ACHE"
        assert!(!root_or_inflections(&chars("ACHY"), "ACHE"));
        assert!(root_or_inflections(&chars("CHRISTENED"), "CHRISTEN"));
        assert!(root_or_inflections(&chars("CHRISTENS"), "CHRISTEN"));
        assert!(!root_or_inflections(&chars("CACHE"), "ACHE"));
        assert!(!root_or_inflections(&chars("ACH"), "ACHE"));
    }
}
