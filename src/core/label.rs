/// Turns a camelCase key into a display label: `"firstName"` becomes `"First Name"`.
///
/// A new word starts before every ASCII uppercase letter. Each word gets its
/// first character upper-cased and words are joined with a single space.
pub fn format_label(key: &str) -> String {
    split_camel_case(key)
        .into_iter()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_camel_case(key: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;

    for (idx, ch) in key.char_indices() {
        if idx > start && ch.is_ascii_uppercase() {
            words.push(&key[start..idx]);
            start = idx;
        }
    }
    words.push(&key[start..]);

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("firstName"), "First Name");
        assert_eq!(format_label("id"), "Id");
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn test_leading_uppercase_has_no_empty_word() {
        assert_eq!(format_label("FirstName"), "First Name");
        assert_eq!(format_label("ID"), "I D");
        assert_eq!(format_label("userIDNumber"), "User I D Number");
    }

    #[test]
    fn test_non_ascii_keys() {
        assert_eq!(format_label("élan"), "Élan");
        assert_eq!(format_label("名前Value"), "名前 Value");
        assert_eq!(format_label("straße"), "Straße");
    }
}
