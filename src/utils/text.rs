//! Profile string helpers

/// Run-length encode repeated letters as `<count><letter>`
///
/// `"SSSKKSTSTTS"` becomes `"3S2KSTS2TS"`. Empty input gives `None`.
pub fn shorten_profile(profile: &str) -> Option<String> {
    if profile.is_empty() {
        return None;
    }

    let mut shortened = String::with_capacity(profile.len());
    let mut chars = profile.chars().peekable();

    while let Some(letter) = chars.next() {
        let mut count = 1usize;
        while chars.peek() == Some(&letter) {
            chars.next();
            count += 1;
        }
        if count > 1 {
            shortened.push_str(&count.to_string());
        }
        shortened.push(letter);
    }

    Some(shortened)
}

/// Copy of `text` with the character at `index` replaced
///
/// Returns `None` when `index` is not inside `text`; the length never grows.
pub fn replace_at_index(text: &str, index: usize, replacement: char) -> Option<String> {
    if index >= text.chars().count() {
        return None;
    }

    Some(
        text.chars()
            .enumerate()
            .map(|(i, c)| if i == index { replacement } else { c })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_profile() {
        assert_eq!(shorten_profile("SSSKKSTSTTS").as_deref(), Some("3S2KSTS2TS"));
        assert_eq!(shorten_profile("SSSSSSSSSSSS").as_deref(), Some("12S"));
    }

    #[test]
    fn test_shorten_profile_without_repeats_is_unchanged() {
        assert_eq!(shorten_profile("TKSBK").as_deref(), Some("TKSBK"));
        assert_eq!(shorten_profile("S").as_deref(), Some("S"));
    }

    #[test]
    fn test_shorten_empty_profile() {
        assert_eq!(shorten_profile(""), None);
    }

    #[test]
    fn test_replace_at_index() {
        assert_eq!(replace_at_index("SSSS", 2, 'K').as_deref(), Some("SSKS"));
        assert_eq!(replace_at_index("SSSS", 0, 'T').as_deref(), Some("TSSS"));
        assert_eq!(replace_at_index("SSSS", 4, 'K'), None);
    }
}
