//! Display-title derivation for uploaded audio files

/// Derives a display title from an audio filename.
///
/// Strips the final extension, whatever it is, keeping case and spaces
/// intact: "My Song.mp3" becomes "My Song". A name without an extension is
/// returned unchanged.
pub fn title_from_filename(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => filename.to_string(),
    }
}

/// Normalized key for a title: lowercase, all whitespace removed.
///
/// Callers that need a stable lookup key use this; the display title itself
/// is never mangled.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_extension_keeping_case_and_spaces() {
        assert_eq!(title_from_filename("My Song.mp3"), "My Song");
        assert_eq!(title_from_filename("UPPER.FLAC"), "UPPER");
    }

    #[test]
    fn strips_only_the_final_extension() {
        assert_eq!(title_from_filename("live set.final.mp3"), "live set.final");
    }

    #[test]
    fn name_without_extension_is_unchanged() {
        assert_eq!(title_from_filename("untitled"), "untitled");
    }

    #[test]
    fn dotfile_name_is_unchanged() {
        assert_eq!(title_from_filename(".hidden"), ".hidden");
    }

    #[test]
    fn derivation_is_idempotent() {
        let once = title_from_filename("My Song.mp3");
        assert_eq!(title_from_filename("My Song.mp3"), once);
        assert_eq!(title_from_filename(&once), once);
    }

    #[test]
    fn slugify_lowercases_and_drops_whitespace() {
        assert_eq!(slugify("My Song"), "mysong");
        assert_eq!(slugify("  Tabs\tand  spaces "), "tabsandspaces");
    }
}
