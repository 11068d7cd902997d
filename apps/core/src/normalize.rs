/// Separators tried in priority order: em dash, en dash, hyphen.
const TITLE_SEPARATORS: [char; 3] = ['\u{2014}', '\u{2013}', '-'];

/// Reduce a window title to a single application-name guess.
///
/// Titles like `"report.txt - Text Editor"` yield `"Editor"`: the last word
/// after the final occurrence of the first separator present. Titles without
/// any separator come back whitespace-collapsed and trimmed.
pub fn normalize(raw_title: &str) -> String {
    let title = raw_title.split_whitespace().collect::<Vec<_>>().join(" ");

    for separator in TITLE_SEPARATORS {
        if let Some((_, tail)) = title.rsplit_once(separator) {
            let segment = tail.trim();
            return segment
                .split_whitespace()
                .last()
                .unwrap_or(segment)
                .to_string();
        }
    }

    title
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn takes_last_word_after_final_hyphen() {
        assert_eq!(normalize("report.txt - Text Editor"), "Editor");
        assert_eq!(normalize("a - b - Mozilla Firefox"), "Firefox");
    }

    #[test]
    fn title_without_separator_is_collapsed_and_trimmed() {
        assert_eq!(normalize("htop"), "htop");
        assert_eq!(normalize("  Visual   Studio\tCode \n"), "Visual Studio Code");
    }

    #[test]
    fn em_dash_outranks_hyphen() {
        assert_eq!(normalize("x-ray notes \u{2014} Obsidian"), "Obsidian");
        assert_eq!(normalize("draft \u{2013} LibreOffice Writer"), "Writer");
    }

    #[test]
    fn trailing_separator_yields_empty_hint() {
        assert_eq!(normalize("Untitled -"), "");
        assert_eq!(normalize(""), "");
    }
}
