/// OCR line cleanup applied before detection.
///
/// Recognizers frequently emit decomposed accents ("e" + U+0301), which would
/// break substring matching between a line and the entity detected in the
/// joined text. Inner spacing is kept as recognized.
use unicode_normalization::UnicodeNormalization;

pub fn normalize_line(line: &str) -> String {
    let composed = line.nfc().collect::<String>();
    composed.trim().to_string()
}

/// Join lines back into one blob, one line per `\n`, so detector spans can be
/// mapped to line numbers.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Line number (0-based) that contains byte offset `offset` of `text`.
pub fn line_of_offset(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_decomposed_accents() {
        assert_eq!(normalize_line("Jose\u{301} Garci\u{301}a"), "José García");
    }

    #[test]
    fn trims_surrounding_whitespace_only() {
        assert_eq!(normalize_line("  Jane   Appleseed \t"), "Jane   Appleseed");
        assert_eq!(normalize_line(" \t "), "");
    }

    #[test]
    fn maps_offsets_to_lines() {
        let text = join_lines(&["ab".to_string(), "cd".to_string(), "ef".to_string()]);
        assert_eq!(line_of_offset(&text, 0), 0);
        assert_eq!(line_of_offset(&text, 3), 1);
        assert_eq!(line_of_offset(&text, 7), 2);
        assert_eq!(line_of_offset(&text, 100), 2);
    }
}
