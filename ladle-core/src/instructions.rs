//! Segmentation of a free-text instructions blob into discrete steps.

use std::sync::LazyLock;

use regex::Regex;

/// Leading ordinal marker: digits followed by '.' or ')' and optional
/// whitespace.
static ORDINAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s*").expect("Invalid ordinal marker regex"));

/// Split one instructions blob into ordered steps.
///
/// Lines are split on `\n` or `\r\n`, trimmed, and dropped when empty;
/// a leading ordinal marker is then stripped from each surviving line.
/// The emptiness filter runs before marker stripping, so a line that was
/// nothing but a marker survives as an empty step.
pub fn segment_instructions(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| ORDINAL_MARKER.replace(line, "").into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_strips_ordinals() {
        let steps = segment_instructions("1. Mix flour\n2) Add eggs\n\nBake at 350");
        assert_eq!(steps, vec!["Mix flour", "Add eggs", "Bake at 350"]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let steps = segment_instructions("Preheat oven.\r\nGrease the pan.\r\n");
        assert_eq!(steps, vec!["Preheat oven.", "Grease the pan."]);
    }

    #[test]
    fn marker_only_line_survives_as_empty_step() {
        let steps = segment_instructions("1.\nMix well");
        assert_eq!(steps, vec!["", "Mix well"]);
    }

    #[test]
    fn empty_input_yields_no_steps() {
        assert!(segment_instructions("").is_empty());
        assert!(segment_instructions("\n\n  \n").is_empty());
    }
}
