use regex::Regex;
use std::sync::LazyLock;

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s").expect("valid regex"));
static LINE_BREAK_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\d+\.\s").expect("valid regex"));
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n|\.\s*\n").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Split the free-text "documents used" answer into one entry per document.
///
/// Numbered lists ("1. Drawings ... 2. Previous survey ...") are split on the
/// item numbers so multi-line descriptions stay whole. Otherwise the text is
/// split on blank lines and sentence-ending line breaks.
pub fn parse_documents_used(raw: &str) -> Vec<String> {
    let items = numbered_items(raw);
    if items.len() > 1 {
        return items
            .into_iter()
            .map(|item| WHITESPACE_RUN.replace_all(item, " ").trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
    }

    PARAGRAPH_BREAK
        .split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Item texts: the first starts at the first "N. ", later ones at a line
/// break followed by "N. ".
fn numbered_items(raw: &str) -> Vec<&str> {
    let Some(first) = NUMBERED_ITEM.find(raw) else {
        return Vec::new();
    };

    let mut starts = vec![first.start()];
    for m in LINE_BREAK_ITEM.find_iter(&raw[first.end()..]) {
        // skip the newline itself
        starts.push(first.end() + m.start() + 1);
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).map(|&next| next - 1).unwrap_or(raw.len());
            &raw[start..end]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_items_keep_multiline_descriptions() {
        let raw = "1. Architectural drawings\n   dated 2019.\n2. Previous DSS report\n3. Site photos";
        assert_eq!(
            parse_documents_used(raw),
            vec![
                "1. Architectural drawings dated 2019.",
                "2. Previous DSS report",
                "3. Site photos"
            ]
        );
    }

    #[test]
    fn test_single_numbered_item_falls_back_to_paragraphs() {
        let raw = "1. Only one document";
        assert_eq!(parse_documents_used(raw), vec!["1. Only one document"]);
    }

    #[test]
    fn test_paragraph_split() {
        let raw = "Floor plans.\nMechanical drawings\n\nOwner interview";
        assert_eq!(
            parse_documents_used(raw),
            vec!["Floor plans", "Mechanical drawings", "Owner interview"]
        );
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_documents_used("  \n ").is_empty());
    }
}
