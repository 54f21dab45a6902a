use slovnik_types::Span;
use unicode_normalization::UnicodeNormalization;

use crate::markup::{Child, Node};

/// Class the site puts on pointer-icon elements.
const ARROW_CLASS: &str = "arrow";

/// Collapse whitespace runs to a single space, trim, and reattach commas
/// that markup left floating after a word ("word , word"). NFKC runs first
/// so non-breaking spaces from the page count as whitespace. Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.nfkc()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" ,", ",")
}

/// Flatten a node's direct children to one normalized string, with every
/// line break standing in as a ", " separator.
pub fn flatten_children(node: &Node) -> String {
    let mut buf = String::new();

    for child in node.children() {
        match child {
            Child::Element(element) if element.tag() == "br" => buf.push_str(", "),
            Child::Element(element) => buf.push_str(&element.text()),
            Child::Text(text) => buf.push_str(text),
        }
    }

    normalize(&buf)
}

/// Flatten a node's direct children to spans: pointer icons become arrow
/// spans, line breaks become a plain "," separator, everything else becomes
/// a plain span of its normalized text. Children that normalize to nothing
/// are dropped.
pub fn flatten_with_arrow(node: &Node) -> Vec<Span> {
    let mut spans = Vec::new();

    for child in node.children() {
        match child {
            Child::Element(element) if element.has_class(ARROW_CLASS) => {
                spans.push(Span::arrow());
            }
            Child::Element(element) if element.tag() == "br" => {
                spans.push(Span::plain(","));
            }
            Child::Element(element) => {
                let text = normalize(&element.text());
                if !text.is_empty() {
                    spans.push(Span::plain(text));
                }
            }
            Child::Text(text) => {
                let text = normalize(text);
                if !text.is_empty() {
                    spans.push(Span::plain(text));
                }
            }
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use slovnik_types::SpanStyle;

    use super::*;
    use crate::markup::Document;

    #[test]
    fn test_normalize_collapses_whitespace_and_trims() {
        assert_eq!(normalize("  to \t run\n fast  "), "to run fast");
    }

    #[test]
    fn test_normalize_reattaches_commas() {
        assert_eq!(normalize("to run , to manage"), "to run, to manage");
        assert_eq!(normalize("a , , b"), "a,, b");
    }

    #[test]
    fn test_normalize_folds_non_breaking_space() {
        assert_eq!(normalize("to\u{a0}run"), "to run");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "   ",
            "word",
            "  to \t run\n fast  ",
            "to run , to manage ,",
            "a , , b",
            "\u{a0}x\u{a0},\u{a0}y",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_flatten_children_maps_line_breaks_to_separators() {
        let doc = Document::parse(
            "<table><tr><td><a>to run</a><br><a>to manage</a> <i>sth</i></td></tr></table>",
        );
        let cell = doc.select("td")[0];

        assert_eq!(flatten_children(&cell), "to run, to manage sth");
    }

    #[test]
    fn test_flatten_with_arrow_one_span_per_meaningful_child() {
        let doc = Document::parse(
            r#"<div class="line"><a>(race)</a> <span class="arrow"></span> <a>sprint</a></div>"#,
        );
        let line = doc.select(".line")[0];
        let spans = flatten_with_arrow(&line);

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0], Span::plain("(race)"));
        assert_eq!(spans[1].style, SpanStyle::Arrow);
        assert_eq!(spans[1].text, "->");
        assert_eq!(spans[2], Span::plain("sprint"));
    }

    #[test]
    fn test_flatten_with_arrow_drops_empty_children() {
        let doc = Document::parse("<div class='line'><a>to</a> <a> </a> <a>run</a>\n</div>");
        let line = doc.select(".line")[0];
        let spans = flatten_with_arrow(&line);

        assert_eq!(spans, vec![Span::plain("to"), Span::plain("run")]);
    }

    #[test]
    fn test_flatten_with_arrow_line_break_becomes_comma() {
        let doc =
            Document::parse("<table><tr><td><a>to run</a><br><a>to walk</a></td></tr></table>");
        let cell = doc.select("td")[0];
        let spans = flatten_with_arrow(&cell);

        assert_eq!(
            spans,
            vec![
                Span::plain("to run"),
                Span::plain(","),
                Span::plain("to walk"),
            ]
        );
    }
}
