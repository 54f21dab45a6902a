use slovnik_types::{Definition, Entry, Span, SpanStyle, TranslationResult};

use crate::error::ExtractError;
use crate::highlight::Highlighter;
use crate::markup::{Document, Node};
use crate::normalize::{flatten_with_arrow, normalize};

const TITLE: &str = "#results h1";
const QUICK_ROWS: &str = "#results #fastMeanings table tr";
const QUICK_CELLS: &str = "td";
const POS_BOXES: &str = "#results .hgroup";
const POS_HEADER: &str = "h2";
const POS_ITEMS: &str = "ol li";
const POS_LINES: &str = ".line";

/// Builds a translation record from a parsed result page. The two page
/// layouts the site has used over time are tried in priority order; the
/// first that yields at least one entry wins.
pub struct Extractor<'a> {
    highlighter: &'a Highlighter,
}

impl<'a> Extractor<'a> {
    pub fn new(highlighter: &'a Highlighter) -> Self {
        Self { highlighter }
    }

    pub fn extract(&self, doc: &Document) -> Result<TranslationResult, ExtractError> {
        let title = doc
            .select(TITLE)
            .first()
            .map(|heading| normalize(&heading.text()))
            .unwrap_or_default();

        let mut entries = self.quick_meanings(doc);
        if entries.is_empty() {
            entries = self.parts_of_speech(doc);
        } else {
            tracing::debug!(count = entries.len(), "quick-meanings layout matched");
        }

        if entries.is_empty() {
            return Err(ExtractError::EmptyResult { title });
        }

        Ok(TranslationResult { title, entries })
    }

    /// Legacy layout: one table row per meaning, translation in the last
    /// cell. Rows that flatten to nothing are dropped.
    fn quick_meanings(&self, doc: &Document) -> Vec<Entry> {
        doc.select(QUICK_ROWS)
            .iter()
            .filter_map(|row| {
                let cell = row.select(QUICK_CELLS).pop()?;
                let spans = self.meaning_spans(&cell);
                if spans.is_empty() {
                    None
                } else {
                    Some(Entry::QuickMeaning { spans })
                }
            })
            .collect()
    }

    /// The whole quick meaning is emphasized; abbreviation tokens inside it
    /// get the secondary style, pointer icons pass through as arrows.
    fn meaning_spans(&self, cell: &Node) -> Vec<Span> {
        let mut spans = Vec::new();

        for span in flatten_with_arrow(cell) {
            match span.style {
                SpanStyle::Arrow => spans.push(span),
                _ => spans.extend(self.highlighter.highlight(&span.text)),
            }
        }

        spans
    }

    /// Richer layout: one box per part of speech, definitions as list
    /// items, each item holding one or more content lines.
    fn parts_of_speech(&self, doc: &Document) -> Vec<Entry> {
        let entries: Vec<Entry> = doc
            .select(POS_BOXES)
            .iter()
            .filter_map(|part| {
                let name = normalize(&part.select(POS_HEADER).first()?.text());
                if name.is_empty() {
                    return None;
                }

                let definitions: Vec<Definition> = part
                    .select(POS_ITEMS)
                    .iter()
                    .filter_map(|item| self.definition(item))
                    .collect();

                if definitions.is_empty() {
                    None
                } else {
                    Some(Entry::PartOfSpeech { name, definitions })
                }
            })
            .collect();

        if !entries.is_empty() {
            tracing::debug!(count = entries.len(), "parts-of-speech layout matched");
        }

        entries
    }

    fn definition(&self, item: &Node) -> Option<Definition> {
        let lines: Vec<Vec<Span>> = item
            .select(POS_LINES)
            .iter()
            .map(|line| self.line_spans(line))
            .filter(|spans| !spans.is_empty())
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(Definition { lines })
        }
    }

    /// Definition lines come out of the markup one word per child; spans
    /// that are exactly an abbreviation token are retagged.
    fn line_spans(&self, line: &Node) -> Vec<Span> {
        flatten_with_arrow(line)
            .into_iter()
            .map(|span| {
                if span.style == SpanStyle::Plain && self.highlighter.is_abbreviation(&span.text) {
                    Span::abbreviation(span.text)
                } else {
                    span
                }
            })
            .collect()
    }
}
