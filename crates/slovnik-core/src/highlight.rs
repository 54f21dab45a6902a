use regex::Regex;
use slovnik_config::highlight::HighlightConfig;
use slovnik_types::Span;

/// Tags abbreviation tokens inside dictionary text.
pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    /// Compile the word-boundary pattern once at process start.
    pub fn new(config: &HighlightConfig) -> Result<Self, regex::Error> {
        let tokens: Vec<String> = config
            .abbreviations
            .iter()
            .map(|token| regex::escape(token))
            .collect();

        let pattern = Regex::new(&format!(r"\b(?:{})\b", tokens.join("|")))?;

        Ok(Self { pattern })
    }

    /// Split text into alternating emphasis spans: non-matching segments
    /// carry the dictionary-content emphasis, matched abbreviations the
    /// secondary one. Concatenating the span texts reproduces the input;
    /// zero-length segments are dropped, so a text without abbreviations
    /// comes back as a single emphasized span.
    pub fn highlight(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut last = 0;

        for found in self.pattern.find_iter(text) {
            if found.start() > last {
                spans.push(Span::highlight(&text[last..found.start()]));
            }
            if found.end() > found.start() {
                spans.push(Span::abbreviation(found.as_str()));
            }
            last = found.end();
        }

        if last < text.len() {
            spans.push(Span::highlight(&text[last..]));
        }

        spans
    }

    /// Whether a word is exactly one of the abbreviation tokens.
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.pattern
            .find(word)
            .is_some_and(|found| found.start() == 0 && found.end() == word.len())
    }
}
