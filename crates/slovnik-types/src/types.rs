/// Emphasis attached to a span when it reaches the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    /// Dictionary content emphasis (the "found" color)
    Highlight,
    /// Secondary emphasis for abbreviation markers like "sb"/"sth"
    Abbreviation,
    /// Stand-in for a pointer icon in the source markup
    Arrow,
}

/// Smallest unit of styled text; the renderer never splits one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Plain,
        }
    }

    pub fn highlight(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Highlight,
        }
    }

    pub fn abbreviation(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Abbreviation,
        }
    }

    /// Arrow spans always carry the literal text "->"
    pub fn arrow() -> Self {
        Self {
            text: "->".to_string(),
            style: SpanStyle::Arrow,
        }
    }
}

/// One dictionary definition; may render as several physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub lines: Vec<Vec<Span>>,
}

/// One translation unit from the result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A flat line from the legacy quick-meanings table
    QuickMeaning { spans: Vec<Span> },
    /// A headed group from the parts-of-speech layout
    PartOfSpeech {
        name: String,
        definitions: Vec<Definition>,
    },
}

/// Everything extracted from one result page. Immutable after
/// construction; lives for a single render-and-print cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub title: String,
    pub entries: Vec<Entry>,
}
