mod types;

pub use types::{Definition, Entry, Span, SpanStyle, TranslationResult};
