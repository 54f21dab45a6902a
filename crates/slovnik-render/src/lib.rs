use colored::Colorize;
use slovnik_types::{Definition, Entry, Span, SpanStyle, TranslationResult};

const HEADER_PREFIX: &str = "Results for: ";
const QUICK_LABEL: &str = "Quick Definitions";
const FULL_LABEL: &str = "Definitions";
const BULLET: &str = "  * ";
const NOT_FOUND_NOTICE: &str = "No definitions found.";

/// Turn a translation record into one printable block. Only the separator
/// rules are sized to `width`; definition text is never wrapped, long lines
/// pass through unmodified. With `color` off no styling is attempted and
/// the output equals the colorized one with escape sequences removed.
pub fn render(result: &TranslationResult, width: usize, color: bool) -> String {
    let mut out = String::new();

    push_header(&mut out, &result.title, color);

    let label = match result.entries.first() {
        Some(Entry::QuickMeaning { .. }) => QUICK_LABEL,
        _ => FULL_LABEL,
    };
    out.push_str(label);
    out.push('\n');
    out.push_str(&"=".repeat(label.chars().count()));
    out.push('\n');
    out.push('\n');

    let mut first = true;
    for entry in &result.entries {
        match entry {
            Entry::QuickMeaning { spans } => {
                if !first {
                    out.push_str(&"-".repeat(width));
                    out.push('\n');
                }
                out.push_str(BULLET);
                out.push_str(&render_spans(spans, color));
                out.push('\n');
            }
            Entry::PartOfSpeech { name, definitions } => {
                if !first {
                    out.push('\n');
                }
                push_part_of_speech(&mut out, name, definitions, color);
            }
        }
        first = false;
    }

    push_footer(&mut out, width);
    out
}

/// Header plus a notice instead of a body, for lookups where the page had
/// a title but no extractable definitions.
pub fn render_empty(title: &str, width: usize, color: bool) -> String {
    let mut out = String::new();

    push_header(&mut out, title, color);
    out.push_str(NOT_FOUND_NOTICE);
    out.push('\n');

    push_footer(&mut out, width);
    out
}

fn push_header(out: &mut String, title: &str, color: bool) {
    out.push('\n');
    out.push_str(HEADER_PREFIX);
    out.push_str(&styled_title(title, color));
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count() + HEADER_PREFIX.len()));
    out.push('\n');
    out.push('\n');
}

fn push_footer(out: &mut String, width: usize) {
    out.push('\n');
    out.push_str(&"-".repeat(width));
    out.push('\n');
}

fn push_part_of_speech(out: &mut String, name: &str, definitions: &[Definition], color: bool) {
    out.push_str(name);
    out.push('\n');
    out.push_str(&"-".repeat(name.chars().count()));
    out.push('\n');

    // Wide enough for the widest index plus ")", so continuation lines
    // align under the first bullet's content, not under the number.
    let pad = digits(definitions.len()) + 2;

    for (index, definition) in definitions.iter().enumerate() {
        for (line_index, line) in definition.lines.iter().enumerate() {
            if line_index == 0 {
                out.push_str(&format!("{:>width$})", index + 1, width = pad - 1));
            } else {
                out.push_str(&" ".repeat(pad));
            }
            out.push_str(BULLET);
            out.push_str(&render_spans(line, color));
            out.push('\n');
        }
    }
}

/// Spans are atomic: they are styled and joined, never split. A space goes
/// between adjacent spans unless the boundary already carries whitespace or
/// the right span opens with a comma.
fn render_spans(spans: &[Span], color: bool) -> String {
    let mut out = String::new();
    let mut previous: Option<&str> = None;

    for span in spans {
        if let Some(previous) = previous {
            if needs_space(previous, &span.text) {
                out.push(' ');
            }
        }
        out.push_str(&styled(span, color));
        previous = Some(&span.text);
    }

    out
}

fn needs_space(previous: &str, next: &str) -> bool {
    !previous.ends_with(char::is_whitespace)
        && !next.starts_with(char::is_whitespace)
        && !next.starts_with(',')
}

fn styled(span: &Span, color: bool) -> String {
    if !color {
        return span.text.clone();
    }

    match span.style {
        SpanStyle::Plain | SpanStyle::Arrow => span.text.clone(),
        SpanStyle::Highlight => span.text.bright_blue().bold().to_string(),
        SpanStyle::Abbreviation => span.text.italic().to_string(),
    }
}

fn styled_title(title: &str, color: bool) -> String {
    if color {
        title.bright_blue().bold().to_string()
    } else {
        title.to_string()
    }
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}
