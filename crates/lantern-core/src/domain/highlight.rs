use serde::Serialize;

/// Half-open `[start, end)` range of characters (not bytes) in a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Wraps every span of `text` in `open`/`close` markers.
///
/// Spans are spliced in the order given. Overlapping spans are not merged: the
/// gap before an overlapping span is empty and its whole range is marked again.
pub fn highlight(text: &str, spans: &[MatchSpan], open: &str, close: &str) -> String {
    let characters: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut last_position = 0;

    for span in spans {
        output.extend(slice(&characters, last_position, span.start));
        output.push_str(open);
        output.extend(slice(&characters, span.start, span.end));
        output.push_str(close);
        last_position = span.end;
    }

    output.extend(slice(&characters, last_position, characters.len()));
    output
}

fn slice(characters: &[char], start: usize, end: usize) -> &[char] {
    let end = end.min(characters.len());
    if start >= end {
        return &[];
    }
    &characters[start..end]
}
