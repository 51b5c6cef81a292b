use crate::ui::span::Span;
use crate::ui::style::Style;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.width()).sum()
    }

    /// Appends plain spaces until the line is at least `width` columns wide.
    pub fn pad_to(&mut self, width: usize) {
        let current = self.width();
        if current < width {
            self.push(Span::new(" ".repeat(width - current)));
        }
    }

    pub fn extend(&mut self, other: Line) {
        self.spans.extend(other.spans);
    }
}

pub fn line_from(text: impl Into<String>, style: Style) -> Line {
    let mut line = Line::new();
    line.push(Span::styled(text, style));
    line
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Line>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn blank_line(&mut self) {
        self.lines.push(Line::new());
    }
}
