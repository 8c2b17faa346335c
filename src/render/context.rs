//! Per-render mutable state

use super::TabStop;
use text_size::TextSize;

/// Output buffer plus tab stop bookkeeping for one render
pub struct RenderContext<'o> {
    out: String,
    indent_unit: &'o str,
    markers: bool,
    /// Current element nesting level
    pub level: usize,
    next_stop: usize,
    /// Number reserved for the caret anchor, higher than every other stop
    anchor_stop: Option<usize>,
    stops: Vec<TabStop>,
}

impl<'o> RenderContext<'o> {
    /// `ordinary_stops` is the number of non-anchor stops the tree will emit
    pub fn new(indent_unit: &'o str, markers: bool, ordinary_stops: usize, has_anchor: bool) -> Self {
        Self {
            out: String::new(),
            indent_unit,
            markers,
            level: 0,
            next_stop: 1,
            anchor_stop: has_anchor.then_some(ordinary_stops + 1),
            stops: Vec::new(),
        }
    }

    /// Write literal text.
    ///
    /// With markers on, the output is a snippet, so `$`, `\` and `}` are
    /// backslash-escaped to keep them from reading as tab stops.
    pub fn push_str(&mut self, text: &str) {
        if !self.markers {
            self.out.push_str(text);
            return;
        }
        for c in text.chars() {
            if matches!(c, '$' | '\\' | '}') {
                self.out.push('\\');
            }
            self.out.push(c);
        }
    }

    /// Start a new line at the current level (no newline before the first)
    pub fn start_line(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..self.level {
            self.out.push_str(self.indent_unit);
        }
    }

    /// Write `text` line by line, each on its own line at the current level
    pub fn push_lines(&mut self, text: &str) {
        for line in text.split('\n') {
            if line.trim().is_empty() {
                if !self.out.is_empty() {
                    self.out.push('\n');
                }
            } else {
                self.start_line();
                self.push_str(line);
            }
        }
    }

    /// Write the next ordinary tab stop
    pub fn tab_stop(&mut self) {
        let index = self.next_stop;
        self.next_stop += 1;
        self.write_stop(index);
    }

    /// Write the caret anchor's stop
    pub fn anchor_stop(&mut self) {
        if let Some(index) = self.anchor_stop {
            self.write_stop(index);
        }
    }

    fn write_stop(&mut self, index: usize) {
        self.stops.push(TabStop {
            index,
            offset: TextSize::of(self.out.as_str()),
        });
        if self.markers {
            self.out.push_str(&format!("${{{}}}", index));
        }
    }

    /// Output text and recorded stops, ordered by number
    pub fn finish(self) -> (String, Vec<TabStop>) {
        let mut stops = self.stops;
        stops.sort_by_key(|s| s.index);
        (self.out, stops)
    }
}
