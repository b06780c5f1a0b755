//! In-memory [`Host`] implementation.

use crate::host::Host;
use std::path::{Path, PathBuf};

/// A document held in memory, with a caret, a viewport and a status log.
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    path: Option<PathBuf>,
    text: String,
    selection: Vec<usize>,
    viewport: usize,
    messages: Vec<String>,
}

impl Buffer {
    pub fn new(path: Option<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path,
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Point most recently scrolled into view.
    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Status messages in the order they were shown.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Host for Buffer {
    fn file_name(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn selection(&self) -> Vec<usize> {
        self.selection.clone()
    }

    fn set_selection(&mut self, point: usize) {
        self.selection.clear();
        self.selection.push(point.min(self.text.len()));
    }

    fn show(&mut self, point: usize) {
        self.viewport = point.min(self.text.len());
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn text_point(&self, line: usize) -> usize {
        if line == 0 {
            return 0;
        }
        self.text
            .match_indices('\n')
            .nth(line - 1)
            .map_or(self.text.len(), |(i, _)| i + 1)
    }

    fn insert(&mut self, point: usize, text: &str) {
        let point = point.min(self.text.len());
        self.text.insert_str(point, text);
    }

    /// Inserting past the last line starts a new line first when the
    /// document does not end with one.
    fn insert_at_line(&mut self, line: usize, text: &str) {
        let point = self.text_point(line);
        if point == self.text.len() && !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.insert(self.text_point(line), text);
    }

    fn status_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_point_of_lines() {
        let buf = Buffer::new(None, "ab\ncd\n\nef");
        assert_eq!(buf.text_point(0), 0);
        assert_eq!(buf.text_point(1), 3);
        assert_eq!(buf.text_point(2), 6);
        assert_eq!(buf.text_point(3), 7);
        assert_eq!(buf.text_point(4), 9);
        assert_eq!(buf.text_point(40), 9);
    }

    #[test]
    fn insert_at_line_in_middle() {
        let mut buf = Buffer::new(None, "one\nthree\n");
        buf.insert_at_line(1, "two\n");
        assert_eq!(buf.as_str(), "one\ntwo\nthree\n");
    }

    #[test]
    fn insert_past_end_adds_newline() {
        let mut buf = Buffer::new(None, "last");
        buf.insert_at_line(5, "tail\n");
        assert_eq!(buf.as_str(), "last\ntail\n");
    }

    #[test]
    fn insert_past_end_of_terminated_text() {
        let mut buf = Buffer::new(None, "last\n");
        buf.insert_at_line(5, "tail\n");
        assert_eq!(buf.as_str(), "last\ntail\n");
    }

    #[test]
    fn selection_replaces_previous_carets() {
        let mut buf = Buffer::new(None, "hello");
        buf.set_selection(3);
        buf.set_selection(99);
        assert_eq!(buf.selection(), vec![5]);
    }

    #[test]
    fn status_messages_accumulate() {
        let mut buf = Buffer::new(Some(PathBuf::from("a.c")), "");
        buf.status_message("first");
        buf.status_message("second");
        assert_eq!(buf.messages(), ["first", "second"]);
        assert_eq!(buf.file_name(), Some(Path::new("a.c")));
    }
}
