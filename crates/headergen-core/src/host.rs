//! The editor surface the generator works against.

use std::path::Path;

/// An open document owned by the host editor.
///
/// Points are byte offsets into [`Host::text`]; lines are zero-based.
pub trait Host {
    /// Path of the document, if it has been saved under one.
    fn file_name(&self) -> Option<&Path>;

    fn selection(&self) -> Vec<usize>;

    /// Replace the selection with a single caret at `point`.
    fn set_selection(&mut self, point: usize);

    /// Scroll `point` into view.
    fn show(&mut self, point: usize);

    fn text(&self) -> String;

    /// Offset of the start of `line`; past the last line this is the end of the text.
    fn text_point(&self, line: usize) -> usize;

    fn insert(&mut self, point: usize, text: &str);

    fn insert_at_line(&mut self, line: usize, text: &str) {
        let point = self.text_point(line);
        self.insert(point, text);
    }

    fn status_message(&mut self, message: &str);
}

/// A request for one line of free text from the user.
///
/// The generator never waits on the answer: it hands the request back to the
/// caller inside a [`crate::PendingRevision`], which is resumed once the host's
/// prompt completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub caption: String,
    pub initial: String,
}
