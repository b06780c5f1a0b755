//! Answers to revision prompts on the command line.

use headergen_core::PromptRequest;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Supplies revision comments: a fixed `--comment`, or one line of input per prompt.
pub struct Answers<R> {
    fixed: Option<String>,
    input: R,
}

impl<R: BufRead> Answers<R> {
    pub fn new(fixed: Option<String>, input: R) -> Self {
        Self { fixed, input }
    }

    /// Answer `request` for `path`. End of input dismisses the prompt.
    pub fn answer(&mut self, path: &Path, request: &PromptRequest) -> io::Result<Option<String>> {
        if let Some(ref comment) = self.fixed {
            return Ok(Some(comment.clone()));
        }

        let mut stderr = io::stderr();
        write!(stderr, "{}: {} ", path.display(), request.caption)?;
        stderr.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(['\r', '\n']);
        Ok(Some(if line.is_empty() {
            request.initial.clone()
        } else {
            line.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PromptRequest {
        PromptRequest {
            caption: "Revision comment:".into(),
            initial: String::new(),
        }
    }

    #[test]
    fn fixed_comment_wins() {
        let mut answers = Answers::new(Some("fixed".into()), "typed\n".as_bytes());
        assert_eq!(
            answers.answer(Path::new("a.c"), &request()).unwrap().as_deref(),
            Some("fixed")
        );
    }

    #[test]
    fn reads_one_line_per_prompt() {
        let mut answers = Answers::new(None, "first\r\nsecond\n".as_bytes());
        let path = Path::new("a.c");
        assert_eq!(answers.answer(path, &request()).unwrap().as_deref(), Some("first"));
        assert_eq!(answers.answer(path, &request()).unwrap().as_deref(), Some("second"));
        assert_eq!(answers.answer(path, &request()).unwrap(), None);
    }

    #[test]
    fn empty_line_uses_initial_text() {
        let mut answers = Answers::new(None, "\n".as_bytes());
        assert_eq!(answers.answer(Path::new("a.c"), &request()).unwrap().as_deref(), Some(""));
    }
}
