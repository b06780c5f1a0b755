//! Prior-header detection.
//!
//! Each detector pattern-matches a few literal markers left by a first-time
//! header and answers with the line a revision block should be inserted at.
//! These are heuristics, not parsers: a miss only means a second full header
//! gets inserted.

use regex::Regex;
use std::sync::LazyLock;

/// `#include` at the start of a line, allowing `# include`.
static RE_INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*#[ \t]*include\b").unwrap());
static RE_PY_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(import|from)[ \t]").unwrap());

const BLOCK_CLOSE: &str = " */";
const PY_HEADER_MARKERS: &[&str] = &["__author__", "__date__"];

/// Detection strategy of a header style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detector {
    /// Look for the ` */` closing a block comment before any `#include`.
    BlockComment,
    /// Look for the filename docstring or `__author__`/`__date__` at the top.
    PythonModule,
    /// No heuristic exists for this style.
    Unimplemented,
}

/// Result of scanning a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// A header was found; revisions go before this line.
    Found(usize),
    NotFound,
    /// The style has no detector, so no header can ever be found.
    Unimplemented,
}

impl Detection {
    pub fn line(self) -> Option<usize> {
        match self {
            Detection::Found(line) => Some(line),
            Detection::NotFound | Detection::Unimplemented => None,
        }
    }
}

impl Detector {
    /// Scan `text`. `filename_line` is the docstring line a Python header would
    /// start with for the current file.
    pub fn detect(self, text: &str, filename_line: &str) -> Detection {
        let lines: Vec<&str> = text.lines().collect();
        let found = match self {
            Detector::BlockComment => block_comment(&lines),
            Detector::PythonModule => python_module(&lines, filename_line),
            Detector::Unimplemented => return Detection::Unimplemented,
        };
        found.map_or(Detection::NotFound, Detection::Found)
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn block_comment(lines: &[&str]) -> Option<usize> {
    for (i, line) in lines.iter().enumerate() {
        if RE_INCLUDE.is_match(line) {
            return None;
        }
        if line.starts_with(BLOCK_CLOSE) {
            // skip the close marker and the blank line after it
            return Some(i + 2);
        }
    }
    None
}

fn python_module(lines: &[&str], filename_line: &str) -> Option<usize> {
    let first = lines.iter().position(|l| !is_blank(l))?;
    let head = lines[first].trim_end();
    let is_header =
        head == filename_line || PY_HEADER_MARKERS.iter().any(|m| head.starts_with(m));
    if !is_header {
        return None;
    }

    let end = lines[first + 1..]
        .iter()
        .position(|l| RE_PY_IMPORT.is_match(l))
        .map_or(lines.len(), |i| first + 1 + i);

    let last = (first..end).rev().find(|&i| !is_blank(lines[i]))?;
    Some(last + 1)
}
