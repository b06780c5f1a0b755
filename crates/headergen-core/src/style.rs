//! Header templates — one [`HeaderStyle`] value per category.
//!
//! The comment syntax of a category is data: delimiters, field prefixes and
//! suffixes, and the detection strategy. Rendering is plain concatenation;
//! nothing interpolated is escaped.

use crate::category::Category;
use crate::config::Config;
use crate::detect::Detector;

/// A line built as `prefix + value + suffix`.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Field {
    const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    fn push(&self, out: &mut String, value: &str) {
        out.push_str(self.prefix);
        out.push_str(value);
        out.push_str(self.suffix);
        out.push('\n');
    }
}

/// Layout of the full header inserted when none exists yet.
#[derive(Debug, Clone, Copy)]
pub struct HeaderTemplate {
    pub open: Option<&'static str>,
    pub filename: Field,
    /// Line following the filename line; only emitted with it.
    pub spacer: &'static str,
    pub author: Field,
    pub email: Field,
    pub date: Field,
    pub close: Option<&'static str>,
}

/// Layout of the dated block appended below an existing header.
#[derive(Debug, Clone, Copy)]
pub struct RevisionTemplate {
    /// Text emitted before the block, e.g. a separating newline.
    pub lead: &'static str,
    pub open: Option<&'static str>,
    pub banner: &'static str,
    pub date: Field,
    pub comment: Field,
    pub close: &'static str,
    /// Text emitted after the closing delimiter.
    pub trail: &'static str,
}

/// Everything category-specific about headers.
#[derive(Debug)]
pub struct HeaderStyle {
    pub category: Category,
    pub header: HeaderTemplate,
    pub revision: RevisionTemplate,
    pub detector: Detector,
}

const BLOCK_HEADER: HeaderTemplate = HeaderTemplate {
    open: Some("/**"),
    filename: Field::new(" * ", ""),
    spacer: " * ",
    author: Field::new(" * Author : ", ""),
    email: Field::new(" *  Email : ", ""),
    date: Field::new(" *   Date : ", ""),
    close: Some(" */"),
};

const BLOCK_REVISION: RevisionTemplate = RevisionTemplate {
    lead: "",
    open: Some("/**"),
    banner: " * Revision",
    date: Field::new(" *   Date : ", ""),
    comment: Field::new(" * ", ""),
    close: " */",
    trail: "\n",
};

pub static C_CPP: HeaderStyle = HeaderStyle {
    category: Category::CCpp,
    header: BLOCK_HEADER,
    revision: BLOCK_REVISION,
    detector: Detector::BlockComment,
};

pub static JAVA: HeaderStyle = HeaderStyle {
    category: Category::Java,
    header: BLOCK_HEADER,
    revision: BLOCK_REVISION,
    detector: Detector::Unimplemented,
};

pub static PYTHON: HeaderStyle = HeaderStyle {
    category: Category::Python,
    header: HeaderTemplate {
        open: None,
        filename: Field::new("\"\"\" ", " \"\"\""),
        spacer: "",
        author: Field::new("__author__ = \"", "\""),
        email: Field::new("__email__ = \"", "\""),
        date: Field::new("__date__ = \"", "\""),
        close: None,
    },
    revision: RevisionTemplate {
        lead: "\n",
        open: Some("\"\"\""),
        banner: "Revision",
        date: Field::new("    Date : ", ""),
        comment: Field::new("    ", ""),
        close: "\"\"\"",
        trail: "",
    },
    detector: Detector::PythonModule,
};

impl HeaderStyle {
    /// Full header for `filename` (a base name), ending with a blank line.
    pub fn first_time(&self, config: &Config, filename: &str) -> String {
        let t = &self.header;
        let mut out = String::new();
        if let Some(open) = t.open {
            out.push_str(open);
            out.push('\n');
        }
        if config.print_filename {
            t.filename.push(&mut out, filename);
            out.push_str(t.spacer);
            out.push('\n');
        }
        t.author.push(&mut out, &config.author);
        if config.print_email {
            t.email.push(&mut out, &config.email);
        }
        if config.print_date {
            t.date.push(&mut out, &config.date);
        }
        if let Some(close) = t.close {
            out.push_str(close);
            out.push('\n');
        }
        out.push('\n');
        out
    }

    /// Revision block dated `date`. An empty `comment` omits the comment line.
    pub fn revision(&self, date: &str, comment: &str) -> String {
        let t = &self.revision;
        let mut out = String::from(t.lead);
        if let Some(open) = t.open {
            out.push_str(open);
            out.push('\n');
        }
        out.push_str(t.banner);
        out.push('\n');
        t.date.push(&mut out, date);
        if !comment.is_empty() {
            t.comment.push(&mut out, comment);
        }
        out.push_str(t.close);
        out.push('\n');
        out.push_str(t.trail);
        out
    }

    /// The filename line of the first-time header, without its newline.
    pub fn filename_line(&self, filename: &str) -> String {
        let field = &self.header.filename;
        format!("{}{}{}", field.prefix, filename, field.suffix)
    }
}
