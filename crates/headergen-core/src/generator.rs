//! Invocation controller — decide between a first-time header and a revision
//! block, and apply it to the host document.

use crate::category::{self, Category};
use crate::config::Config;
use crate::error::ResolveError;
use crate::host::{Host, PromptRequest};
use crate::style::HeaderStyle;

const REVISION_CAPTION: &str = "Revision comment:";

/// What a single invocation did.
#[derive(Debug)]
pub enum Outcome {
    /// No category; the reason was shown as a status message.
    Skipped(ResolveError),
    /// A first-time header was inserted at the top of the document.
    HeaderInserted(Category),
    /// A header exists and revisions are disabled; nothing changed.
    AlreadyPresent(Category),
    /// A header exists; the revision waits for the user's comment.
    AwaitingComment(PendingRevision),
}

/// Second phase of a revision: holds everything needed to insert the block
/// once the prompt answered.
#[derive(Debug)]
pub struct PendingRevision {
    style: &'static HeaderStyle,
    line: usize,
    date: String,
    request: PromptRequest,
}

impl PendingRevision {
    /// What to ask the user.
    pub fn request(&self) -> &PromptRequest {
        &self.request
    }

    /// Line the revision block will be inserted before.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn category(&self) -> Category {
        self.style.category
    }

    /// Finish the revision with the prompt's answer. `None` means the prompt was
    /// dismissed and nothing is inserted. Returns whether the document changed.
    pub fn resume<H: Host + ?Sized>(self, host: &mut H, comment: Option<&str>) -> bool {
        let Some(comment) = comment else {
            tracing::debug!(category = %self.style.category, "revision prompt dismissed");
            return false;
        };
        let block = self.style.revision(&self.date, comment.trim());
        let point = host.text_point(self.line);
        focus(host, point);
        host.insert_at_line(self.line, &block);
        tracing::info!(category = %self.style.category, line = self.line, "revision inserted");
        host.status_message(&format!("{} revision added", self.style.category));
        true
    }
}

/// Inserts or revises the metadata header of a host document.
#[derive(Debug, Clone)]
pub struct HeaderGenerator {
    config: Config,
}

impl HeaderGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run one invocation against `host`.
    pub fn run<H: Host + ?Sized>(&self, host: &mut H) -> Outcome {
        let category = match category::resolve(host.file_name()) {
            Ok(category) => category,
            Err(err) => {
                tracing::debug!(error = %err, "no header category");
                host.status_message(&err.to_string());
                return Outcome::Skipped(err);
            }
        };

        let style = category.style();
        let filename = host
            .file_name()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let detection = style
            .detector
            .detect(&host.text(), &style.filename_line(&filename));
        tracing::debug!(%category, ?detection, "scanned for existing header");

        let Some(line) = detection.line() else {
            let header = style.first_time(&self.config, &filename);
            focus(host, 0);
            host.insert(0, &header);
            tracing::info!(%category, file = %filename, "header inserted");
            host.status_message(&format!("{} header generated", category));
            return Outcome::HeaderInserted(category);
        };

        if !self.config.allow_revision {
            return Outcome::AlreadyPresent(category);
        }

        Outcome::AwaitingComment(PendingRevision {
            style,
            line,
            date: self.config.date.clone(),
            request: PromptRequest {
                caption: REVISION_CAPTION.to_string(),
                initial: String::new(),
            },
        })
    }
}

/// Move the caret to `point` and scroll it into view.
fn focus<H: Host + ?Sized>(host: &mut H, point: usize) {
    host.set_selection(point);
    host.show(point);
}
