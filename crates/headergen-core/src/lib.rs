//! headergen core — insert language-appropriate metadata headers into source documents.
//!
//! The pieces, in the order an invocation uses them:
//!
//! - [`config`] — load author/email/date settings from a key-value store
//! - [`category`] — map a file name to a [`Category`] by extension
//! - [`detect`] — scan existing text for a previously inserted header
//! - [`style`] — render first-time headers and revision blocks per category
//! - [`generator`] — orchestrate the above against a [`Host`] document
//!
//! The host editor is reached only through the [`Host`] trait. [`Buffer`] is an
//! in-memory implementation used by the command-line front end and the tests.

pub mod buffer;
pub mod category;
pub mod config;
pub mod detect;
pub mod error;
pub mod generator;
pub mod host;
pub mod style;

pub use buffer::Buffer;
pub use category::{resolve, Category};
pub use config::{Config, JsonSettings, Settings};
pub use detect::Detection;
pub use error::{ConfigError, ResolveError};
pub use generator::{HeaderGenerator, Outcome, PendingRevision};
pub use host::{Host, PromptRequest};
pub use style::HeaderStyle;
