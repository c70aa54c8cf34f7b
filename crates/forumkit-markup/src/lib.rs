//! BBCode rendering and small HTML snippet builders.
//!
//! The main entry point is [`bbcode_to_html`], which converts the classic
//! forum bracket-tag notation (`[b]bold[/b]`, `[url]...[/url]`, ...) into
//! HTML through a fixed, ordered substitution table.
//!
//! # Security
//!
//! None of the functions in this crate escape or sanitize their input.
//! Captured tag content is inserted into the generated HTML verbatim, for
//! compatibility with the historical converter behavior. Callers embedding
//! the output into a document must escape or sanitize untrusted input
//! themselves.

mod bbcode;
mod snippets;

pub use bbcode::bbcode_to_html;
pub use snippets::{docs_viewer_iframe, meta_refresh};
