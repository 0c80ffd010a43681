//! A [Wiki Creole](http://www.wikicreole.org/wiki/Home) to HTML renderer.
//!
//! Rendering is a single pass over the input: at every position an ordered
//! table of recognizers is tried, and the first one that matches writes its
//! HTML straight to the output.  Constructs that wrap other markup (headers,
//! paragraphs, emphasis, bold and link labels) render their content by
//! re-entering the same loop on a narrower slice.  There is no AST.
//!
//! ```
//! use creole::{creole_to_html, Options};
//!
//! assert_eq!(
//!     creole_to_html("Hello, //world//!", &Options::default()).unwrap(),
//!     "<p>Hello, <em>world</em>!</p>"
//! );
//! ```
//!
//! Malformed markup is never an error: an unterminated construct simply
//! renders as literal text.  The only failures are a failing output sink and
//! nesting deeper than [`Options::max_nesting`].

#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub mod html;
mod parser;
mod scanners;
mod strings;
#[cfg(test)]
mod tests;

use std::io::Write;

pub use error::RenderError;
pub use html::escape;
pub use parser::options::{Options, DEFAULT_MAX_NESTING};

/// Render Creole markup to HTML, writing into `output`.
///
/// Output is streamed as it is produced.  The first write that fails aborts
/// rendering and is returned as [`RenderError::Io`]; whatever was written
/// before that point stays written.
///
/// ```
/// # use creole::{render, Options};
/// let mut html = vec![];
/// render(&mut html, b"= Title =\n\nBody.", &Options::default()).unwrap();
/// assert_eq!(html, b"<h1>Title</h1><p>Body.</p>");
/// ```
pub fn render(output: &mut dyn Write, source: &[u8], options: &Options) -> Result<(), RenderError> {
    tracing::debug!(
        bytes = source.len(),
        max_nesting = options.max_nesting,
        "rendering creole"
    );
    parser::Renderer::new(output, options).process(source, true)
}

/// Render Creole markup to a `String` of HTML.
///
/// Writing into memory can't fail, so the only possible error is
/// [`RenderError::NestingTooDeep`].
///
/// Recognizers only ever split the input at ASCII bytes, so the HTML for a
/// `&str` is itself valid UTF-8.  The conversion back to `String` still
/// goes through [`String::from_utf8_lossy`] if that ever stops holding,
/// instead of panicking.
pub fn creole_to_html(source: &str, options: &Options) -> Result<String, RenderError> {
    let mut output = Vec::with_capacity(source.len() + source.len() / 4);
    render(&mut output, source.as_bytes(), options)?;
    Ok(match String::from_utf8(output) {
        Ok(html) => html,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
