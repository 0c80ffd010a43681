//! Block-level recognizers.  These only run at the start of a block.

use std::io::Write;

use crate::parser::{Match, RenderResult, Renderer};
use crate::scanners;
use crate::strings::{chop_trailing_equals, is_space_or_tab};

const MAX_HEADER_LEVEL: usize = 6;

/// `= Header =` through `====== Header ======`.  The closing run of `=` is
/// optional and needn't match the opening one.
pub fn header(r: &mut Renderer<'_>, input: &[u8]) -> RenderResult<Option<Match>> {
    let level = input.iter().take_while(|&&c| c == b'=').count();
    if level == 0 || level > MAX_HEADER_LEVEL {
        return Ok(None);
    }

    let start = level
        + input[level..]
            .iter()
            .take_while(|&&c| is_space_or_tab(c))
            .count();
    let eol = start + scanners::end_of_line(&input[start..]);
    let text = chop_trailing_equals(&input[start..eol]);

    write!(r.output, "<h{}>", level)?;
    r.process(text, false)?;
    write!(r.output, "</h{}>", level)?;

    let consumed = if eol < input.len() { eol + 1 } else { eol };
    Ok(Match::block(consumed))
}

/// A `{{{` line, verbatim content, and a `}}}` line.
pub fn nowiki_block(r: &mut Renderer<'_>, input: &[u8]) -> RenderResult<Option<Match>> {
    if !input.starts_with(b"{{{\n") {
        return Ok(None);
    }

    // The opening line's newline can double as the closing one's, so that
    // an empty block is just "{{{\n}}}".
    let close = match scanners::find(&input[3..], b"\n}}}") {
        Some(offset) => 3 + offset,
        None => return Ok(None),
    };
    let content = input.get(4..close).unwrap_or_default();

    r.write(b"<pre><code>")?;
    r.escape(content)?;
    r.write(b"</code></pre>")?;

    Ok(Match::block(close + 4))
}

/// Everything up to the next blank line.  This always matches, so it must
/// stay last among the block recognizers.
pub fn paragraph(r: &mut Renderer<'_>, input: &[u8]) -> RenderResult<Option<Match>> {
    let end = match scanners::find(&input[1..], b"\n\n") {
        Some(offset) => 1 + offset,
        None => input.len(),
    };

    r.write(b"<p>")?;
    r.process(&input[..end], false)?;
    r.write(b"</p>")?;

    Ok(Match::block(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn attempt(
        f: fn(&mut Renderer<'_>, &[u8]) -> RenderResult<Option<Match>>,
        input: &str,
    ) -> (Option<Match>, String) {
        let options = Options::default();
        let mut out = vec![];
        let m = f(&mut Renderer::new(&mut out, &options), input.as_bytes()).unwrap();
        (m, String::from_utf8(out).unwrap())
    }

    #[test]
    fn header_consumes_its_newline() {
        let (m, html) = attempt(header, "== Title ==\nrest");
        assert_eq!(m.map(|m| (m.consumed, m.new_block)), Some((12, true)));
        assert_eq!(html, "<h2>Title</h2>");
    }

    #[test]
    fn header_declines() {
        assert_eq!(attempt(header, "plain"), (None, String::new()));
        assert_eq!(attempt(header, "======= seven"), (None, String::new()));
    }

    #[test]
    fn nowiki_block_extent() {
        let (m, html) = attempt(nowiki_block, "{{{\na\n}}}\nafter");
        assert_eq!(m.map(|m| m.consumed), Some(9));
        assert_eq!(html, "<pre><code>a</code></pre>");
    }

    #[test]
    fn nowiki_block_declines() {
        assert_eq!(attempt(nowiki_block, "{{{\nnever closed"), (None, String::new()));
        assert_eq!(attempt(nowiki_block, "{{{inline}}}"), (None, String::new()));
    }

    #[test]
    fn paragraph_stops_before_blank_line() {
        let (m, html) = attempt(paragraph, "one\ntwo\n\nthree");
        assert_eq!(m.map(|m| m.consumed), Some(7));
        assert_eq!(html, "<p>one\ntwo</p>");
    }

    #[test]
    fn paragraph_always_progresses() {
        let (m, html) = attempt(paragraph, "x");
        assert_eq!(m.map(|m| m.consumed), Some(1));
        assert_eq!(html, "<p>x</p>");
    }
}
