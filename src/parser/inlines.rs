//! Inline recognizers.  These run at every position, block start or not.

use std::io::Write;

use crate::parser::{Match, RenderResult, Renderer};
use crate::scanners;
use crate::strings::trim_slice;

/// Written in front of a markup token to make it literal.
const ESCAPE: u8 = b'~';

/// Checked in order; the first token found at the cursor wins.
static REPLACEMENTS: &[(&[u8], &[u8])] = &[
    (b"~//", b"//"),
    (b"~**", b"**"),
    (b"~[[", b"[["),
    (b"~]]", b"]]"),
    (b"~{{{", b"{{{"),
    (b"~}}}", b"}}}"),
    (b"~=", b"="),
    (b"~~", b"~"),
    (b"<", b"&lt;"),
    (b">", b"&gt;"),
    (b"\"", b"&quot;"),
    (b"&", b"&amp;"),
];

/// `//emphasis//`.  A closing `//` right after a colon doesn't count, so
/// that `//see http://example.com//` closes at the end and not inside the
/// URL.
pub fn emphasis(r: &mut Renderer<'_>, input: &[u8]) -> RenderResult<Option<Match>> {
    delimited(r, input, b"//", &[ESCAPE, b':'], "em")
}

/// `**strong**`.
pub fn bold(r: &mut Renderer<'_>, input: &[u8]) -> RenderResult<Option<Match>> {
    delimited(r, input, b"**", &[ESCAPE], "strong")
}

fn delimited(
    r: &mut Renderer<'_>,
    input: &[u8],
    delim: &[u8],
    escapes: &[u8],
    tag: &str,
) -> RenderResult<Option<Match>> {
    if !input.starts_with(delim) {
        return Ok(None);
    }

    let close = match scanners::find_unescaped(input, delim.len(), delim, escapes) {
        Some(close) => close,
        None => return Ok(None),
    };

    write!(r.output, "<{}>", tag)?;
    r.process(&input[delim.len()..close], false)?;
    write!(r.output, "</{}>", tag)?;

    Ok(Match::inline(close + delim.len()))
}

/// `[[address]]` or `[[address|label]]`.  The address is always literal;
/// only a label given after `|` is rendered as markup.
pub fn link(r: &mut Renderer<'_>, input: &[u8]) -> RenderResult<Option<Match>> {
    if !input.starts_with(b"[[") {
        return Ok(None);
    }

    let close = match scanners::find_unescaped(input, 2, b"]]", &[ESCAPE]) {
        Some(close) => close,
        None => return Ok(None),
    };
    let body = &input[2..close];

    r.write(b"<a href=\"")?;
    match body.iter().position(|&c| c == b'|') {
        Some(sep) => {
            r.escape(&body[..sep])?;
            r.write(b"\">")?;
            r.process(&body[sep + 1..], false)?;
        }
        None => {
            r.escape(body)?;
            r.write(b"\">")?;
            r.escape(body)?;
        }
    }
    r.write(b"</a>")?;

    Ok(Match::inline(close + 2))
}

/// A bare `scheme:rest` URL.  With a leading `~` the URL is written out as
/// plain text instead of a link.
pub fn raw_url(r: &mut Renderer<'_>, input: &[u8]) -> RenderResult<Option<Match>> {
    let start = if input.first() == Some(&ESCAPE) { 1 } else { 0 };

    let scheme = match scanners::scheme(&input[start..]) {
        Some(len) => start + len,
        None => return not_a_url(r, input, start),
    };

    let mut end = scheme + scanners::uri(&input[scheme..]);
    // A full stop after a URL almost always ends the sentence.
    if input[end - 1] == b'.' {
        end -= 1;
    }
    if end == scheme {
        return not_a_url(r, input, start);
    }

    let url = &input[start..end];
    if start == 0 {
        r.write(b"<a href=\"")?;
        r.escape(url)?;
        r.write(b"\">")?;
        r.escape(url)?;
        r.write(b"</a>")?;
    } else {
        r.escape(url)?;
    }

    Ok(Match::inline(end))
}

/// Starting anywhere later in the same scheme run would reach the same colon,
/// or the same lack of one, and be turned down the same way.  Nothing else
/// can match inside the run either, so it goes out as text in one step
/// rather than being rescanned from each of its bytes.
fn not_a_url(r: &mut Renderer<'_>, input: &[u8], start: usize) -> RenderResult<Option<Match>> {
    if start > 0 {
        return Ok(None);
    }

    let run = scanners::scheme_run(input);
    if run == 0 {
        return Ok(None);
    }

    r.write(&input[..run])?;
    Ok(Match::inline(run))
}

/// `{{{verbatim}}}`.  Braces directly after the closing `}}}` belong to
/// the content, so `{{{a}}}}` is `a}`.
pub fn nowiki_inline(r: &mut Renderer<'_>, input: &[u8]) -> RenderResult<Option<Match>> {
    if !input.starts_with(b"{{{") {
        return Ok(None);
    }

    let mut close = match scanners::find(&input[3..], b"}}}") {
        Some(offset) => 3 + offset,
        None => return Ok(None),
    };
    while input.get(close + 3) == Some(&b'}') {
        close += 1;
    }

    r.write(b"<tt>")?;
    r.escape(trim_slice(&input[3..close]))?;
    r.write(b"</tt>")?;

    Ok(Match::inline(close + 3))
}

/// Escaped markup tokens and the characters HTML reserves.
pub fn replacement(r: &mut Renderer<'_>, input: &[u8]) -> RenderResult<Option<Match>> {
    for &(token, replacement) in REPLACEMENTS {
        if input.starts_with(token) {
            r.write(replacement)?;
            return Ok(Match::inline(token.len()));
        }
    }
    Ok(None)
}
