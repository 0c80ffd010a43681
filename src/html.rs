//! HTML escaping.

use std::io::{self, Write};

/// The entity written in place of a byte that can't appear literally in
/// HTML text or attribute values.
fn entity(c: u8) -> Option<&'static [u8]> {
    match c {
        b'"' => Some(b"&quot;"),
        b'&' => Some(b"&amp;"),
        b'<' => Some(b"&lt;"),
        b'>' => Some(b"&gt;"),
        _ => None,
    }
}

/// Write `buffer` to `output`, replacing `&`, `<`, `>` and `"` with their
/// entities.  Everything else is copied through byte for byte.
///
/// The result is safe both as element content and inside a double-quoted
/// attribute value.
///
/// ```
/// let mut out = vec![];
/// creole::escape(&mut out, b"<a href=\"x\">Tom & Jerry</a>").unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
/// );
/// ```
pub fn escape(output: &mut dyn Write, buffer: &[u8]) -> io::Result<()> {
    let matcher = jetscii::bytes!(b'"', b'&', b'<', b'>');

    let mut offset = 0;
    while let Some(i) = matcher.find(&buffer[offset..]) {
        let i = offset + i;
        output.write_all(&buffer[offset..i])?;
        if let Some(replacement) = entity(buffer[i]) {
            output.write_all(replacement)?;
        }
        offset = i + 1;
    }

    output.write_all(&buffer[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(input: &str) -> String {
        let mut out = vec![];
        escape(&mut out, input.as_bytes()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escaped("hello, world"), "hello, world");
        assert_eq!(escaped(""), "");
        assert_eq!(escaped("ünïcödé ☃"), "ünïcödé ☃");
    }

    #[test]
    fn specials_are_replaced() {
        assert_eq!(escaped("&"), "&amp;");
        assert_eq!(escaped("a<b>c\"d&e"), "a&lt;b&gt;c&quot;d&amp;e");
        assert_eq!(escaped("&&"), "&amp;&amp;");
        assert_eq!(escaped("'"), "'");
    }
}
