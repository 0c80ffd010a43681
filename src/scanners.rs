//! Byte-level scanning shared by the recognizers.

const fn byte_set(groups: &[&[u8]]) -> [bool; 256] {
    let mut set = [false; 256];
    let mut g = 0;
    while g < groups.len() {
        let group = groups[g];
        let mut i = 0;
        while i < group.len() {
            set[group[i] as usize] = true;
            i += 1;
        }
        g += 1;
    }
    set
}

const ALPHA: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT: &[u8] = b"0123456789";

static SCHEME_CHARS: [bool; 256] = byte_set(&[ALPHA, DIGIT, b"+-."]);

// RFC 3986 unreserved, reserved and percent-encoding characters.
static URI_CHARS: [bool; 256] = byte_set(&[ALPHA, DIGIT, b"-._~", b":/?#[]@", b"!$&'()*+,;=", b"%"]);

/// Length of a URI scheme and its colon at the start of `input`, e.g. 7 for
/// `mailto:`.
pub fn scheme(input: &[u8]) -> Option<usize> {
    let len = scheme_run(input);
    if len > 0 && input.get(len) == Some(&b':') {
        Some(len + 1)
    } else {
        None
    }
}

/// Length of the run that could be a scheme at the start of `input`: a
/// letter, then any letters, digits, `+`, `-` and `.`.
pub fn scheme_run(input: &[u8]) -> usize {
    match input.first() {
        Some(c) if c.is_ascii_alphabetic() => {
            1 + input[1..]
                .iter()
                .take_while(|&&c| SCHEME_CHARS[c as usize])
                .count()
        }
        _ => 0,
    }
}

/// Length of the run of characters legal in a URI at the start of `input`.
pub fn uri(input: &[u8]) -> usize {
    input.iter().take_while(|&&c| URI_CHARS[c as usize]).count()
}

/// Offset of the first `needle` in `haystack`.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    jetscii::ByteSubstring::new(needle).find(haystack)
}

/// Offset of the first `\n` in `input`, or its length if there is none.
pub fn end_of_line(input: &[u8]) -> usize {
    jetscii::bytes!(b'\n').find(input).unwrap_or(input.len())
}

/// Offset of the first `delim` in `input` at or after `from` which isn't
/// immediately preceded by one of the `escapes` bytes.
pub fn find_unescaped(input: &[u8], from: usize, delim: &[u8], escapes: &[u8]) -> Option<usize> {
    let mut at = from;
    while at < input.len() {
        let ix = at + find(&input[at..], delim)?;
        if ix == 0 || !escapes.contains(&input[ix - 1]) {
            return Some(ix);
        }
        at = ix + 1;
    }
    None
}
