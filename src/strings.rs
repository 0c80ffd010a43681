pub fn is_space_or_tab(ch: u8) -> bool {
    matches!(ch, 9 | 32)
}

pub fn isspace(ch: u8) -> bool {
    matches!(ch, 9..=13 | 32)
}

pub fn ltrim_slice(mut i: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = i {
        if isspace(*first) {
            i = rest;
        } else {
            break;
        }
    }
    i
}

pub fn rtrim_slice(mut i: &[u8]) -> &[u8] {
    while let [rest @ .., last] = i {
        if isspace(*last) {
            i = rest;
        } else {
            break;
        }
    }
    i
}

pub fn trim_slice(mut i: &[u8]) -> &[u8] {
    i = ltrim_slice(i);
    i = rtrim_slice(i);
    i
}

/// Strip the closing `=` run of a header line, along with any whitespace
/// around it.
pub fn chop_trailing_equals(mut i: &[u8]) -> &[u8] {
    while let [rest @ .., last] = i {
        if *last == b'=' || isspace(*last) {
            i = rest;
        } else {
            break;
        }
    }
    i
}
