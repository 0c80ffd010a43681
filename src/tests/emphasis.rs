use super::*;

#[test]
fn emphasis() {
    html("//Emphasis//", "<p><em>Emphasis</em></p>");
}

#[test]
fn emphasis_spans_lines() {
    html(
        "Bold and italics should //be\nable// to cross lines.",
        "<p>Bold and italics should <em>be\nable</em> to cross lines.</p>",
    );
}

#[test]
fn bold() {
    html("**Strong**", "<p><strong>Strong</strong></p>");
    html("**a\nb**", "<p><strong>a\nb</strong></p>");
}

#[test]
fn nested_bold_in_emphasis() {
    html(
        "//**Strong and emphasized**//",
        "<p><em><strong>Strong and emphasized</strong></em></p>",
    );
    html(
        "**//Emphasized and strong//**",
        "<p><strong><em>Emphasized and strong</em></strong></p>",
    );
}

#[test]
fn crossed_delimiters_do_not_nest() {
    html(
        "//**Strong and emphasized//**",
        "<p><em>**Strong and emphasized</em>**</p>",
    );
}

#[test]
fn unclosed_delimiters_are_literal() {
    html("//never closed", "<p>//never closed</p>");
    html("**never closed", "<p>**never closed</p>");
}

#[test]
fn url_emphasis_ambiguity() {
    html(
        concat!(
            "This is an //italic// text. This is a url  ",
            "http://www.wikicreole.org. This is what can go wrong //this ",
            "should be an italic text//."
        ),
        concat!(
            "<p>This is an <em>italic</em> text. This is a url  ",
            "<a href=\"http://www.wikicreole.org\">",
            "http://www.wikicreole.org</a>. This is what can go wrong ",
            "<em>this should be an italic text</em>.</p>"
        ),
    );
}

#[test]
fn url_inside_emphasis() {
    html(
        "//Visit http://example.com today//",
        concat!(
            "<p><em>Visit <a href=\"http://example.com\">http://example.com</a>",
            " today</em></p>"
        ),
    );
}

#[test]
fn url_inside_bold() {
    html(
        "**http://example.com**",
        "<p><strong><a href=\"http://example.com\">http://example.com</a></strong></p>",
    );
}

#[test]
fn escaped_closer_is_skipped() {
    html("//a ~// b//", "<p><em>a // b</em></p>");
    html("**a ~** b**", "<p><strong>a ** b</strong></p>");
}

#[test]
fn escaped_openers() {
    html("~//not emphasis~//", "<p>//not emphasis//</p>");
    html("~**not bold~**", "<p>**not bold**</p>");
}
