use super::*;
use ntest::timeout;

#[test]
#[timeout(4000)]
fn pathological_unclosed_links() {
    let n = 2_000;
    let input = "[[a ".repeat(n);
    let exp = format!("<p>{}</p>", input);

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_unclosed_nowiki() {
    let n = 2_000;
    let input = "{{{x ".repeat(n);
    let exp = format!("<p>{}</p>", input);

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_url_colons() {
    // Every closing candidate follows a colon, so the emphasis never closes.
    let n = 5_000;
    let input = format!("//{}", "a://".repeat(n));

    // Not interested in the actual html, just that we don't time out.
    creole_to_html(&input, &Options::default()).unwrap();
}

#[test]
#[timeout(4000)]
fn pathological_alternating_delimiters() {
    let n = 20_000;
    let input = "//**".repeat(n);

    creole_to_html(&input, &Options::default()).unwrap();
}

#[test]
#[timeout(4000)]
fn pathological_long_header() {
    let n = 100_000;
    let input = format!("= {} =", "word ".repeat(n));
    let exp = format!("<h1>{}</h1>", "word ".repeat(n).trim_end());

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_many_paragraphs() {
    let n = 50_000;
    let input = "p\n\n".repeat(n);
    let exp = "<p>p</p>".repeat(n);

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_long_word() {
    let n = 200_000;
    let input = "a".repeat(n);
    let exp = format!("<p>{}</p>", input);

    html(&input, &exp);
}
