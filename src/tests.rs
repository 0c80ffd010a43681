use crate::{creole_to_html, render, Options};
use pretty_assertions::assert_eq;

mod emphasis;
mod pathological;

#[track_caller]
fn html(input: &str, expected: &str) {
    html_opts_i(input, expected, &Options::default());
}

macro_rules! html_opts {
    ([$($optname:ident = $val:expr),*], $input:expr, $expected:expr $(,)?) => {
        crate::tests::html_opts_i(
            $input,
            $expected,
            &crate::Options {
                $($optname: $val,)*
                ..Default::default()
            },
        )
    };
}

pub(crate) use html_opts;

/// Renders both through the streaming API and the `String` convenience, and
/// checks they agree.
#[track_caller]
fn html_opts_i(input: &str, expected: &str, options: &Options) {
    let mut streamed = vec![];
    render(&mut streamed, input.as_bytes(), options).unwrap();
    let streamed = String::from_utf8(streamed).unwrap();

    let rendered = creole_to_html(input, options).unwrap();
    if rendered != expected {
        println!("Input:");
        println!("==============================");
        println!("{:?}", input);
        println!("==============================");
        println!();
    }
    assert_eq!(rendered, expected);
    assert_eq!(streamed, rendered);
}
