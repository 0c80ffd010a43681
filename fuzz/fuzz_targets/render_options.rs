#![no_main]

use libfuzzer_sys::fuzz_target;

use creole::{creole_to_html, Options, RenderError};

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput<'s> {
    s: &'s str,
    opts: Options,
}

fuzz_target!(|i: FuzzInput| {
    // Keep the stack bounded whatever limit the fuzzer picks.
    let opts = Options {
        max_nesting: i.opts.max_nesting % 4096,
    };
    match creole_to_html(i.s, &opts) {
        Ok(_) | Err(RenderError::NestingTooDeep { .. }) => (),
        Err(err) => panic!("writing to memory failed: {}", err),
    }
});
