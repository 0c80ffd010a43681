#![no_main]

use libfuzzer_sys::fuzz_target;

use creole::{render, Options};

fuzz_target!(|data: &[u8]| {
    let mut output = vec![];
    // Nesting can still exceed the default limit; anything else is a bug.
    let _ = render(&mut output, data, &Options::default());
});
