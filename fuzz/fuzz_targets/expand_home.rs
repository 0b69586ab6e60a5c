//! Fuzz target for `~` expansion.

#![no_main]

use libfuzzer_sys::fuzz_target;
use meme::source::HomeDir;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let _ = HomeDir::fixed("/home/fuzz").expand(raw);
});
