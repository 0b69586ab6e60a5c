//! Fuzz target for image reference classification.
//!
//! This fuzzer feeds arbitrary UTF-8 strings to the classifier, checking for
//! panics, crashes, or hangs. Home expansion points at a directory that does
//! not exist so only the pure rules and existence probes run.

#![no_main]

use libfuzzer_sys::fuzz_target;
use meme::catalog::EmbeddedCatalog;
use meme::registry::AssetRegistry;
use meme::source::{classify, HomeDir};

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let Ok(reference) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(registry) = AssetRegistry::build(&EmbeddedCatalog::bundled()) else {
        return;
    };
    let _ = classify(reference, &registry, &HomeDir::fixed("/nonexistent-fuzz-home"));
});
