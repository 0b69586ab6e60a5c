#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Strings starting with the URL prefix, including ones that are not URLs.
pub fn arb_http_reference() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,40}".prop_map(|rest| format!("http{rest}")),
        "[a-z0-9]{1,12}".prop_map(|host| format!("https://{host}.example/img.png")),
    ]
}

/// References that cannot be a URL, stdin, a registered id, or an existing
/// path: they live under a directory that does not exist.
pub fn arb_unresolvable_reference() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,16}".prop_map(|name| format!("/nonexistent-meme-dir/{name}.png"))
}

/// Safe single-segment file names.
pub fn arb_file_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}\\.(png|jpg|gif)"
}
