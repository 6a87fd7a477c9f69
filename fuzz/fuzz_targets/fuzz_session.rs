#![no_main]

use libfuzzer_sys::fuzz_target;

use mathutil_lib::app::run_session;
use mathutil_lib::config::AppConfig;

/// Larger term counts are legitimate but too slow for fuzzing.
const MAX_TERMS: i64 = 10_000;

fuzz_target!(|data: &[u8]| {
    if data.len() > 256 {
        return;
    }
    let text = String::from_utf8_lossy(data);
    let first = text
        .split_whitespace()
        .next()
        .and_then(|t| t.parse::<i64>().ok());
    if first.is_some_and(|terms| terms > MAX_TERMS) {
        return;
    }
    let config = AppConfig {
        quiet: true,
        ..AppConfig::default()
    };
    // Any input either succeeds or fails with an error; it must never panic.
    let _ = run_session(&config, data, std::io::sink(), std::io::sink());
});
