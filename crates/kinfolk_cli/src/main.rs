//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `kinfolk_core` linkage.
//! - Load the configured dataset and print its size and integrity findings.
//!
//! Reads `KINFOLK_DATA_DIR`, `KINFOLK_LOG_DIR` and `KINFOLK_LOG_LEVEL`.

use kinfolk_core::{check_dataset, default_log_level, init_logging, shared_dataset};
use log::warn;

const LOG_DIR_ENV: &str = "KINFOLK_LOG_DIR";
const LOG_LEVEL_ENV: &str = "KINFOLK_LOG_LEVEL";

fn main() {
    if let Some(log_dir) = env_value(LOG_DIR_ENV) {
        let level = env_value(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("kinfolk logging disabled: {err}");
        }
    }

    println!("kinfolk_core ping={}", kinfolk_core::ping());
    println!("kinfolk_core version={}", kinfolk_core::core_version());

    let dataset = shared_dataset();
    println!(
        "dataset people={} places={} stories={}",
        dataset.people.len(),
        dataset.places.len(),
        dataset.stories.len()
    );

    let report = check_dataset(dataset);
    if report.is_clean() {
        println!("integrity ok");
        return;
    }
    println!("integrity issues={}", report.issues.len());
    for issue in &report.issues {
        println!("- {issue}");
    }
    warn!(
        "event=cli_check module=cli status=warn issues={}",
        report.issues.len()
    );
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
