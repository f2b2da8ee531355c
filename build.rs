use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Load build-time settings (AUTH_BASE_URL, API_BASE_URL, ...) from .env if present
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Variables already exported in the environment win
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default endpoints (see .env.example).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in ["AUTH_BASE_URL", "API_BASE_URL", "ENVIRONMENT", "ENABLE_LOGGING", "TOAST_TIMEOUT_MS"] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
