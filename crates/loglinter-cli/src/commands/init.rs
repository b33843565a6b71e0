//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "loglinter.toml";

const DEFAULT_CONFIG: &str = r#"# loglinter configuration

# Fail the run on violations at or above this severity (info, warning, error)
# fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/vendor/**",
]

# Respect .gitignore files
respect_gitignore = true

# Maximum number of files analyzed in parallel
# parallelism = 4

[rules.loglinter]
enabled = true
# severity = "warning"  # Override default severity

# Every list below replaces the built-in table when set.
# methods = ["Debug", "Info", "Warn", "Error", "info", "warn", "error"]
# excluded_receivers = ["fmt", "errors"]
# forbidden_chars = "!?…"
# sensitive_keywords = ["password", "secret", "token", "apikey"]
# sensitive_patterns = ['(?i)\bbearer\s+[a-z0-9_\-\.]{16,}']

# Checks: first-letter-case, latin-script, forbidden-characters, sensitive-data
# disabled_checks = ["latin-script"]
"#;

/// Runs the init command, writing the config into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure the checks");
    println!("  2. Run: loglinter check");

    Ok(())
}
