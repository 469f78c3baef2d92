//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! Arcana configuration with the source of each value (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "reversal_probability": {
//!     "value": 0.5,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the configuration with source tracking and writes it as pretty JSON.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "reversal_probability": {
            "value": config.reversal_probability,
            "source": sources.reversal_probability,
        },
        "shuffle": {
            "value": config.shuffle,
            "source": sources.shuffle,
        },
        "selection": {
            "value": config.selection,
            "source": sources.selection,
        },
        "data_dir": {
            "value": config.data_dir,
            "source": sources.data_dir,
        }
    });
    let json_str = serde_json::to_string_pretty(&display)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");

        for key in [
            "seed",
            "reversal_probability",
            "shuffle",
            "selection",
            "data_dir",
        ] {
            assert!(json.get(key).is_some(), "should contain {}", key);
            assert!(json[key].get("source").is_some());
        }
        assert!(err.is_empty(), "should not write to stderr on success");
    }

    #[test]
    #[serial]
    fn test_cfg_reports_invalid_env() {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var("ARCANA_SHUFFLE", "riffle") };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe { std::env::remove_var("ARCANA_SHUFFLE") };

        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(String::from_utf8(err).unwrap().contains("riffle"));
    }
}
