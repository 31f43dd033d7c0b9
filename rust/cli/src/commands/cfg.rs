//! Configuration display command.
//!
//! Prints the resolved configuration along with where each value came from
//! (default, file, or environment).

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command: display current settings and their provenance.
pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  ascii_cards = {} ({})",
        cfg.ascii_cards,
        sources.ascii_cards.as_str()
    )?;
    writeln!(
        out,
        "  default_seed = {} ({})",
        cfg.default_seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string()),
        sources.default_seed.as_str()
    )?;
    writeln!(
        out,
        "  sim_output = {} ({})",
        cfg.sim_output.as_deref().unwrap_or("none"),
        sources.sim_output.as_str()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_lists_every_setting_with_provenance() {
        unsafe {
            std::env::remove_var("HILO_CONFIG");
            std::env::remove_var("HILO_ASCII_CARDS");
        }

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Configuration:"));
        assert!(output.contains("ascii_cards = false (default)"));
        assert!(output.contains("default_seed = none (default)"));
        assert!(output.contains("sim_output = none (default)"));
    }

    #[test]
    #[serial]
    fn test_cfg_reflects_env_override() {
        unsafe {
            std::env::remove_var("HILO_CONFIG");
            std::env::set_var("HILO_ASCII_CARDS", "1");
        }

        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_cfg_command(&mut out, &mut err).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("ascii_cards = true (env)"));

        unsafe {
            std::env::remove_var("HILO_ASCII_CARDS");
        }
    }
}
