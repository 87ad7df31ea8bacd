//! Shared CLI helpers used across multiple command handlers.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use kickpulse::Config;

/// Read a line from stdin, trimming whitespace.
pub(crate) fn read_line() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .with_context(|| "Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Read a token/secret from the terminal with echo disabled.
pub(crate) fn read_secret() -> Result<String> {
    rpassword::read_password().with_context(|| "Failed to read secret input")
}

/// Prompt for an integer with a default shown in brackets.
pub(crate) fn prompt_u64(prompt: &str, default: u64) -> Result<u64> {
    loop {
        print!("{} [{}]: ", prompt, default);
        io::stdout().flush()?;
        let input = read_line()?;
        if input.is_empty() {
            return Ok(default);
        }
        match input.parse::<u64>() {
            Ok(n) if n > 0 => return Ok(n),
            Ok(_) => println!("Value must be greater than 0."),
            Err(_) => println!("Enter a whole number of seconds."),
        }
    }
}

/// Resolve the config path: explicit flag or the default location.
pub(crate) fn resolve_config_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(Config::path)
}

/// Normalize user channel input: accept full kick.com URLs or bare slugs.
pub(crate) fn normalize_channel(input: &str) -> String {
    input
        .trim()
        .trim_start_matches("https://kick.com/")
        .trim_start_matches("http://kick.com/")
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_channel_bare_slug() {
        assert_eq!(normalize_channel("somechannel"), "somechannel");
        assert_eq!(normalize_channel("  somechannel  "), "somechannel");
    }

    #[test]
    fn test_normalize_channel_strips_url() {
        assert_eq!(
            normalize_channel("https://kick.com/somechannel"),
            "somechannel"
        );
        assert_eq!(
            normalize_channel("http://kick.com/somechannel/"),
            "somechannel"
        );
    }

    #[test]
    fn test_resolve_config_path_prefers_flag() {
        let explicit = PathBuf::from("/tmp/custom.json");
        assert_eq!(resolve_config_path(Some(explicit.clone())), explicit);
        assert_eq!(resolve_config_path(None), Config::path());
    }
}
