//! Interactive onboarding wizard (kickpulse onboard).

use std::io::{self, Write};

use anyhow::{Context, Result};

use kickpulse::config::{ActiveWait, LoggingConfig, WaitTimes};
use kickpulse::Config;

use super::common::{normalize_channel, prompt_u64, read_line, read_secret};

/// Default message pool offered when the user doesn't want to type one.
const DEFAULT_MESSAGES: &[&str] = &[
    "[emote:1730752:emojiAngel]",
    "[emote:1579033:emojiAstonished]",
    "[emote:1730756:emojiCheerful]",
    "[emote:1730759:emojiCool]",
    "[emote:1730772:emojiFire]",
    "[emote:1579047:emojiHeartEyes]",
    "[emote:1579050:emojiLaughing]",
    "[emote:1730794:emojiLol]",
    "[emote:1579057:emojiSmiling]",
    "[emote:1579058:emojiStarEyes]",
    "[emote:1730831:emojiWink]",
    "[emote:1730834:emojiYay]",
];

/// Collect configuration interactively and save it to the default path.
pub(crate) async fn cmd_onboard() -> Result<()> {
    println!("kickpulse — interactive setup");
    println!("{}", "=".repeat(60));
    println!("This wizard creates the config file the monitor runs from.");
    println!();

    let channels = collect_channels()?;
    let authorization = collect_token()?;
    let messages = collect_messages()?;
    let wait_times = collect_wait_times()?;

    let config = Config {
        channels,
        authorization,
        messages,
        wait_times,
        logging: LoggingConfig::default(),
    };
    config
        .validate()
        .context("Collected configuration failed validation")?;

    let path = Config::path();
    config
        .save_to_path(&path)
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    println!();
    println!("Configuration saved: {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Run 'kickpulse' to start monitoring");
    println!("  2. Run 'kickpulse config check' any time you edit the file");
    Ok(())
}

fn collect_channels() -> Result<Vec<String>> {
    println!("CHANNELS");
    println!("{}", "-".repeat(40));
    println!("Enter the Kick.com channels to monitor, one per line.");
    println!("Full URLs are fine; they are reduced to the channel slug.");
    println!();

    let mut channels = Vec::new();
    loop {
        print!("Channel (blank to finish): ");
        io::stdout().flush()?;
        let input = read_line()?;

        if input.is_empty() {
            if channels.is_empty() {
                println!("At least one channel is required.");
                continue;
            }
            break;
        }

        let channel = normalize_channel(&input);
        if channel.is_empty() {
            println!("That didn't look like a channel name.");
            continue;
        }
        println!("Added: {}", channel);
        channels.push(channel);
    }
    Ok(channels)
}

fn collect_token() -> Result<String> {
    println!();
    println!("AUTHORIZATION TOKEN");
    println!("{}", "-".repeat(40));
    println!("The token authorizes chat sends. To find it:");
    println!("  1. Open any stream on Kick.com and send a chat message");
    println!("  2. In devtools (F12) > Network, find the request to");
    println!("     kick.com/api/v2/messages/send/...");
    println!("  3. Copy the 'Authorization' header value ('Bearer ...')");
    println!();

    loop {
        print!("Paste token (input hidden): ");
        io::stdout().flush()?;
        let input = read_secret()?;
        let token = input.trim().to_string();

        if token.is_empty() {
            println!("A token is required.");
            continue;
        }
        if token.len() < 20 {
            println!("That token looks too short; make sure you copied all of it.");
            continue;
        }

        // Accept a bare token and add the scheme ourselves.
        let authorization = if token.starts_with("Bearer ") {
            token
        } else {
            format!("Bearer {}", token)
        };
        println!("Token accepted.");
        return Ok(authorization);
    }
}

fn collect_messages() -> Result<Vec<String>> {
    println!();
    println!("MESSAGES");
    println!("{}", "-".repeat(40));
    println!("Messages are chosen at random per send. Plain text or emote");
    println!("tokens like [emote:1730772:emojiFire] both work.");
    println!("Leave the first prompt blank to use the default emote set.");
    println!();

    let mut messages = Vec::new();
    loop {
        print!("Message (blank to finish): ");
        io::stdout().flush()?;
        let input = read_line()?;

        if input.is_empty() {
            if messages.is_empty() {
                messages = DEFAULT_MESSAGES.iter().map(|s| s.to_string()).collect();
                println!("Using the default set ({} emotes).", messages.len());
            }
            break;
        }
        messages.push(input);
    }
    Ok(messages)
}

fn collect_wait_times() -> Result<WaitTimes> {
    println!();
    println!("WAIT TIMES");
    println!("{}", "-".repeat(40));
    println!("Longer waits are gentler on the chat; all values in seconds.");
    println!();

    let (min, max) = loop {
        let min = prompt_u64("Minimum wait after a sent message", 60)?;
        let max = prompt_u64("Maximum wait after a sent message", 120)?;
        if min < max {
            break (min, max);
        }
        println!("Maximum must be greater than minimum.");
    };

    let inactive = prompt_u64("Wait when the stream is offline", 300)?;
    let error = prompt_u64("Wait after an error", 30)?;

    Ok(WaitTimes {
        livestream_active: ActiveWait { min, max },
        livestream_inactive: inactive,
        error_wait: error,
    })
}
