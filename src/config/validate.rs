//! Diagnostic-style configuration checking for `kickpulse config check`.
//!
//! Unlike [`Config::validate`](super::Config::validate), which stops at the
//! first violation, this walks the raw JSON and reports everything it finds,
//! including unknown field names with "did you mean?" suggestions.

use serde_json::Value;
use std::collections::HashSet;

use super::Config;

/// Known top-level config field names.
const KNOWN_TOP_LEVEL: &[&str] = &[
    "channels",
    "authorization",
    "messages",
    "wait_times",
    "logging",
];

/// Known fields inside `wait_times`.
const KNOWN_WAIT_TIMES: &[&str] = &["livestream_active", "livestream_inactive", "error_wait"];

/// A validation diagnostic.
#[derive(Debug)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub path: String,
    pub message: String,
}

#[derive(Debug, PartialEq)]
pub enum DiagnosticLevel {
    Ok,
    Warn,
    Error,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.level {
            DiagnosticLevel::Ok => "[OK]",
            DiagnosticLevel::Warn => "[WARN]",
            DiagnosticLevel::Error => "[ERROR]",
        };
        if self.path.is_empty() {
            write!(f, "{} {}", prefix, self.message)
        } else {
            write!(f, "{} {}: {}", prefix, self.path, self.message)
        }
    }
}

/// Edit distance between two field names (two-row Levenshtein).
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut current = vec![i + 1];
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            current.push(
                (prev[j] + cost)
                    .min(prev[j + 1] + 1)
                    .min(current[j] + 1),
            );
        }
        prev = current;
    }
    prev[b_chars.len()]
}

/// Suggest the closest known field name (if distance <= 3).
fn suggest_field(unknown: &str, known: &[&str]) -> Option<String> {
    known
        .iter()
        .map(|k| (k, edit_distance(unknown, k)))
        .filter(|(_, d)| *d <= 3)
        .min_by_key(|(_, d)| *d)
        .map(|(k, _)| format!("did you mean '{}'?", k))
}

fn unknown_field(path: &str, key: &str, known: &[&str]) -> Diagnostic {
    let message = match suggest_field(key, known) {
        Some(suggestion) => format!("Unknown field '{}' — {}", key, suggestion),
        None => format!("Unknown field '{}'", key),
    };
    Diagnostic {
        level: DiagnosticLevel::Error,
        path: path.to_string(),
        message,
    }
}

/// Validate a raw JSON config value, reporting all problems at once.
pub fn check_raw(raw: &Value) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let obj = match raw.as_object() {
        Some(o) => o,
        None => {
            diagnostics.push(Diagnostic {
                level: DiagnosticLevel::Error,
                path: String::new(),
                message: "Config must be a JSON object".to_string(),
            });
            return diagnostics;
        }
    };

    diagnostics.push(Diagnostic {
        level: DiagnosticLevel::Ok,
        path: String::new(),
        message: "Valid JSON".to_string(),
    });

    let known_set: HashSet<&str> = KNOWN_TOP_LEVEL.iter().copied().collect();
    for key in obj.keys() {
        if !known_set.contains(key.as_str()) {
            diagnostics.push(unknown_field(key, key, KNOWN_TOP_LEVEL));
        }
    }

    if let Some(wait_times) = obj.get("wait_times").and_then(|v| v.as_object()) {
        let known_set: HashSet<&str> = KNOWN_WAIT_TIMES.iter().copied().collect();
        for key in wait_times.keys() {
            if !known_set.contains(key.as_str()) {
                diagnostics.push(unknown_field(
                    &format!("wait_times.{}", key),
                    key,
                    KNOWN_WAIT_TIMES,
                ));
            }
        }
    }

    // Strict invariant checks on the typed config.
    match serde_json::from_value::<Config>(raw.clone()) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                diagnostics.push(Diagnostic {
                    level: DiagnosticLevel::Ok,
                    path: String::new(),
                    message: "All invariants hold".to_string(),
                });
                diagnostics.extend(advisories(&config));
            }
            Err(e) => diagnostics.push(Diagnostic {
                level: DiagnosticLevel::Error,
                path: String::new(),
                message: e.to_string(),
            }),
        },
        Err(e) => diagnostics.push(Diagnostic {
            level: DiagnosticLevel::Error,
            path: String::new(),
            message: format!("Config does not match expected shape: {}", e),
        }),
    }

    diagnostics
}

/// Non-fatal advisories for configs that validate but look risky.
fn advisories(config: &Config) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    if config.wait_times.livestream_active.min < 30 {
        out.push(Diagnostic {
            level: DiagnosticLevel::Warn,
            path: "wait_times.livestream_active.min".to_string(),
            message: format!(
                "{}s between sends is aggressive and may trip rate limits",
                config.wait_times.livestream_active.min
            ),
        });
    }
    if config.messages.len() == 1 {
        out.push(Diagnostic {
            level: DiagnosticLevel::Warn,
            path: "messages".to_string(),
            message: "Pool of one repeats the same message every send".to_string(),
        });
    }
    out
}
