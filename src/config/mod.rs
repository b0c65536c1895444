pub mod insights;
pub mod server;

use std::env;
use std::str::FromStr;

pub(crate) fn parse_bool_env(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .and_then(|value| parse_bool(&value))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

/// Read a numeric variable, warning and falling back to `default` when the
/// value does not parse.
pub(crate) fn parse_env_or<T: FromStr + Copy + std::fmt::Display>(var_name: &str, default: T) -> T {
    match env::var(var_name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} '{}', using default {}", var_name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

/// Non-blank value of the first variable that is set.
pub(crate) fn first_non_blank_env(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}
