//! Output settings for failure reports, read once from the environment.
//!
//! | Variable       | Values                        | Default  |
//! |----------------|-------------------------------|----------|
//! | `VERITY_DIFF`  | `0`, `false`, `off` disable   | enabled  |
//! | `VERITY_COLOR` | `always`, `never`, `auto`     | `never`  |
//!
//! `auto` enables color unless `NO_COLOR` is set or `TERM` is `dumb`.
//! Settings only affect the diagnostic help attached to a failure; the
//! failure message itself is never altered.

use once_cell::sync::Lazy;
use termcolor::ColorChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Attach a line diff when two strings fail an equality check.
    pub diff: bool,
    /// Render the diff with ANSI colors.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            diff: true,
            color: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let diff = lookup("VERITY_DIFF")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(defaults.diff);
        let color = match parse_color_choice(lookup("VERITY_COLOR").as_deref()) {
            ColorChoice::Always | ColorChoice::AlwaysAnsi => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                lookup("NO_COLOR").is_none() && lookup("TERM").map_or(true, |term| term != "dumb")
            }
        };
        Self { diff, color }
    }
}

fn parse_color_choice(value: Option<&str>) -> ColorChoice {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("always") => ColorChoice::Always,
        Some("ansi") => ColorChoice::AlwaysAnsi,
        Some("auto") => ColorChoice::Auto,
        _ => ColorChoice::Never,
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(|| {
    let settings = Settings::from_env();
    tracing::trace!(?settings, "loaded verity settings");
    settings
});

/// The process-wide settings.
pub fn settings() -> &'static Settings {
    &SETTINGS
}
