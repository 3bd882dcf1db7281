use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Display mode requested by the embedding page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl FromStr for ThemeMode {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ChartError::InvalidData(format!(
                "unknown theme mode: `{other}`"
            ))),
        }
    }
}

/// Concrete style tokens consumed by the spec builders.
///
/// A pure function of `(mode, system preference)`; nothing is registered
/// globally, so two charts on one page can resolve different modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub mode: ThemeMode,
    pub background: &'static str,
    pub text_color: &'static str,
    pub subtext_color: &'static str,
    pub axis_line_color: &'static str,
    pub axis_label_color: &'static str,
    pub grid_line_color: &'static str,
}

fn dark_tokens(mode: ThemeMode) -> ThemeTokens {
    ThemeTokens {
        mode,
        background: "#1F2937",
        text_color: "#ffffff",
        subtext_color: "#ffffffcc",
        axis_line_color: "#ffffff",
        axis_label_color: "#ffffff",
        grid_line_color: "#374151",
    }
}

fn light_tokens(mode: ThemeMode) -> ThemeTokens {
    ThemeTokens {
        mode,
        background: "#ffffff",
        text_color: "#333",
        subtext_color: "#333",
        axis_line_color: "#333",
        axis_label_color: "#666",
        grid_line_color: "#ccc",
    }
}

/// Maps a display mode to concrete style tokens.
///
/// `System` picks the palette from the caller-supplied platform preference;
/// reading the platform here would make the function impure.
#[must_use]
pub fn resolve_theme(mode: ThemeMode, system_prefers_dark: bool) -> ThemeTokens {
    match mode {
        ThemeMode::Dark => dark_tokens(mode),
        ThemeMode::Light => light_tokens(mode),
        ThemeMode::System if system_prefers_dark => dark_tokens(mode),
        ThemeMode::System => light_tokens(mode),
    }
}
