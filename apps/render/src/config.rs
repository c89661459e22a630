use anyhow::{bail, Context, Result};

/// How the binary writes the generated stroke stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Css,
    Json,
}

/// Configuration loaded from environment variables. Every value has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub stroke_steps: usize,
    pub stroke_width_var: String,
    pub stroke_color_var: String,
    pub stroke_selector: String,
    pub output: OutputFormat,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so parsing can be exercised without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            stroke_steps: get("STROKE_STEPS", "32")
                .trim()
                .parse::<usize>()
                .context("STROKE_STEPS must be a non-negative integer")?,
            stroke_width_var: custom_property(
                "STROKE_WIDTH_VAR",
                get("STROKE_WIDTH_VAR", "--stroke-width"),
            )?,
            stroke_color_var: custom_property(
                "STROKE_COLOR_VAR",
                get("STROKE_COLOR_VAR", "--stroke-color"),
            )?,
            stroke_selector: get("STROKE_SELECTOR", ".stroke"),
            output: parse_output(&get("OUTPUT_FORMAT", "css"))?,
            rust_log: get("RUST_LOG", "info"),
        })
    }
}

fn custom_property(key: &str, value: String) -> Result<String> {
    if !value.starts_with("--") || value.len() == 2 {
        bail!("{key} must be a CSS custom property name like '--stroke-width', got '{value}'");
    }
    Ok(value)
}

fn parse_output(value: &str) -> Result<OutputFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "css" => Ok(OutputFormat::Css),
        "json" => Ok(OutputFormat::Json),
        other => bail!("OUTPUT_FORMAT must be 'css' or 'json', got '{other}'"),
    }
}
