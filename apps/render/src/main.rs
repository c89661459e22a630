use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use caption_render::config::{Config, OutputFormat};
use caption_render::StrokeStyle;

/// JSON shape written when `OUTPUT_FORMAT=json`.
#[derive(Debug, Serialize)]
struct StrokeSheet<'a> {
    selector: &'a str,
    steps: usize,
    style: &'a StrokeStyle,
    text_shadow: String,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the stylesheet.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting caption_render v{}", env!("CARGO_PKG_VERSION"));

    let style = StrokeStyle::new(&config.stroke_width_var, &config.stroke_color_var);
    let text_shadow = style.text_shadow(config.stroke_steps);
    info!(
        "Generated {} stroke shadows for {}",
        config.stroke_steps, config.stroke_selector
    );

    let rendered = match config.output {
        OutputFormat::Css => render_css(&config.stroke_selector, &text_shadow),
        OutputFormat::Json => {
            let sheet = StrokeSheet {
                selector: &config.stroke_selector,
                steps: config.stroke_steps,
                style: &style,
                text_shadow,
            };
            let mut json = serde_json::to_string_pretty(&sheet)?;
            json.push('\n');
            json
        }
    };

    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("Failed to write stylesheet to stdout")?;

    Ok(())
}

/// Wraps the shadow list in a rule. An empty list becomes `text-shadow: none`.
fn render_css(selector: &str, text_shadow: &str) -> String {
    let value = if text_shadow.is_empty() {
        "none".to_string()
    } else {
        text_shadow.replace('\n', "\n        ")
    };
    format!("{selector} {{\n    text-shadow:\n        {value};\n}}\n")
}
