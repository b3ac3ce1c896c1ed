//! # DovetailKit
//!
//! Layout calculator for hand-cut dovetail joints. Given a board length,
//! joint depth, pin width, edge offsets and tail slope it lists every tail
//! count that fits and where each cut has to be marked.
//!
//! ## Architecture
//!
//! DovetailKit is organized as a workspace with multiple crates:
//!
//! 1. **dovetailkit-core** - Unit labels and number formatting
//! 2. **dovetailkit-camtools** - Dovetail layout calculator, form parsing, reports
//! 3. **dovetailkit-settings** - Configuration file loading
//! 4. **dovetailkit** - Command-line front end that ties the crates together

pub mod cli;
pub mod render;

pub use cli::{Args, OutputFormat};
pub use dovetailkit_camtools::{
    compute_layout, DovetailLayoutCalculator, LayoutError, LayoutField, LayoutForm, LayoutInput,
    LayoutOutcome, LayoutReport, LayoutVariant,
};
pub use dovetailkit_core::MeasurementSystem;
pub use dovetailkit_settings::{Config, FieldDefaults};

use anyhow::Context;
use render::TextOptions;
use std::io::Write;
use tracing::{debug, info};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr so results on stdout stay machine readable
/// - RUST_LOG environment variable support, falling back to `level`
/// - Pretty or JSON line formatting
pub fn init_logging(level: &str, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level: LevelFilter = level
        .parse()
        .with_context(|| format!("Invalid log level: {}", level))?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
    });
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(())
}

/// Resolve settings for `args`: explicit file, per-user file, or defaults,
/// with command-line overrides applied on top.
pub fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match (&args.config, args.no_config) {
        (Some(path), _) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        (None, true) => Config::default(),
        (None, false) => Config::load_or_default().context("Failed to load user config")?,
    };

    if let Some(unit) = args.unit {
        config.display.unit = unit;
    }
    if let Some(precision) = args.precision {
        config.display.precision = precision;
    }
    config.validate()?;

    debug!(?config, "Effective settings");
    Ok(config)
}

/// Fill the layout form from settings defaults and command-line text
pub fn build_form(args: &Args, defaults: &FieldDefaults) -> LayoutForm {
    let mut form = LayoutForm::default();
    form.set(LayoutField::Depth, defaults.depth.to_string());
    form.set(LayoutField::Pin, defaults.pin.to_string());
    form.set(LayoutField::LeftOffset, defaults.left_offset.to_string());
    form.set(LayoutField::RightOffset, defaults.right_offset.to_string());
    form.set(LayoutField::Slope, defaults.slope.to_string());

    let overrides = [
        (LayoutField::Length, &args.length),
        (LayoutField::Depth, &args.depth),
        (LayoutField::Pin, &args.pin),
        (LayoutField::LeftOffset, &args.left_offset),
        (LayoutField::RightOffset, &args.right_offset),
        (LayoutField::Slope, &args.slope),
    ];
    for (field, text) in overrides {
        if let Some(text) = text {
            form.set(field, text.as_str());
        }
    }

    form
}

/// Compute the layout described by `args` and write it to `out`.
///
/// Validation failures are part of the returned report, not an `Err`;
/// `Err` means the settings could not be loaded or the output failed.
pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<LayoutReport> {
    let config = load_config(args)?;
    let form = build_form(args, &config.defaults);
    let report = LayoutReport::new(form.to_input(), config.display.unit);

    match report.error() {
        Some(err) => info!(kind = err.kind(), "Layout rejected"),
        None => info!(
            variants = report.variants().map_or(0, |v| v.len()),
            "Layout ready"
        ),
    }

    match args.format {
        OutputFormat::Text => {
            let options = TextOptions {
                precision: config.display.precision,
                show_input: args.show_input,
            };
            render::render_text(&report, options, out)?;
        }
        OutputFormat::Json => render::render_json(&report, out)?,
    }

    Ok(report)
}
