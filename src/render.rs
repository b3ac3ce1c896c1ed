//! Presentation of layout reports
//!
//! Text output mirrors what a form-based front end would show: one summary
//! line per variant, each followed by its cut marks, or a single error
//! message.

use dovetailkit_camtools::dovetail_layout::LayoutVariant;
use dovetailkit_camtools::report::{LayoutOutcome, LayoutReport};
use dovetailkit_core::units::{format_fixed, format_length, get_unit_label, MeasurementSystem};
use std::io::{self, Write};

/// Text rendering options
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    pub precision: usize,
    pub show_input: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            precision: 1,
            show_input: false,
        }
    }
}

/// Summary line of a variant, e.g. `2 tail(s), 183.5 mm wide`
pub fn summary_line(variant: &LayoutVariant, unit: MeasurementSystem, precision: usize) -> String {
    format!(
        "{} tail(s), {} wide",
        variant.tail_count,
        format_length(variant.tail_width, unit, precision)
    )
}

/// Write `report` as plain text
pub fn render_text<W: Write>(
    report: &LayoutReport,
    options: TextOptions,
    out: &mut W,
) -> io::Result<()> {
    if options.show_input {
        let unit = get_unit_label(report.unit);
        for (field, value) in report.input.fields() {
            writeln!(out, "{}: {}", field.label(unit), value)?;
        }
        writeln!(out)?;
    }

    match &report.outcome {
        LayoutOutcome::Error(err) => writeln!(out, "{}", err.message)?,
        LayoutOutcome::Variants(variants) => {
            for (index, variant) in variants.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", summary_line(variant, report.unit, options.precision))?;
                for stop in &variant.stops {
                    writeln!(out, "    {}", format_fixed(*stop, options.precision))?;
                }
            }
        }
    }

    Ok(())
}

/// Write `report` as pretty JSON followed by a newline
pub fn render_json<W: Write>(report: &LayoutReport, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{}", report.to_json()?)?;
    Ok(())
}
