//! Tests for turning raw form text into layout results

use dovetailkit_camtools::dovetail_layout::{compute_layout, LayoutField, LayoutForm};
use dovetailkit_camtools::error::LayoutError;
use dovetailkit_camtools::report::LayoutReport;
use dovetailkit_core::MeasurementSystem;

fn filled_form() -> LayoutForm {
    let mut form = LayoutForm::default();
    form.set(LayoutField::Length, "400");
    form
}

#[test]
fn test_default_form_with_length_computes() {
    let variants = compute_layout(&filled_form().to_input()).unwrap();
    assert_eq!(variants.len(), 16);
}

#[test]
fn test_empty_length_is_invalid_number() {
    let form = LayoutForm::default();
    assert_eq!(
        compute_layout(&form.to_input()),
        Err(LayoutError::InvalidNumber {
            field: LayoutField::Length
        })
    );
}

#[test]
fn test_any_bad_field_is_invalid_number() {
    for field in LayoutField::ALL {
        for text in ["", "abc", "  ", "1,5", "NaN", "inf"] {
            let mut form = filled_form();
            form.set(field, text);
            let err = compute_layout(&form.to_input()).unwrap_err();
            assert_eq!(
                err,
                LayoutError::InvalidNumber { field },
                "field {} with text {:?}",
                field,
                text
            );
            assert_eq!(err.to_string(), "All fields must contain valid numbers.");
        }
    }
}

#[test]
fn test_whitespace_around_numbers_is_accepted() {
    let mut form = filled_form();
    form.set(LayoutField::Length, " 400 ");
    form.set(LayoutField::Slope, "\t6\n");
    assert_eq!(compute_layout(&form.to_input()).unwrap().len(), 16);
}

#[test]
fn test_report_from_form() {
    let mut form = filled_form();
    form.set(LayoutField::LeftOffset, "-1");
    let report = LayoutReport::new(form.to_input(), MeasurementSystem::Metric);
    assert_eq!(report.error(), Some(&LayoutError::NegativeOffset));
}
