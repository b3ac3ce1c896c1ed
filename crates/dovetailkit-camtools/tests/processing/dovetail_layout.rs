//! Tests for dovetail tail enumeration and cut-mark positions

use dovetailkit_camtools::dovetail_layout::{
    compute_layout, DovetailLayoutCalculator, LayoutField, LayoutInput, MIN_TAIL_BASE_WIDTH,
};
use dovetailkit_camtools::error::LayoutError;

fn standard_board() -> LayoutInput {
    LayoutInput {
        length: 400.0,
        depth: 18.0,
        pin: 19.0,
        left_offset: 10.0,
        right_offset: 10.0,
        slope: 6.0,
    }
}

fn expected_max_count(input: &LayoutInput) -> f64 {
    ((input.length - input.left_offset - input.right_offset + input.pin
        - 2.0 * input.depth / input.slope)
        / (MIN_TAIL_BASE_WIDTH + input.pin))
        .floor()
}

#[test]
fn test_standard_board_variants() {
    let variants = compute_layout(&standard_board()).expect("valid layout");

    assert_eq!(variants.len(), 16);
    let counts: Vec<usize> = variants.iter().map(|v| v.tail_count).collect();
    assert_eq!(counts, (1..=16).collect::<Vec<_>>());

    for variant in &variants {
        assert_eq!(variant.pin_at_tip_width, 13.0);
        let expected_width = 393.0 / variant.tail_count as f64 - 13.0;
        assert!((variant.tail_width - expected_width).abs() < 1e-9);
    }
}

#[test]
fn test_standard_board_geometry() {
    let calc = DovetailLayoutCalculator::new(standard_board()).expect("valid layout");
    assert_eq!(calc.pin_at_tip_width(), 13.0);
    assert_eq!(calc.tail_span(), 393.0);
    assert_eq!(calc.max_count(), 17.0);
}

#[test]
fn test_three_tail_stops() {
    let variants = compute_layout(&standard_board()).unwrap();
    let three = &variants[2];
    assert_eq!(three.tail_count, 3);
    // pitch 131: 10 + 131, 10 + 262, 390 - 131, 390 - 262
    assert_eq!(three.stops, vec![10.0, 128.0, 141.0, 259.0, 272.0, 390.0]);
    assert_eq!(three.tail_width, 118.0);
}

#[test]
fn test_stop_counts_and_ordering() {
    let variants = compute_layout(&standard_board()).unwrap();
    for variant in &variants {
        let expected_len = if variant.tail_count == 1 {
            2
        } else {
            2 + 2 * (variant.tail_count - 1)
        };
        assert_eq!(variant.stops.len(), expected_len);
        assert!(
            variant.stops.windows(2).all(|w| w[0] <= w[1]),
            "stops not sorted for {} tails: {:?}",
            variant.tail_count,
            variant.stops
        );
    }
}

#[test]
fn test_stops_stay_between_offsets() {
    let boards = [
        standard_board(),
        LayoutInput {
            length: 250.0,
            depth: 12.0,
            pin: 8.0,
            left_offset: 4.0,
            right_offset: 7.5,
            slope: 8.0,
        },
        LayoutInput {
            length: 1200.0,
            depth: 22.0,
            pin: 10.0,
            left_offset: 0.0,
            right_offset: 0.0,
            slope: 5.0,
        },
    ];

    for board in boards {
        let variants = compute_layout(&board).unwrap();
        let low = board.left_offset;
        let high = board.length - board.right_offset;
        for variant in variants {
            for stop in variant.stops {
                assert!(
                    stop >= low - 1e-9 && stop <= high + 1e-9,
                    "stop {} outside [{}, {}]",
                    stop,
                    low,
                    high
                );
            }
        }
    }
}

#[test]
fn test_variant_count_matches_max_count() {
    for length in [40.0, 60.0, 100.0, 333.3, 400.0, 1000.0] {
        let board = LayoutInput {
            length,
            ..standard_board()
        };
        let expected = (expected_max_count(&board) - 1.0).max(0.0) as usize;
        let variants = compute_layout(&board).unwrap();
        assert_eq!(variants.len(), expected, "length {}", length);
    }
}

#[test]
fn test_compute_is_idempotent() {
    let board = standard_board();
    assert_eq!(compute_layout(&board), compute_layout(&board));
}

#[test]
fn test_zero_pin_tip_passes_validation() {
    // 2 * 18 / 6 == 6
    let board = LayoutInput {
        pin: 6.0,
        ..standard_board()
    };
    let calc = DovetailLayoutCalculator::new(board).expect("zero tip width is allowed");
    assert_eq!(calc.pin_at_tip_width(), 0.0);

    let variants = calc.variants();
    assert!(!variants.is_empty());
    assert!(variants.iter().all(|v| v.pin_at_tip_width == 0.0));
}

#[test]
fn test_max_count_of_one_emits_nothing() {
    // span 40 - 20 + 13 = 33, 33 / 22 floors to 1
    let board = LayoutInput {
        length: 40.0,
        ..standard_board()
    };
    let calc = DovetailLayoutCalculator::new(board).expect("passes validation");
    assert_eq!(calc.max_count(), 1.0);
    assert!(calc.variants().is_empty());
}

#[test]
fn test_negative_offset() {
    let board = LayoutInput {
        left_offset: -1.0,
        ..standard_board()
    };
    assert_eq!(compute_layout(&board), Err(LayoutError::NegativeOffset));

    let board = LayoutInput {
        right_offset: -0.5,
        ..standard_board()
    };
    assert_eq!(compute_layout(&board), Err(LayoutError::NegativeOffset));
}

#[test]
fn test_pin_too_narrow() {
    let board = LayoutInput {
        pin: 5.0,
        ..standard_board()
    };
    let err = compute_layout(&board).unwrap_err();
    assert_eq!(err, LayoutError::PinTooNarrow { min_pin: 6.0 });
    assert_eq!(err.to_string(), "Pin too narrow. It must be at least 6.");
}

#[test]
fn test_length_too_short() {
    // span 20 - 20 + 13 = 13 < 22
    let board = LayoutInput {
        length: 20.0,
        ..standard_board()
    };
    let err = compute_layout(&board).unwrap_err();
    assert_eq!(err, LayoutError::LengthTooShort { tail_span: 13.0 });
    assert_eq!(
        err.to_string(),
        "Length is too short. Adjust left and right offsets."
    );
}

#[test]
fn test_invalid_number_reports_first_field() {
    let board = LayoutInput {
        pin: f64::NAN,
        slope: f64::INFINITY,
        ..standard_board()
    };
    assert_eq!(
        compute_layout(&board),
        Err(LayoutError::InvalidNumber {
            field: LayoutField::Pin
        })
    );
}

#[test]
fn test_validation_order() {
    // Non-finite input wins over a negative offset
    let board = LayoutInput {
        length: f64::NAN,
        left_offset: -5.0,
        ..standard_board()
    };
    assert!(matches!(
        compute_layout(&board),
        Err(LayoutError::InvalidNumber { .. })
    ));

    // Negative offset wins over a narrow pin
    let board = LayoutInput {
        left_offset: -5.0,
        pin: 1.0,
        ..standard_board()
    };
    assert_eq!(compute_layout(&board), Err(LayoutError::NegativeOffset));

    // Narrow pin wins over a short board
    let board = LayoutInput {
        length: 1.0,
        pin: 1.0,
        ..standard_board()
    };
    assert!(matches!(
        compute_layout(&board),
        Err(LayoutError::PinTooNarrow { .. })
    ));
}

#[test]
fn test_symmetric_offsets_keep_duplicates() {
    // Zero pin tip and no offsets put both inner marks of the two-tail
    // layout on the centre line
    let board = LayoutInput {
        length: 100.0,
        depth: 18.0,
        pin: 6.0,
        left_offset: 0.0,
        right_offset: 0.0,
        slope: 6.0,
    };
    let variants = compute_layout(&board).unwrap();
    let two = &variants[1];
    assert_eq!(two.tail_count, 2);
    assert_eq!(two.stops, vec![0.0, 50.0, 50.0, 100.0]);
}
