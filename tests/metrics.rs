use chrono::NaiveDate;

use company_brief::{
    BriefError, StatementField, StatementPeriod, cagr, format_amount, format_percentage,
};

fn period(revenue: f64, income: f64) -> StatementPeriod {
    StatementPeriod {
        period_end: NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
        total_revenue: revenue,
        net_income: income,
        operating_cashflow: 0.0,
        depreciation_and_amortization: 0.0,
        net_income_margin: if revenue == 0.0 { 0.0 } else { income / revenue },
        free_cash_flow_estimate: 0.0,
    }
}

fn revenues(values: &[f64]) -> Vec<StatementPeriod> {
    values.iter().map(|&r| period(r, r * 0.2)).collect()
}

/* ---------------- CAGR ---------------- */

#[test]
fn cagr_matches_hand_computed_ten_percent() {
    // 100 -> 133.1 is three compounded 10% steps; the 3-year window ends on
    // the most recent period and begins two periods back.
    let periods = revenues(&[133.1, 121.0, 100.0]);
    let v = cagr(&periods, 3, StatementField::TotalRevenue).unwrap();
    assert!((v - 0.10).abs() < 1e-9, "got {v}");
}

#[test]
fn cagr_window_starts_at_num_years_minus_one() {
    let periods = revenues(&[133.1, 121.0, 110.0, 100.0]);
    let v = cagr(&periods, 3, StatementField::TotalRevenue).unwrap();
    // beginning is periods[2] = 110, so the ratio is 1.21
    let expected = (133.1f64 / 110.0).powf(1.0 / 3.0) - 1.0;
    assert!((v - expected).abs() < 1e-12, "got {v}");
}

#[test]
fn cagr_is_nonnegative_when_ending_exceeds_beginning() {
    for values in [
        vec![200.0, 150.0, 100.0],
        vec![100.5, 0.1, 100.0],
        vec![100.0, 120.0, 100.0],
    ] {
        let periods = revenues(&values);
        let v = cagr(&periods, 3, StatementField::TotalRevenue).unwrap();
        assert!(v >= 0.0, "values {values:?} gave {v}");
    }
}

#[test]
fn cagr_short_series_fails_with_insufficient_history() {
    let periods = revenues(&[120.0, 100.0]);
    let err = cagr(&periods, 3, StatementField::TotalRevenue).unwrap_err();
    match err {
        BriefError::InsufficientHistory { have, need } => {
            assert_eq!(have, 2);
            assert_eq!(need, 3);
        }
        other => panic!("expected InsufficientHistory, got {other:?}"),
    }
}

#[test]
fn cagr_zero_beginning_is_a_typed_error_not_infinity() {
    // An unreported oldest-in-window figure reads as 0; dividing by it would
    // hand the formatter an "inf %" box. It must fail instead.
    let periods = revenues(&[120.0, 50.0, 0.0]);
    let err = cagr(&periods, 3, StatementField::TotalRevenue).unwrap_err();
    assert!(matches!(err, BriefError::Data(_)), "got {err:?}");

    // Both endpoints zero is the NaN shape of the same hole.
    let periods = revenues(&[0.0, 50.0, 0.0]);
    let err = cagr(&periods, 3, StatementField::TotalRevenue).unwrap_err();
    assert!(matches!(err, BriefError::Data(_)), "got {err:?}");
}

#[test]
fn cagr_sign_tracks_direction_of_overall_change() {
    let declining = revenues(&[80.0, 90.0, 100.0]);
    let v = cagr(&declining, 3, StatementField::TotalRevenue).unwrap();
    assert!(v < 0.0, "got {v}");

    // A loss shrinking toward zero is improvement: positive rate.
    let recovering: Vec<_> = [-50.0, -75.0, -100.0]
        .iter()
        .map(|&n| period(1000.0, n))
        .collect();
    let v = cagr(&recovering, 3, StatementField::NetIncome).unwrap();
    assert!(v > 0.0, "got {v}");

    // Flipping from profit to loss is decline, and must not blow up on a
    // fractional power of a negative ratio.
    let flipped: Vec<_> = [-50.0, 25.0, 100.0]
        .iter()
        .map(|&n| period(1000.0, n))
        .collect();
    let v = cagr(&flipped, 3, StatementField::NetIncome).unwrap();
    assert!(v < 0.0, "got {v}");
    assert!(v.is_finite());
}

#[test]
fn cagr_reads_derived_fields() {
    // Constant margin: zero growth regardless of revenue growth.
    let periods = revenues(&[133.1, 121.0, 110.0, 100.0]);
    let v = cagr(&periods, 4, StatementField::NetIncomeMargin).unwrap();
    assert!(v.abs() < 1e-12, "got {v}");
}

/* ---------------- formatting ---------------- */

#[test]
fn format_percentage_rounds_to_two_decimals() {
    assert_eq!(format_percentage(0.1234), "12.34 %");
    assert_eq!(format_percentage(0.0), "0.0 %");
    assert_eq!(format_percentage(0.125), "12.5 %");
    assert_eq!(format_percentage(-0.0456), "-4.56 %");
}

#[test]
fn format_amount_walks_the_magnitude_ladder() {
    assert_eq!(format_amount(999.0, "$"), "$999.0 ");
    assert_eq!(format_amount(1_000.0, "$"), "$1.0 K.");
    assert_eq!(format_amount(1_500.0, "$"), "$1.5 K.");
    assert_eq!(format_amount(2_500_000.0, "$"), "$2.5 M.");
    assert_eq!(format_amount(2_500_000_000.0, "€"), "€2.5 B.");
}

#[test]
fn format_amount_rounds_only_after_final_scaling() {
    // Just under a million: scaled once, then rounded up across the
    // threshold it never crossed.
    assert_eq!(format_amount(999_999.0, "$"), "$1000.0 K.");
}

#[test]
fn format_amount_saturates_at_the_final_tier() {
    assert_eq!(format_amount(5.0e15, "$"), "$5000.0 T.");
}
