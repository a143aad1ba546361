//! Fixed-rate mortgage payment calculator.
//!
//! Standard level-payment amortisation over monthly periods. Math is done in
//! `f64`; rounding to whole currency units is left to the display layer.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EstateCalcError;
use crate::mortgage::params::{
    LoanTerm, MAX_DOWN_PAYMENT_RATIO, MAX_RATE_PCT, MIN_DOWN_PAYMENT_RATIO, MIN_RATE_PCT,
};
use crate::types::{with_metadata, ComputationOutput};
use crate::EstateCalcResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const MONTHS_PER_YEAR: u32 = 12;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Inputs to a single payment estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Purchase price of the home.
    pub home_price: f64,
    /// Cash paid up front; the remainder is financed.
    pub down_payment: f64,
    /// Annual interest rate as a percentage (6.5 = 6.5%).
    pub annual_rate_percent: f64,
    /// Loan term in whole years.
    pub term_years: u32,
}

/// Payment estimate and the intermediate figures it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageOutput {
    pub home_price: f64,
    pub down_payment: f64,
    /// Down payment as a percentage of the home price (0 when the price is 0).
    pub down_payment_percent: f64,
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub monthly_rate: f64,
    pub term_years: u32,
    pub num_payments: u32,
    pub monthly_payment: f64,
    /// `monthly_payment * num_payments`.
    pub total_paid: f64,
    /// `total_paid - principal`.
    pub total_interest: f64,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Fixed monthly payment for a home purchase.
///
/// Total over its domain: any finite `home_price >= 0`, down payment in
/// `[0, home_price]`, `annual_rate_percent >= 0` and `term_years >= 1`.
/// A zero-year term is rejected rather than producing `NaN`.
pub fn monthly_payment(
    home_price: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> EstateCalcResult<f64> {
    let num_payments = validate(home_price, down_payment, annual_rate_percent, term_years)?;
    Ok(amortize(
        home_price - down_payment,
        monthly_rate(annual_rate_percent),
        num_payments,
    ))
}

/// Payment estimate wrapped in the standard output envelope.
pub fn calculate_mortgage(
    input: &MortgageInput,
) -> EstateCalcResult<ComputationOutput<MortgageOutput>> {
    let start = Instant::now();

    let num_payments = validate(
        input.home_price,
        input.down_payment,
        input.annual_rate_percent,
        input.term_years,
    )?;

    let principal = input.home_price - input.down_payment;
    let rate = monthly_rate(input.annual_rate_percent);
    let payment = amortize(principal, rate, num_payments);
    let total_paid = payment * f64::from(num_payments);

    let down_payment_percent = if input.home_price > 0.0 {
        input.down_payment / input.home_price * 100.0
    } else {
        0.0
    };

    let output = MortgageOutput {
        home_price: input.home_price,
        down_payment: input.down_payment,
        down_payment_percent,
        principal,
        annual_rate_percent: input.annual_rate_percent,
        monthly_rate: rate,
        term_years: input.term_years,
        num_payments,
        monthly_payment: payment,
        total_paid,
        total_interest: total_paid - principal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate level-payment amortisation (monthly compounding)",
        input,
        range_warnings(input),
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / f64::from(MONTHS_PER_YEAR)
}

/// Level payment for `principal` over `num_payments` periods at `rate`.
///
/// Callers guarantee `num_payments > 0` and `rate >= 0`.
pub(crate) fn amortize(principal: f64, rate: f64, num_payments: u32) -> f64 {
    let n = f64::from(num_payments);
    if rate == 0.0 {
        return principal / n;
    }

    let growth = (1.0 + rate).powf(n);
    if growth.is_infinite() {
        // Limit of the annuity factor as n grows without bound.
        return principal * rate;
    }

    let denominator = growth - 1.0;
    if denominator == 0.0 {
        // Rate below f64 resolution around 1.0; the straight-line limit applies.
        return principal / n;
    }

    principal * (rate * growth) / denominator
}

fn validate(
    home_price: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> EstateCalcResult<u32> {
    for (field, value) in [
        ("home_price", home_price),
        ("down_payment", down_payment),
        ("annual_rate_percent", annual_rate_percent),
    ] {
        if !value.is_finite() {
            return Err(EstateCalcError::InvalidInput {
                field: field.into(),
                reason: "Value must be a finite number".into(),
            });
        }
    }
    if home_price < 0.0 {
        return Err(EstateCalcError::InvalidInput {
            field: "home_price".into(),
            reason: "Home price cannot be negative".into(),
        });
    }
    if down_payment < 0.0 {
        return Err(EstateCalcError::InvalidInput {
            field: "down_payment".into(),
            reason: "Down payment cannot be negative".into(),
        });
    }
    if down_payment > home_price {
        return Err(EstateCalcError::InvalidInput {
            field: "down_payment".into(),
            reason: "Down payment cannot exceed the home price".into(),
        });
    }
    if annual_rate_percent < 0.0 {
        return Err(EstateCalcError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if term_years == 0 {
        return Err(EstateCalcError::InvalidInput {
            field: "term_years".into(),
            reason: "Loan term must be at least one year".into(),
        });
    }

    term_years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| EstateCalcError::InvalidInput {
            field: "term_years".into(),
            reason: "Loan term is too long to count in monthly payments".into(),
        })
}

/// Flags inputs the site's calculator widget would never produce.
fn range_warnings(input: &MortgageInput) -> Vec<String> {
    let mut warnings = Vec::new();

    if input.home_price > 0.0 {
        let ratio = input.down_payment / input.home_price;
        if !(MIN_DOWN_PAYMENT_RATIO..=MAX_DOWN_PAYMENT_RATIO).contains(&ratio) {
            warnings.push(format!(
                "Down payment of {:.1}% is outside the usual {:.0}%–{:.0}% range",
                ratio * 100.0,
                MIN_DOWN_PAYMENT_RATIO * 100.0,
                MAX_DOWN_PAYMENT_RATIO * 100.0
            ));
        }
    }

    if !(MIN_RATE_PCT..=MAX_RATE_PCT).contains(&input.annual_rate_percent) {
        warnings.push(format!(
            "Interest rate of {}% is outside the usual {MIN_RATE_PCT}%–{MAX_RATE_PCT}% range",
            input.annual_rate_percent
        ));
    }

    if LoanTerm::try_from(input.term_years).is_err() {
        warnings.push(format!(
            "{}-year term is not one of the standard fixed terms (10, 15, 20, 30)",
            input.term_years
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn standard_input() -> MortgageInput {
        MortgageInput {
            home_price: 1_000_000.0,
            down_payment: 200_000.0,
            annual_rate_percent: 6.5,
            term_years: 30,
        }
    }

    #[test]
    fn test_standard_thirty_year() {
        let pmt = monthly_payment(1_000_000.0, 200_000.0, 6.5, 30).unwrap();
        assert!((pmt - 5_056.54).abs() < 0.01, "got {pmt}");
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let pmt = monthly_payment(500_000.0, 100_000.0, 0.0, 15).unwrap();
        assert_relative_eq!(pmt, 400_000.0 / 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_price_zero_payment() {
        let pmt = monthly_payment(0.0, 0.0, 6.5, 30).unwrap();
        assert_eq!(pmt, 0.0);
    }

    #[test]
    fn test_full_down_payment_zero_payment() {
        let pmt = monthly_payment(750_000.0, 750_000.0, 7.0, 15).unwrap();
        assert_eq!(pmt, 0.0);
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = monthly_payment(1_000_000.0, 200_000.0, 6.5, 0).unwrap_err();
        match err {
            EstateCalcError::InvalidInput { field, .. } => assert_eq!(field, "term_years"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(monthly_payment(1_000_000.0, 200_000.0, -1.0, 30).is_err());
    }

    #[test]
    fn test_down_payment_above_price_rejected() {
        assert!(monthly_payment(100_000.0, 100_001.0, 5.0, 30).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(monthly_payment(f64::NAN, 0.0, 5.0, 30).is_err());
        assert!(monthly_payment(f64::INFINITY, 0.0, 5.0, 30).is_err());
        assert!(monthly_payment(100_000.0, 0.0, f64::NAN, 30).is_err());
    }

    #[test]
    fn test_huge_term_overflow_rejected() {
        assert!(monthly_payment(100_000.0, 0.0, 5.0, u32::MAX).is_err());
    }

    #[test]
    fn test_very_long_term_approaches_interest_only() {
        // (1 + r)^n overflows f64 here, so the interest-only limit is returned.
        let pmt = monthly_payment(800_000.0, 0.0, 6.5, 100_000).unwrap();
        assert_relative_eq!(pmt, 800_000.0 * monthly_rate(6.5), epsilon = 1e-9);
    }

    #[test]
    fn test_tiny_rate_falls_back_to_straight_line() {
        let pmt = amortize(120_000.0, 1e-20, 120);
        assert_relative_eq!(pmt, 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_calculate_mortgage_totals() {
        let out = calculate_mortgage(&standard_input()).unwrap();
        let m = &out.result;

        assert_eq!(m.principal, 800_000.0);
        assert_eq!(m.num_payments, 360);
        assert_relative_eq!(m.down_payment_percent, 20.0, epsilon = 1e-12);
        assert_relative_eq!(m.total_paid, m.monthly_payment * 360.0, epsilon = 1e-6);
        assert_relative_eq!(m.total_interest, m.total_paid - 800_000.0, epsilon = 1e-6);
        assert!(m.total_interest > 0.0);
    }

    #[test]
    fn test_calculate_mortgage_matches_monthly_payment() {
        let input = standard_input();
        let out = calculate_mortgage(&input).unwrap();
        let direct = monthly_payment(
            input.home_price,
            input.down_payment,
            input.annual_rate_percent,
            input.term_years,
        )
        .unwrap();
        assert_eq!(out.result.monthly_payment.to_bits(), direct.to_bits());
    }

    #[test]
    fn test_no_warnings_inside_widget_bounds() {
        let out = calculate_mortgage(&standard_input()).unwrap();
        assert!(out.warnings.is_empty(), "{:?}", out.warnings);
    }

    #[test]
    fn test_warnings_outside_widget_bounds() {
        let input = MortgageInput {
            home_price: 1_000_000.0,
            down_payment: 10_000.0,
            annual_rate_percent: 0.0,
            term_years: 25,
        };
        let out = calculate_mortgage(&input).unwrap();
        assert_eq!(out.warnings.len(), 3);
        assert!(out.warnings[0].contains("Down payment"));
        assert!(out.warnings[1].contains("Interest rate"));
        assert!(out.warnings[2].contains("25-year"));
    }

    #[test]
    fn test_metadata_populated() {
        let out = calculate_mortgage(&standard_input()).unwrap();
        assert!(out.methodology.contains("amortisation"));
        assert_eq!(out.metadata.precision, "ieee754_f64");
        assert_eq!(out.assumptions["term_years"], 30);
    }
}
