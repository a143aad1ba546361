//! Bounded loan parameters as offered by the listing page's calculator.
//!
//! Every setter clamps into the widget's range and snaps to its step, so a
//! `LoanParameters` value is always inside the declared domain of
//! [`monthly_payment`](crate::mortgage::payment::monthly_payment).

use serde::{Deserialize, Serialize};

use crate::error::EstateCalcError;
use crate::mortgage::payment::{amortize, monthly_rate, MortgageInput, MONTHS_PER_YEAR};
use crate::EstateCalcResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const MIN_DOWN_PAYMENT_RATIO: f64 = 0.05;
pub const MAX_DOWN_PAYMENT_RATIO: f64 = 0.5;
pub const DEFAULT_DOWN_PAYMENT_RATIO: f64 = 0.2;
/// Down payment slider granularity, in currency units.
pub const DOWN_PAYMENT_STEP: f64 = 1_000.0;

pub const MIN_RATE_PCT: f64 = 3.0;
pub const MAX_RATE_PCT: f64 = 10.0;
pub const RATE_STEP_PCT: f64 = 0.1;
pub const DEFAULT_RATE_PCT: f64 = 6.5;

// ---------------------------------------------------------------------------
// Loan term
// ---------------------------------------------------------------------------

/// Fixed-rate terms the calculator offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LoanTerm {
    TenYear,
    FifteenYear,
    TwentyYear,
    #[default]
    ThirtyYear,
}

impl LoanTerm {
    pub const ALL: [LoanTerm; 4] = [
        LoanTerm::TenYear,
        LoanTerm::FifteenYear,
        LoanTerm::TwentyYear,
        LoanTerm::ThirtyYear,
    ];

    pub fn years(&self) -> u32 {
        match self {
            LoanTerm::TenYear => 10,
            LoanTerm::FifteenYear => 15,
            LoanTerm::TwentyYear => 20,
            LoanTerm::ThirtyYear => 30,
        }
    }

    pub fn num_payments(&self) -> u32 {
        self.years() * MONTHS_PER_YEAR
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = EstateCalcError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        LoanTerm::ALL
            .into_iter()
            .find(|t| t.years() == years)
            .ok_or_else(|| {
                EstateCalcError::ParseError(format!(
                    "Unsupported loan term {years}. Use: 10, 15, 20, 30"
                ))
            })
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> Self {
        term.years()
    }
}

// ---------------------------------------------------------------------------
// Loan parameters
// ---------------------------------------------------------------------------

/// The four calculator inputs, kept inside the widget's bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanParameters {
    home_price: f64,
    down_payment: f64,
    loan_term: LoanTerm,
    annual_rate_percent: f64,
}

impl LoanParameters {
    /// Starts from the widget defaults: 20% down, 30-year fixed at 6.5%.
    pub fn new(home_price: f64) -> EstateCalcResult<Self> {
        if !home_price.is_finite() || home_price <= 0.0 {
            return Err(EstateCalcError::InvalidInput {
                field: "home_price".into(),
                reason: "Home price must be a positive finite number".into(),
            });
        }
        Ok(Self {
            home_price,
            down_payment: home_price * DEFAULT_DOWN_PAYMENT_RATIO,
            loan_term: LoanTerm::default(),
            annual_rate_percent: DEFAULT_RATE_PCT,
        })
    }

    /// Sets the down payment, snapped to the slider step and clamped to
    /// 5%–50% of the home price. Non-finite amounts are ignored.
    pub fn with_down_payment(mut self, amount: f64) -> Self {
        if amount.is_finite() {
            let (min, max) = self.down_payment_bounds();
            self.down_payment = snap(amount, min, max, DOWN_PAYMENT_STEP);
        }
        self
    }

    /// Sets the down payment as a percentage of the home price (25.0 = 25%).
    pub fn with_down_payment_percent(self, percent: f64) -> Self {
        let amount = self.home_price * percent / 100.0;
        self.with_down_payment(amount)
    }

    /// Sets the rate, clamped to 3.0%–10.0% and rounded to 0.1.
    /// Non-finite rates are ignored.
    pub fn with_interest_rate(mut self, annual_rate_percent: f64) -> Self {
        if annual_rate_percent.is_finite() {
            let snapped = snap(annual_rate_percent, MIN_RATE_PCT, MAX_RATE_PCT, RATE_STEP_PCT);
            // Strip the binary noise left by step arithmetic.
            self.annual_rate_percent = (snapped * 10.0).round() / 10.0;
        }
        self
    }

    pub fn with_term(mut self, loan_term: LoanTerm) -> Self {
        self.loan_term = loan_term;
        self
    }

    pub fn home_price(&self) -> f64 {
        self.home_price
    }

    pub fn down_payment(&self) -> f64 {
        self.down_payment
    }

    pub fn loan_term(&self) -> LoanTerm {
        self.loan_term
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    /// `(min, max)` down payment the slider allows for this price.
    pub fn down_payment_bounds(&self) -> (f64, f64) {
        (
            self.home_price * MIN_DOWN_PAYMENT_RATIO,
            self.home_price * MAX_DOWN_PAYMENT_RATIO,
        )
    }

    pub fn down_payment_percent(&self) -> f64 {
        self.down_payment / self.home_price * 100.0
    }

    pub fn principal(&self) -> f64 {
        self.home_price - self.down_payment
    }

    pub fn monthly_payment(&self) -> f64 {
        amortize(
            self.principal(),
            monthly_rate(self.annual_rate_percent),
            self.loan_term.num_payments(),
        )
    }

    pub fn to_input(&self) -> MortgageInput {
        MortgageInput {
            home_price: self.home_price,
            down_payment: self.down_payment,
            annual_rate_percent: self.annual_rate_percent,
            term_years: self.loan_term.years(),
        }
    }
}

/// Rounds to the nearest step counted from `min`, then clamps to `[min, max]`.
fn snap(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let steps = ((value - min) / step).round();
    (min + steps * step).clamp(min, max)
}
