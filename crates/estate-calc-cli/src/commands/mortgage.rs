use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use estate_calc_core::display::quote::{render_quote, DisplayContext};
use estate_calc_core::mortgage::params::{
    LoanParameters, LoanTerm, DEFAULT_DOWN_PAYMENT_RATIO, DEFAULT_RATE_PCT,
};
use estate_calc_core::mortgage::payment::{calculate_mortgage, MortgageInput};

use crate::input;

/// Arguments for a mortgage payment estimate
#[derive(Args)]
pub struct MortgageArgs {
    /// Path to JSON request file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase price of the home
    #[arg(long)]
    pub home_price: Option<f64>,

    /// Down payment amount (defaults to 20% of the home price)
    #[arg(long, conflicts_with = "down_payment_pct")]
    pub down_payment: Option<f64>,

    /// Down payment as a percentage of the home price (e.g. 25 for 25%)
    #[arg(long)]
    pub down_payment_pct: Option<f64>,

    /// Annual interest rate in percent (e.g. 6.5)
    #[arg(long, default_value_t = DEFAULT_RATE_PCT)]
    pub rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    pub term: u32,

    /// Clamp inputs to the listing page calculator's ranges (5–50% down, 3–10% rate, 10/15/20/30 years)
    #[arg(long)]
    pub clamp: bool,

    /// Display currency: USD, MYR, CNY
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Label language: en, zh
    #[arg(long, default_value = "en")]
    pub lang: String,
}

/// Mortgage request as read from a file or stdin.
#[derive(Debug, Deserialize)]
pub struct MortgageRequest {
    pub home_price: f64,
    #[serde(default)]
    pub down_payment: Option<f64>,
    #[serde(default)]
    pub down_payment_pct: Option<f64>,
    #[serde(default = "default_rate")]
    pub annual_rate_percent: f64,
    #[serde(default = "default_term")]
    pub term_years: u32,
    #[serde(default)]
    pub clamp: bool,
    #[serde(default)]
    pub display: Option<DisplayContext>,
}

fn default_rate() -> f64 {
    DEFAULT_RATE_PCT
}

fn default_term() -> u32 {
    LoanTerm::default().years()
}

pub fn run_mortgage(args: MortgageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let flag_ctx = DisplayContext::new(args.lang.parse()?, args.currency.parse()?);

    let request: MortgageRequest = match input::load_request(args.input.as_deref())? {
        Some(request) => request,
        None => MortgageRequest {
            home_price: args
                .home_price
                .ok_or("--home-price is required (or provide --input)")?,
            down_payment: args.down_payment,
            down_payment_pct: args.down_payment_pct,
            annual_rate_percent: args.rate,
            term_years: args.term,
            clamp: args.clamp,
            display: None,
        },
    };

    let ctx = request.display.unwrap_or(flag_ctx);
    let mortgage_input = build_input(&request)?;

    let output = calculate_mortgage(&mortgage_input)?;
    let quote = render_quote(&output.result, &ctx)?;

    let mut value = serde_json::to_value(&output)?;
    value["display"] = serde_json::to_value(&quote)?;
    Ok(value)
}

/// Resolves the down payment and, with `clamp`, applies the widget bounds.
pub fn build_input(request: &MortgageRequest) -> Result<MortgageInput, Box<dyn std::error::Error>> {
    if request.clamp {
        let term = LoanTerm::try_from(request.term_years)?;
        let mut params = LoanParameters::new(request.home_price)?
            .with_interest_rate(request.annual_rate_percent)
            .with_term(term);
        if let Some(amount) = request.down_payment {
            params = params.with_down_payment(amount);
        } else if let Some(pct) = request.down_payment_pct {
            params = params.with_down_payment_percent(pct);
        }
        return Ok(params.to_input());
    }

    let down_payment = match (request.down_payment, request.down_payment_pct) {
        (Some(amount), _) => amount,
        (None, Some(pct)) => request.home_price * pct / 100.0,
        (None, None) => request.home_price * DEFAULT_DOWN_PAYMENT_RATIO,
    };

    Ok(MortgageInput {
        home_price: request.home_price,
        down_payment,
        annual_rate_percent: request.annual_rate_percent,
        term_years: request.term_years,
    })
}
