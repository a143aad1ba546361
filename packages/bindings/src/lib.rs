use napi::Result as NapiResult;
use napi_derive::napi;

use estate_calc_core::display::currency;
use estate_calc_core::display::quote::{self, DisplayContext};
use estate_calc_core::mortgage::payment::{self, MortgageInput, MortgageOutput};
use estate_calc_core::{DisplayCurrency, Language};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Mortgage calculator
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_mortgage(input_json: String) -> NapiResult<String> {
    let input: MortgageInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = payment::calculate_mortgage(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Direct entry point for the listing page slider handlers.
#[napi]
pub fn monthly_payment(
    home_price: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> NapiResult<f64> {
    payment::monthly_payment(home_price, down_payment, annual_rate_percent, term_years)
        .map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[napi]
pub fn convert_price(usd_price: String, currency_code: String) -> NapiResult<String> {
    let target: DisplayCurrency = currency_code.parse().map_err(to_napi_error)?;
    Ok(currency::convert_price(&usd_price, target))
}

#[napi]
pub fn render_quote(output_json: String, language: String, currency_code: String) -> NapiResult<String> {
    let output: MortgageOutput = serde_json::from_str(&output_json).map_err(to_napi_error)?;
    let ctx = DisplayContext::new(
        language.parse::<Language>().map_err(to_napi_error)?,
        currency_code.parse::<DisplayCurrency>().map_err(to_napi_error)?,
    );
    let view = quote::render_quote(&output, &ctx).map_err(to_napi_error)?;
    serde_json::to_string(&view).map_err(to_napi_error)
}
