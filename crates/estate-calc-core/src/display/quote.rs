//! Localized, currency-converted view of a payment estimate.

use serde::{Deserialize, Serialize};

use crate::display::currency::{convert, format_whole, money_from_f64};
use crate::display::labels::{calculator_labels, term_label};
use crate::mortgage::payment::MortgageOutput;
use crate::types::{DisplayCurrency, Language};
use crate::EstateCalcResult;

/// Visitor presentation preferences. Passed explicitly to every renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayContext {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub currency: DisplayCurrency,
}

impl DisplayContext {
    pub fn new(language: Language, currency: DisplayCurrency) -> Self {
        Self { language, currency }
    }
}

/// Label/value pairs ready to drop into the calculator card.
///
/// Every `*_label` field names the value field with the same stem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteView {
    pub language: Language,
    pub currency: DisplayCurrency,
    pub currency_label: String,
    pub title: String,
    pub home_price_label: String,
    pub home_price: String,
    pub down_payment_label: String,
    pub down_payment: String,
    pub down_payment_percent: String,
    pub loan_details_heading: String,
    pub loan_type_label: String,
    pub loan_type: String,
    pub interest_rate_label: String,
    pub interest_rate: String,
    pub monthly_payment_label: String,
    pub monthly_payment: String,
    pub disclaimer: String,
}

/// Renders `output` (amounts in USD) for the given context.
///
/// Fails with `InvalidInput` when an amount is too large for the target currency.
pub fn render_quote(output: &MortgageOutput, ctx: &DisplayContext) -> EstateCalcResult<QuoteView> {
    let labels = calculator_labels(ctx.language);
    let money = |usd: f64| -> EstateCalcResult<String> {
        Ok(format_whole(
            convert(money_from_f64(usd)?, ctx.currency)?,
            ctx.currency,
        ))
    };

    Ok(QuoteView {
        language: ctx.language,
        currency: ctx.currency,
        currency_label: labels.currency.to_string(),
        title: labels.title.to_string(),
        home_price_label: labels.home_price.to_string(),
        home_price: money(output.home_price)?,
        down_payment_label: labels.down_payment.to_string(),
        down_payment: money(output.down_payment)?,
        down_payment_percent: format!("{:.1}%", output.down_payment_percent),
        loan_details_heading: labels.loan_details.to_string(),
        loan_type_label: labels.loan_type.to_string(),
        loan_type: term_label(output.term_years, ctx.language),
        interest_rate_label: labels.interest_rate.to_string(),
        interest_rate: format!("{:.1}%", output.annual_rate_percent),
        monthly_payment_label: labels.estimated_monthly_payment.to_string(),
        monthly_payment: money(output.monthly_payment)?,
        disclaimer: labels.disclaimer.to_string(),
    })
}
