use estate_calc_core::display::currency::{convert_price, symbol, usd_rate};
use estate_calc_core::display::quote::{render_quote, DisplayContext};
use estate_calc_core::mortgage::params::{LoanParameters, LoanTerm};
use estate_calc_core::mortgage::payment::calculate_mortgage;
use estate_calc_core::{DisplayCurrency, Language};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Listing price conversion
// ===========================================================================

#[test]
fn test_listing_prices_in_every_currency() {
    let cases = [
        (DisplayCurrency::USD, "$8,880,000"),
        (DisplayCurrency::MYR, "RM42,180,000"),
        (DisplayCurrency::CNY, "¥64,380,000"),
    ];
    for (currency, expected) in cases {
        assert_eq!(convert_price("$8,880,000", currency), expected);
    }
}

#[test]
fn test_rates_and_symbols() {
    assert_eq!(usd_rate(DisplayCurrency::USD), dec!(1));
    assert_eq!(usd_rate(DisplayCurrency::MYR), dec!(4.75));
    assert_eq!(symbol(DisplayCurrency::CNY), "¥");
}

// ===========================================================================
// Calculator card
// ===========================================================================

#[test]
fn test_quote_for_listing_page_defaults() {
    let params = LoanParameters::new(4_850_000.0)
        .unwrap()
        .with_term(LoanTerm::FifteenYear);
    let out = calculate_mortgage(&params.to_input()).unwrap();

    let view = render_quote(&out.result, &DisplayContext::default()).unwrap();
    assert_eq!(view.home_price, "$4,850,000");
    assert_eq!(view.down_payment, "$970,000");
    assert_eq!(view.down_payment_percent, "20.0%");
    assert_eq!(view.loan_type, "15 Year Fixed");
    assert_eq!(view.interest_rate, "6.5%");
}

#[test]
fn test_quote_in_chinese_yuan() {
    let params = LoanParameters::new(1_000_000.0).unwrap();
    let out = calculate_mortgage(&params.to_input()).unwrap();
    let ctx = DisplayContext::new(Language::Zh, DisplayCurrency::CNY);

    let view = render_quote(&out.result, &ctx).unwrap();
    assert_eq!(view.title, "房贷计算器");
    assert_eq!(view.home_price, "¥7,250,000");
    // 5,056.544... * 7.25 = 36,659.95...
    assert_eq!(view.monthly_payment, "¥36,660");
}
