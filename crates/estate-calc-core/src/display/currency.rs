//! Listing price conversion and en-US style money formatting.
//!
//! Listing prices are stored as USD strings such as `"$8,880,000"`. The site
//! shows them in the visitor's chosen currency using fixed reference rates.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::EstateCalcError;
use crate::types::{DisplayCurrency, Money};
use crate::EstateCalcResult;

/// Fractional digits kept when a USD price is shown as-is.
const USD_MAX_FRACTION_DIGITS: u32 = 3;

/// Units of `currency` per one USD.
pub fn usd_rate(currency: DisplayCurrency) -> Decimal {
    match currency {
        DisplayCurrency::USD => Decimal::ONE,
        DisplayCurrency::MYR => dec!(4.75),
        DisplayCurrency::CNY => dec!(7.25),
    }
}

pub fn symbol(currency: DisplayCurrency) -> &'static str {
    match currency {
        DisplayCurrency::USD => "$",
        DisplayCurrency::MYR => "RM",
        DisplayCurrency::CNY => "¥",
    }
}

/// Converts a USD amount into `currency`.
///
/// Fails when the converted amount exceeds the `Decimal` range.
pub fn convert(usd_amount: Money, currency: DisplayCurrency) -> EstateCalcResult<Money> {
    usd_amount
        .checked_mul(usd_rate(currency))
        .ok_or_else(|| EstateCalcError::InvalidInput {
            field: "amount".into(),
            reason: format!("{usd_amount} USD is too large to show in {currency}"),
        })
}

/// Converts a stored USD price string for display in `target`.
///
/// `$` signs and thousands separators are ignored. Input without a leading
/// number, or too large to convert, is returned unchanged. USD keeps up to
/// three fractional digits; other currencies are rounded to whole units.
pub fn convert_price(usd_price: &str, target: DisplayCurrency) -> String {
    let converted = match parse_price(usd_price).and_then(|amount| convert(amount, target)) {
        Ok(converted) => converted,
        Err(_) => return usd_price.to_string(),
    };

    let shown = match target {
        DisplayCurrency::USD => converted.round_dp_with_strategy(
            USD_MAX_FRACTION_DIGITS,
            RoundingStrategy::MidpointAwayFromZero,
        ),
        _ => round_whole(converted),
    };

    format!("{}{}", symbol(target), group_thousands(shown))
}

/// Formats an amount already in `currency`, rounded to whole units.
pub fn format_whole(amount: Money, currency: DisplayCurrency) -> String {
    format!("{}{}", symbol(currency), group_thousands(round_whole(amount)))
}

/// Parses the leading number of a price string, ignoring `$` and `,`.
pub fn parse_price(raw: &str) -> EstateCalcResult<Money> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    let (sign, digits) = match cleaned.strip_prefix(['-', '+']) {
        Some(rest) if cleaned.starts_with('-') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", cleaned.as_str()),
    };

    // Leading number only: stops at the first non-digit or a second '.'.
    let mut seen_point = false;
    let number: String = digits
        .chars()
        .take_while(|c| match *c {
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            c => c.is_ascii_digit(),
        })
        .collect();
    let numeric = format!("{sign}{number}");

    numeric
        .parse::<Decimal>()
        .map_err(|e| EstateCalcError::ParseError(format!("Not a price: '{raw}' ({e})")))
}

/// Lifts a calculator figure into `Money` for display.
pub fn money_from_f64(value: f64) -> EstateCalcResult<Money> {
    Decimal::from_f64(value).ok_or_else(|| EstateCalcError::InvalidInput {
        field: "amount".into(),
        reason: format!("{value} cannot be represented as a money amount"),
    })
}

fn round_whole(amount: Money) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders with `,` every three integer digits and no trailing zeros.
pub fn group_thousands(amount: Decimal) -> String {
    let text = amount.normalize().to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_price_usd_passthrough() {
        assert_eq!(convert_price("$8,880,000", DisplayCurrency::USD), "$8,880,000");
    }

    #[test]
    fn test_convert_price_myr() {
        // 3,200,000 * 4.75 = 15,200,000
        assert_eq!(convert_price("$3,200,000", DisplayCurrency::MYR), "RM15,200,000");
    }

    #[test]
    fn test_convert_price_cny_rounds_whole() {
        // 1,234.5 * 7.25 = 8,950.125
        assert_eq!(convert_price("$1,234.5", DisplayCurrency::CNY), "¥8,950");
    }

    #[test]
    fn test_convert_price_usd_keeps_three_decimals() {
        assert_eq!(convert_price("1234.56789", DisplayCurrency::USD), "$1,234.568");
    }

    #[test]
    fn test_convert_price_unparsable_unchanged() {
        assert_eq!(convert_price("Price on request", DisplayCurrency::MYR), "Price on request");
        assert_eq!(convert_price("", DisplayCurrency::CNY), "");
    }

    #[test]
    fn test_convert_overflow_is_an_error() {
        assert!(convert(Decimal::MAX, DisplayCurrency::MYR).is_err());
        assert_eq!(convert(Decimal::MAX, DisplayCurrency::USD).unwrap(), Decimal::MAX);
    }

    #[test]
    fn test_convert_price_too_large_unchanged() {
        let huge = "$79,228,162,514,264,337,593,543,950,335";
        assert_eq!(convert_price(huge, DisplayCurrency::MYR), huge);
        assert_eq!(convert_price(huge, DisplayCurrency::CNY), huge);
        assert_eq!(
            convert_price(huge, DisplayCurrency::USD),
            "$79,228,162,514,264,337,593,543,950,335"
        );
    }

    #[test]
    fn test_parse_price_stops_at_second_point() {
        assert_eq!(parse_price("$1,234.5.6").unwrap(), dec!(1234.5));
        assert_eq!(convert_price("$1,234.5.6", DisplayCurrency::USD), "$1,234.5");
    }

    #[test]
    fn test_parse_price_signs() {
        assert_eq!(parse_price("+2,500").unwrap(), dec!(2500));
        assert_eq!(parse_price("-$750").unwrap(), dec!(-750));
        assert!(parse_price("+").is_err());
    }

    #[test]
    fn test_parse_price_leading_number() {
        assert_eq!(parse_price("$4,850,000 USD").unwrap(), dec!(4850000));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(dec!(0)), "0");
        assert_eq!(group_thousands(dec!(999)), "999");
        assert_eq!(group_thousands(dec!(1000)), "1,000");
        assert_eq!(group_thousands(dec!(-1234567.50)), "-1,234,567.5");
    }

    #[test]
    fn test_format_whole_rounds_half_up() {
        assert_eq!(format_whole(dec!(5056.5), DisplayCurrency::USD), "$5,057");
        assert_eq!(format_whole(dec!(5056.49), DisplayCurrency::USD), "$5,056");
    }

    #[test]
    fn test_money_from_f64_rejects_nan() {
        assert!(money_from_f64(f64::NAN).is_err());
        assert!(money_from_f64(2_222.22).is_ok());
    }
}
