use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{json, Value};

use estate_calc_core::display::currency::{convert_price, symbol, usd_rate};
use estate_calc_core::DisplayCurrency;

/// Arguments for listing price conversion
#[derive(Args)]
pub struct ConvertPriceArgs {
    /// Stored USD price, e.g. "$8,880,000"
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    /// Target currency: USD, MYR, CNY
    #[arg(long, default_value = "MYR", conflicts_with = "all")]
    pub currency: String,

    /// Show the price in every supported currency
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Serialize)]
struct ConvertedPrice {
    currency: DisplayCurrency,
    symbol: &'static str,
    usd_rate: Decimal,
    converted_price: String,
}

fn convert_one(price: &str, currency: DisplayCurrency) -> ConvertedPrice {
    ConvertedPrice {
        currency,
        symbol: symbol(currency),
        usd_rate: usd_rate(currency),
        converted_price: convert_price(price, currency),
    }
}

pub fn run_convert_price(args: ConvertPriceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.all {
        let results: Vec<ConvertedPrice> = DisplayCurrency::ALL
            .iter()
            .map(|c| convert_one(&args.price, *c))
            .collect();
        return Ok(json!({ "original": args.price, "results": results }));
    }

    let currency: DisplayCurrency = args.currency.parse()?;
    Ok(json!({ "result": convert_one(&args.price, currency) }))
}
