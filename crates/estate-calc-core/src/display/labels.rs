//! English and Chinese text for the mortgage calculator card.

use crate::types::Language;

/// Static text for the mortgage calculator card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorLabels {
    pub title: &'static str,
    pub home_price: &'static str,
    pub down_payment: &'static str,
    pub loan_details: &'static str,
    pub loan_type: &'static str,
    pub interest_rate: &'static str,
    pub estimated_monthly_payment: &'static str,
    pub disclaimer: &'static str,
    pub currency: &'static str,
}

const EN: CalculatorLabels = CalculatorLabels {
    title: "Mortgage Calculator",
    home_price: "Home Price",
    down_payment: "Down Payment",
    loan_details: "Loan Details",
    loan_type: "Loan Type",
    interest_rate: "Interest Rate",
    estimated_monthly_payment: "Estimated Monthly Payment",
    disclaimer: "*This calculator provides an estimate only. Actual payments may vary.",
    currency: "Currency:",
};

const ZH: CalculatorLabels = CalculatorLabels {
    title: "房贷计算器",
    home_price: "房屋价格",
    down_payment: "首付款",
    loan_details: "贷款详情",
    loan_type: "贷款类型",
    interest_rate: "利率",
    estimated_monthly_payment: "预计月供",
    disclaimer: "*本计算器仅提供估算，实际还款金额可能有所不同。",
    currency: "货币：",
};

pub fn calculator_labels(language: Language) -> &'static CalculatorLabels {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}

/// Select-box text for a fixed-rate term, e.g. "30 Year Fixed".
pub fn term_label(years: u32, language: Language) -> String {
    match language {
        Language::En => format!("{years} Year Fixed"),
        Language::Zh => format!("{years}年固定利率"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_language() {
        assert_eq!(calculator_labels(Language::En).title, "Mortgage Calculator");
        assert_eq!(calculator_labels(Language::Zh).title, "房贷计算器");
    }

    #[test]
    fn test_term_label() {
        assert_eq!(term_label(15, Language::En), "15 Year Fixed");
        assert_eq!(term_label(30, Language::Zh), "30年固定利率");
    }
}
