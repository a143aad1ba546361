pub mod currency;
pub mod labels;
pub mod quote;
