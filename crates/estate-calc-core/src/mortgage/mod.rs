pub mod params;
pub mod payment;
