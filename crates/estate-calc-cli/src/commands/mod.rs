pub mod mortgage;
pub mod price;
