pub mod distributions;
pub mod factors;
