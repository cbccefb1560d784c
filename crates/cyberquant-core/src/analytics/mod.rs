pub mod benchmark;
pub mod insights;
pub mod statistics;
