pub mod compare;
pub mod rating;
pub mod simulate;
pub mod spend;
