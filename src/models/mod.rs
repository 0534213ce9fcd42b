pub mod change;
pub mod message;
pub mod series;
