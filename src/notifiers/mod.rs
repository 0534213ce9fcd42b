pub mod base;
pub mod console;
pub mod discord;
