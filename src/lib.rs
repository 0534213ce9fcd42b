pub mod config;
pub mod errors;
pub mod models;
pub mod notifiers;
pub mod scheduler;
pub mod services;
pub mod sources;
pub mod util;

#[cfg(test)]
mod testing;

// 常用类型
pub use config::Config;
pub use errors::{Result, StonksError};
pub use models::message::NotificationMessage;
pub use services::market_update::{MarketUpdateJob, RunReport};
