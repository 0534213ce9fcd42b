pub mod market_update;
