pub mod clean;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod ledger;
pub mod pipeline;
