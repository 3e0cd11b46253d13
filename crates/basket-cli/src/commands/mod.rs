//! Command implementations.

pub mod config;
pub mod datasets;
pub mod mine;

pub use self::config::execute_config;
pub use self::datasets::execute_datasets;
pub use self::mine::execute_mine;
