pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod records;
pub mod scorer;
pub mod stats;
pub mod tally;
pub mod util;
// cmd and reports are binary modules (declared in main.rs).
