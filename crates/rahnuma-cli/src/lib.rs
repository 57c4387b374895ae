//! CLI library components for the Rahnuma guide.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
