//! pwcheck Library
//!
//! Binary-side glue for the password checker: argument parsing and headless
//! mode. The screen itself lives in `pwcheck-tui`.

pub mod cli;
pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use pwcheck_tui::run;
