//! Command Line Interface (CLI) layer for matcost.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): merge flags over an optional
//! config file, plan and render the figure, then open the viewer.
//!
//! If you are embedding matcost into another application, prefer using
//! the high-level `matcost::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
