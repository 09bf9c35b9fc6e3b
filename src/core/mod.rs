//! Core building blocks: cost formulas, file-name layout selection, operand
//! derivation and comparison series, and run parameters. These are the
//! primitives consumed by the high-level `api` module.
pub mod formulas;
pub mod model;
pub mod params;
pub mod selector;
