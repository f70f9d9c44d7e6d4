//! csv2vhdl - Library for converting CSV sprite grids into VHDL constants
//!
//! This library provides functionality to:
//! - Load comma-separated grids of palette indices
//! - Normalize a grid to a fixed sprite size via a 4-bit palette mapping
//! - Serialize the result as a VHDL array-constant literal

pub mod cli;
pub mod encoder;
pub mod loader;
pub mod output;
pub mod palette;
pub mod picker;
pub mod vhdl;
