//! Test helpers shared across crates.
//!
//! This crate provides a cloneable output sink for capturing what a flag set
//! prints, and shell-style splitting of command lines into arguments.

pub mod args;
pub mod output;
