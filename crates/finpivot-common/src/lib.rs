//! Shared utilities for finpivot crates.
//!
//! This crate provides Polars column helpers and amount parsing for the
//! Brazilian-formatted financial exports.

pub mod polars;

pub use crate::polars::{amount_values, is_blank, label_values, parse_amount, string_values};
