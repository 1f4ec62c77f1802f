//! # tally
//!
//! reads news titles from a CSV file, counts their words and prints the
//! words ranked at or above a given position.

#![forbid(unsafe_code)]

pub mod helpers;
pub mod models;
