//! Labor Cost and Prevailing Wage Impact Engine
//!
//! This crate costs a contractor project's labor from a breakdown of work
//! items, applies the proportional markups, and reports how much the
//! prevailing wage requirement adds over the same work at market rates.
//! Craft rates, regional overrides and markups come from a YAML rate table.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
