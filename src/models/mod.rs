//! Core data models for the Prevailing Wage Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod labor_summary;
mod project;
mod work_item;

pub use audit::{AuditStep, AuditWarning};
pub use labor_summary::{LaborSummary, LineItemBreakdown, RateSource, SkippedItem};
pub use project::{ProjectCostResult, ProjectInputs};
pub use work_item::{WageMode, WorkItem};
