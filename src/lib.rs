//! Rental property investment metrics: purchase cost, mortgage repayments,
//! rental income and yield.

pub mod core;

pub use crate::core::*;
