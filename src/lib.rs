//! Pay-Cycle Engine for driver and carrier settlements
//!
//! This crate computes upcoming pay periods (period start, period end, pay
//! date) from an administrator-configured pay plan, and places payable
//! activity into the period it settles in.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
