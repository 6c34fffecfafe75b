//! Earnings accrual engine.
//!
//! This crate computes how much a worker has earned so far today, this week
//! and this month from a salary, the day's paid time segments and the local
//! wall clock, and keeps that figure current with a periodic scheduler that
//! flags every whole-cent change for display and audio observers.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
