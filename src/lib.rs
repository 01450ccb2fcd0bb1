//! Interactive payroll console.
//!
//! This crate records employees paid on a fixed salary, by the hour or per
//! project, and prints a payroll report. The [`session`] module drives the
//! console menu; the remaining modules are usable on their own.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod session;
pub mod validation;
