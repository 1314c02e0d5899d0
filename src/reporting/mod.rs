//! Reporting
//!
//! This module handles structured logging for the application.

pub mod logging;
