//! Timekit - date/time normalization and system-interaction helpers
//!
//! This library is a small collection of standalone utilities: it reconciles
//! timestamps of mixed representations into local-zone instants, computes
//! calendar-period boundaries, and wraps a handful of system interactions
//! (deadline-guarded calls, hashing, shell execution, error-report
//! formatting). Each function is independent and callable in isolation.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`datetime`] - Timestamp normalization and period boundaries
//! * [`deadline`] - Watchdog-enforced deadlines for guarded calls
//! * [`hash`] - Content hashing and namespace-derived identifiers
//! * [`logging`] - Shared log sink bootstrap
//! * [`report`] - Single-line error reports
//! * [`shell`] - Shell execution and executable lookup

/// Configuration module for managing application settings
pub mod config;

/// Timestamp normalization, period boundaries, and delay humanization
pub mod datetime;

/// Watchdog-enforced deadlines for guarded calls
pub mod deadline;

/// Content hashing and namespace-derived identifiers
pub mod hash;

/// Logging bootstrap for the shared diagnostic sink
pub mod logging;

/// Single-line error reports for log transport
pub mod report;

/// Shell execution and executable lookup
pub mod shell;

// Re-export the core vocabulary types for convenient access
pub use datetime::{Delay, ParseError, Period, Timestamp};
