//! Common infrastructure for the Preen cleaner.
//!
//! This crate provides shared infrastructure used by all cleaner components:
//! - **Report System** - diagnostic codes and the append-only report sink

pub mod report;
