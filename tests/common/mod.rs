//! Shared test utilities for sortrace
//!
//! - Reference sorting and domain-aware input generation
//! - Trace invariant checks shared by every algorithm

pub mod fixtures;
