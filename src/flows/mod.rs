//! Flows module - Multi-step commands built from the backends
//!
//! Provides:
//! - references: Discover, match, extract and report in one pass

pub mod references;
