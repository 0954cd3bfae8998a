//! Backends module - File operations
//!
//! Provides:
//! - scan: File discovery with walkdir
//! - imports: Line matching and reference extraction

pub mod imports;
pub mod scan;
