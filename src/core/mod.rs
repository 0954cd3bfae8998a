//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Scan configuration and the reference collection
//! - Error types
//! - Plain-text rendering
//! - Path utilities

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
