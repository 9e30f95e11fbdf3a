//! Utility modules: build info, JSON persistence helpers.

pub mod build_info;
pub mod persistence;
