//! Command implementations, one module per CLI verb

pub mod apply;
pub mod clean;
pub mod list;
