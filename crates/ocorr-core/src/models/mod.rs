//! Data models for extracted occurrence reports and pipeline configuration.

pub mod config;
pub mod occurrence;
