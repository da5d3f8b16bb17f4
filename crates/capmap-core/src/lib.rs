//! capmap-core: Shared types, configuration, and error handling for capmap.
//!
//! This crate provides the foundational types used across all capmap components:
//! - Relationship records as read from the source CSV
//! - Nodes and edges of the capability graph
//! - Category styles (group, colour, shape)
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{CentralityConfig, ReportConfig, StylePalette};
pub use error::CapmapError;
pub use types::{CategoryStyle, Edge, Node, RelationshipRecord, OTHER_CATEGORY};
