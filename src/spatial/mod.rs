//! Spatial data structures for word layouts
//!
//! This module contains:
//! - The fixed-size letter grid and its blank sentinel
//! - Orientations, anchors, and committed word placements
//! - Bounding-box trimming of finished grids

/// Letter grid storage
pub mod grid;
/// Orientations, anchors, and placement records
pub mod placement;
/// Cropping grids to their occupied region
pub mod trim;

pub use grid::{Cell, Grid};
pub use placement::{Anchor, Orientation, PlacedSet, PlacedWord, Placement};
pub use trim::trim;
