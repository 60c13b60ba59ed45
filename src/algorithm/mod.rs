//! Word placement search: legality checks, candidates, backtracking, and retries

/// Depth-first placement search with undo
pub mod backtracking;
/// Multi-attempt generation with seeded retries
pub mod executor;
/// Candidate anchor generation from shared letters
pub mod intersections;
/// Reference-counted cell ownership
pub mod occupancy;
/// Placement legality and layout verification
pub mod validation;
