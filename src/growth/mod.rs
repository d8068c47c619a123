//! Recursive plant growth
//!
//! The plant is regenerated from scratch on every call; nothing persists
//! between frames. Each branch carries its own origin and orientation, so
//! siblings never see each other's transforms.

pub mod branching;

pub use branching::{render_growth, BranchFrame, BranchSlot, GrowthStats, BRANCH_SLOTS};
