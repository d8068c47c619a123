//! Scene layout, door and static fixtures

pub mod door;
pub mod fixtures;
pub mod layout;

pub use door::{DoorAnimation, DoorState};
pub use layout::{ChuteGeometry, SceneLayout};
