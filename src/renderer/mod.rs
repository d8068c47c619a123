//! Renderer-facing interfaces
//!
//! The crate never talks to a graphics API directly. Geometry is streamed
//! into a [`GeometrySink`]; textures are decoded into raw RGB buffers for
//! whichever renderer sits on the other side.

pub mod mesh;
pub mod sink;
pub mod texture;
pub mod vertex;

pub use mesh::{GeometryBuffer, LineSegment, Point, Triangle};
pub use sink::{GeometrySink, Material};
pub use texture::{decode, DecodedImage, PngHeader};
pub use vertex::MeshVertex;
