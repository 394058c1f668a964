//! Instance placement: one small cube per source mesh vertex.
//!
//! [`build_instances`] turns the flat vertex buffer into an
//! [`InstanceTable`] of translation transforms and randomly drawn static
//! parameters; [`cube_geometry`] is the shared mesh every instance draws.

mod builder;
mod cube;
mod vertices;

pub use builder::{build_instances, InstanceTable, StaticParams};
pub use cube::{cube_geometry, CubeGeometry, CubeVertex};
pub use vertices::VertexPositions;
