pub mod elements;
pub mod frame;
pub mod kepler;
pub mod model;
pub mod path;

pub use elements::{ElementSnapshot, OrbitalElements};
pub use frame::{FrameShape, OrbitalFrame};
pub use kepler::solve_kepler;
pub use model::{FixedOrbit, OrbitModel};
pub use path::{OrbitPath, OrbitPathSampler};
