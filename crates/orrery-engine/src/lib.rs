pub mod api;
pub mod core;
pub mod components;
pub mod orbit;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::PropagatorConfig;
pub use api::error::{CatalogueError, CatalogueResult};
pub use api::types::BodyId;
pub use components::body::{Body, BodyDesc};
pub use core::calendar::{julian_date, CalendarDate, DAYS_PER_CENTURY, J2000_JD};
pub use core::clock::SimulationClock;
pub use core::propagate::{evaluate, tick, TickReport};
pub use core::system::SolarSystem;
pub use orbit::{
    solve_kepler, ElementSnapshot, FixedOrbit, OrbitModel, OrbitPath, OrbitPathSampler,
    OrbitalElements, OrbitalFrame,
};
pub use renderer::instance::{BodyInstance, InstanceBuffer, PathBuffer, PathVertex};
pub use input::commands::{ClockCommand, CommandQueue};
pub use assets::builtin::builtin_catalogue;
pub use assets::catalogue::{BodyRecord, Catalogue, FixedOrbitRecord, RingRecord};
pub use extensions::{RingPlacement, RingSet};
