pub mod instance;

pub use instance::{BodyInstance, InstanceBuffer, PathBuffer, PathVertex};
