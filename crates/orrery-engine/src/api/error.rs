use thiserror::Error;

/// Result type for catalogue and system construction.
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Configuration errors detected while building the body hierarchy.
///
/// These are fatal to the body being set up and are reported before the
/// first tick. The propagation pass itself has no error path.
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    #[error("{body}: unknown parent {parent} (parents must be declared before their children)")]
    UnknownParent { body: String, parent: String },

    #[error("{body}: only one root body is allowed, {root} is already the root")]
    MultipleRoots { body: String, root: String },

    #[error("{0}: orbital elements require a parent body")]
    ElementsWithoutParent(String),

    #[error("{0}: a fixed orbit requires a parent body")]
    OrbitWithoutParent(String),

    #[error("{body}: radius must be finite and non-negative, got {radius}")]
    InvalidRadius { body: String, radius: f64 },

    #[error("{body}: visual scale must be finite and positive, got {scale}")]
    InvalidScale { body: String, scale: f64 },

    #[error("{body}: orbit radius must be finite and non-negative, got {radius}")]
    InvalidOrbitRadius { body: String, radius: f64 },

    #[error("{body}: eccentricity {eccentricity} is outside [0, 1)")]
    EccentricityOutOfRange { body: String, eccentricity: f64 },

    #[error("{body}: period must be finite and non-zero, got {period}")]
    InvalidPeriod { body: String, period: f64 },

    #[error("ring attached to unknown body: {0}")]
    UnknownRingBody(String),

    #[error("catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),
}
