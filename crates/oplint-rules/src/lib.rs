pub mod advisor;
pub mod host;
pub mod registry;
pub mod rule;
pub mod types;

pub use advisor::*;
pub use host::*;
pub use registry::*;
pub use rule::*;
pub use types::*;
