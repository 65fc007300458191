pub mod catalog;
pub mod config;
pub mod engine;
pub mod message;
pub mod model;
pub mod types;

pub use catalog::*;
pub use config::*;
pub use engine::*;
pub use message::*;
pub use model::*;
pub use types::*;
