//! Persistence adapters and file loading for the scoring engine.

pub mod archive;
pub mod load;
pub mod repo;
pub mod store;

pub use archive::*;
pub use load::*;
pub use repo::*;
pub use store::*;
