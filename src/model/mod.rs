//! Model artifact and store

pub mod artifact;
pub mod store;

pub use artifact::{LoadError, ModelArtifact, Predictor};
pub use store::ModelStore;
