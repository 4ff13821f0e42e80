pub mod sources;

pub use sources::{select, ArtifactSource, StaticSource};
