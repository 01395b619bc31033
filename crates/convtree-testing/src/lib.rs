//! Test fixtures shared across the workspace. Dev-dependency only.

pub mod fixtures;

pub use fixtures::MappingFixture;
