//! Project management: loading a Go package directory.

mod loader;

pub use loader::{Package, load_package};
