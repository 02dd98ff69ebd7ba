pub mod manifest;
pub mod workspace;

pub use manifest::{DependencyEntry, Manifest, DEFAULT_MANIFEST_NAME};
pub use workspace::{GoWorkspace, GOPATH_VAR};
