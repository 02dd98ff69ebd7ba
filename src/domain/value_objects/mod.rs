pub mod import_path;
pub mod vcs_type;

pub use import_path::{ImportPath, ImportPathError};
pub use vcs_type::{VcsType, VcsTypeError};
