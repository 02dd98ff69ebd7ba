/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - VCS operations (Bazaar, Git, Mercurial, Subversion)
/// - Process execution for the `go` toolchain
pub mod process;
pub mod vcs;

// Re-export commonly used types
pub use process::CommandRunner;
pub use vcs::{VcsError, VcsFactory, VcsOperations};
