pub mod bzr_vcs;
pub mod git_vcs;
pub mod hg_vcs;
pub mod lock;
pub mod svn_vcs;
pub mod vcs_factory;
pub mod vcs_interface;

pub use lock::{is_workspace_in_use, wait_until_free};
pub use vcs_factory::VcsFactory;
pub use vcs_interface::{VcsError, VcsOperations};
