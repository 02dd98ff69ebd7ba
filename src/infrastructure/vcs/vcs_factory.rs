use super::bzr_vcs::BzrVcs;
use super::git_vcs::GitVcs;
use super::hg_vcs::HgVcs;
use super::svn_vcs::SvnVcs;
use super::vcs_interface::VcsOperations;
use crate::domain::value_objects::vcs_type::VcsType;
use std::path::Path;
use std::sync::Arc;

/// Factory for creating VCS implementation instances
pub struct VcsFactory;

impl VcsFactory {
    /// Create a VCS operations instance for the given VCS type
    pub fn create_vcs(vcs_type: VcsType) -> Arc<dyn VcsOperations> {
        match vcs_type {
            VcsType::Bzr => Arc::new(BzrVcs::new()),
            VcsType::Git => Arc::new(GitVcs::new()),
            VcsType::Hg => Arc::new(HgVcs::new()),
            VcsType::Svn => Arc::new(SvnVcs::new()),
        }
    }

    /// Detect which VCS owns a working copy by metadata directory presence,
    /// in fixed priority order (bzr, git, hg, svn). When more than one
    /// metadata directory exists the first match wins.
    pub fn detect_vcs_type(repo_path: &Path) -> Option<VcsType> {
        VcsType::DETECTION_ORDER
            .into_iter()
            .find(|vcs| repo_path.join(vcs.metadata_dir()).exists())
    }
}
