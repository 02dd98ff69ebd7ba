use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version control system owning a package working copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsType {
    /// GNU Bazaar
    Bzr,
    /// Git
    Git,
    /// Mercurial
    Hg,
    /// Subversion
    Svn,
}

impl VcsType {
    /// Detection priority used when a working copy carries more than one
    /// metadata directory. The first match wins.
    pub const DETECTION_ORDER: [VcsType; 4] =
        [VcsType::Bzr, VcsType::Git, VcsType::Hg, VcsType::Svn];

    /// Get the metadata directory name for this VCS
    pub fn metadata_dir(&self) -> &'static str {
        match self {
            VcsType::Bzr => ".bzr",
            VcsType::Git => ".git",
            VcsType::Hg => ".hg",
            VcsType::Svn => ".svn",
        }
    }

    /// Lock marker path, relative to the working copy root, that signals an
    /// in-flight operation by the VCS itself.
    pub fn lock_marker(&self) -> &'static str {
        match self {
            VcsType::Bzr => ".bzr/checkout/lock",
            VcsType::Git => ".git/index.lock",
            VcsType::Hg => ".hg/store/lock",
            VcsType::Svn => ".svn/lock",
        }
    }

    /// Get the standard executable name for this VCS
    pub fn executable_name(&self) -> &'static str {
        match self {
            VcsType::Bzr => "bzr",
            VcsType::Git => "git",
            VcsType::Hg => "hg",
            VcsType::Svn => "svn",
        }
    }

    /// Argument vector for quietly pinning a working copy to `revision`.
    /// The revision string is passed through literally, empty or not.
    pub fn pin_args(&self, revision: &str) -> Vec<String> {
        match self {
            VcsType::Bzr => vec![
                "update".to_string(),
                "-q".to_string(),
                "-r".to_string(),
                revision.to_string(),
            ],
            VcsType::Git => vec![
                "checkout".to_string(),
                "-q".to_string(),
                revision.to_string(),
            ],
            VcsType::Hg => vec![
                "update".to_string(),
                "-q".to_string(),
                revision.to_string(),
            ],
            VcsType::Svn => vec![
                "update".to_string(),
                "-q".to_string(),
                "-r".to_string(),
                revision.to_string(),
            ],
        }
    }
}

impl fmt::Display for VcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable_name())
    }
}

impl FromStr for VcsType {
    type Err = VcsTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bzr" | "bazaar" => Ok(VcsType::Bzr),
            "git" => Ok(VcsType::Git),
            "hg" | "mercurial" => Ok(VcsType::Hg),
            "svn" | "subversion" => Ok(VcsType::Svn),
            _ => Err(VcsTypeError::UnsupportedVcsType(s.to_string())),
        }
    }
}

/// Errors that can occur when working with VCS types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsTypeError {
    /// The specified VCS type is not supported
    UnsupportedVcsType(String),
}

impl fmt::Display for VcsTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VcsTypeError::UnsupportedVcsType(vcs) => {
                write!(
                    f,
                    "Unsupported VCS type: '{}'. Supported types are: bzr, git, hg, svn",
                    vcs
                )
            }
        }
    }
}

impl std::error::Error for VcsTypeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vcs_type_from_str() {
        assert_eq!("bzr".parse::<VcsType>().unwrap(), VcsType::Bzr);
        assert_eq!("bazaar".parse::<VcsType>().unwrap(), VcsType::Bzr);
        assert_eq!("git".parse::<VcsType>().unwrap(), VcsType::Git);
        assert_eq!("hg".parse::<VcsType>().unwrap(), VcsType::Hg);
        assert_eq!("mercurial".parse::<VcsType>().unwrap(), VcsType::Hg);
        assert_eq!("svn".parse::<VcsType>().unwrap(), VcsType::Svn);

        assert!("cvs".parse::<VcsType>().is_err());
    }

    #[test]
    fn test_vcs_type_display() {
        assert_eq!(VcsType::Bzr.to_string(), "bzr");
        assert_eq!(VcsType::Git.to_string(), "git");
        assert_eq!(VcsType::Hg.to_string(), "hg");
        assert_eq!(VcsType::Svn.to_string(), "svn");
    }

    #[test]
    fn test_metadata_dirs() {
        assert_eq!(VcsType::Bzr.metadata_dir(), ".bzr");
        assert_eq!(VcsType::Git.metadata_dir(), ".git");
        assert_eq!(VcsType::Hg.metadata_dir(), ".hg");
        assert_eq!(VcsType::Svn.metadata_dir(), ".svn");
    }

    #[test]
    fn test_lock_markers() {
        assert_eq!(VcsType::Bzr.lock_marker(), ".bzr/checkout/lock");
        assert_eq!(VcsType::Git.lock_marker(), ".git/index.lock");
        assert_eq!(VcsType::Hg.lock_marker(), ".hg/store/lock");
        assert_eq!(VcsType::Svn.lock_marker(), ".svn/lock");
    }

    #[test]
    fn test_detection_order_puts_bzr_first() {
        assert_eq!(
            VcsType::DETECTION_ORDER,
            [VcsType::Bzr, VcsType::Git, VcsType::Hg, VcsType::Svn]
        );
    }

    #[test]
    fn test_pin_args() {
        assert_eq!(
            VcsType::Git.pin_args("v1.0.2"),
            vec!["checkout", "-q", "v1.0.2"]
        );
        assert_eq!(
            VcsType::Svn.pin_args("1234"),
            vec!["update", "-q", "-r", "1234"]
        );
        assert_eq!(VcsType::Hg.pin_args(""), vec!["update", "-q", ""]);
    }

    #[test]
    fn test_serde() {
        let git = VcsType::Git;
        let json = serde_json::to_string(&git).unwrap();
        assert_eq!(json, "\"git\"");

        let deserialized: VcsType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, VcsType::Git);
    }
}
