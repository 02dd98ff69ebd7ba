use crate::domain::value_objects::vcs_type::VcsType;
use std::path::Path;
use std::time::Duration;

/// Interval between lock-marker polls.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Check whether any known VCS lock marker exists under `path`.
///
/// This is a heuristic existence check, not a mutual-exclusion primitive: a
/// marker can appear or vanish between the check and whatever the caller does
/// next. It only reduces the chance of racing a VCS operation already running
/// against the same working copy.
pub fn is_workspace_in_use(path: &Path) -> bool {
    VcsType::DETECTION_ORDER
        .into_iter()
        .any(|vcs| path.join(vcs.lock_marker()).exists())
}

/// Poll until no lock marker is present under `path`.
pub async fn wait_until_free(path: &Path) {
    while is_workspace_in_use(path) {
        tracing::debug!(path = %path.display(), "workspace in use, waiting");
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plain_directory_not_in_use() {
        let dir = TempDir::new().unwrap();
        assert!(!is_workspace_in_use(dir.path()));
    }

    #[test]
    fn test_git_index_lock_marks_in_use() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        assert!(!is_workspace_in_use(dir.path()));

        std::fs::write(dir.path().join(".git/index.lock"), "").unwrap();
        assert!(is_workspace_in_use(dir.path()));
    }

    #[test]
    fn test_hg_store_lock_marks_in_use() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".hg/store")).unwrap();
        std::fs::write(dir.path().join(".hg/store/lock"), "").unwrap();
        assert!(is_workspace_in_use(dir.path()));
    }

    #[test]
    fn test_bzr_checkout_lock_marks_in_use() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".bzr/checkout")).unwrap();
        std::fs::write(dir.path().join(".bzr/checkout/lock"), "").unwrap();
        assert!(is_workspace_in_use(dir.path()));
    }

    #[test]
    fn test_svn_lock_marks_in_use() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".svn")).unwrap();
        std::fs::write(dir.path().join(".svn/lock"), "").unwrap();
        assert!(is_workspace_in_use(dir.path()));
    }

    #[tokio::test]
    async fn test_wait_until_free_returns_after_marker_removed() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let marker = dir.path().join(".git/index.lock");
        std::fs::write(&marker, "").unwrap();

        let path = dir.path().to_path_buf();
        let waiter = tokio::spawn(async move { wait_until_free(&path).await });

        tokio::time::sleep(Duration::from_millis(100)).await;
        std::fs::remove_file(&marker).unwrap();

        tokio::time::timeout(Duration::from_secs(5), waiter)
            .await
            .expect("waiter should finish once the marker is gone")
            .unwrap();
    }
}
