use crate::context::JobContext;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Changes the process working directory and restores it on drop.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; hold the lock even if a
        // #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A temporary job layout mirroring a hosted runner:
/// `<tmp>/work/repo` is the runner workspace and `<tmp>/work/repo/repo` the
/// checked-out repository.
pub(crate) struct TestJob {
    _temp: TempDir,
    pub(crate) ctx: JobContext,
}

impl TestJob {
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let runner_workspace = temp.path().join("work").join("repo");
        let workspace = runner_workspace.join("repo");
        std::fs::create_dir_all(&workspace).unwrap();

        Self {
            ctx: JobContext::new(workspace, runner_workspace).unwrap(),
            _temp: temp,
        }
    }

    pub(crate) fn workspace(&self) -> &Path {
        &self.ctx.workspace
    }

    /// Write a file relative to the workspace, creating parent directories.
    pub(crate) fn write(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.ctx.workspace.join(relative), content)
    }

    /// Write a file relative to the runner workspace (outside the repository).
    pub(crate) fn write_outside(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.ctx.runner_workspace.join(relative), content)
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
    path.to_path_buf()
}
