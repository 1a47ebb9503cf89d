//! Spoofed process launcher
//! Deploys a copy of the running executable under a game's name, spawns
//! it in dummy mode and force-kills the whole tree on stop

use std::collections::{HashMap, HashSet, VecDeque};
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::time::Duration;

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, RefreshKind, System};
use thiserror::Error;

/// Flag that switches the binary into dummy (child) mode.
pub const DUMMY_MODE_FLAG: &str = "--dummy-mode";

/// Suffix appended to target names that lack it.
pub const EXE_SUFFIX: &str = ".exe";

/// Delete attempts for a spoofed copy after stop, spaced by
/// [`CLEANUP_RETRY_DELAY`]. The OS can keep the file locked for a
/// moment after the process dies.
pub const CLEANUP_ATTEMPTS: u32 = 3;
pub const CLEANUP_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Errors raised while starting a spoofed process.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("target name is empty")]
    EmptyName,
    #[error("target name cannot contain path separators: {0}")]
    InvalidName(String),
    #[error("a spoofed process is already running")]
    AlreadyRunning,
    #[error("cannot resolve the running executable: {0}")]
    CurrentExe(#[source] io::Error),
    #[error("existing file {} is locked by another process: {source}", path.display())]
    Locked {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to copy executable to {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to start {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// True for the locked-destination case, which gets its own dialog
    /// telling the user to close the old process first.
    pub fn is_locked(&self) -> bool {
        matches!(self, LaunchError::Locked { .. })
    }
}

/// Normalize a user-typed target name into a spoofable file name.
///
/// Trims whitespace, rejects empty or path-escaping input and appends
/// [`EXE_SUFFIX`] when it is missing (checked case-insensitively, so
/// `game.EXE` is left alone).
pub fn normalize_name(raw: &str) -> Result<String, LaunchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LaunchError::EmptyName);
    }
    // The name becomes a file inside the spoof directory and must stay there.
    if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        return Err(LaunchError::InvalidName(trimmed.to_string()));
    }

    let mut name = trimmed.to_string();
    if !name.to_ascii_lowercase().ends_with(EXE_SUFFIX) {
        name.push_str(EXE_SUFFIX);
    }
    Ok(name)
}

/// Identity of the tracked spoofed process.
#[derive(Clone, Debug, PartialEq)]
pub struct SpoofInfo {
    pub pid: u32,
    pub name: String,
    pub exe_path: PathBuf,
}

/// What `stop` did, for logging and cleanup.
#[derive(Debug)]
pub struct StopOutcome {
    /// Path of the copied executable, to be deleted by the caller.
    pub exe_path: PathBuf,
    /// Whether the tree kill reached the root process.
    pub tree_killed: bool,
}

struct ActiveSpoof {
    child: Child,
    info: SpoofInfo,
}

/// Owns the single spoofed child process and the directory its copies
/// are deployed to. At most one child is tracked at a time.
pub struct Launcher {
    spoof_dir: PathBuf,
    active: Option<ActiveSpoof>,
}

impl Launcher {
    pub fn new(spoof_dir: PathBuf) -> Self {
        Self {
            spoof_dir,
            active: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Info about the tracked process, if one is running.
    pub fn active(&self) -> Option<&SpoofInfo> {
        self.active.as_ref().map(|active| &active.info)
    }

    /// Copy the running executable to `<spoof_dir>/<name>` and launch
    /// the copy in dummy mode.
    ///
    /// `name` must already be normalized with [`normalize_name`]. Any
    /// failure after the copy removes the partial file and leaves the
    /// launcher idle.
    pub fn start(&mut self, name: &str) -> Result<SpoofInfo, LaunchError> {
        if self.active.is_some() {
            return Err(LaunchError::AlreadyRunning);
        }

        let source = env::current_exe().map_err(LaunchError::CurrentExe)?;
        let dest = self.spoof_dir.join(name);
        deploy_copy(&source, &dest)?;

        let child = Command::new(&dest)
            .arg(DUMMY_MODE_FLAG)
            .spawn()
            .map_err(|e| {
                let _ = fs::remove_file(&dest);
                LaunchError::Spawn {
                    path: dest.clone(),
                    source: e,
                }
            })?;

        let info = SpoofInfo {
            pid: child.id(),
            name: name.to_string(),
            exe_path: dest,
        };
        tracing::info!("spawned spoofed process {} as {}", info.pid, info.name);
        self.active = Some(ActiveSpoof {
            child,
            info: info.clone(),
        });
        Ok(info)
    }

    /// Force-kill the tracked process and all of its descendants.
    ///
    /// The handle is cleared no matter what the kill reported, so the
    /// UI can always return to idle. The copied file's path comes back
    /// for cleanup.
    pub fn stop(&mut self) -> Option<StopOutcome> {
        let ActiveSpoof { mut child, info } = self.active.take()?;

        let tree_killed = kill_process_tree(info.pid);
        if !tree_killed {
            tracing::warn!(
                "tree kill did not reach pid {}, terminating the direct child only",
                info.pid
            );
        }
        // Direct terminate as a fallback, then reap the handle.
        let _ = child.kill();
        let _ = child.wait();

        tracing::info!("stopped spoofed process {}", info.name);
        Some(StopOutcome {
            exe_path: info.exe_path,
            tree_killed,
        })
    }

    /// Observe whether the tracked child already exited on its own.
    ///
    /// Clears the handle and returns the copy's path for cleanup when
    /// it has. Non-blocking.
    pub fn poll_exited(&mut self) -> Option<PathBuf> {
        let exited = match self.active.as_mut() {
            Some(active) => matches!(active.child.try_wait(), Ok(Some(_))),
            None => return None,
        };
        if !exited {
            return None;
        }

        let ActiveSpoof { info, .. } = self.active.take()?;
        tracing::info!("spoofed process {} exited on its own", info.name);
        Some(info.exe_path)
    }
}

/// Place a copy of `source` at `dest`, replacing any previous file.
///
/// A pre-existing file that cannot be deleted is reported as `Locked`:
/// a previous spoof is probably still running and holding it. A failed
/// copy removes whatever partial file it left behind.
fn deploy_copy(source: &Path, dest: &Path) -> Result<(), LaunchError> {
    if dest.exists() {
        fs::remove_file(dest).map_err(|e| LaunchError::Locked {
            path: dest.to_path_buf(),
            source: e,
        })?;
    }
    fs::copy(source, dest).map_err(|e| {
        let _ = fs::remove_file(dest);
        LaunchError::Copy {
            path: dest.to_path_buf(),
            source: e,
        }
    })?;
    Ok(())
}

/// Best-effort removal of a spoofed copy.
///
/// A file that is already gone counts as removed. Anything else is
/// reported as a failure for the caller to retry after a short delay.
pub fn remove_spoofed_copy(path: &Path) -> bool {
    match fs::remove_file(path) {
        Ok(()) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => true,
        Err(e) => {
            tracing::debug!("could not remove {} yet: {}", path.display(), e);
            false
        }
    }
}

/// Whether a process with exactly `name` currently shows up in the OS
/// process table. This is what an external presence reporter sees.
pub fn spoof_visible(name: &str) -> bool {
    let sys = process_snapshot();
    let target = OsStr::new(name);
    sys.processes().values().any(|process| process.name() == target)
}

/// Kill `pid` and every transitive child process.
///
/// The spawned copy may have spawned children of its own, and a plain
/// terminate of the root would orphan them. Children are terminated
/// before their parent; failures on descendants are logged. Returns
/// whether the root terminate succeeded.
pub fn kill_process_tree(root: u32) -> bool {
    let sys = process_snapshot();
    let children = child_map(&sys);

    let descendants = collect_descendants(&children, root);
    for pid in descendants.iter().rev() {
        if !terminate(&sys, *pid) {
            tracing::warn!("failed to terminate descendant process {}", pid);
        }
    }
    terminate(&sys, root)
}

fn process_snapshot() -> System {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new()),
    );
    sys.refresh_processes_specifics(ProcessesToUpdate::All, ProcessRefreshKind::new());
    sys
}

/// Parent pid -> child pids, from a process snapshot.
fn child_map(sys: &System) -> HashMap<u32, Vec<u32>> {
    let mut map: HashMap<u32, Vec<u32>> = HashMap::new();
    for (pid, process) in sys.processes() {
        if let Some(parent) = process.parent() {
            map.entry(parent.as_u32()).or_default().push(pid.as_u32());
        }
    }
    map
}

/// Transitive children of `root` in breadth-first order.
///
/// Guards against cycles: pid reuse between snapshot rows can make a
/// stale parent link point back into the tree.
fn collect_descendants(children: &HashMap<u32, Vec<u32>>, root: u32) -> Vec<u32> {
    let mut seen = HashSet::from([root]);
    let mut out = Vec::new();
    let mut queue = VecDeque::from([root]);

    while let Some(pid) = queue.pop_front() {
        if let Some(kids) = children.get(&pid) {
            for &kid in kids {
                if seen.insert(kid) {
                    out.push(kid);
                    queue.push_back(kid);
                }
            }
        }
    }
    out
}

/// Force-terminate a process by PID.
/// Returns true if successful, false otherwise.
#[cfg(windows)]
fn terminate(_sys: &System, pid: u32) -> bool {
    use windows::Win32::Foundation::CloseHandle;
    use windows::Win32::System::Threading::{OpenProcess, TerminateProcess, PROCESS_TERMINATE};

    unsafe {
        let handle = match OpenProcess(PROCESS_TERMINATE, false, pid) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let result = TerminateProcess(handle, 1).is_ok();
        let _ = CloseHandle(handle);
        result
    }
}

/// Force-terminate a process by PID (SIGKILL).
/// Returns true if successful, false otherwise.
#[cfg(not(windows))]
fn terminate(sys: &System, pid: u32) -> bool {
    use sysinfo::Pid;

    sys.process(Pid::from_u32(pid))
        .map(|process| process.kill())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(windows)]
    fn spawn_sleeper() -> Child {
        Command::new("cmd")
            .args(["/C", "ping", "-n", "10", "127.0.0.1"])
            .spawn()
            .unwrap()
    }

    #[cfg(not(windows))]
    fn spawn_sleeper() -> Child {
        Command::new("sleep").arg("10").spawn().unwrap()
    }

    #[cfg(windows)]
    fn spawn_short_lived() -> Child {
        Command::new("cmd").args(["/C", "exit"]).spawn().unwrap()
    }

    #[cfg(not(windows))]
    fn spawn_short_lived() -> Child {
        Command::new("true").spawn().unwrap()
    }

    fn fake_active(child: Child) -> ActiveSpoof {
        let info = SpoofInfo {
            pid: child.id(),
            name: "Fake.exe".to_string(),
            exe_path: PathBuf::from("Fake.exe"),
        };
        ActiveSpoof { child, info }
    }

    #[test]
    fn normalize_appends_exe_suffix() {
        assert_eq!(normalize_name("Valorant").unwrap(), "Valorant.exe");
        assert_eq!(normalize_name("  Valorant  ").unwrap(), "Valorant.exe");
    }

    #[test]
    fn normalize_keeps_existing_suffix_any_case() {
        assert_eq!(normalize_name("Valorant.exe").unwrap(), "Valorant.exe");
        assert_eq!(normalize_name("game.EXE").unwrap(), "game.EXE");
    }

    #[test]
    fn normalize_rejects_empty_input() {
        assert!(matches!(normalize_name(""), Err(LaunchError::EmptyName)));
        assert!(matches!(normalize_name("   "), Err(LaunchError::EmptyName)));
    }

    #[test]
    fn normalize_rejects_path_escapes() {
        for bad in ["a/b", "a\\b", "..", ".", "../x", "..\\x"] {
            assert!(
                matches!(normalize_name(bad), Err(LaunchError::InvalidName(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn deploy_replaces_existing_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.bin");
        let dest = dir.path().join("Valorant.exe");
        fs::write(&source, b"new bytes").unwrap();
        fs::write(&dest, b"stale copy").unwrap();

        deploy_copy(&source, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"new bytes");
    }

    #[test]
    fn deploy_missing_source_leaves_no_partial_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("does-not-exist");
        let dest = dir.path().join("Valorant.exe");

        let err = deploy_copy(&source, &dest).unwrap_err();
        assert!(matches!(err, LaunchError::Copy { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn start_while_running_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut launcher = Launcher::new(dir.path().to_path_buf());
        launcher.active = Some(fake_active(spawn_sleeper()));

        let err = launcher.start("Other.exe").unwrap_err();
        assert!(matches!(err, LaunchError::AlreadyRunning));
        assert!(launcher.is_running());

        let outcome = launcher.stop().unwrap();
        assert_eq!(outcome.exe_path, PathBuf::from("Fake.exe"));
        assert!(!launcher.is_running());
    }

    #[test]
    fn stop_clears_handle_and_permits_restart() {
        let dir = TempDir::new().unwrap();
        let mut launcher = Launcher::new(dir.path().to_path_buf());
        launcher.active = Some(fake_active(spawn_sleeper()));

        launcher.stop().unwrap();
        assert!(launcher.active().is_none());

        // the slot is free again
        launcher.active = Some(fake_active(spawn_sleeper()));
        assert!(launcher.is_running());
        launcher.stop().unwrap();
    }

    #[test]
    fn stop_when_idle_is_a_no_op() {
        let mut launcher = Launcher::new(std::env::temp_dir());
        assert!(launcher.stop().is_none());
        assert!(launcher.poll_exited().is_none());
    }

    #[test]
    fn poll_observes_child_exit() {
        let dir = TempDir::new().unwrap();
        let mut launcher = Launcher::new(dir.path().to_path_buf());
        launcher.active = Some(fake_active(spawn_short_lived()));

        let mut cleaned = None;
        for _ in 0..50 {
            if let Some(path) = launcher.poll_exited() {
                cleaned = Some(path);
                break;
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        assert_eq!(cleaned, Some(PathBuf::from("Fake.exe")));
        assert!(!launcher.is_running());
    }

    #[test]
    fn kill_process_tree_terminates_a_live_child() {
        let mut child = spawn_sleeper();
        // let the process land in the snapshot
        std::thread::sleep(Duration::from_millis(200));

        assert!(kill_process_tree(child.id()));
        let status = child.wait().unwrap();
        assert!(!status.success());
    }

    #[test]
    fn collect_descendants_walks_transitive_children() {
        let mut children = HashMap::new();
        children.insert(1, vec![2, 3]);
        children.insert(2, vec![4]);
        children.insert(9, vec![10]);

        let mut found = collect_descendants(&children, 1);
        found.sort_unstable();
        assert_eq!(found, [2, 3, 4]);
    }

    #[test]
    fn collect_descendants_tolerates_stale_cycles() {
        let mut children = HashMap::new();
        children.insert(1, vec![2]);
        children.insert(2, vec![1]);

        assert_eq!(collect_descendants(&children, 1), [2]);
    }

    #[test]
    fn remove_spoofed_copy_treats_missing_as_removed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.exe");
        assert!(remove_spoofed_copy(&path));

        fs::write(&path, b"copy").unwrap();
        assert!(remove_spoofed_copy(&path));
        assert!(!path.exists());
    }
}
