//! Process-tree discovery over procfs.
//!
//! `/proc/<pid>/status` carries a `PPid:` line for every process; one pass
//! over the numeric `/proc` entries builds the full parent/child map, and a
//! breadth-first walk from the head pid yields the head plus all of its
//! descendants.

use std::collections::{HashMap, VecDeque};
use std::path::Path;

use tracing::debug;

use crate::error::ProcError;

/// Pids of `head` and every descendant, in breadth-first order.
pub fn descendants(head: libc::pid_t) -> Result<Vec<libc::pid_t>, ProcError> {
    descendants_in(Path::new("/proc"), head)
}

/// Same as [`descendants`], rooted at an arbitrary procfs mount. Split out
/// so tests can run against a synthetic tree.
pub fn descendants_in(proc_root: &Path, head: libc::pid_t) -> Result<Vec<libc::pid_t>, ProcError> {
    if !proc_root.join(head.to_string()).is_dir() {
        return Err(ProcError::NoSuchProcess { pid: head });
    }

    let entries = std::fs::read_dir(proc_root).map_err(|source| ProcError::Io {
        path: proc_root.display().to_string(),
        source,
    })?;

    let mut children: HashMap<libc::pid_t, Vec<libc::pid_t>> = HashMap::new();
    for entry in entries {
        let Ok(entry) = entry else { continue };
        let name = entry.file_name();
        let Some(pid) = name.to_str().and_then(|s| s.parse::<libc::pid_t>().ok()) else {
            continue;
        };
        let status = entry.path().join("status");
        let ppid = match parent_of(&status) {
            Ok(ppid) => ppid,
            // the process exited between readdir and the status read
            Err(ProcError::Io { .. }) => continue,
            Err(err) => return Err(err),
        };
        children.entry(ppid).or_default().push(pid);
    }

    let mut out = Vec::new();
    let mut queue = VecDeque::from([head]);
    while let Some(pid) = queue.pop_front() {
        out.push(pid);
        if let Some(kids) = children.get(&pid) {
            queue.extend(kids.iter().copied());
        }
    }
    debug!(head, count = out.len(), "resolved process tree");
    Ok(out)
}

fn parent_of(status: &Path) -> Result<libc::pid_t, ProcError> {
    let text = std::fs::read_to_string(status).map_err(|source| ProcError::Io {
        path: status.display().to_string(),
        source,
    })?;
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("PPid:") {
            return rest.trim().parse().map_err(|_| ProcError::BadStatus {
                path: status.display().to_string(),
            });
        }
    }
    Err(ProcError::BadStatus {
        path: status.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_status(root: &Path, pid: libc::pid_t, ppid: libc::pid_t) {
        let dir = root.join(pid.to_string());
        fs::create_dir_all(&dir).expect("create pid dir");
        fs::write(
            dir.join("status"),
            format!("Name:\tfake\nPid:\t{pid}\nPPid:\t{ppid}\n"),
        )
        .expect("write status");
    }

    #[test]
    fn walks_descendants_breadth_first() {
        let root = tempdir().expect("tempdir");
        write_status(root.path(), 100, 1);
        write_status(root.path(), 101, 100);
        write_status(root.path(), 102, 101);
        write_status(root.path(), 200, 1);

        let pids = descendants_in(root.path(), 100).expect("walk synthetic tree");
        assert_eq!(pids, vec![100, 101, 102]);
    }

    #[test]
    fn non_numeric_entries_are_ignored() {
        let root = tempdir().expect("tempdir");
        write_status(root.path(), 100, 1);
        fs::create_dir_all(root.path().join("sys")).expect("create non-pid dir");

        let pids = descendants_in(root.path(), 100).expect("walk");
        assert_eq!(pids, vec![100]);
    }

    #[test]
    fn missing_status_file_skips_the_process() {
        let root = tempdir().expect("tempdir");
        write_status(root.path(), 100, 1);
        // pid dir with no status file, as if it exited mid-walk
        fs::create_dir_all(root.path().join("101")).expect("create bare pid dir");

        let pids = descendants_in(root.path(), 100).expect("walk");
        assert_eq!(pids, vec![100]);
    }

    #[test]
    fn malformed_status_is_an_error() {
        let root = tempdir().expect("tempdir");
        write_status(root.path(), 100, 1);
        let dir = root.path().join("101");
        fs::create_dir_all(&dir).expect("create pid dir");
        fs::write(dir.join("status"), "Name:\tfake\n").expect("write status");

        let err = descendants_in(root.path(), 100).expect_err("missing PPid must fail");
        assert!(matches!(err, ProcError::BadStatus { .. }));
    }

    #[test]
    fn unknown_head_pid_is_an_error() {
        let root = tempdir().expect("tempdir");
        let err = descendants_in(root.path(), 42).expect_err("head must exist");
        assert!(matches!(err, ProcError::NoSuchProcess { pid: 42 }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn own_process_tree_starts_with_self() {
        let me = std::process::id() as libc::pid_t;
        let pids = descendants(me).expect("walk /proc");
        assert_eq!(pids[0], me);
    }
}
