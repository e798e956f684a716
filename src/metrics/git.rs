use std::path::Path;
use std::process::{Command, Stdio};

/// Branch and change text shown outside a repository.
pub const NO_GIT: &str = "(no git)";
/// Change text for a clean working tree.
pub const NO_CHANGES: &str = "(no changes)";

/// Repository state for the directory the session runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    pub is_git_repo: bool,
    pub branch_display: String,
    pub additions: u64,
    pub deletions: u64,
    /// `(+A -B)`, `(+A)`, `(-B)`, `(no changes)` or `(no git)`.
    pub changes_text: String,
}

impl GitInfo {
    pub fn not_a_repository() -> Self {
        Self {
            is_git_repo: false,
            branch_display: NO_GIT.to_string(),
            additions: 0,
            deletions: 0,
            changes_text: NO_GIT.to_string(),
        }
    }

    pub fn repository(branch: &str, additions: u64, deletions: u64) -> Self {
        Self {
            is_git_repo: true,
            branch_display: branch.to_string(),
            additions,
            deletions,
            changes_text: changes_text(additions, deletions),
        }
    }

    pub fn has_changes(&self) -> bool {
        self.is_git_repo && (self.additions > 0 || self.deletions > 0)
    }
}

/// Pre-formatted change summary for a diff.
pub fn changes_text(additions: u64, deletions: u64) -> String {
    match (additions, deletions) {
        (0, 0) => NO_CHANGES.to_string(),
        (a, 0) => format!("(+{})", a),
        (0, d) => format!("(-{})", d),
        (a, d) => format!("(+{} -{})", a, d),
    }
}

/// Inspect the repository containing `dir`.
///
/// Any failure (git missing, not a repository, unborn HEAD) yields the
/// not-a-repository value; a failing diff only zeroes the counts.
pub fn probe(dir: &Path) -> GitInfo {
    if which::which("git").is_err() {
        tracing::debug!("git not found on PATH");
        return GitInfo::not_a_repository();
    }

    let Some(branch) = run_git(dir, &["rev-parse", "--abbrev-ref", "HEAD"]) else {
        tracing::debug!("{} is not inside a git work tree", dir.display());
        return GitInfo::not_a_repository();
    };

    let (additions, deletions) = run_git(dir, &["diff", "--numstat", "HEAD"])
        .map(|out| parse_numstat(&out))
        .unwrap_or((0, 0));

    GitInfo::repository(branch.trim(), additions, deletions)
}

/// Run git in `dir` and return stdout on success.
fn run_git(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_OPTIONAL_LOCKS", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        None
    }
}

/// Sum `git diff --numstat` output (`added\tremoved\tpath` per line).
/// Binary files report `-` and are skipped, as are malformed lines.
pub fn parse_numstat(output: &str) -> (u64, u64) {
    let mut added = 0u64;
    let mut removed = 0u64;

    for line in output.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            continue;
        }
        if let Ok(n) = fields[0].parse::<u64>() {
            added += n;
        }
        if let Ok(n) = fields[1].parse::<u64>() {
            removed += n;
        }
    }

    (added, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_text_shapes() {
        assert_eq!(changes_text(156, 23), "(+156 -23)");
        assert_eq!(changes_text(4, 0), "(+4)");
        assert_eq!(changes_text(0, 2), "(-2)");
        assert_eq!(changes_text(0, 0), "(no changes)");
    }

    #[test]
    fn test_not_a_repository_uses_sentinel() {
        let info = GitInfo::not_a_repository();
        assert!(!info.is_git_repo);
        assert_eq!(info.branch_display, "(no git)");
        assert_eq!(info.changes_text, "(no git)");
        assert!(!info.has_changes());
    }

    #[test]
    fn test_parse_numstat() {
        let out = "10\t2\tsrc/main.rs\n-\t-\tassets/logo.png\n3\t0\tREADME.md\n";
        assert_eq!(parse_numstat(out), (13, 2));
    }

    #[test]
    fn test_parse_numstat_skips_garbage() {
        assert_eq!(parse_numstat(""), (0, 0));
        assert_eq!(parse_numstat("warning: something\n5\t5\n"), (0, 0));
        assert_eq!(parse_numstat("x\t4\tfile\n"), (0, 4));
    }

    #[test]
    fn test_probe_missing_directory() {
        let info = probe(Path::new("/nonexistent/cc-statusline/dir"));
        assert_eq!(info, GitInfo::not_a_repository());
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(["-c", "user.name=test", "-c", "user.email=test@example.com"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }

    #[test]
    fn test_probe_reports_branch_and_diff() {
        if which::which("git").is_err() {
            eprintln!("Skipping: git not installed");
            return;
        }
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();
        git(root, &["init", "-q"]);
        git(root, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        std::fs::write(root.join("notes.txt"), "a\nb\n").unwrap();
        git(root, &["add", "notes.txt"]);
        git(root, &["commit", "-q", "-m", "init"]);

        assert_eq!(probe(root), GitInfo::repository("main", 0, 0));

        std::fs::write(root.join("notes.txt"), "a\nc\nd\n").unwrap();
        let info = probe(root);
        assert_eq!(info.branch_display, "main");
        assert_eq!((info.additions, info.deletions), (2, 1));
        assert_eq!(info.changes_text, "(+2 -1)");
    }
}
