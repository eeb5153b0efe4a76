use crate::error::Result;
use git2::{Commit, IndexAddOption, Oid, Repository, Signature};
use log::{debug, info};
use std::path::Path;

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";
const FALLBACK_AUTHOR: (&str, &str) = ("stencil", "stencil@localhost");

/// Initialises (or reopens) a repository in `output_root`, commits every
/// file and optionally points `origin` at `remote`.
///
/// # Returns
/// * `Result<Oid>` - The id of the new commit
pub fn bootstrap_repository<P: AsRef<Path>>(output_root: P, remote: Option<&str>) -> Result<Oid> {
    let output_root = output_root.as_ref();
    let repo = Repository::init(output_root)?;
    debug!("Initialised git repository in '{}'", output_root.display());

    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;
    let tree = repo.find_tree(index.write_tree()?)?;

    let signature = repo
        .signature()
        .or_else(|_| Signature::now(FALLBACK_AUTHOR.0, FALLBACK_AUTHOR.1))?;
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&Commit> = parent.iter().collect();
    let oid = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        INITIAL_COMMIT_MESSAGE,
        &tree,
        &parents,
    )?;
    info!("Committed generated files as {oid}");

    if let Some(url) = remote {
        if repo.find_remote("origin").is_ok() {
            repo.remote_set_url("origin", url)?;
        } else {
            repo.remote("origin", url)?;
        }
        info!("Added remote 'origin' -> {url}");
    }

    Ok(oid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn commits_generated_files() {
        let output = TempDir::new().unwrap();
        fs::create_dir_all(output.path().join("lib")).unwrap();
        fs::write(output.path().join("lib").join("App.pm"), "1;\n").unwrap();
        fs::write(output.path().join("MANIFEST"), "MANIFEST\nlib/App.pm\n").unwrap();

        let oid = bootstrap_repository(output.path(), None).unwrap();

        let repo = Repository::open(output.path()).unwrap();
        let commit = repo.find_commit(oid).unwrap();
        assert_eq!(commit.message(), Some(INITIAL_COMMIT_MESSAGE));
        let tree = commit.tree().unwrap();
        assert!(tree.get_path(Path::new("lib/App.pm")).is_ok());
        assert!(tree.get_path(Path::new("MANIFEST")).is_ok());
        assert!(repo.find_remote("origin").is_err());
    }

    #[test]
    fn rerun_adds_a_child_commit_and_updates_remote() {
        let output = TempDir::new().unwrap();
        fs::write(output.path().join("config.yml"), "a: 1\n").unwrap();
        let first =
            bootstrap_repository(output.path(), Some("https://example.com/a.git")).unwrap();

        fs::write(output.path().join("config.yml"), "a: 2\n").unwrap();
        let second =
            bootstrap_repository(output.path(), Some("https://example.com/b.git")).unwrap();

        let repo = Repository::open(output.path()).unwrap();
        let commit = repo.find_commit(second).unwrap();
        assert_eq!(commit.parent_id(0).unwrap(), first);
        let origin = repo.find_remote("origin").unwrap();
        assert_eq!(origin.url(), Some("https://example.com/b.git"));
    }
}
