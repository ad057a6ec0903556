//! Skills registry: root resolution and discovery
//!
//! A repository is one directory whose immediate subdirectories are skills.
//! Nothing is cached between runs; every invocation rescans the root.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::skill::SkillEntry;

/// Default repository directory name
pub const DEFAULT_DIR_NAME: &str = ".skills";

/// Where the resolved root came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootOrigin {
    /// Configured explicitly (config file, env or CLI flag)
    Explicit,
    /// Found under the current working directory
    Project,
    /// Next to the installed program
    Install,
}

/// Repository root, resolved once at startup and passed down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsRoot {
    path: PathBuf,
    origin: RootOrigin,
}

impl SkillsRoot {
    /// Use `path` as the root regardless of what exists on disk
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            origin: RootOrigin::Explicit,
        }
    }

    /// Resolve the root: `<cwd>/<dir_name>` when it exists, otherwise
    /// `<install_prefix>/<dir_name>`.
    ///
    /// Without an install prefix the project location is used even if missing,
    /// so it gets created there.
    pub fn resolve(dir_name: &str, cwd: &Path, install_prefix: Option<&Path>) -> Self {
        let project = cwd.join(dir_name);
        if project.is_dir() {
            return Self {
                path: project,
                origin: RootOrigin::Project,
            };
        }

        match install_prefix {
            Some(prefix) => Self {
                path: prefix.join(dir_name),
                origin: RootOrigin::Install,
            },
            None => Self {
                path: project,
                origin: RootOrigin::Project,
            },
        }
    }

    /// Root directory path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the root came from
    pub fn origin(&self) -> RootOrigin {
        self.origin
    }
}

/// Install prefix for an executable: the parent of the directory holding it
/// (`/usr/local/bin/skillpick` -> `/usr/local`)
pub fn install_prefix(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

/// Skills registry holding every skill of one repository snapshot
#[derive(Debug)]
pub struct SkillsRegistry {
    /// Repository root
    root: PathBuf,
    /// Loaded skills in discovery order
    skills: Vec<SkillEntry>,
}

impl SkillsRegistry {
    /// Create an empty registry for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skills: Vec::new(),
        }
    }

    /// Build a registry from already-loaded entries
    pub fn from_entries(root: impl Into<PathBuf>, skills: Vec<SkillEntry>) -> Self {
        Self {
            root: root.into(),
            skills,
        }
    }

    /// Repository root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    ///
    /// Returns `true` when the directory was created by this call.
    pub fn ensure_root(&self) -> Result<bool> {
        if self.root.is_dir() {
            return Ok(false);
        }

        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create skills directory {:?}", self.root))?;
        info!("Created empty skills directory {:?}", self.root);
        Ok(true)
    }

    /// Immediate subdirectories of the root, sorted by name
    pub fn candidate_dirs(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read directory {:?}", self.root))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }

        dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(dirs)
    }

    /// Scan the root and load every skill (creating the root if missing)
    pub fn discover(&mut self) -> Result<()> {
        self.ensure_root()?;

        let candidates = self.candidate_dirs()?;
        debug!(
            "Found {} candidate directories in {:?}",
            candidates.len(),
            self.root
        );

        self.skills = candidates
            .iter()
            .filter_map(|dir| match SkillEntry::from_dir(dir) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping {:?}: {:#}", dir, e);
                    None
                }
            })
            .collect();

        for skill in &self.skills {
            debug!(
                "Discovered skill: {} ({} keywords)",
                skill.name,
                skill.keywords.len()
            );
        }

        info!("Discovered {} skills", self.skills.len());
        Ok(())
    }

    /// Get a skill by exact name
    pub fn get(&self, name: &str) -> Option<&SkillEntry> {
        self.skills.iter().find(|s| s.name == name)
    }

    /// All skills in discovery order
    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    /// All skill names in discovery order
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(SkillEntry::name)
    }

    /// Get number of skills
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::SKILL_FILE;
    use tempfile::TempDir;

    fn add_skill(root: &Path, name: &str, content: Option<&str>) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        if let Some(content) = content {
            fs::write(dir.join(SKILL_FILE), content).unwrap();
        }
    }

    #[test]
    fn test_registry_new() {
        let registry = SkillsRegistry::new("/nowhere");
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_discover_creates_missing_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join(".skills");

        let mut registry = SkillsRegistry::new(&root);
        registry.discover().unwrap();

        assert!(root.is_dir());
        assert!(registry.is_empty());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn test_discover_order_and_filtering() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        add_skill(root, "gamma", Some("No directive here"));
        add_skill(root, "alpha", Some("keywords: react, frontend\nReact tips"));
        add_skill(root, "draft", None);
        add_skill(root, "beta", Some("keywords: database, sql\nSQL tips"));
        fs::write(root.join("README.md"), "not a skill").unwrap();

        let mut registry = SkillsRegistry::new(root);
        registry.discover().unwrap();

        let names: Vec<_> = registry.skill_names().collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
        assert!(registry.get("draft").is_none());
        assert!(registry.get("gamma").unwrap().keywords.is_empty());
    }

    #[test]
    fn test_get_requires_exact_name() {
        let registry = SkillsRegistry::from_entries(
            "/r",
            vec![SkillEntry::parse("alpha", "/r/alpha/SKILL.md", "body")],
        );
        assert!(registry.get("alpha").is_some());
        assert!(registry.get("Alpha").is_none());
        assert!(registry.get("alph").is_none());
    }

    #[test]
    fn test_resolve_prefers_project_root() {
        let cwd = TempDir::new().unwrap();
        let install = TempDir::new().unwrap();
        fs::create_dir(cwd.path().join(DEFAULT_DIR_NAME)).unwrap();

        let root = SkillsRoot::resolve(DEFAULT_DIR_NAME, cwd.path(), Some(install.path()));
        assert_eq!(root.origin(), RootOrigin::Project);
        assert_eq!(root.path(), cwd.path().join(DEFAULT_DIR_NAME));
    }

    #[test]
    fn test_resolve_falls_back_to_install_root() {
        let cwd = TempDir::new().unwrap();
        let install = TempDir::new().unwrap();

        let root = SkillsRoot::resolve(DEFAULT_DIR_NAME, cwd.path(), Some(install.path()));
        assert_eq!(root.origin(), RootOrigin::Install);
        assert_eq!(root.path(), install.path().join(DEFAULT_DIR_NAME));
    }

    #[test]
    fn test_resolve_without_install_prefix() {
        let cwd = TempDir::new().unwrap();

        let root = SkillsRoot::resolve(DEFAULT_DIR_NAME, cwd.path(), None);
        assert_eq!(root.origin(), RootOrigin::Project);
        assert_eq!(root.path(), cwd.path().join(DEFAULT_DIR_NAME));
    }

    #[test]
    fn test_install_prefix() {
        assert_eq!(
            install_prefix(Path::new("/usr/local/bin/skillpick")),
            Some(PathBuf::from("/usr/local"))
        );
        assert_eq!(install_prefix(Path::new("skillpick")), None);
    }
}
