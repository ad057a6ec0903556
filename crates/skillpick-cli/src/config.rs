use serde::Deserialize;
use skillpick_clipboard::ClipboardConfig;
use skillpick_skills::registry::install_prefix;
use skillpick_skills::SkillsRoot;
use std::env;
use std::path::{Path, PathBuf};

/// Convenience variable naming the repository root directly
const SKILLS_DIR_VAR: &str = "SKILLPICK_SKILLS_DIR";

/// Built-in defaults, the lowest configuration layer
const DEFAULT_CONFIG: &str = r#"
[skills]
dir_name = ".skills"     # looked up in the working directory, then next to the program
max_candidates = 5

[clipboard]
backend = "auto"  # auto, pbcopy, wl-copy, xclip, xsel, clip, osc52, command
command = []      # used with backend = "command", e.g. ["xclip", "-i"]

[logging]
level = "warn"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct SkillsConfig {
    pub dir_name: String,
    /// Explicit repository root, skips project/install lookup
    #[serde(default)]
    pub dir: Option<PathBuf>,
    pub max_candidates: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub skills: SkillsConfig,
    pub clipboard: ClipboardConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.skillpick/skillpick.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".skillpick").join("skillpick.toml"))
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Global config: ~/.skillpick/skillpick.toml (optional)
    /// 3. Local override: ./skillpick.toml (optional)
    /// 4. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        Self::load_from(Self::global_config_path().as_deref(), None)
    }

    /// `vars` replaces the process environment when given
    fn load_from(
        global_config_path: Option<&Path>,
        vars: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let skills_dir = match &vars {
            Some(vars) => vars.get(SKILLS_DIR_VAR).cloned(),
            None => env::var(SKILLS_DIR_VAR).ok(),
        };

        let mut config_builder = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ));

        // Layer 2: Global config
        if let Some(path) = global_config_path {
            config_builder = config_builder.add_source(config::File::from(path).required(false));
        }

        config_builder = config_builder
            // Layer 3: Local workspace config (optional override)
            .add_source(config::File::with_name("skillpick").required(false))
            // Layer 4: Environment variables with SKILLPICK__ prefix
            .add_source(
                config::Environment::with_prefix("SKILLPICK")
                    .separator("__")
                    .source(vars),
            );

        // Layer 5: Convenience env var override
        if let Some(dir) = skills_dir {
            config_builder = config_builder.set_override("skills.dir", dir)?;
        }

        let config: Self = config_builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.skills.max_candidates == 0 {
            anyhow::bail!("skills.max_candidates must be at least 1");
        }
        if self.skills.dir_name.trim().is_empty() {
            anyhow::bail!("skills.dir_name cannot be empty");
        }
        Ok(())
    }

    /// Resolve the repository root once for this run
    pub fn skills_root(&self, cwd: &Path, exe: Option<&Path>) -> SkillsRoot {
        match self.skills.dir.as_ref().filter(|d| !d.as_os_str().is_empty()) {
            Some(dir) => SkillsRoot::explicit(cwd.join(dir)),
            None => {
                let prefix = exe.and_then(install_prefix);
                SkillsRoot::resolve(&self.skills.dir_name, cwd, prefix.as_deref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillpick_clipboard::Backend;
    use skillpick_skills::RootOrigin;
    use std::fs;
    use tempfile::TempDir;

    fn no_env() -> config::Map<String, String> {
        config::Map::new()
    }

    fn env_of(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::load_from(None, Some(no_env())).unwrap();
        assert_eq!(config.skills.dir_name, ".skills");
        assert_eq!(config.skills.max_candidates, 5);
        assert_eq!(config.clipboard.backend, Backend::Auto);
        assert!(config.clipboard.command.is_empty());
    }

    #[test]
    fn test_global_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("skillpick.toml");
        fs::write(
            &path,
            "[skills]\nmax_candidates = 3\n\n[clipboard]\nbackend = \"command\"\ncommand = [\"my-copy\", \"-q\"]\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path.as_path()), Some(no_env())).unwrap();
        assert_eq!(config.skills.max_candidates, 3);
        assert_eq!(config.skills.dir_name, ".skills");
        assert_eq!(config.clipboard.backend, Backend::Command);
        assert_eq!(config.clipboard.command, vec!["my-copy", "-q"]);
    }

    #[test]
    fn test_zero_candidates_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("skillpick.toml");
        fs::write(&path, "[skills]\nmax_candidates = 0\n").unwrap();

        assert!(Config::load_from(Some(path.as_path()), Some(no_env())).is_err());
    }

    #[test]
    fn test_explicit_dir_wins() {
        let cwd = TempDir::new().unwrap();
        fs::create_dir(cwd.path().join(".skills")).unwrap();

        let mut config = Config::load_from(None, Some(no_env())).unwrap();
        config.skills.dir = Some(PathBuf::from("team-skills"));

        let root = config.skills_root(cwd.path(), None);
        assert_eq!(root.origin(), RootOrigin::Explicit);
        assert_eq!(root.path(), cwd.path().join("team-skills"));
    }

    #[test]
    fn test_install_root_from_exe() {
        let cwd = TempDir::new().unwrap();
        let mut config = Config::load_from(None, Some(no_env())).unwrap();
        config.skills.dir = None;

        let root = config.skills_root(cwd.path(), Some(Path::new("/opt/skillpick/bin/skillpick")));
        assert_eq!(root.origin(), RootOrigin::Install);
        assert_eq!(root.path(), Path::new("/opt/skillpick/.skills"));
    }

    #[test]
    fn test_prefixed_env_overrides_files() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("skillpick.toml");
        fs::write(&path, "[skills]\nmax_candidates = 3\n\n[clipboard]\nbackend = \"xclip\"\n").unwrap();

        let vars = env_of(&[
            ("SKILLPICK__SKILLS__MAX_CANDIDATES", "4"),
            ("SKILLPICK__CLIPBOARD__BACKEND", "osc52"),
            ("SKILLPICK__LOGGING__LEVEL", "debug"),
            ("UNRELATED__SKILLS__DIR_NAME", "ignored"),
        ]);
        let config = Config::load_from(Some(path.as_path()), Some(vars)).unwrap();

        assert_eq!(config.skills.max_candidates, 4);
        assert_eq!(config.clipboard.backend, Backend::Osc52);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.skills.dir_name, ".skills");
    }

    #[test]
    fn test_skills_dir_var_wins_over_prefixed_env() {
        let vars = env_of(&[
            ("SKILLPICK__SKILLS__DIR", "from-prefixed"),
            (SKILLS_DIR_VAR, "/srv/team-skills"),
        ]);
        let config = Config::load_from(None, Some(vars)).unwrap();
        assert_eq!(config.skills.dir, Some(PathBuf::from("/srv/team-skills")));

        let cwd = TempDir::new().unwrap();
        let root = config.skills_root(cwd.path(), None);
        assert_eq!(root.origin(), RootOrigin::Explicit);
        assert_eq!(root.path(), Path::new("/srv/team-skills"));
    }

    #[test]
    fn test_prefixed_skills_dir() {
        let vars = env_of(&[("SKILLPICK__SKILLS__DIR", "shared")]);
        let config = Config::load_from(None, Some(vars)).unwrap();
        assert_eq!(config.skills.dir, Some(PathBuf::from("shared")));
    }

    #[test]
    fn test_invalid_env_value_rejected() {
        let vars = env_of(&[("SKILLPICK__SKILLS__MAX_CANDIDATES", "0")]);
        assert!(Config::load_from(None, Some(vars)).is_err());
    }
}
