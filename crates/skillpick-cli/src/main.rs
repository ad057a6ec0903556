use anyhow::Result;
use clap::Parser;
use skillpick_cli::{Config, FixedChoice, SelectionPrompt, SkillPickService, TerminalPrompt};
use skillpick_clipboard::Backend;
use skillpick_skills::Probe;
use std::path::PathBuf;

/// Copy the skill snippet that best matches a file to the clipboard.
#[derive(Parser, Debug)]
#[command(name = "skillpick", version, about)]
struct Args {
    /// File whose content ranks the skills (missing file means no ranking)
    file: Option<PathBuf>,

    /// Choose this skill instead of prompting
    #[arg(short, long)]
    skill: Option<String>,

    /// Print the candidate list and exit
    #[arg(short, long, conflicts_with = "skill")]
    list: bool,

    /// Print the list as JSON (with --list)
    #[arg(long, requires = "list")]
    json: bool,

    /// Skills directory, overriding project/install lookup
    #[arg(long, value_name = "DIR")]
    skills_dir: Option<PathBuf>,

    /// Clipboard backend: auto, pbcopy, wl-copy, xclip, xsel, clip, osc52, command
    #[arg(long, value_name = "BACKEND")]
    clipboard: Option<Backend>,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Args {
    /// Command-line flags are the highest configuration layer
    fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.skills_dir {
            config.skills.dir = Some(dir.clone());
        }
        if let Some(backend) = self.clipboard {
            config.clipboard.backend = backend;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;
    args.apply(&mut config);

    skillpick_logging::init_logging(&config.logging.level)?;

    let cwd = std::env::current_dir()?;
    let exe = std::env::current_exe().ok();
    let root = config.skills_root(&cwd, exe.as_deref());

    let service = SkillPickService::new(root, config.skills.max_candidates);
    let probe = Probe::from_path(args.file.as_deref());
    let mut out = std::io::stdout();

    if args.list {
        service.list(&probe, args.json, &mut out)?;
        return Ok(());
    }

    let clipboard = skillpick_clipboard::from_config(&config.clipboard)?;
    let prompt: Box<dyn SelectionPrompt> = match args.skill {
        Some(name) => Box::new(FixedChoice::new(name)),
        None => Box::new(TerminalPrompt::stdio()),
    };

    service
        .run(&probe, prompt.as_ref(), clipboard.as_ref(), &mut out)
        .await?;
    Ok(())
}
