use std::path::{Path, PathBuf};

use anyhow::Context;
use modernrdl::{
    editor_options, export_file_name, init_logging, Config, DesignerState, ProjectSummary, Size,
    BUILD_DATE, VERSION,
};

const USAGE: &str = "\
Usage:
  modernrdl <file.mrdl>          Validate a project and print a summary
  modernrdl --new [file.mrdl]    Write an empty project with the configured page
  modernrdl --version";

enum Command {
    Inspect(PathBuf),
    New(Option<PathBuf>),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [] => Some(Command::Help),
        [flag] if flag == "-h" || flag == "--help" => Some(Command::Help),
        [flag] if flag == "-V" || flag == "--version" => Some(Command::Version),
        [flag] if flag == "--new" => Some(Command::New(None)),
        [flag, path] if flag == "--new" => Some(Command::New(Some(PathBuf::from(path)))),
        [path] if !path.starts_with('-') => Some(Command::Inspect(PathBuf::from(path))),
        _ => None,
    }
}

fn load_config() -> Config {
    let path = match Config::default_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("Using default configuration: {}", e);
            return Config::default();
        }
    };

    match Config::load_or_default(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

fn inspect(state: &mut DesignerState, path: &Path) -> anyhow::Result<()> {
    state
        .load_from_file(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let doc = state.document();
    let page = &doc.page;
    tracing::info!(
        "{}: {} {} {}x{} (header {}, footer {})",
        state.design_name(),
        page.format,
        page.orientation,
        page.width,
        page.height,
        page.header_height,
        page.footer_height
    );
    tracing::info!("{}", ProjectSummary::of(doc));
    Ok(())
}

fn create(state: &mut DesignerState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(export_file_name(chrono::Utc::now())));
    state.new_design();
    state
        .save_to_file(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = parse_args(&args) else {
        anyhow::bail!("Invalid arguments\n{}", USAGE);
    };

    let config = load_config();
    let mut state = DesignerState::with_options(editor_options(&config), Size::new(1200.0, 800.0));

    match command {
        Command::Inspect(path) => inspect(&mut state, &path),
        Command::New(path) => create(&mut state, path),
        Command::Version => {
            println!("modernrdl {} (built {})", VERSION, BUILD_DATE);
            Ok(())
        }
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}
