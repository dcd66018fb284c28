use crate::view::ListFormat;
use anyhow::Result;
use chrono::Utc;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Where the combined document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Open documents, in tab order.
    pub paths: Vec<PathBuf>,
    pub project_root: PathBuf,
    pub output: OutputTarget,
    /// Start from an empty selection instead of everything included.
    pub select_none: bool,
    /// Indices toggled after the initial selection, in order.
    pub toggles: Vec<usize>,
    /// Print the selection listing instead of combining.
    pub list: Option<ListFormat>,
    pub verbosity: u8,
    #[cfg(feature = "stdio")]
    pub stdio: bool,
}

impl Config {
    /// Config for combining `paths` under `project_root` with every file selected.
    pub fn new(project_root: PathBuf, paths: Vec<PathBuf>, output: OutputTarget) -> Self {
        Self {
            paths,
            project_root,
            output,
            select_none: false,
            toggles: Vec::new(),
            list: None,
            verbosity: 0,
            #[cfg(feature = "stdio")]
            stdio: false,
        }
    }
}

fn command() -> Command {
    let cmd = Command::new("tabmerge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Merges selected open text files into a single document")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Sets the output file path (\"-\" for stdout)")
                .num_args(1),
        )
        .arg(
            Arg::new("none")
                .short('n')
                .long("none")
                .help("Starts with no files selected")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("toggle")
                .short('t')
                .long("toggle")
                .value_name("INDEX")
                .help("Toggles the file at INDEX in or out of the selection")
                .value_parser(value_parser!(usize))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .value_name("FORMAT")
                .help("Prints the file listing with selection marks instead of combining")
                .value_parser(["text", "html"])
                .num_args(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increases log verbosity")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("paths")
                .value_name("FILES")
                .help("Open files, in tab order")
                .num_args(1..),
        );

    #[cfg(feature = "stdio")]
    let cmd = cmd.arg(
        Arg::new("stdio")
            .long("stdio")
            .help("Serves JSON-lines messages on stdin/stdout")
            .action(ArgAction::SetTrue),
    );

    cmd
}

pub fn parse_args() -> Result<Config> {
    let matches = command().get_matches();
    let project_root = std::env::current_dir()?;
    config_from_matches(&matches, project_root)
}

/// Parses an explicit argument list (first item is the binary name).
pub fn parse_args_from<I, T>(args: I, project_root: PathBuf) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    config_from_matches(&matches, project_root)
}

fn config_from_matches(matches: &ArgMatches, project_root: PathBuf) -> Result<Config> {
    let output = match matches.get_one::<String>("output").map(String::as_str) {
        Some("-") => OutputTarget::Stdout,
        Some(path) => OutputTarget::File(project_root.join(path)),
        None => OutputTarget::File(project_root.join(default_filename(&project_root))),
    };

    let paths = matches
        .get_many::<String>("paths")
        .map(|vals| vals.map(|s| project_root.join(s)).collect())
        .unwrap_or_default();

    let toggles = matches
        .get_many::<usize>("toggle")
        .map(|vals| vals.copied().collect())
        .unwrap_or_default();

    let list = matches
        .get_one::<String>("list")
        .map(|f| match f.as_str() {
            "html" => ListFormat::Html,
            _ => ListFormat::Text,
        });

    let config = Config {
        paths,
        project_root,
        output,
        select_none: matches.get_flag("none"),
        toggles,
        list,
        verbosity: matches.get_count("verbose"),
        #[cfg(feature = "stdio")]
        stdio: matches.get_flag("stdio"),
    };

    #[cfg(feature = "stdio")]
    {
        if config.stdio && config.output == OutputTarget::Stdout {
            anyhow::bail!("--stdio cannot write documents to stdout; pass --output FILE");
        }
    }

    Ok(config)
}

/// `{workspace-folder}_combined_{unix-timestamp}.txt`
fn default_filename(project_root: &Path) -> String {
    let folder_name = project_root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("workspace");

    let timestamp = Utc::now().timestamp();
    format!("{folder_name}_combined_{timestamp}.txt")
}

/// Sets up `env_logger`; `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
