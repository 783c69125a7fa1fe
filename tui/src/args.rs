//! Parsing command-line arguments.

use clap::{
    builder::RangedU64ValueParser, crate_description, crate_name, crate_version,
    error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches, Command, Error,
};
use log::debug;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};
use torus_life_lib::{Config, Grid};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) grid: Grid,
    pub(crate) save: Option<PathBuf>,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

/// Reads a configuration file. The format is chosen by the file extension.
fn read_config(path: &Path) -> Result<Config, String> {
    let ext = path.extension().and_then(OsStr::to_str);
    if !matches!(ext, Some("json") | Some("yaml") | Some("yml") | Some("toml")) {
        return Err(format!(
            "unknown config format for {}; expected .json, .yaml or .toml",
            path.display()
        ));
    }
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    match ext {
        Some("json") => serde_json::from_str(&text).map_err(|e| e.to_string()),
        Some("toml") => toml::from_str(&text).map_err(|e| e.to_string()),
        _ => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
    }
}

fn command() -> Command {
    let mut cmd = Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .long_about(
            "Runs Conway's Game of Life on a toroidal grid\n\
             \n\
             The grid wraps around: the top row is adjacent to the bottom row, \
             and the leftmost column to the rightmost column.\n\
             \n\
             The grid is displayed in Plaintext format.\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`.\n",
        )
        .arg(
            Arg::new("SIZE")
                .help("Number of rows and columns of the grid [default: 100]")
                .long_help(
                    "Number of rows and columns of the grid [default: 100]\n\
                     Ignored when a pattern file is given.\n",
                )
                .long("grid-size")
                .value_parser(RangedU64ValueParser::<usize>::new().range(9..1000)),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Delay between two generations, in milliseconds [default: 50]")
                .long("interval")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("GLIDER")
                .help("Starts from a single glider")
                .long_help(
                    "Starts from a single glider\n\
                     Takes precedence over --gosper and --pattern-file.\n",
                )
                .long("glider")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("GOSPER")
                .help("Starts from a Gosper glider gun")
                .long_help(
                    "Starts from a Gosper glider gun\n\
                     Takes precedence over --pattern-file. Needs a grid size of at least 39.\n",
                )
                .long("gosper")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("PATTERN")
                .help("Starts from a pattern file")
                .long_help(
                    "Starts from a pattern file\n\
                     The first line is the grid size N, followed by N lines of N cells \
                     separated by spaces.\n\
                     A cell is `0` or `.` when dead, `255` or `o` when alive.\n\
                     Without --glider, --gosper or --pattern-file, the grid is random, \
                     with 20% living cells.\n",
                )
                .long("pattern-file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random number generator")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run")
                .long_help(
                    "Number of generations to run\n\
                     If not set, it runs until stopped.\n",
                )
                .short('g')
                .long("generations")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("SAVE")
                .help("Saves the last generation to a pattern file")
                .long("save")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a file")
                .long_help(
                    "Reads the configuration from a file\n\
                     Supports JSON, YAML and TOML, chosen by the file extension.\n\
                     Options given on the command line override the file.\n",
                )
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        );

    #[cfg(feature = "tui")]
    {
        cmd = cmd.arg(
            Arg::new("NOTUI")
                .help("Prints the generations to stdout, without entering the TUI")
                .short('n')
                .long("no-tui")
                .action(ArgAction::SetTrue),
        );
    }

    cmd
}

/// Applies the command-line options on top of a configuration.
fn merge(mut config: Config, matches: &ArgMatches) -> Config {
    if let Some(&size) = matches.get_one::<usize>("SIZE") {
        config.size = size;
    }
    if let Some(&interval) = matches.get_one::<u64>("INTERVAL") {
        config.interval = interval;
    }
    if matches.get_flag("GLIDER") {
        config.glider = true;
    }
    if matches.get_flag("GOSPER") {
        config.gosper = true;
    }
    if let Some(path) = matches.get_one::<PathBuf>("PATTERN") {
        config.pattern_file = Some(path.clone());
    }
    if let Some(&seed) = matches.get_one::<u64>("SEED") {
        config.random_seed = Some(seed);
    }
    if let Some(&generations) = matches.get_one::<u64>("GENERATIONS") {
        config.generations = Some(generations);
    }
    config
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses the given arguments. The first one is the binary name.
    pub(crate) fn parse_from<I, T>(itr: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut cmd = command();
        let matches = cmd.try_get_matches_from_mut(itr)?;

        let base = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => {
                read_config(path).map_err(|e| cmd.error(ErrorKind::InvalidValue, e))?
            }
            None => Config::default(),
        };
        let config = merge(base, &matches);
        debug!("{:?}", config);

        let grid = config
            .initial_grid()
            .map_err(|e| cmd.error(ErrorKind::InvalidValue, e))?;

        Ok(Args {
            config,
            grid,
            save: matches.get_one::<PathBuf>("SAVE").cloned(),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}
