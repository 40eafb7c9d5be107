mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
mod view;
use crate::app::App;
use crate::config::Config;
use crate::game::Simulation;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [options]

Options:
  -c, --config <path>    Read configuration from the given file
      --seed <n>         Seed the food placement for a reproducible game
      --log-file <path>  Write log messages to the given file
  -h, --help             Show this help and exit
  -V, --version          Show the program version and exit

Controls: arrow keys, wasd, or hjkl to steer; r to restart after a game over;
q, Esc, or Ctrl-C to quit.
";

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(Cli::Run(args)) => run_exit(run(args)),
        Ok(Cli::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = args.log_file.as_ref().or(config.log.file.as_ref()) {
        init_logging(path, config.log.level)?;
    }
    let rng = match args.seed.or(config.game.seed) {
        Some(seed) => {
            log::info!("Using RNG seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let sim = Simulation::new(config.grid.grid(), rng).context("failed to start game")?;
    let terminal = ratatui::init();
    let r = App::new(sim, config.game.tick_period()).run(terminal);
    ratatui::restore();
    r
}

fn load_config(path: Option<&Path>) -> Result<Config, config::ConfigError> {
    match path {
        Some(p) => Config::load(p, false),
        None => match Config::default_path() {
            Ok(p) => Config::load(&p, true),
            Err(_) => Ok(Config::default()),
        },
    }
}

fn init_logging(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to initialize logger")
}

fn run_exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
