mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscores;
mod menu;
mod options;
mod util;
use crate::app::App;
use crate::util::Globals;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let Some(args) = Arguments::from_env()? else {
        return Ok(ExitCode::SUCCESS);
    };
    let globals = Globals::load(args.config)?;
    let terminal = ratatui::init();
    let r = App::new(globals).run(terminal);
    ratatui::restore();
    Ok(io_exit(r))
}

/// Command-line arguments
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    /// Path to the configuration file to use instead of the default
    config: Option<PathBuf>,
}

impl Arguments {
    /// Parse command-line arguments.  Returns `None` if the program should
    /// exit without running (i.e., if `--help` or `--version` was given).
    fn from_env() -> Result<Option<Arguments>, lexopt::Error> {
        Arguments::parse(Parser::from_env())
    }

    fn parse(mut parser: Parser) -> Result<Option<Arguments>, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => {
                    println!("Usage: {} [-c <file>|--config <file>]", env!("CARGO_PKG_NAME"));
                    println!();
                    println!("Snake in the terminal");
                    println!();
                    println!("Options:");
                    println!("  -c <file>, --config <file>  Read configuration from <file>");
                    println!("  -h, --help                  Display this help message and exit");
                    println!("  -V, --version               Show the program version and exit");
                    return Ok(None);
                }
                Arg::Short('V') | Arg::Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
