//! Main CLI application

use crate::config::{find_source_root_from, load_sisorc, sisorc_path, SisorcFlags};
use crate::error::SisoError;
use crate::runner::{execute_siso, find_siso_binary, parse_invocation, Context};
use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the launcher's log filter
pub const LOG_ENV: &str = "SISO_WRAPPER_LOG";

/// A fully prepared siso command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    /// Source root the `.sisorc` and binary were looked up under
    pub root: Option<PathBuf>,

    /// Arguments to pass to siso, with `.sisorc` flags applied
    pub args: Vec<OsString>,
}

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Launcher settings
    ctx: Context,
}

impl App {
    /// Create a new app from the process environment
    pub fn new() -> Self {
        Self::with_context(Context::from_env())
    }

    /// Create app with a specific context
    pub fn with_context(ctx: Context) -> Self {
        App {
            command: build_command(),
            ctx,
        }
    }

    /// Turn raw siso arguments into the final command line
    pub fn prepare(&self, args: Vec<OsString>) -> Result<Launch, SisoError> {
        let invocation = parse_invocation(&args);
        debug!(
            subcommand = %invocation.subcommand,
            out_dir = %invocation.out_dir.display(),
            "parsed invocation"
        );

        let root = find_source_root_from(&self.ctx.resolve(&invocation.out_dir))
            .or_else(|| find_source_root_from(&self.ctx.working_dir));

        let sisorc = match (&self.ctx.sisorc_path, &root) {
            (Some(path), _) => Some(self.ctx.resolve(path)),
            (None, Some(root)) => Some(sisorc_path(root)),
            (None, None) => None,
        };

        let flags = match sisorc {
            Some(path) => load_sisorc(&path)?,
            None => SisorcFlags::default(),
        };
        if flags.is_empty() {
            debug!("no .sisorc flags to apply");
        }

        Ok(Launch {
            args: flags.apply(&args, &invocation.subcommand),
            root,
        })
    }

    /// Run siso with the given command line arguments (including the
    /// program name) and return its exit code
    pub fn run_from<I, T>(self, itr: I) -> anyhow::Result<i32>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let raw: Vec<OsString> = itr.into_iter().map(Into::into).collect();
        let matches = self.command.clone().try_get_matches_from(&raw)?;
        let launch = self
            .prepare(forwarded_args(&matches, raw.get(1..).unwrap_or(&[])))
            .context("failed to prepare siso command line")?;

        let binary = find_siso_binary(&self.ctx, launch.root.as_deref())?;
        let code = execute_siso(&binary, &launch.args, &self.ctx)?;
        Ok(code)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command.
///
/// The launcher owns no flags of its own: everything after the program
/// name, including `-help` and `-version`, belongs to siso.
fn build_command() -> Command {
    Command::new("siso")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs siso with default flags from build/config/siso/.sisorc")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .help("Arguments forwarded to siso")
                .value_parser(value_parser!(OsString))
                .action(ArgAction::Append)
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

/// Collect the forwarded arguments from matches.
///
/// `raw_args` are the arguments as given, without the program name. clap
/// consumes a leading `--` as its own escape, so it is put back here.
fn forwarded_args(matches: &ArgMatches, raw_args: &[OsString]) -> Vec<OsString> {
    let mut args: Vec<OsString> = matches
        .get_many::<OsString>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if raw_args.first().is_some_and(|arg| arg == "--") && args.len() < raw_args.len() {
        args.insert(0, OsString::from("--"));
    }

    args
}

/// Install the stderr log subscriber.
///
/// `SISO_WRAPPER_LOG` takes precedence over `RUST_LOG`; without either only
/// warnings are shown.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::WARN.into()));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Run the CLI application with the process arguments
pub fn run() -> anyhow::Result<i32> {
    init_logging();
    App::new().run_from(std::env::args_os())
}
