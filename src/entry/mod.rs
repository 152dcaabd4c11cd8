mod plan;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::CirculateArgs;
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};
use crate::logger::{LogOptions, init_logging};
use plan::{build_plan, execute_plan};

/// Parses the command line, folds in the config file and runs the chosen mode.
///
/// # Errors
///
/// Returns an error when arguments, config or the runtime cannot be set up,
/// or when the selected command fails.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    apply_file_config(&mut args, &matches)?;

    let plan = build_plan(args)?;
    init_logging(LogOptions {
        verbose: plan.verbose,
        no_color: plan.session.no_color,
        interactive: plan.is_interactive(),
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(ValidationError::RuntimeBuildFailed { source: err }))?;

    runtime.block_on(execute_plan(plan))
}

fn parse_args() -> AppResult<(CirculateArgs, ArgMatches)> {
    let matches = CirculateArgs::command().get_matches();
    let args = CirculateArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_file_config(args: &mut CirculateArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, &config)?;
    }
    Ok(())
}
