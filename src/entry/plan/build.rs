use crate::app::Session;
use crate::args::{CirculateArgs, Command};
use crate::balancer::BalancerSettings;
use crate::error::{AppError, AppResult, FleetError, ValidationError};
use crate::fleet::Fleet;
use crate::membership::IdGenerator;

use super::types::{RunMode, RunPlan, SessionPlan};

pub(in crate::entry) fn build_plan(args: CirculateArgs) -> AppResult<RunPlan> {
    let mode = match args.command {
        Some(Command::Send) => RunMode::Send,
        Some(Command::SetAlgorithm { name }) => RunMode::SetAlgorithm(name),
        Some(Command::AddTarget) => RunMode::AddTarget,
        Some(Command::LoadTest) => RunMode::LoadTest,
        None if args.no_ui => RunMode::LoadTest,
        None => RunMode::Dashboard,
    };

    let session = initial_session(&args)?
        .with_algorithm(args.algorithm)
        .with_rate(args.rate)
        .with_duration(args.duration);

    Ok(RunPlan {
        mode,
        session: SessionPlan {
            balancer: BalancerSettings {
                base_url: args.balancer_url,
                request_timeout: args.request_timeout,
                connect_timeout: args.connect_timeout,
            },
            session,
            generator: IdGenerator::new(args.id_prefix),
            no_color: args.no_color,
        },
        verbose: args.verbose,
    })
}

fn initial_session(args: &CirculateArgs) -> AppResult<Session> {
    if args.targets.is_empty() {
        return Session::with_default_targets();
    }
    let fleet = Fleet::with_targets(args.targets.iter().cloned()).map_err(|err| match err {
        FleetError::DuplicateTarget { id } => {
            AppError::validation(ValidationError::DuplicateInitialTarget { value: id })
        }
        FleetError::AddressSpaceExhausted { .. } => AppError::fleet(err),
    })?;
    Ok(Session::new(fleet))
}
