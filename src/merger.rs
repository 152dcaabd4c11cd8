//! Folds one request outcome into the fleet and the result log.
use tracing::{debug, warn};

use crate::balancer::Snapshot;
use crate::error::BalancerError;
use crate::fleet::{CountChange, Fleet, TargetId};
use crate::results::ResultLog;

/// Highlight and delta information produced by one merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub selected: Option<TargetId>,
    pub changes: Vec<CountChange>,
    pub failed: bool,
}

#[must_use]
pub fn handled_line(snapshot: &Snapshot) -> String {
    format!(
        "Request handled by {}. Response: \"{}\"",
        snapshot.selected_id, snapshot.message
    )
}

#[must_use]
pub fn error_line(error: &BalancerError) -> String {
    format!("Error: {}", error)
}

/// Applies a dispatch outcome in one step: fleet first, then the log line.
///
/// A failed dispatch leaves every counter untouched.
pub fn merge_outcome(
    fleet: &mut Fleet,
    log: &mut ResultLog,
    outcome: &Result<Snapshot, BalancerError>,
) -> MergeReport {
    match outcome {
        Ok(snapshot) => {
            let changes = fleet.apply_stats_snapshot(&snapshot.selected_id, &snapshot.counts_by_id);
            log.push(handled_line(snapshot));
            let selected = fleet.last_selected().map(|target| target.id().clone());
            if selected.is_none() {
                debug!(
                    selected = %snapshot.selected_id,
                    "balancer selected a target outside the local fleet"
                );
            }
            MergeReport {
                selected,
                changes,
                failed: false,
            }
        }
        Err(err) => {
            warn!("Request dispatch failed: {}", err);
            log.push(error_line(err));
            MergeReport {
                selected: None,
                changes: Vec::new(),
                failed: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::error::{AppError, AppResult, CallFailure};

    fn fleet() -> AppResult<Fleet> {
        Ok(Fleet::with_targets([
            TargetId::parse("10.0.0.1")?,
            TargetId::parse("10.0.0.2")?,
        ])?)
    }

    fn snapshot(selected: &str, counts: &[(&str, u64)]) -> Snapshot {
        Snapshot {
            selected_id: selected.to_owned(),
            message: "ok".to_owned(),
            counts_by_id: counts
                .iter()
                .map(|(key, count)| ((*key).to_owned(), *count))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn success_updates_fleet_and_logs_handler() -> AppResult<()> {
        let mut fleet = fleet()?;
        let mut log = ResultLog::default();
        let outcome = Ok(snapshot("10.0.0.2", &[("10.0.0.1", 1), ("10.0.0.2", 2)]));

        let report = merge_outcome(&mut fleet, &mut log, &outcome);

        if log.entries() != ["Request handled by 10.0.0.2. Response: \"ok\""] {
            return Err(AppError::validation(format!(
                "unexpected log {:?}",
                log.entries()
            )));
        }
        if report.selected.as_ref().map(TargetId::as_str) != Some("10.0.0.2") {
            return Err(AppError::validation("expected selection in report"));
        }
        if report.changes.len() != 2 || report.failed {
            return Err(AppError::validation(format!("unexpected report {:?}", report)));
        }
        Ok(())
    }

    #[test]
    fn dispatch_error_keeps_counts_and_logs_once() -> AppResult<()> {
        let mut fleet = fleet()?;
        let mut log = ResultLog::default();
        merge_outcome(
            &mut fleet,
            &mut log,
            &Ok(snapshot("10.0.0.1", &[("10.0.0.1", 4)])),
        );
        let before = fleet.clone();
        let failure: Result<Snapshot, BalancerError> = Err(BalancerError::Dispatch {
            cause: CallFailure::Rejected {
                message: "down".to_owned(),
            },
        });

        let report = merge_outcome(&mut fleet, &mut log, &failure);

        if fleet != before {
            return Err(AppError::validation("failed dispatch changed the fleet"));
        }
        let errors = log
            .entries()
            .iter()
            .filter(|line| line.starts_with("Error:"))
            .count();
        if errors != 1 || log.len() != 2 || !report.failed {
            return Err(AppError::validation(format!(
                "unexpected log {:?}",
                log.entries()
            )));
        }
        Ok(())
    }
}
