use crate::app::Session;
use crate::balancer::BalancerSettings;
use crate::domain::Algorithm;
use crate::membership::IdGenerator;

/// What the process was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::entry) enum RunMode {
    Dashboard,
    Send,
    SetAlgorithm(Algorithm),
    AddTarget,
    LoadTest,
}

/// Everything needed to build a controller.
#[derive(Debug, Clone)]
pub(in crate::entry) struct SessionPlan {
    pub(in crate::entry) balancer: BalancerSettings,
    pub(in crate::entry) session: Session,
    pub(in crate::entry) generator: IdGenerator,
    pub(in crate::entry) no_color: bool,
}

#[derive(Debug, Clone)]
pub(in crate::entry) struct RunPlan {
    pub(in crate::entry) mode: RunMode,
    pub(in crate::entry) session: SessionPlan,
    pub(in crate::entry) verbose: bool,
}

impl RunPlan {
    /// The dashboard owns the terminal for the whole run.
    pub(in crate::entry) const fn is_interactive(&self) -> bool {
        matches!(self.mode, RunMode::Dashboard)
    }
}
