use crate::domain::{Algorithm, RatePerSecond};

/// Operator actions fed to the controller loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SendRequest,
    SetAlgorithm(Algorithm),
    AddTarget,
    ClearResults,
    SetRate(RatePerSecond),
    IncreaseRate,
    DecreaseRate,
    StartLoadTest,
    CancelLoadTest,
    Quit,
}
