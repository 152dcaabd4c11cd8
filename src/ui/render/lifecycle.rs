use tokio::sync::{mpsc, watch};
use tracing::{debug, error};

use crate::shutdown::ShutdownSender;
use crate::ui::model::DashboardData;

use super::dashboard::{Ui, UiActions};
use super::log_panel::{LogScroll, ScrollStep};

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Ui::cleanup();
    }
}

/// Owns the terminal and redraws whenever the view or the log scroll changes.
///
/// The task restores the terminal on every exit path.
#[must_use]
pub fn spawn_dashboard(
    shutdown_tx: &ShutdownSender,
    mut view_rx: watch::Receiver<DashboardData>,
    mut scroll_rx: mpsc::Receiver<ScrollStep>,
) -> tokio::task::JoinHandle<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::spawn(async move {
        let mut terminal = match Ui::setup_terminal() {
            Ok(terminal) => terminal,
            Err(err) => {
                error!("Failed to setup terminal: {}", err);
                return;
            }
        };
        let _guard = TerminalGuard;
        let mut scroll = LogScroll::default();
        let mut data = view_rx.borrow_and_update().clone();
        Ui::render(&mut terminal, &data, scroll);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                res = view_rx.changed() => {
                    if res.is_err() {
                        break;
                    }
                    data = view_rx.borrow_and_update().clone();
                }
                step = scroll_rx.recv() => match step {
                    Some(step) => scroll.apply(step, data.log_tail.len()),
                    None => break,
                },
            }
            Ui::render(&mut terminal, &data, scroll);
        }
        debug!("Dashboard closed");
    })
}
