//! Process-wide stop signal shared by the controller, the UI and the handlers.
use tokio::sync::broadcast;
use tracing::{info, warn};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

pub type ShutdownSender = broadcast::Sender<()>;
pub type ShutdownReceiver = broadcast::Receiver<()>;

/// Single signal fan-out.
const SHUTDOWN_CHANNEL_CAPACITY: usize = 1;

#[must_use]
pub fn shutdown_channel() -> (ShutdownSender, ShutdownReceiver) {
    broadcast::channel::<()>(SHUTDOWN_CHANNEL_CAPACITY)
}

/// Broadcasts shutdown; a closed channel means everyone already stopped.
pub fn request_shutdown(shutdown_tx: &ShutdownSender) {
    drop(shutdown_tx.send(()));
}

/// Turns Ctrl+C and SIGTERM into a shutdown broadcast.
///
/// The task also exits when someone else requests shutdown first.
#[must_use]
pub fn spawn_signal_handler(shutdown_tx: &ShutdownSender) -> tokio::task::JoinHandle<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();
    let shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {

        #[cfg(unix)]
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                warn!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        #[cfg(unix)]
        {
            tokio::select! {
                _ = shutdown_rx.recv() => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Ctrl+C received");
                    request_shutdown(&shutdown_tx);
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {
                    info!("SIGTERM received");
                    request_shutdown(&shutdown_tx);
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = shutdown_rx.recv() => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Ctrl+C received");
                    request_shutdown(&shutdown_tx);
                }
            }
        }
    })
}
