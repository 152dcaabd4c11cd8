use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::balancer::Balancer;
use crate::domain::{Algorithm, RatePerSecond};
use crate::driver::{LoadTestDriver, LoadTestRun, RunState, TickDecision};
use crate::error::{AppResult, BalancerError, FleetError, LoadTestError};
use crate::fleet::TargetId;
use crate::membership::{self, IdGenerator};
use crate::merger::{self, MergeReport};
use crate::shutdown::ShutdownReceiver;
use crate::ui::model::{DashboardData, LOG_VIEW_CAPACITY, TargetView};

use super::commands::Command;
use super::session::Session;

/// Owns the session and serializes every mutation of it.
///
/// Network calls are awaited inline, so at most one request is in flight and
/// merges are applied strictly in program order.
pub struct Controller<B> {
    balancer: B,
    session: Session,
    driver: LoadTestDriver,
    generator: IdGenerator,
    rng: StdRng,
    last_merge: MergeReport,
    status: Option<String>,
    balancer_url: String,
    no_color: bool,
}

impl<B: Balancer> Controller<B> {
    #[must_use]
    pub fn new(balancer: B, session: Session) -> Self {
        Self {
            balancer,
            session,
            driver: LoadTestDriver::default(),
            generator: IdGenerator::default(),
            rng: StdRng::from_entropy(),
            last_merge: MergeReport::default(),
            status: None,
            balancer_url: String::new(),
            no_color: false,
        }
    }

    #[must_use]
    pub const fn with_generator(mut self, generator: IdGenerator) -> Self {
        self.generator = generator;
        self
    }

    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn with_balancer_url(mut self, url: impl Into<String>) -> Self {
        self.balancer_url = url.into();
        self
    }

    #[must_use]
    pub const fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn balancer(&self) -> &B {
        &self.balancer
    }

    #[must_use]
    pub const fn run_state(&self) -> &RunState {
        self.driver.state()
    }

    /// When the driver wants its next tick, if a run is active.
    #[must_use]
    pub const fn next_tick(&self) -> Option<Instant> {
        self.driver.next_tick()
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Issues one request and merges its outcome.
    pub async fn send_request(&mut self) -> MergeReport {
        let outcome = self.balancer.send_request().await;
        let report = merger::merge_outcome(
            &mut self.session.fleet,
            &mut self.session.results,
            &outcome,
        );
        self.last_merge = report.clone();
        report
    }

    /// Switches the remote algorithm; the cached copy only moves on success.
    ///
    /// # Errors
    ///
    /// Returns the configuration failure after logging it.
    pub async fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), BalancerError> {
        match self.balancer.set_algorithm(algorithm).await {
            Ok(()) => {
                info!("Balancer algorithm switched to {}", algorithm);
                self.session.algorithm = algorithm;
                self.status = Some(format!("Algorithm: {}", algorithm.label()));
                Ok(())
            }
            Err(err) => {
                warn!("Algorithm switch failed: {}", err);
                self.session.results.push(merger::error_line(&err));
                self.status = Some(format!("Still using {}", self.session.algorithm.label()));
                Err(err)
            }
        }
    }

    /// Adds one generated target; registration failures are logged only.
    ///
    /// # Errors
    ///
    /// Returns `AddressSpaceExhausted` when no free id remains.
    pub async fn add_target(&mut self) -> Result<TargetId, FleetError> {
        let added = membership::add_target(
            &mut self.session.fleet,
            &mut self.session.results,
            &self.balancer,
            &self.generator,
            &mut self.rng,
        )
        .await;
        match &added {
            Ok(id) => self.status = Some(format!("Added target {}", id)),
            Err(err) => {
                warn!("Could not add a target: {}", err);
                self.session.results.push(format!("Error: {}", err));
            }
        }
        added
    }

    pub fn clear_results(&mut self) {
        self.session.results.clear();
    }

    pub const fn set_rate(&mut self, rate: RatePerSecond) {
        self.session.rate = rate;
    }

    /// Starts a run with the session's rate and duration and clears the log.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyRunning` while another run is active.
    pub fn start_load_test(&mut self) -> Result<LoadTestRun, LoadTestError> {
        let run = self
            .driver
            .start(self.session.rate, self.session.duration, Instant::now())?;
        self.session.results.clear();
        info!(
            "Load test started: {} req/s for {} ({} requests)",
            run.rate(),
            run.duration(),
            run.target_count()
        );
        self.status = Some(format!("Load test running: 0/{}", run.target_count()));
        Ok(run)
    }

    /// Returns `false` when there was no active run.
    pub fn cancel_load_test(&mut self) -> bool {
        let cancelled = self.driver.cancel();
        if cancelled {
            debug!("Load test cancellation requested");
        }
        cancelled
    }

    /// Runs one scheduling step. Returns the terminal state reached, if any.
    pub async fn tick(&mut self) -> Option<RunState> {
        let finished = match self.driver.begin_tick() {
            TickDecision::Idle => return None,
            TickDecision::Finished(state) => Some(state),
            TickDecision::Dispatch => {
                self.send_request().await;
                self.driver.finish_dispatch(Instant::now())
            }
        };
        match finished {
            Some(state) => self.note_finished(&state),
            None => {
                if let Some(run) = self.driver.state().run() {
                    self.status = Some(format!(
                        "Load test running: {}/{}",
                        run.issued(),
                        run.target_count()
                    ));
                }
            }
        }
        finished
    }

    /// Applies one operator command. Returns `false` when the loop should stop.
    pub async fn apply(&mut self, command: Command) -> bool {
        debug!("Applying command {:?}", command);
        match command {
            Command::SendRequest => {
                self.send_request().await;
            }
            Command::SetAlgorithm(algorithm) => {
                drop(self.set_algorithm(algorithm).await);
            }
            Command::AddTarget => {
                drop(self.add_target().await);
            }
            Command::ClearResults => self.clear_results(),
            Command::SetRate(rate) => self.set_rate(rate),
            Command::IncreaseRate => self.set_rate(self.session.rate.increment()),
            Command::DecreaseRate => self.set_rate(self.session.rate.decrement()),
            Command::StartLoadTest => {
                if let Err(err) = self.start_load_test() {
                    debug!("Ignoring start request: {}", err);
                    self.status = Some(err.to_string());
                }
            }
            Command::CancelLoadTest => {
                if self.cancel_load_test() {
                    self.status = Some("Cancelling load test".to_owned());
                }
            }
            Command::Quit => return false,
        }
        true
    }

    /// Interactive event loop: operator commands, pacing ticks and shutdown.
    ///
    /// A fresh view is published after every step.
    pub async fn run(
        &mut self,
        mut commands: mpsc::Receiver<Command>,
        mut shutdown_rx: ShutdownReceiver,
        view_tx: &watch::Sender<DashboardData>,
    ) {
        self.publish(view_tx);
        loop {
            let next_tick = self.driver.next_tick();
            tokio::select! {
                biased;
                _ = shutdown_rx.recv() => {
                    info!("Shutdown received, stopping controller");
                    break;
                }
                command = commands.recv() => {
                    let keep_going = match command {
                        Some(command) => self.apply(command).await,
                        None => false,
                    };
                    if !keep_going {
                        break;
                    }
                }
                () = wait_until(next_tick) => {
                    self.tick().await;
                }
            }
            self.publish(view_tx);
        }
        self.stop().await;
        self.publish(view_tx);
    }

    /// Cancels an active run and settles it into `Cancelled`.
    pub async fn stop(&mut self) {
        if self.cancel_load_test() {
            self.tick().await;
        }
    }

    /// Headless run: starts a load test and drives it to a terminal state.
    ///
    /// Each new log line is handed to `on_line` as soon as it is merged.
    ///
    /// # Errors
    ///
    /// Returns an error when a run is already active.
    pub async fn run_load_test<F>(
        &mut self,
        shutdown_rx: &mut ShutdownReceiver,
        mut on_line: F,
    ) -> AppResult<RunState>
    where
        F: FnMut(&str),
    {
        self.start_load_test()?;
        let mut emitted = 0_usize;
        loop {
            let Some(deadline) = self.driver.next_tick() else {
                return Ok(*self.driver.state());
            };
            tokio::select! {
                biased;
                _ = shutdown_rx.recv() => {
                    self.cancel_load_test();
                }
                () = tokio::time::sleep_until(deadline) => {}
            }
            let finished = self.tick().await;
            if let Some(fresh) = self.session.results.entries().get(emitted..) {
                for line in fresh {
                    on_line(line);
                }
            }
            emitted = self.session.results.len();
            if let Some(state) = finished {
                return Ok(state);
            }
        }
    }

    /// Builds the dashboard view of the current session.
    #[must_use]
    pub fn view(&self) -> DashboardData {
        let fleet = &self.session.fleet;
        let targets = fleet
            .targets()
            .iter()
            .map(|target| TargetView {
                id: target.id().to_string(),
                request_count: target.request_count(),
                is_last_selected: target.is_last_selected(),
                delta: self
                    .last_merge
                    .changes
                    .iter()
                    .find(|change| &change.id == target.id())
                    .map_or(0, |change| change.delta()),
            })
            .collect();
        DashboardData {
            balancer_url: self.balancer_url.clone(),
            targets,
            total_requests: fleet.total_requests(),
            algorithm: self.session.algorithm,
            rate: self.session.rate,
            duration: self.session.duration,
            run_state: *self.driver.state(),
            log_tail: self.session.results.tail(LOG_VIEW_CAPACITY).to_vec(),
            log_len: self.session.results.len(),
            status: self.status.clone(),
            no_color: self.no_color,
        }
    }

    fn publish(&self, view_tx: &watch::Sender<DashboardData>) {
        view_tx.send_replace(self.view());
    }

    fn note_finished(&mut self, state: &RunState) {
        if let Some(run) = state.run() {
            info!(
                "Load test {}: {}/{} requests issued",
                state.as_str(),
                run.issued(),
                run.target_count()
            );
            self.status = Some(format!(
                "Load test {}: {}/{}",
                state.as_str(),
                run.issued(),
                run.target_count()
            ));
        }
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
