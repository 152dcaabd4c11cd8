use tokio::sync::{mpsc, watch};
use tracing::info;

use crate::app::Controller;
use crate::app::summary::{print_distribution, run_line};
use crate::balancer::{Balancer, HttpBalancer};
use crate::error::{AppError, AppResult, ValidationError};
use crate::shutdown::{request_shutdown, shutdown_channel, spawn_signal_handler};
use crate::ui::input::spawn_input_handler;
use crate::ui::render::spawn_dashboard;

use super::types::{RunMode, RunPlan, SessionPlan};

/// Room for key presses queued while a request is in flight.
const COMMAND_QUEUE_CAPACITY: usize = 64;

pub(in crate::entry) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    let controller = build_controller(plan.session)?;
    execute_mode(plan.mode, controller).await
}

fn build_controller(plan: SessionPlan) -> AppResult<Controller<HttpBalancer>> {
    let balancer = HttpBalancer::new(&plan.balancer)?;
    let url = balancer.base_url().to_string();
    Ok(Controller::new(balancer, plan.session)
        .with_generator(plan.generator)
        .with_balancer_url(url)
        .with_no_color(plan.no_color))
}

pub(super) async fn execute_mode<B: Balancer>(
    mode: RunMode,
    mut controller: Controller<B>,
) -> AppResult<()> {
    match mode {
        RunMode::Dashboard => run_dashboard(controller).await,
        RunMode::Send => {
            let report = controller.send_request().await;
            if let Some(line) = controller.session().results.last() {
                println!("{}", line);
            }
            print_distribution(&controller.session().fleet);
            if report.failed {
                return Err(AppError::validation(ValidationError::RequestFailed));
            }
            Ok(())
        }
        RunMode::SetAlgorithm(algorithm) => {
            controller.set_algorithm(algorithm).await?;
            println!("Algorithm set to {}", algorithm.label());
            Ok(())
        }
        RunMode::AddTarget => {
            let id = controller.add_target().await?;
            for line in controller.session().results.entries() {
                println!("{}", line);
            }
            println!("Added target {}", id);
            Ok(())
        }
        RunMode::LoadTest => run_headless_load_test(controller).await,
    }
}

async fn run_headless_load_test<B: Balancer>(mut controller: Controller<B>) -> AppResult<()> {
    let (shutdown_tx, mut shutdown_rx) = shutdown_channel();
    let signals = spawn_signal_handler(&shutdown_tx);

    let outcome = controller
        .run_load_test(&mut shutdown_rx, |line| println!("{}", line))
        .await;
    request_shutdown(&shutdown_tx);
    signals.await?;

    let state = outcome?;
    println!("{}", run_line(&state));
    print_distribution(&controller.session().fleet);
    Ok(())
}

async fn run_dashboard<B: Balancer>(mut controller: Controller<B>) -> AppResult<()> {
    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let signals = spawn_signal_handler(&shutdown_tx);
    let (commands_tx, commands_rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
    let (scroll_tx, scroll_rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
    let (view_tx, view_rx) = watch::channel(controller.view());

    let dashboard = spawn_dashboard(&shutdown_tx, view_rx, scroll_rx);
    let input = spawn_input_handler(&shutdown_tx, commands_tx, scroll_tx);

    controller.run(commands_rx, shutdown_rx, &view_tx).await;
    request_shutdown(&shutdown_tx);

    dashboard.await?;
    input.await?;
    signals.await?;
    info!("Dashboard session ended");

    println!("{}", run_line(controller.run_state()));
    print_distribution(&controller.session().fleet);
    Ok(())
}
