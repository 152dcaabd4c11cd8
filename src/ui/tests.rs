use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::prelude::text;

use super::input::{KeyAction, map_key};
use super::model::{DashboardData, TargetView};
use super::render::{
    LogScroll, ScrollStep, Ui, UiActions, algorithm_line, log_line, topology_lines, visible_lines,
};
use crate::app::Command;
use crate::domain::{Algorithm, LoadDuration, RatePerSecond};
use crate::driver::{LoadTestRun, RunState};
use crate::error::{AppError, AppResult};

fn line_text(line: &text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn target(id: &str, request_count: u64, is_last_selected: bool, delta: u64) -> TargetView {
    TargetView {
        id: id.to_owned(),
        request_count,
        is_last_selected,
        delta,
    }
}

fn sample_data() -> AppResult<DashboardData> {
    let run = LoadTestRun::new(RatePerSecond::clamped(5), LoadDuration::try_from(2_u64)?);
    Ok(DashboardData {
        balancer_url: "http://127.0.0.1:5000/api".to_owned(),
        targets: vec![
            target("192.168.1.1", 3, false, 0),
            target("192.168.1.2", 1, true, 1),
        ],
        total_requests: 4,
        algorithm: Algorithm::Random,
        rate: RatePerSecond::clamped(5),
        duration: LoadDuration::try_from(2_u64)?,
        run_state: RunState::Running(run),
        log_tail: vec![
            "Request routed to 192.168.1.1".to_owned(),
            "Error: balancer unreachable".to_owned(),
        ],
        log_len: 2,
        status: Some("Load test running: 0/10".to_owned()),
        no_color: true,
    })
}

fn lines(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("line {}", idx)).collect()
}

#[test]
fn dashboard_render_does_not_panic() -> AppResult<()> {
    let data = sample_data()?;
    for (width, height) in [(120, 40), (80, 24), (20, 5)] {
        let backend = TestBackend::new(width, height);
        let mut terminal = match Terminal::new(backend) {
            Ok(term) => term,
            Err(err) => {
                return Err(AppError::validation(format!(
                    "Failed to create TestBackend terminal: {}",
                    err
                )));
            }
        };
        Ui::render(&mut terminal, &data, LogScroll::default());
        Ui::render(&mut terminal, &DashboardData::default(), LogScroll::default());
    }
    Ok(())
}

#[test]
fn topology_marks_last_selected_and_delta() -> AppResult<()> {
    let data = sample_data()?;
    let rendered: Vec<String> = topology_lines(&data).iter().map(line_text).collect();

    let (first, second) = match rendered.as_slice() {
        [first, second] => (first, second),
        other => {
            return Err(AppError::validation(format!(
                "Expected two topology lines, got {:?}",
                other
            )));
        }
    };
    if !first.starts_with("Entry ─▶ 192.168.1.1") || !first.ends_with("─▶ Service") {
        return Err(AppError::validation(format!("Unexpected line {}", first)));
    }
    if first.contains('+') || first.contains("◀ last") {
        return Err(AppError::validation("Idle target must not be highlighted"));
    }
    if !second.contains("+1") || !second.contains("◀ last") {
        return Err(AppError::validation(format!("Unexpected line {}", second)));
    }
    Ok(())
}

#[test]
fn empty_fleet_renders_placeholder() -> AppResult<()> {
    let rendered: Vec<String> = topology_lines(&DashboardData::default())
        .iter()
        .map(line_text)
        .collect();
    if rendered != ["No targets"] {
        return Err(AppError::validation(format!("Unexpected {:?}", rendered)));
    }
    Ok(())
}

#[test]
fn algorithm_line_lists_every_choice() -> AppResult<()> {
    let data = sample_data()?;
    let rendered = line_text(&algorithm_line(&data));
    for expected in [
        "[1] round robin",
        "[2] random",
        "[3] least connections",
        "5 req/s",
        "2s",
    ] {
        if !rendered.contains(expected) {
            return Err(AppError::validation(format!(
                "'{}' missing from '{}'",
                expected, rendered
            )));
        }
    }
    Ok(())
}

#[test]
fn log_lines_keep_text() -> AppResult<()> {
    let error = log_line("Error: balancer unreachable", true);
    if line_text(&error) != "Error: balancer unreachable" {
        return Err(AppError::validation("Error line text changed"));
    }
    Ok(())
}

#[test]
fn visible_lines_follow_the_tail() -> AppResult<()> {
    let log = lines(20);
    let tail = visible_lines(&log, 5, LogScroll::default());
    if tail.first().map(String::as_str) != Some("line 15")
        || tail.last().map(String::as_str) != Some("line 19")
    {
        return Err(AppError::validation(format!("Unexpected tail {:?}", tail)));
    }

    let mut scroll = LogScroll::default();
    scroll.apply(ScrollStep::Up, log.len());
    scroll.apply(ScrollStep::Up, log.len());
    let window = visible_lines(&log, 5, scroll);
    if window.last().map(String::as_str) != Some("line 17") {
        return Err(AppError::validation(format!("Unexpected window {:?}", window)));
    }

    let short = lines(3);
    if visible_lines(&short, 10, LogScroll::default()).len() != 3 {
        return Err(AppError::validation("Short logs must be shown whole"));
    }
    if !visible_lines(&[], 10, LogScroll::default()).is_empty() {
        return Err(AppError::validation("Empty log must stay empty"));
    }
    Ok(())
}

#[test]
fn log_scroll_stays_in_bounds() -> AppResult<()> {
    let mut scroll = LogScroll::default();
    scroll.apply(ScrollStep::Down, 30);
    if scroll.offset() != 0 || !scroll.is_following() {
        return Err(AppError::validation("Scrolling down at the tail must stay put"));
    }
    scroll.apply(ScrollStep::PageUp, 30);
    if scroll.offset() != 10 {
        return Err(AppError::validation("Page up must move ten lines"));
    }
    scroll.apply(ScrollStep::Oldest, 30);
    if scroll.offset() != 29 {
        return Err(AppError::validation("Oldest must stop at the first line"));
    }
    scroll.apply(ScrollStep::PageUp, 30);
    if scroll.offset() != 29 {
        return Err(AppError::validation("Scrolling past the oldest line must clamp"));
    }
    scroll.apply(ScrollStep::Newest, 30);
    if !scroll.is_following() {
        return Err(AppError::validation("Newest must follow the tail again"));
    }
    Ok(())
}

#[test]
fn keys_map_to_commands() -> AppResult<()> {
    let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
    let cases = [
        (
            press(KeyCode::Char('s')),
            Some(KeyAction::Command(Command::SendRequest)),
        ),
        (
            press(KeyCode::Char('2')),
            Some(KeyAction::Command(Command::SetAlgorithm(Algorithm::Random))),
        ),
        (
            press(KeyCode::Char('3')),
            Some(KeyAction::Command(Command::SetAlgorithm(
                Algorithm::LeastConnections,
            ))),
        ),
        (
            press(KeyCode::Char('a')),
            Some(KeyAction::Command(Command::AddTarget)),
        ),
        (
            press(KeyCode::Char('+')),
            Some(KeyAction::Command(Command::IncreaseRate)),
        ),
        (
            press(KeyCode::Char('-')),
            Some(KeyAction::Command(Command::DecreaseRate)),
        ),
        (
            press(KeyCode::Char('l')),
            Some(KeyAction::Command(Command::StartLoadTest)),
        ),
        (
            press(KeyCode::Char('x')),
            Some(KeyAction::Command(Command::CancelLoadTest)),
        ),
        (
            press(KeyCode::Char('c')),
            Some(KeyAction::Command(Command::ClearResults)),
        ),
        (press(KeyCode::PageUp), Some(KeyAction::Scroll(ScrollStep::PageUp))),
        (press(KeyCode::Esc), Some(KeyAction::Quit)),
        (press(KeyCode::Char('q')), Some(KeyAction::Quit)),
        (
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyAction::Quit),
        ),
        (
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            None,
        ),
        (press(KeyCode::Char('z')), None),
        (press(KeyCode::Tab), None),
        (press(KeyCode::F(5)), None),
        (press(KeyCode::Left), None),
        (
            KeyEvent {
                code: KeyCode::Char('s'),
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Release,
                state: KeyEventState::NONE,
            },
            None,
        ),
    ];
    for (key, expected) in cases {
        let got = map_key(key);
        if got != expected {
            return Err(AppError::validation(format!(
                "{:?} mapped to {:?}, expected {:?}",
                key, got, expected
            )));
        }
    }
    Ok(())
}
