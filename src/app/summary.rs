use crate::driver::RunState;
use crate::fleet::Fleet;

/// Per-target distribution lines, in fleet order.
pub(crate) fn distribution_lines(fleet: &Fleet) -> Vec<String> {
    if fleet.is_empty() {
        return vec!["No targets".to_owned()];
    }
    let total = fleet.total_requests();
    fleet
        .targets()
        .iter()
        .map(|target| {
            let marker = if target.is_last_selected() { " *" } else { "" };
            format!(
                "{}: {} ({}%){}",
                target.id(),
                target.request_count(),
                share_percent(target.request_count(), total),
                marker
            )
        })
        .collect()
}

pub(crate) fn run_line(state: &RunState) -> String {
    match state.run() {
        Some(run) => format!(
            "Load test {}: {}/{} requests at {} req/s over {}",
            state.as_str(),
            run.issued(),
            run.target_count(),
            run.rate(),
            run.duration()
        ),
        None => "Load test idle".to_owned(),
    }
}

pub(crate) fn print_distribution(fleet: &Fleet) {
    println!("Total Requests: {}", fleet.total_requests());
    for line in distribution_lines(fleet) {
        println!("{}", line);
    }
}

fn share_percent(count: u64, total: u64) -> u64 {
    let scaled = u128::from(count)
        .saturating_mul(100)
        .checked_div(u128::from(total))
        .unwrap_or(0);
    u64::try_from(scaled).map_or(u64::MAX, |value| value)
}
