mod dashboard;
mod frame;
mod lifecycle;
mod log_panel;
mod progress;
mod theme;
mod topology;

pub use dashboard::{Ui, UiActions};
pub use frame::draw_frame;
pub use lifecycle::spawn_dashboard;
pub use log_panel::{LogScroll, ScrollStep};

#[cfg(test)]
pub(crate) use frame::algorithm_line;
#[cfg(test)]
pub(crate) use log_panel::{log_line, visible_lines};
#[cfg(test)]
pub(crate) use topology::topology_lines;
