mod commands;
mod controller;
mod session;
pub(crate) mod summary;


pub use commands::Command;
pub use controller::Controller;
pub use session::Session;
