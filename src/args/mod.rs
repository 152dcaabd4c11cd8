//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

pub use cli::{CirculateArgs, Command};

pub(crate) use defaults::{DEFAULT_BALANCER_URL, DEFAULT_USER_AGENT};
