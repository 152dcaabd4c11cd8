//! Terminal dashboard: view model, rendering and keyboard input.
pub mod input;
pub mod model;
pub mod render;

#[cfg(test)]
mod tests;
