//! Game modes and their fixed configuration

mod config;

pub use config::{GameConfig, GameMode};

#[cfg(test)]
mod tests;
