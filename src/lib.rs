pub mod adapter;
pub mod app;
pub mod assets;
pub mod check;
pub mod cli;
pub mod config;
pub mod entries;
pub mod error;
pub mod process;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
