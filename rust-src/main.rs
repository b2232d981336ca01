//! Equipment Visualizer CLI
//!
//! Text dashboards and chart exports for chemical equipment datasets.

mod aggregation;
mod cli;
mod commands;
mod config;
mod data;
mod models;
mod storage;
mod visualization;


fn main() {
    env_logger::init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
