pub mod algorithm;
pub mod common;
pub mod config;
pub mod error;
pub mod frontier;
pub mod hanoi;
pub mod node;
pub mod problem;
pub mod stat;
