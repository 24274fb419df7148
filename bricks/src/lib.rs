#![doc = include_str!("../README.md")]

pub mod board;
pub mod error;
pub mod node;
pub mod solver;
pub mod stats;
