#![doc = include_str!("../README.md")]

mod config;
pub mod content;
mod kebab;
pub mod permalink;
pub mod scaffold;

pub use config::*;
pub use kebab::*;
