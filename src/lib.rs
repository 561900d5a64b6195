//! Like and author statistics for blog lists.
//!
//! The aggregation helpers live in [`core`]; everything else wires them to
//! blog exports, the blog-list API and the terminal.

mod app;
mod cli;
mod config;
mod consts;
pub mod core;
pub mod error;
mod output;
mod source;
mod utils;

pub use app::run;
