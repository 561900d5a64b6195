pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, EnvOverrides, OutputFormat, SortKey, SortOrder};
pub(crate) use commands::Commands;
