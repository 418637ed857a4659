//! Library side of the `drp` command-line tool.

pub mod commands;
pub mod logging;
