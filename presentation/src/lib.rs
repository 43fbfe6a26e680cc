pub mod cli;

pub use cli::{Cli, CliApp};
