use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "notice-checkr",
    about = "Collect installed npm dependency licenses into a third-party notice file",
    version
)]
pub struct Cli {
    /// Task whose node_modules are scanned (Tasks/<TASK>)
    pub task: Option<String>,

    /// Directory containing the tasks directory
    #[arg(long, default_value = ".")]
    pub base: PathBuf,

    /// Config file [default: ./.notice-checkr/config.toml, fallback ~/.config/notice-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when the notice could not be generated
    #[arg(long)]
    pub strict: bool,

    /// Print a table of the packages written to the notice
    #[arg(long)]
    pub summary: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}
