use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "judgments",
    version,
    about = "Load a Ranklib judgment file and print its judgments"
)]
pub struct Cli {
    /// Judgment file with `# qid:N: keywords` header lines
    pub path: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Describe)]
    pub format: OutputFormat,

    /// Also print one summary line per qid after the judgments
    #[arg(long, default_value_t = false)]
    pub group: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Describe,
    Ranklib,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Describe => "describe",
            Self::Ranklib => "ranklib",
            Self::Json => "json",
        }
    }
}
