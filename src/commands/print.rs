use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use judgments::{Judgment, judgments_from_file};
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::commands::groups;

pub fn run(args: Cli) -> Result<()> {
    info!(
        path = %args.path.display(),
        format = args.format.as_str(),
        "loading judgments"
    );

    let judgments = judgments_from_file(&args.path)
        .with_context(|| format!("failed to load judgments from {}", args.path.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut kept = Vec::new();
    let mut count = 0_usize;

    for judgment in judgments {
        let judgment = judgment
            .with_context(|| format!("failed to read judgments from {}", args.path.display()))?;
        write_judgment(&mut out, &judgment, args.format)?;
        count += 1;

        if args.group {
            kept.push(judgment);
        }
    }

    if args.group {
        groups::write_summary(&mut out, &kept)?;
    }

    out.flush().context("failed to flush stdout")?;
    info!(count, "printed judgments");

    Ok(())
}

pub fn write_judgment<W: Write>(
    out: &mut W,
    judgment: &Judgment,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Describe => writeln!(out, "{judgment}"),
        OutputFormat::Ranklib => writeln!(out, "{}", judgment.to_ranklib_format()),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, judgment).context("failed to serialize judgment")?;
            writeln!(out)
        }
    }
    .context("failed to write judgment")
}
