use std::io::Write;

use anyhow::{Context, Result};
use judgments::{Judgment, judgments_by_qid};

/// Writes `qid:<qid>\t<count>\t<keywords>` for each qid, ordered by qid.
pub fn write_summary<W: Write>(out: &mut W, judgments: &[Judgment]) -> Result<()> {
    let grouped = judgments_by_qid(judgments);
    let mut qids: Vec<u64> = grouped.keys().copied().collect();
    qids.sort_unstable();

    for qid in qids {
        let bucket = &grouped[&qid];
        let keywords = bucket.first().map(|judgment| judgment.keywords()).unwrap_or_default();
        writeln!(out, "qid:{qid}\t{}\t{keywords}", bucket.len())
            .context("failed to write qid summary")?;
    }

    Ok(())
}
