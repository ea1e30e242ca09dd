//! Line-level parsing of judgment files.
//!
//! Header and body are read from the same forward-only cursor: the header
//! pass takes the leading run of `#` lines and leaves the first other line in
//! place for the body pass.

use std::collections::HashMap;
use std::io::{self, BufRead, Lines};
use std::iter::Peekable;
use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::error::{Error, Result};

/// Query id to the keywords declared for it in the header.
pub type QueryKeywords = HashMap<u64, String>;

/// A 1-based line number paired with the read result for that line.
pub type NumberedLine = (usize, io::Result<String>);

const COMMENT_MARKER: char = '#';

static HEADER_LINE: OnceLock<Regex> = OnceLock::new();
static BODY_LINE: OnceLock<Regex> = OnceLock::new();

fn header_regex() -> &'static Regex {
    HEADER_LINE.get_or_init(|| {
        Regex::new(r"^#\sqid:([0-9]+?):\s+?(.*)").expect("valid header line regex")
    })
}

fn body_regex() -> &'static Regex {
    BODY_LINE.get_or_init(|| {
        Regex::new(r"^([0-9])\s+qid:([0-9]+)\s+#\s+(\w+)").expect("valid body line regex")
    })
}

/// `(grade, qid, doc_id)` read from one body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyEntry {
    pub grade: u8,
    pub qid: u64,
    pub doc_id: String,
    pub line: usize,
}

/// Lines of a reader, numbered from 1.
pub struct NumberedLines<R> {
    lines: Lines<R>,
    number: usize,
}

pub fn numbered_lines<R: BufRead>(reader: R) -> NumberedLines<R> {
    NumberedLines {
        lines: reader.lines(),
        number: 0,
    }
}

impl<R: BufRead> Iterator for NumberedLines<R> {
    type Item = NumberedLine;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.number += 1;
        Some((self.number, line))
    }
}

/// Matches `# qid:<digits>: <keywords>`.
///
/// The keywords are everything after the first whitespace following the
/// colon, untrimmed.
pub fn parse_header_line(line: &str) -> Option<(u64, &str)> {
    let captures = header_regex().captures(line)?;
    let qid = captures.get(1)?.as_str().parse::<u64>().ok()?;
    let keywords = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
    Some((qid, keywords))
}

/// Matches `<digit> qid:<digits> # <doc_id>...`; anything after the doc id is
/// ignored.
pub fn parse_body_line(line: &str, line_number: usize) -> Option<BodyEntry> {
    let captures = body_regex().captures(line)?;
    let grade = captures.get(1)?.as_str().parse::<u8>().ok()?;
    let qid = captures.get(2)?.as_str().parse::<u64>().ok()?;
    let doc_id = captures.get(3)?.as_str().to_string();

    Some(BodyEntry {
        grade,
        qid,
        doc_id,
        line: line_number,
    })
}

/// Consumes the leading `#` lines of `lines` and collects their qid mappings.
///
/// Stops at the first line that does not start with `#` without consuming
/// it. Comment lines that are not qid declarations are skipped. A qid
/// declared twice keeps its last keywords.
pub fn parse_header<I>(lines: &mut Peekable<I>) -> Result<QueryKeywords>
where
    I: Iterator<Item = NumberedLine>,
{
    let mut keywords = QueryKeywords::new();

    loop {
        let in_header = match lines.peek() {
            Some((_, Ok(line))) => line.starts_with(COMMENT_MARKER),
            Some((_, Err(_))) => true,
            None => false,
        };
        if !in_header {
            break;
        }

        let Some((number, line)) = lines.next() else {
            break;
        };
        let line = line.map_err(|source| Error::Read {
            line: number,
            source,
        })?;

        match parse_header_line(&line) {
            Some((qid, text)) => {
                trace!(line = number, qid, keywords = text, "header qid");
                keywords.insert(qid, text.to_string());
            }
            None => trace!(line = number, "skipping header comment"),
        }
    }

    Ok(keywords)
}

/// Body lines that match the judgment pattern, read lazily.
pub struct BodyLines<I> {
    lines: I,
}

impl<I> BodyLines<I>
where
    I: Iterator<Item = NumberedLine>,
{
    pub fn new(lines: I) -> Self {
        Self { lines }
    }
}

impl<I> Iterator for BodyLines<I>
where
    I: Iterator<Item = NumberedLine>,
{
    type Item = Result<BodyEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        for (number, line) in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(Error::Read {
                        line: number,
                        source,
                    }));
                }
            };

            trace!(line = number, raw = %line, "body line");
            if let Some(entry) = parse_body_line(&line, number) {
                trace!(
                    line = number,
                    grade = entry.grade,
                    qid = entry.qid,
                    doc_id = %entry.doc_id,
                    "body judgment"
                );
                return Some(Ok(entry));
            }
        }

        None
    }
}
