use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::{FusedIterator, Peekable};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Judgment;
use crate::parse::{BodyLines, NumberedLines, QueryKeywords, numbered_lines, parse_header};


/// Judgments read lazily from one judgment file or reader.
///
/// The header has already been parsed when this is constructed. Body lines
/// are read as the iterator is advanced. The first error ends the sequence;
/// records yielded before it stay valid. Dropping the iterator closes the
/// underlying reader.
pub struct Judgments<R: BufRead> {
    keywords: QueryKeywords,
    body: BodyLines<Peekable<NumberedLines<R>>>,
    finished: bool,
}

/// Opens `path` and parses its header.
pub fn judgments_from_file(path: impl AsRef<Path>) -> Result<Judgments<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "opened judgment file");
    judgments_from_reader(BufReader::new(file))
}

/// Same as [`judgments_from_file`] over any buffered reader.
pub fn judgments_from_reader<R: BufRead>(reader: R) -> Result<Judgments<R>> {
    let mut lines = numbered_lines(reader).peekable();
    let keywords = parse_header(&mut lines)?;
    debug!(queries = keywords.len(), "parsed judgment header");

    Ok(Judgments {
        keywords,
        body: BodyLines::new(lines),
        finished: false,
    })
}

/// Reads every judgment in `path`, failing on the first error.
pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Judgment>> {
    judgments_from_file(path)?.collect()
}

impl<R: BufRead> Judgments<R> {
    /// Query keywords declared in the header.
    pub fn keywords(&self) -> &QueryKeywords {
        &self.keywords
    }
}

impl<R: BufRead> Iterator for Judgments<R> {
    type Item = Result<Judgment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let entry = match self.body.next() {
            Some(Ok(entry)) => entry,
            Some(Err(err)) => {
                self.finished = true;
                return Some(Err(err));
            }
            None => {
                self.finished = true;
                return None;
            }
        };

        let Some(keywords) = self.keywords.get(&entry.qid) else {
            self.finished = true;
            return Some(Err(Error::UnknownQid {
                qid: entry.qid,
                line: entry.line,
            }));
        };

        Some(Ok(Judgment::new(
            entry.grade,
            entry.qid,
            keywords.clone(),
            entry.doc_id,
        )))
    }
}

impl<R: BufRead> FusedIterator for Judgments<R> {}
