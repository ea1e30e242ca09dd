//! Parser for Ranklib-style judgment files.
//!
//! A judgment file starts with a run of header comments that name each query,
//! followed by one graded document per body line:
//!
//! ```text
//! # qid:1: rambo
//! # qid:2: rocky
//! 4 qid:1 # 7555  Rambo
//! 0 qid:2 # 1366  Rocky
//! ```
//!
//! [`judgments_from_file`] yields one [`Judgment`] per recognized body line.
//! Callers append features to each record and render it with
//! [`Judgment::to_ranklib_format`].

mod error;
pub mod group;
pub mod loader;
pub mod model;
pub mod parse;

pub use error::{Error, Result};
pub use group::judgments_by_qid;
pub use loader::{Judgments, judgments_from_file, judgments_from_reader, load_all};
pub use model::Judgment;
pub use parse::{BodyEntry, QueryKeywords};
