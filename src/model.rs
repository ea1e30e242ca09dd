use std::fmt;

use serde::Serialize;

/// One graded (query, document) pair plus the features a caller attaches to it.
///
/// Grade, qid, keywords and doc id are fixed at construction. Only the
/// feature list changes afterwards, and its order is the feature numbering
/// used by [`Judgment::to_ranklib_format`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Judgment {
    grade: u8,
    qid: u64,
    keywords: String,
    doc_id: String,
    features: Vec<f64>,
}

impl Judgment {
    pub fn new(
        grade: u8,
        qid: u64,
        keywords: impl Into<String>,
        doc_id: impl Into<String>,
    ) -> Self {
        Self {
            grade,
            qid,
            keywords: keywords.into(),
            doc_id: doc_id.into(),
            features: Vec::new(),
        }
    }

    pub fn grade(&self) -> u8 {
        self.grade
    }

    pub fn qid(&self) -> u64 {
        self.qid
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn features_mut(&mut self) -> &mut Vec<f64> {
        &mut self.features
    }

    pub fn push_feature(&mut self, value: f64) {
        self.features.push(value);
    }

    pub fn extend_features<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.features.extend(values);
    }

    /// Human-readable summary, same text as the `Display` impl.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Renders the trainer line:
    /// `<grade>\tqid:<qid>\t1:<f1>\t2:<f2> # <doc_id>\t<keywords>`.
    ///
    /// Feature numbers come from position in the feature list, starting at 1.
    /// Keywords are written as-is, so embedded tabs or newlines end up in the
    /// output unchanged.
    pub fn to_ranklib_format(&self) -> String {
        let mut line = format!("{}\tqid:{}\t", self.grade, self.qid);

        for (index, value) in self.features.iter().enumerate() {
            if index > 0 {
                line.push('\t');
            }
            line.push_str(&format!("{}:{}", index + 1, value));
        }

        line.push_str(&format!(" # {}\t{}", self.doc_id, self.keywords));
        line
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grade:{} qid:{} ({}) docid:{}",
            self.grade, self.qid, self.keywords, self.doc_id
        )
    }
}
