use std::borrow::Borrow;
use std::collections::HashMap;

use crate::model::Judgment;

/// Buckets judgments by qid, keeping input order inside each bucket.
///
/// Items are moved into the map as given. Pass `&Judgment` or
/// `&mut Judgment` to group a collection in place: features pushed through
/// the grouped view land on the caller's records.
pub fn judgments_by_qid<J, I>(judgments: I) -> HashMap<u64, Vec<J>>
where
    J: Borrow<Judgment>,
    I: IntoIterator<Item = J>,
{
    let mut grouped: HashMap<u64, Vec<J>> = HashMap::new();
    for judgment in judgments {
        let qid = judgment.borrow().qid();
        grouped.entry(qid).or_default().push(judgment);
    }
    grouped
}
