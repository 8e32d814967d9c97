/*
Resolution on two literal lists w.r.t. a pivot variable, used by the CDCL
conflict analyzer to derive a learnt clause (see cdcl::conflict_analysis).
*/

use crate::data_structures::{Clause, Literal};

/// Resolves `a` and `b` on `pivot`, returning the sorted, deduplicated union
/// with both polarities of `pivot` removed. The source sorts and deduplicates
/// the merged list before excising the pivot; any equivalent
/// set-union-minus-pivot is acceptable, but the result must never contain
/// `pivot` in either polarity.
pub fn resolve(a: &[Literal], b: &[Literal], pivot: Literal) -> Clause {
    let mut merged: Vec<Literal> = a.iter().chain(b.iter()).copied().collect();
    merged.sort_unstable();
    merged.dedup();
    merged.retain(|&literal| literal != pivot && literal != -pivot);
    merged
}
