use crate::cost::{GAP_COST, substitution_cost};

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Minimum total cost of a global alignment of `a` against `b`.
///
/// Substitutions are priced by [`substitution_cost`], insertions and
/// deletions by [`GAP_COST`]. Every cell of the table is filled, there is
/// no cut-off. Only two rows are kept alive; since the cost model is
/// symmetric the shorter string is laid along the row.
pub fn alignment_penalty(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let n = shorter.len();
    let mut prev: Vec<usize> = (0..=n).map(|j| j * GAP_COST).collect();
    let mut curr = vec![0; n + 1];

    for (i, &lc) in longer.iter().enumerate() {
        curr[0] = (i + 1) * GAP_COST;
        for j in 1..=n {
            let sub = prev[j - 1] + substitution_cost(lc, shorter[j - 1]);
            let del = prev[j] + GAP_COST;
            let ins = curr[j - 1] + GAP_COST;
            curr[j] = sub.min(del).min(ins);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Percentage of `max_len` left over once `penalty` is paid, floored at 0.
/// Two empty strings are a perfect match.
pub fn confidence(penalty: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        return 100.0;
    }
    let max_len = max_len as f64;
    ((max_len - penalty as f64) / max_len * 100.0).max(0.0)
}
