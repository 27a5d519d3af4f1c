//! Sequence diff and patch with a caller-supplied match predicate
//!
//! A patch describes how to turn one sequence into another as ordered
//! remove/add operations against positions in the old sequence. Matching
//! is a longest-common-subsequence alignment; when an element occurs more
//! than once, the earliest occurrence wins.
//!
//! The match predicate compares keys only (the transcription matches
//! moras by text), so applying a patch back onto the old sequence yields
//! a sequence that is key-equal to the new one but keeps the old
//! elements wherever they matched.

/// One step of a patch, positioned against the old sequence
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp<T> {
    /// Drop `items.len()` elements starting at `old_pos`
    Remove { old_pos: usize, items: Vec<T> },
    /// Insert `items` before `old_pos` (after any removal at the same spot)
    Add { old_pos: usize, items: Vec<T> },
}

/// Diff two sequences into a patch under the given match predicate.
///
/// Ops come out ordered by position, with the removal preceding the
/// addition when both happen at the same spot.
pub fn get_patch<T, F>(before: &[T], after: &[T], same: F) -> Vec<PatchOp<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let m = before.len();
    let n = after.len();

    // lcs[i][j] = LCS length of before[i..] and after[j..]
    let mut lcs = vec![vec![0usize; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            lcs[i][j] = if same(&before[i], &after[j]) {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops = Vec::new();
    let mut removed: Vec<T> = Vec::new();
    let mut added: Vec<T> = Vec::new();
    let mut run_start = 0;

    let flush = |ops: &mut Vec<PatchOp<T>>, removed: &mut Vec<T>, added: &mut Vec<T>, run_start: usize| {
        let removed_len = removed.len();
        if !removed.is_empty() {
            ops.push(PatchOp::Remove {
                old_pos: run_start,
                items: std::mem::take(removed),
            });
        }
        if !added.is_empty() {
            // Insertions land after whatever the same run removed.
            ops.push(PatchOp::Add {
                old_pos: run_start + removed_len,
                items: std::mem::take(added),
            });
        }
    };

    let mut i = 0;
    let mut j = 0;
    while i < m || j < n {
        if i < m && j < n && same(&before[i], &after[j]) {
            flush(&mut ops, &mut removed, &mut added, run_start);
            i += 1;
            j += 1;
            run_start = i;
        } else if j < n && (i == m || lcs[i][j + 1] >= lcs[i + 1][j]) {
            added.push(after[j].clone());
            j += 1;
        } else {
            removed.push(before[i].clone());
            i += 1;
        }
    }
    flush(&mut ops, &mut removed, &mut added, run_start);

    ops
}

/// Apply a patch produced by [`get_patch`] back onto the old sequence.
///
/// Elements outside the patched ranges are carried over from `before`
/// unchanged, which is the whole point: matched elements keep their old
/// payload.
pub fn apply_patch<T: Clone>(before: &[T], patch: &[PatchOp<T>]) -> Vec<T> {
    let mut result = Vec::new();
    let mut old_index = 0;

    for op in patch {
        match op {
            PatchOp::Remove { old_pos, items } => {
                result.extend_from_slice(&before[old_index..*old_pos]);
                old_index = old_pos + items.len();
            }
            PatchOp::Add { old_pos, items } => {
                result.extend_from_slice(&before[old_index..*old_pos]);
                old_index = *old_pos;
                result.extend_from_slice(items);
            }
        }
    }
    result.extend_from_slice(&before[old_index..]);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[(&str, u32)]) -> Vec<(String, u32)> {
        items.iter().map(|(t, v)| (t.to_string(), *v)).collect()
    }

    fn same_text(a: &(String, u32), b: &(String, u32)) -> bool {
        a.0 == b.0
    }

    #[test]
    fn test_equal_sequences_produce_empty_patch() {
        let before = texts(&[("a", 1), ("b", 2)]);
        let after = texts(&[("a", 9), ("b", 9)]);
        assert!(get_patch(&before, &after, same_text).is_empty());
    }

    #[test]
    fn test_patched_sequence_keeps_matched_payloads() {
        // "konnichiwa" -> "konbanwa": ko/n carry over, ba/n come from after,
        // wa carries over.
        let before = texts(&[("コ", 1), ("ン", 2), ("ニ", 3), ("チ", 4), ("ワ", 5)]);
        let after = texts(&[("コ", 0), ("ン", 0), ("バ", 0), ("ン", 0), ("ワ", 0)]);

        let patch = get_patch(&before, &after, same_text);
        let result = apply_patch(&before, &patch);

        let expected = texts(&[("コ", 1), ("ン", 2), ("バ", 0), ("ン", 0), ("ワ", 5)]);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_pure_insertion_and_removal() {
        let before = texts(&[("a", 1), ("c", 3)]);
        let after = texts(&[("a", 0), ("b", 0), ("c", 0)]);
        let patch = get_patch(&before, &after, same_text);
        assert_eq!(
            patch,
            vec![PatchOp::Add { old_pos: 1, items: texts(&[("b", 0)]) }]
        );
        assert_eq!(apply_patch(&before, &patch), texts(&[("a", 1), ("b", 0), ("c", 3)]));

        let patch = get_patch(&after, &before, |a, b| a.0 == b.0);
        assert_eq!(
            patch,
            vec![PatchOp::Remove { old_pos: 1, items: texts(&[("b", 0)]) }]
        );
        assert_eq!(apply_patch(&after, &patch), texts(&[("a", 0), ("c", 0)]));
    }

    #[test]
    fn test_replacement_removes_then_adds() {
        let before = texts(&[("a", 1), ("x", 2), ("c", 3)]);
        let after = texts(&[("a", 0), ("y", 0), ("c", 0)]);
        let patch = get_patch(&before, &after, same_text);
        assert_eq!(
            patch,
            vec![
                PatchOp::Remove { old_pos: 1, items: texts(&[("x", 2)]) },
                PatchOp::Add { old_pos: 2, items: texts(&[("y", 0)]) },
            ]
        );
        assert_eq!(
            apply_patch(&before, &patch),
            texts(&[("a", 1), ("y", 0), ("c", 3)])
        );
    }

    #[test]
    fn test_duplicate_keys_match_earliest_first() {
        // Two "ン" in before, one in after: the first one survives.
        let before = texts(&[("ン", 1), ("ン", 2)]);
        let after = texts(&[("ン", 0)]);
        let result = apply_patch(&before, &get_patch(&before, &after, same_text));
        assert_eq!(result, texts(&[("ン", 1)]));
    }

    #[test]
    fn test_result_is_key_equal_to_after() {
        let before = texts(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        let after = texts(&[("d", 0), ("b", 0), ("e", 0)]);
        let result = apply_patch(&before, &get_patch(&before, &after, same_text));
        let keys: Vec<&str> = result.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(keys, vec!["d", "b", "e"]);
    }

    #[test]
    fn test_empty_sequences() {
        let empty: Vec<(String, u32)> = vec![];
        let after = texts(&[("a", 0)]);
        let patch = get_patch(&empty, &after, same_text);
        assert_eq!(apply_patch(&empty, &patch), after);
        let patch = get_patch(&after, &empty, same_text);
        assert!(apply_patch(&after, &patch).is_empty());
    }
}
