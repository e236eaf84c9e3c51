use std::cmp::min;

use crate::types::*;

///Compute the levenshtein distance between two strings: the minimum number of single-character
///insertions, deletions or substitutions needed to transform `a` into `b`.
///
///Only two rows of the dynamic programming matrix are kept (of length |a|+1). The full matrix is
///always computed, there is no early termination on a maximum distance.
pub fn edit_distance(a: &str, b: &str) -> Distance {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

///Levenshtein distance over arbitrary sequences
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> Distance {
    if a.is_empty() {
        return b.len();
    } else if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<Distance> = Vec::with_capacity(a.len() + 1);
    let mut curr_row: Vec<Distance> = (0..=a.len()).collect();
    prev_row.resize(a.len() + 1, 0);

    for (j, elem_b) in b.iter().enumerate() {
        std::mem::swap(&mut prev_row, &mut curr_row);
        curr_row[0] = j + 1;
        for (i, elem_a) in a.iter().enumerate() {
            //insertion or deletion
            let cost_adjacent = 1 + min(prev_row[i + 1], curr_row[i]);
            //match or substitution
            let cost_diagonal = prev_row[i] + if elem_a == elem_b { 0 } else { 1 };
            curr_row[i + 1] = min(cost_adjacent, cost_diagonal);
        }
    }

    curr_row[a.len()]
}

///Lower bound on the edit distance between two strings: the difference in length
pub fn length_difference(a: &str, b: &str) -> Distance {
    let length_a = a.chars().count();
    let length_b = b.chars().count();
    if length_a > length_b {
        length_a - length_b
    } else {
        length_b - length_a
    }
}
