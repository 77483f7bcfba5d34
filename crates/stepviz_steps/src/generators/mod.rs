pub mod anagram;
pub mod balanced_parentheses;
pub mod bfs;
pub mod binary_search;
pub mod bubble_sort;
pub mod coin_change;
pub mod cycle_detection;
pub mod factorial;
pub mod inorder_traversal;
pub mod k_largest;
pub mod linear_search;
pub mod linked_list;
pub mod min_cost;
pub mod two_sum;

use std::fmt::Display;

/// "2, 5, 8"
pub(crate) fn join<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "[2, 5, 8]"
pub(crate) fn bracketed<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    format!("[{}]", join(values))
}

pub(crate) fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}
