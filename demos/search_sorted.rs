//! Example to demonstrate the binary search entry points over array- and
//! list-shaped sequences.

use std::collections::VecDeque;

use seqfind::searching::{binary_search, binary_search_recursive};

fn main() {
    // Sample data, sorted in non-decreasing order as the queries require.
    let array = vec![-9, 1, 3, 5, 7];
    let list: VecDeque<i32> = array.iter().copied().collect();
    let target = -9;

    println!("Binary Search (Array): {:?}", binary_search(&array, &target));
    println!(
        "Binary Search Recursive (Array): {:?}",
        binary_search_recursive(&array, &target)
    );
    println!("Binary Search (List): {:?}", binary_search(&list, &target));
}
