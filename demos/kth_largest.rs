//! Example to demonstrate k-th largest selection.

use seqfind::selection::kth_largest;

fn main() -> anyhow::Result<()> {
    let mut vals = vec![12, 3, 5, 7, 19, 2, 10];
    let k = 3;

    let result = kth_largest(&mut vals, k)?;

    println!("The {k}th largest element is: {result}");
    Ok(())
}
