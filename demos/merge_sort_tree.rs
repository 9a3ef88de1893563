//! Genuine merge-sort trace next to the idealized recursion tree.
//!
//! For a power of two every depth does the same work; for other sizes the
//! uneven n/2 splits add a partial extra level.
//!
//! Run with `cargo run --example merge_sort_tree -- 12`.

use recurrence_lab::report::{LevelTable, ReportConfig, TraceTable};
use recurrence_lab::trace::{descending_input, MergeSort, TraceProducer};

fn main() -> anyhow::Result<()> {
    let n: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 16,
    };
    let config = ReportConfig::default().with_bar_width(24);
    let input = descending_input(n);

    println!("Traced merge sort, n = {n}");
    print!("{}", TraceTable::new(&MergeSort.run(&input), &config));
    println!();
    println!("Idealized {}", MergeSort.recurrence().label());
    print!("{}", LevelTable::new(&MergeSort.idealized(&input)?, &config));
    Ok(())
}
