//! The standalone sort benchmark
//!
//! Generates a collection of random integers of the size given as the first
//! command-line argument, sorts it in place and reports the elapsed
//! wall-clock time in milliseconds. A non-integer size is a hard failure.

use lapmark::collection;

fn main() {
    let Some(arg) = std::env::args().nth(1) else {
        println!("Usage: sort-bench <size>");
        return;
    };

    let size: usize = arg.parse().unwrap();

    let mut values = collection::generate(size);
    let elapsed = collection::sort_timed(&mut values);

    println!(
        "Sorted {size} integers in {:.2} ms",
        elapsed.as_secs_f64() * 1000.0
    );
}
