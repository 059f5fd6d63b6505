//! Print how long the naive recursion takes for each ordinal.
//!
//! ```text
//! cargo run --release -p fibstat --example fib_timing -- 25
//! ```

use std::env;
use std::time::Instant;

use fibstat::prelude::*;

fn main() -> Result<(), FibstatError> {
    let max: u32 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(20);
    const CALLS: u32 = 1_000;

    println!("{:>3} {:>12} {:>14}", "n", "fib(n)", "ns/call");
    for n in 0..max {
        let start = Instant::now();
        let mut value = 0_u64;
        for _ in 0..CALLS {
            value = fib(std::hint::black_box(u64::from(n)))?;
        }
        let per_call = start.elapsed().as_nanos() / u128::from(CALLS);
        println!("{n:>3} {value:>12} {per_call:>14}");
    }

    let sd = std_dev(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])?;
    println!("\nstd_dev([2, 4, 4, 4, 5, 5, 7, 9]) = {sd}");
    Ok(())
}
