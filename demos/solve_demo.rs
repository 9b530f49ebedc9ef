//! Solve a small 3x3 system and print the solution.
//!
//! Run with: cargo run --example solve_demo

use math_gauss::gauss_solve;
use ndarray::array;

fn main() {
    env_logger::init();

    let a = array![[2.0_f64, -1.0, 1.0], [3.0, 2.0, -4.0], [1.0, 1.0, 1.0]];
    let b = array![1.0_f64, 2.0, 3.0];

    match gauss_solve(&a, &b) {
        Ok(x) => {
            println!("Solution:");
            for (i, xi) in x.iter().enumerate() {
                println!("  x[{i}] = {xi:.6}");
            }
        }
        Err(e) => eprintln!("solve failed: {e}"),
    }
}
