// SPDX-License-Identifier: MIT
//
// prop-cycle demo — the whole algebra on one screen.
//
// Builds the classic color/line-width pairing, composes it both ways,
// slices it, and renders every result in constructor notation and as a
// table. The final loop shows the endless form a redraw loop would use.
//
// Usage:
//   cargo run -p prop-cycle --example demo

use prop_cycle::{Slice, Value, cycle};

fn main() {
    let color = cycle("color", "rgb".chars().map(Value::from));
    let width = cycle("lw", (0..3).map(Value::from));

    let paired = color.clone() + width.clone();
    println!("zip:     {paired}");
    print!("{}", paired.table());

    let crossed = color * width;
    println!("product: {crossed}");
    print!("{}", crossed.table());

    let middle = crossed.slice(Slice::range(3, 6));
    println!("slice [3..6] of the product:");
    print!("{}", middle.table());

    let doubled = 2 * middle;
    println!("doubled: {} property sets", doubled.len());

    // A consumer cycles forever: clone-able iterators make that free.
    println!("first 8 draws:");
    for (i, set) in paired.iter().cycle().take(8).enumerate() {
        println!("  draw {i}: color={:?} lw={:?}", set["color"], set["lw"]);
    }
}
