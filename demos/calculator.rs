//! Calculator Example
//!
//! Reads two integers and prints `(1/a)*(1/b)`. Parsing failures and a zero
//! divisor surface as a trail showing every frame the error crossed.
//!
//! Run with: `cargo run --example calculator --features std`
//!
//! Build without the default `source-location` feature to see the same
//! output reduced to bare lines.

use std::io::{self, BufRead, Write};

use error_trail::prelude::*;

fn inverse(i: i32) -> TrailResult<f64> {
    if i == 0 {
        bail_trail!("Error: I can't take the inverse of 0!");
    }
    Ok(1.0 / f64::from(i))
}

fn multiply_inverse(a: i32, b: i32) -> TrailResult<f64> {
    let product = inverse(a).and_then(|x| inverse(b).map(|y| x * y));
    match product {
        Ok(value) => Ok(value),
        Err(err) => rethrow_trail!(err, "Called from multiply_inverse: a = {} b = {}", a, b),
    }
}

fn parse_operands(stra: &str, strb: &str) -> TrailResult<(i32, i32)> {
    let mut err = trail!("Error parsing your numbers!");
    let a = stra.trim().parse::<i32>();
    let b = strb.trim().parse::<i32>();

    if let Err(e) = &a {
        trail_append!(err, "Error parsing integer 'a' ({:?}): {}", stra.trim(), e);
    }
    if let Err(e) = &b {
        trail_append!(err, "Error parsing integer 'b' ({:?}): {}", strb.trim(), e);
    }

    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        _ => Err(err),
    }
}

fn prompt(label: &str, lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<String> {
    print!("\nEnter an integer ({}) :> ", label);
    io::stdout().flush()?;
    lines.next().unwrap_or_else(|| Ok(String::new()))
}

fn run() -> TrailResult<f64> {
    println!("\n\nEnter two integers and I will calculate (1/a)*(1/b)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let stra = prompt("a", &mut lines).trail(here!())?;
    let strb = prompt("b", &mut lines).trail(here!())?;

    let (a, b) = parse_operands(&stra, &strb)?;
    multiply_inverse(a, b)
}

fn main() {
    match run() {
        Ok(value) => println!("\n\n(1/a)*(1/b) = {}\n", value),
        Err(err) => {
            println!("\n\nException! trail = {}\n", err);
            println!("({} frames)", err.frame_count());
        },
    }
}
