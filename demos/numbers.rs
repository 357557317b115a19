//! Demonstrates exact-type storage and retrieval of numeric values.
//!
//! The store never widens or coerces: a value stored as i32 is not an i64,
//! and a value stored as f64 is not an f32.
//!
//! Run with: cargo run --example numbers

use sovran_store::StoreError;

fn main() {
    // Store numbers of different widths in the shared store
    sovran_store::set("pi", 3.14f64);
    sovran_store::set("meaningoflife", 42i32);
    sovran_store::set("population", 8_100_000_000u64);

    // Retrieve them with the types they were stored as
    let pi: f64 = sovran_store::get("pi");
    let mol: i32 = sovran_store::get("meaningoflife");
    let population: u64 = sovran_store::get("population");

    println!("pi = {}", pi);
    println!("meaning of life = {}", mol);
    println!("population = {}", population);

    // The silent accessor falls back to zero on a width mismatch
    let pi_as_f32: f32 = sovran_store::get("pi");
    println!("pi requested as f32 = {} (stored as f64)", pi_as_f32);

    // The precise accessor says why
    match sovran_store::get_e::<i64>("meaningoflife") {
        Ok(value) => println!("this shouldn't happen: {}", value),
        Err(StoreError::WrongType(requested)) => {
            println!("meaningoflife is not stored as {}", requested)
        }
        Err(e) => println!("unexpected error: {}", e),
    }

    // And distinguishes a key that was never set
    match sovran_store::get_e::<i32>("unset") {
        Ok(value) => println!("this shouldn't happen: {}", value),
        Err(StoreError::ValueNotFound(key)) => println!("{} was never set", key),
        Err(e) => println!("unexpected error: {}", e),
    }
}
