//! Example: Printing a Merged Trace
//!
//! Constructs an error in a helper, wraps it twice from `main`, and prints
//! every frame of the merged trace as `i) file[line]: function: message`,
//! with the working directory stripped from the paths.

use error_trail::{Error, TraceFormatConfig};

#[inline(never)]
fn func_a() -> Error {
    Error::new("hey you!")
}

fn main() {
    let err = func_a();
    err.wrap("I'm wrapped");
    err.wrap("I'm wrapped2");

    println!("error: {err}\n");

    let config = TraceFormatConfig::default().relative_to_current_dir();
    println!("{}", err.unpack().render(&config));

    println!("\nConstruct and wrap sites only:");
    println!("{}", err.unpack().render(&TraceFormatConfig::annotated().relative_to_current_dir()));
}
