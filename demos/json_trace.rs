//! Example: Structured Trace Logging with Serde
//!
//! Serializes the unpacked trace of a wrapped error to JSON, the shape a log
//! sink would ingest.

use error_trail::{trail, Error, WrapResultExt};

#[inline(never)]
fn query(table: &str) -> Result<Vec<String>, Error> {
    Err(trail!("relation {table:?} does not exist"))
}

#[inline(never)]
fn load_users() -> Result<Vec<String>, Error> {
    query("users").wrap_err("loading users")
}

fn main() {
    let err = match load_users() {
        Ok(_) => return,
        Err(err) => err,
    };

    match serde_json::to_string_pretty(&err.unpack()) {
        Ok(json) => {
            println!("Structured Error Log:\n{}", json);
        }
        Err(e) => {
            eprintln!("Failed to serialize error: {}", e);
        }
    }
}
