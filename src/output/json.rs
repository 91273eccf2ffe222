//! JSON output formatting

use std::io;

use serde::Serialize;

/// Print any serializable value as pretty-printed JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
