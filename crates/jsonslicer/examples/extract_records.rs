//! Pulls one field out of every record in a large, line-delimited JSON feed
//! without ever holding the whole feed in memory.
//!
//! Imagine a multi-gigabyte export of user records, one JSON object per
//! line:
//!
//! ```text
//! {"id": 1, "name": "ada", "email": "ada@example.com"}
//! {"id": 2, "name": "grace", "email": "grace@example.com"}
//! ```
//!
//! Loading the whole file as one `serde_json::Value` would require holding
//! every record in memory at once. `Slicer` instead matches `["email"]`
//! against the path of every object in the stream and hands back only the
//! matched sub-values, one at a time, in document order.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonslicer --example extract_records
//! ```
use jsonslicer::{pattern, Slicer, SlicerOptions};

const FEED: &[u8] = br#"
{"id": 1, "name": "ada", "email": "ada@example.com"}
{"id": 2, "name": "grace", "email": "grace@example.com"}
{"id": 3, "name": "margaret", "email": "margaret@example.com"}
"#;

fn main() {
    let mut options = SlicerOptions::default();
    options.yajl_allow_multiple_values = true;

    let slicer = Slicer::new(FEED, pattern!["email"], options).expect("valid options");

    for item in slicer {
        match item {
            Ok(item) => println!("{}", item.value),
            Err(err) => {
                eprintln!("malformed record: {err}");
                break;
            }
        }
    }
}
