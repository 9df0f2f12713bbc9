//! `jsondoc-node` — show the editable rows of a node.
//!
//! Usage:
//!   jsondoc-node '<pointer>'
//!
//! The document is read from stdin. Prints the node's address followed by
//! one `key: value` line per editable row, or the node's value when it is a
//! bare scalar.

use jsondoc::cli::{describe_node, start_logging};
use jsondoc::StoreOptions;
use std::io::{self, Read, Write};

fn main() {
    let _logger = start_logging();

    let args: Vec<String> = std::env::args().collect();
    let pointer = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a JSON Pointer.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match describe_node(buf.trim(), &pointer, StoreOptions::default()) {
        Ok(result) => {
            if let Err(e) = writeln!(io::stdout().lock(), "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
