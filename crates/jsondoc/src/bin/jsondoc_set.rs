//! `jsondoc-set` — write a value into a JSON document.
//!
//! Usage:
//!   jsondoc-set '<pointer>' '<value>'
//!
//! The document is read from stdin. The value is read as a JSON literal when
//! it is one and as a plain string otherwise. The updated document is printed
//! in canonical form.

use jsondoc::cli::{start_logging, update_document};
use jsondoc::StoreOptions;
use std::io::{self, Read, Write};

fn main() {
    let _logger = start_logging();

    let args: Vec<String> = std::env::args().collect();
    let (pointer, value) = match (args.get(1), args.get(2)) {
        (Some(p), Some(v)) => (p.clone(), v.clone()),
        _ => {
            eprintln!("Usage: jsondoc-set '<pointer>' '<value>'");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match update_document(buf.trim(), &pointer, &value, StoreOptions::default()) {
        Ok(result) => {
            let mut out = io::stdout().lock();
            if let Err(e) = writeln!(out, "{result}") {
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
