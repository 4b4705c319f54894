//! Binary to generate/update the .expected.cpp files under tests/fixtures
//!
//! Usage:
//!   cargo run --bin accept_expected            # Update all
//!   cargo run --bin accept_expected -- simple  # Update only fixtures matching "simple"

use genesis_codegen::{GenerateOptions, embed_bytes};
use std::fs;
use std::path::Path;

fn main() {
    let filter: Option<String> = std::env::args().nth(1);
    let fixture_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");

    let mut updated = 0;
    let mut skipped = 0;

    let entries = fs::read_dir(&fixture_dir).expect("fixture directory exists");
    let mut paths: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|s| s == "json").unwrap_or(false))
        .collect();
    paths.sort();

    for path in paths {
        if let Some(ref f) = filter {
            if !path.to_string_lossy().contains(f) {
                skipped += 1;
                continue;
            }
        }

        process_file(&path);
        updated += 1;
    }

    println!("Updated {} files, skipped {}", updated, skipped);
}

fn process_file(path: &Path) {
    let source = match fs::read(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {:?}: {}", path, e);
            return;
        }
    };

    // Provenance uses the bare file name so expected files stay stable
    // across checkouts.
    let options = GenerateOptions {
        source_name: path.file_name().and_then(|s| s.to_str()).map(String::from),
        ..Default::default()
    };

    match embed_bytes(&source, &options) {
        Ok(result) => {
            let expected_cpp = path.with_extension("expected.cpp");
            if let Err(e) = fs::write(&expected_cpp, &result.code) {
                eprintln!("Failed to write {:?}: {}", expected_cpp, e);
            } else {
                println!("  wrote {}", expected_cpp.display());
            }
        }
        Err(e) => {
            eprintln!("ERROR: {:?} failed to generate: {}", path, e);
        }
    }
}
