//! Compress the C support library under `runtime/` into the embedded bundle.
//!
//! Each file is zlib-compressed into `OUT_DIR` and listed in `bundle.gen.rs`, a table of
//! `(logical filename, compressed bytes)` pairs that `src/runtime/bundle.rs` includes.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::ZlibEncoder;

/// Support-library files shipped inside the binary, keyed by logical filename.
const RUNTIME_FILES: &[&str] = &["clay.c", "clay_sandbox.c", "clay.h"];

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=runtime");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").map_err(io::Error::other)?);
    let out_dir = PathBuf::from(env::var("OUT_DIR").map_err(io::Error::other)?);

    let mut table = String::from("&[\n");
    for name in RUNTIME_FILES {
        let source = fs::read(manifest_dir.join("runtime").join(name))?;

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&source)?;
        let compressed = encoder.finish()?;

        let blob = format!("{name}.z");
        fs::write(out_dir.join(&blob), compressed)?;
        table.push_str(&format!(
            "    ({name:?}, include_bytes!(concat!(env!(\"OUT_DIR\"), \"/{blob}\")) as &[u8]),\n"
        ));
    }
    table.push(']');

    fs::write(out_dir.join("bundle.gen.rs"), table)
}
