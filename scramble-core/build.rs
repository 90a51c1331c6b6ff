//! Build script for scramble-core
//!
//! Compiles the small C bridge that lets Rust hand a callback pointer to C
//! and have C invoke it on a message buffer.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=native/scramble_bridge.c");
    println!("cargo:rerun-if-changed=native/include/scramble.h");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let native = manifest_dir.join("native");

    cc::Build::new()
        .file(native.join("scramble_bridge.c"))
        .include(native.join("include"))
        .warnings(true)
        .compile("scramble_bridge");
}
