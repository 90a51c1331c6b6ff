//! Build script for scramble-cli
//!
//! Compiles the C callback fixture in `tests/fixtures` into a shared library
//! so tests can load it through the `library` callback mode. When no suitable
//! compiler is available the fixture is skipped and the test that needs it is
//! compiled out.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=tests/fixtures/swap_cb.c");
    println!("cargo:rerun-if-changed=../scramble-core/native/include/scramble.h");
    println!("cargo:rustc-check-cfg=cfg(callback_fixture)");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let source = manifest_dir.join("tests").join("fixtures").join("swap_cb.c");
    let include = manifest_dir
        .parent()
        .unwrap()
        .join("scramble-core")
        .join("native")
        .join("include");
    let output = out_dir.join("libscramble_cb_fixture.so");

    let compiler = cc::Build::new().get_compiler();
    if compiler.is_like_msvc() {
        println!("cargo:warning=Skipping callback fixture: MSVC is not supported");
        return;
    }

    let status = compiler
        .to_command()
        .arg("-shared")
        .arg("-fPIC")
        .arg("-I")
        .arg(&include)
        .arg("-o")
        .arg(&output)
        .arg(&source)
        .status();

    match status {
        Ok(status) if status.success() => {
            println!("cargo:rustc-cfg=callback_fixture");
            println!("cargo:rustc-env=SCRAMBLE_CB_FIXTURE={}", output.display());
        }
        Ok(status) => {
            println!("cargo:warning=Callback fixture failed to compile ({})", status);
        }
        Err(e) => {
            println!("cargo:warning=Could not run C compiler for callback fixture: {}", e);
        }
    }
}
