use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Write `include/cfibo.h` next to the manifest.
fn generate_header(crate_dir: &Path) -> Result<(), Box<dyn Error>> {
    let include_dir = crate_dir.join("include");
    fs::create_dir_all(&include_dir)?;

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))?;
    cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_config(config)
        .generate()?
        .write_to_file(include_dir.join("cfibo.h"));
    Ok(())
}

fn main() {
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let crate_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");

    // The Rust library is usable without the header; don't fail the build over it.
    if let Err(e) = generate_header(Path::new(&crate_dir)) {
        println!("cargo:warning=cfibo.h was not generated: {e}");
    }
}
