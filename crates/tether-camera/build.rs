use std::{env, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-env-changed=EDSDK_DIR");
    println!("cargo:rerun-if-env-changed=EDSDK_LIB_DIR");

    // Only the native gateway links against the vendor library
    if env::var_os("CARGO_FEATURE_EDSDK").is_none() {
        return;
    }

    println!("cargo:rustc-link-lib=dylib=EDSDK");

    // Search order:
    // 1. EDSDK_DIR/Library (layout of the vendor SDK archive)
    // 2. EDSDK_LIB_DIR
    if let Ok(dir) = env::var("EDSDK_DIR") {
        let lib_path = PathBuf::from(dir).join("Library");
        println!("cargo:rustc-link-search=native={}", lib_path.display());
        println!("cargo:warning=Using EDSDK_DIR: {}", lib_path.display());
        return;
    }

    if let Ok(lib_dir) = env::var("EDSDK_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
        println!("cargo:warning=Using EDSDK_LIB_DIR: {}", lib_dir);
        return;
    }

    println!(
        "cargo:warning=EDSDK import library location unknown. Set EDSDK_DIR or EDSDK_LIB_DIR environment variable."
    );
}
