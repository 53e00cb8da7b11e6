use std::env;
use std::fs;
use std::path::Path;

/// Copies the workspace config.toml next to the built binary so that
/// `load_config` finds it at runtime.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR looks like target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config.toml");

    if source_config.exists() {
        let dest_config = target_dir.join("config.toml");
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, the embedded default will be used",
            source_config
        );
    }
}
