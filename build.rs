use std::process::Command;

fn main() {
    let rustc_version = Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .unwrap_or_else(|| "unknown".to_string());

    println!(
        "cargo:rustc-env=CONFSYNC_RUSTC_VERSION={}",
        rustc_version.trim()
    );
    println!("cargo:rerun-if-changed=build.rs");
}
