use chrono::Datelike;

fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();

    // Exposed to the crate through the env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    // Footer copyright year
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data");
}
