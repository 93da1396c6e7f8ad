fn main() {
    // Stamp the build so the "last updated" line and footer year match on server and client
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // The relay endpoint is baked in with option_env!
    println!("cargo:rerun-if-env-changed=FORM_RELAY_ENDPOINT");
    println!("cargo:rerun-if-changed=build.rs");
}
