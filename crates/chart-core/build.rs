// File: crates/chart-core/build.rs
// Summary: Link the Windows system libraries Skia's raster backend needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (font manager)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
