// Shared build script helper for rendering crate READMEs into rustdoc.
// Pulled into a build.rs with: include!("../build_common.rs");
//
// Required imports in the including file:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Rewrite a crate's README.md so it can serve as the crate-level docs.
///
/// READMEs link source files under src/ for repository browsing; rustdoc
/// resolves module paths instead, so the src/ prefix and the .rs extension
/// are stripped before the file lands in OUT_DIR.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");

    let readme_path = Path::new(crate_dir).join("README.md");
    let Ok(content) = fs::read_to_string(&readme_path) else {
        return; // No README, nothing to generate
    };

    let rustdoc_content = content.replace("](src/", "](").replace(".rs)", ")");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");
    fs::write(dest_path, rustdoc_content).unwrap();
}
