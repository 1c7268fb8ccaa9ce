use std::fs;

fn main() {
    // Askama templates are read at compile time, but without explicit cargo
    // hints it's easy to end up with a stale binary during dev.
    let Ok(entries) = fs::read_dir("templates") else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("html") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
