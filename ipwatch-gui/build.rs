use std::env;
use std::process::Command;

/// Embeds a short commit id as `GIT_HASH` for `--version`.
fn main() {
    println!("cargo:rerun-if-env-changed=IPWATCH_GIT_HASH");
    println!("cargo:rerun-if-changed=../.git/HEAD");

    let hash = env::var("IPWATCH_GIT_HASH")
        .ok()
        .filter(|h| !h.is_empty())
        .or_else(short_head)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={hash}");
}

fn short_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}
