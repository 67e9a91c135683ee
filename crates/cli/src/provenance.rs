use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contents of `<scene>.provenance.json`.
#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    crate_version: &'static str,
    seed: u64,
    params: Value,
    scene: &'a str,
}

/// Record how a scene file was produced, next to it. Returns the sidecar path.
pub fn write_sidecar(scene: &Path, seed: u64, params: Value) -> Result<PathBuf> {
    let path = scene.with_extension("provenance.json");
    let name = scene.to_string_lossy();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        crate_version: citynet::VERSION,
        seed,
        params,
        scene: &name,
    };
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status.success().then_some(())?;
            String::from_utf8(out.stdout).ok().map(|s| s.trim().to_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}
