use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use matdoc_testkit::{stdout_json, target_dir as workspace_target_dir};

static MATDOC_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_matdoc(args: &[&str]) -> Output {
	Command::new(matdoc_bin()).args(args).output().expect("matdoc command executes")
}

pub(crate) fn run_matdoc_json(args: &[&str]) -> serde_json::Value {
	stdout_json(&run_matdoc(args))
}

fn matdoc_bin() -> &'static PathBuf {
	MATDOC_BIN.get_or_init(resolve_matdoc_bin)
}

fn resolve_matdoc_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_matdoc") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "matdoc.exe" } else { "matdoc" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "matdoc"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build matdoc binary at {}", bin.display());

	bin
}
