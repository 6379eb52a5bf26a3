//! Cross-process determinism: the `solve_fixture` binary prints identical
//! digests under different environments and working directories.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    env!("CARGO_BIN_EXE_solve_fixture").to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(
        baseline.contains("report_digest=sha256:"),
        "baseline output missing report_digest"
    );
    assert!(
        baseline.contains("sequence_digest=sha256:"),
        "baseline output missing sequence_digest"
    );
    assert!(
        baseline.contains("replay_digest=sha256:"),
        "baseline output missing replay_digest"
    );

    let tmp = std::env::temp_dir();
    let tmp = tmp.to_string_lossy();
    let variants: [(&str, Vec<(&str, &str)>); 3] = [
        ("locale", vec![("LC_ALL", "C"), ("LANG", "C")]),
        ("utf8-locale", vec![("LC_ALL", "en_US.UTF-8")]),
        ("rust-log", vec![("RUST_LOG", "trace"), ("TZ", "Pacific/Auckland")]),
    ];
    for (name, env) in &variants {
        assert_eq!(
            run_variant(&root, env),
            baseline,
            "variant {name} diverged from baseline"
        );
    }
    assert_eq!(
        run_variant(&tmp, &[]),
        baseline,
        "working directory changed output"
    );
}
