//! Test support utilities for mooring integration tests.
//!
//! Provides an isolated test environment with a scripted `ipfs` binary on
//! PATH, so the real mooring binary can be driven end-to-end without a
//! live daemon.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::process::Output;
use tempfile::TempDir;

/// Scripted stand-in for the ipfs CLI.
///
/// Speaks the same four-command text protocol mooring depends on; state
/// lives under `$MOORING_FAKE_STATE` so parallel tests stay isolated.
const FAKE_IPFS: &str = r#"#!/bin/sh
state="${MOORING_FAKE_STATE:?}"
mkdir -p "$state/keys" "$state/targets"

key_id() {
    printf 'Qm%s' "$(printf '%s' "$1" | cksum | cut -d' ' -f1)"
}

case "$1 $2" in
"key gen")
    shift 2
    while [ $# -gt 1 ]; do shift; done
    name="$1"
    if [ -e "$state/keys/$name" ]; then
        echo "Error: key by that name already exists, refusing to overwrite" >&2
        exit 1
    fi
    key_id "$name" > "$state/keys/$name"
    cat "$state/keys/$name"
    ;;
"key list")
    for f in "$state/keys"/*; do
        [ -e "$f" ] || continue
        printf '%s %s\n' "$(cat "$f")" "$(basename "$f")"
    done
    ;;
"name resolve")
    id="$3"
    if [ -e "$state/targets/$id" ]; then
        printf '/ipfs/%s\n' "$(cat "$state/targets/$id")"
    else
        echo "Error: could not resolve name" >&2
        exit 1
    fi
    ;;
"name publish")
    name="$5"
    target="$6"
    if [ ! -e "$state/keys/$name" ]; then
        echo "Error: no key by the given name was found" >&2
        exit 1
    fi
    id="$(cat "$state/keys/$name")"
    printf '%s' "$target" > "$state/targets/$id"
    printf 'Published to %s: /ipns/%s\n' "$id" "$id"
    ;;
*)
    echo "Error: unknown command" >&2
    exit 1
    ;;
esac
"#;

/// Test environment with isolated temp directories.
///
/// Each test gets its own project dir, fake-binary dir, and daemon state
/// dir. No process-global state is mutated; child processes use
/// `.current_dir()` and per-command env, so tests run in parallel safely.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Directory holding the fake `ipfs` binary
    pub bin: TempDir,
    /// Fake daemon state directory
    pub state: TempDir,
}

impl Test {
    /// Create a new test environment with the fake daemon installed.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = TempDir::new().expect("failed to create temp bin dir");
        let state = TempDir::new().expect("failed to create temp state dir");

        let script = bin.path().join("ipfs");
        fs::write(&script, FAKE_IPFS).expect("failed to write fake ipfs");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&script)
                .expect("failed to stat fake ipfs")
                .permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&script, perms).expect("failed to chmod fake ipfs");
        }

        Self { dir, bin, state }
    }

    /// Create a mooring command wired to the fake daemon.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("mooring").expect("failed to find mooring binary");
        let path = format!(
            "{}:{}",
            self.bin.path().display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.env("PATH", path);
        cmd.env("MOORING_FAKE_STATE", self.state.path());
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Create a mooring command with no daemon binary reachable.
    pub fn cmd_without_daemon(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("mooring").expect("failed to find mooring binary");
        cmd.env("PATH", self.state.path());
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `mooring publish` command.
    pub fn publish(&self, name: &str, content: &str) -> Output {
        self.cmd()
            .args(["publish", name, content])
            .output()
            .expect("failed to run mooring publish")
    }

    /// Shortcut for `mooring resolve` command.
    pub fn resolve(&self, name: &str) -> Output {
        self.cmd()
            .args(["resolve", name])
            .output()
            .expect("failed to run mooring resolve")
    }

    /// Write a `.mooring.toml` into the project directory.
    pub fn write_config(&self, contents: &str) {
        fs::write(self.dir.path().join(".mooring.toml"), contents)
            .expect("failed to write config");
    }

    /// Parse a command's stdout as the JSON response envelope.
    pub fn envelope(output: &Output) -> serde_json::Value {
        serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not a JSON envelope ({}): {:?}",
                e,
                String::from_utf8_lossy(&output.stdout)
            )
        })
    }
}
