#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde::Serialize;
use tempfile::TempDir;

/// Helper struct to run boardview commands in an isolated temp directory
pub struct BoardTest {
    pub temp_dir: TempDir,
}

impl BoardTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        BoardTest { temp_dir }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_boardview"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("BOARDVIEW_ROOT")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute boardview command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Write `value` as JSON into the temp dir and return its path as a string
    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> String {
        let json = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
        self.write_file(name, &json)
    }

    pub fn write_file(&self, name: &str, content: &str) -> String {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path.to_string_lossy().to_string()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// Parse command stdout as JSON
pub fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("stdout should be valid JSON")
}
