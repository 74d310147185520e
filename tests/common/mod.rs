//! Shared testing utilities for dapgen CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use serde_json::{Value, json};

/// Variables the binary reads; cleared so the host environment cannot leak in.
pub const ENV_VARS: [&str; 5] =
    ["NVIDIA_API_KEY", "NEMO_DD_BASE_URL", "MODEL_ALIAS", "PRINCIPLE_TOPIC", "PRINCIPLE_OUTPUT_DIR"];

/// Testing harness providing an isolated working directory and a fake Data Designer.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    pub server: mockito::ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let server = mockito::Server::new();
        Self { root, server }
    }

    /// Output directory handed to the binary.
    pub fn output_dir(&self) -> ChildPath {
        self.root.child("output")
    }

    pub fn output_file(&self, name: &str) -> ChildPath {
        self.output_dir().child(name)
    }

    /// Command for the compiled binary with no API key configured.
    pub fn cli_without_key(&self) -> Command {
        let mut cmd = Command::cargo_bin("dapgen").expect("Failed to locate dapgen binary");
        cmd.current_dir(self.root.path());
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env_remove("RUST_LOG")
            .env("NEMO_DD_BASE_URL", self.server.url())
            .env("PRINCIPLE_OUTPUT_DIR", self.output_dir().path());
        cmd
    }

    /// Command for the compiled binary pointed at the fake service with a key.
    pub fn cli(&self) -> Command {
        let mut cmd = self.cli_without_key();
        cmd.env("NVIDIA_API_KEY", "nvapi-test-key");
        cmd
    }

    /// Serve a single preview response body.
    pub fn mock_preview(&mut self, body: Value) -> mockito::Mock {
        self.server
            .mock("POST", "/preview")
            .match_header("authorization", "Bearer nvapi-test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }
}

/// A complete principle record about `topic` with placeholder sections.
pub fn principle_row(topic: &str) -> Value {
    json!({
        "principle_name": topic,
        "classification_area": "Information Governance",
        "principle_type": "Data Architecture",
        "source": "Derived",
        "statement": "Placeholder statement.",
        "description": "Placeholder description.",
        "rationale": "Placeholder rationale.",
        "implications": "- Placeholder implication one.\n- Placeholder implication two.",
    })
}
