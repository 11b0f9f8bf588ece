//! Test environment builder for isolated Slugmap testing.
//!
//! Provides `TestEnv` - a temp project directory holding a `data/` tree, a
//! separate temp config home, and helpers to run the slugmap binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Variables that would leak the developer's setup into a test run
const SCRUBBED_VARS: &[&str] = &[
    "RUST_LOG",
    "SLUGMAP_DATA_DIR",
    "SLUGMAP_KINDS",
    "SLUGMAP_VERBOSITY",
    "SLUGMAP_ATOMIC_WRITES",
    "SLUGMAP_PREFER_PREBUILT",
];

/// Result of running a slugmap CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every non-empty stdout line as a JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not NDJSON ({e}): {l}\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for the CLI; records live under `data/`
    pub project_root: TempDir,
    /// Stands in for the user config directory
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path of a lookup file under the default data directory
    pub fn lookup_path(&self, kind: &str) -> PathBuf {
        self.project_path(&format!("data/{kind}-lookup.json"))
    }

    /// Run slugmap from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run slugmap from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("SLUGMAP_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute slugmap");
        output_to_result(output)
    }

    /// Read and parse a lookup file
    pub fn read_lookup(&self, kind: &str) -> serde_json::Value {
        let path = self.lookup_path(kind);
        let content = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        serde_json::from_str(&content).expect("lookup file is not JSON")
    }

    /// Write a file relative to the project root
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write one entity record under `data/<kind>/<slug>.json`
    pub fn write_record(&self, kind: &str, slug: &str, content: &str) {
        self.write_project_file(&format!("data/{kind}/{slug}.json"), content);
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    records: Vec<(String, String, String)>,
    project_config: Option<String>,
    user_config: Option<String>,
}

impl TestEnvBuilder {
    /// Add an entity record at `data/<kind>/<slug>.json`
    pub fn with_record(mut self, kind: &str, slug: &str, content: &str) -> Self {
        self.records
            .push((kind.to_string(), slug.to_string(), content.to_string()));
        self
    }

    /// Add a record whose body is `{"name": <name>}`
    pub fn with_named(self, kind: &str, slug: &str, name: &str) -> Self {
        let content = serde_json::json!({ "name": name }).to_string();
        self.with_record(kind, slug, &content)
    }

    /// Write `slugmap.toml` in the project root
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// Write `slugmap.toml` in the isolated config home
    pub fn with_user_config(mut self, toml: &str) -> Self {
        self.user_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_slugmap")),
        };

        for (kind, slug, content) in &self.records {
            env.write_record(kind, slug, content);
        }
        if let Some(toml) = &self.project_config {
            env.write_project_file("slugmap.toml", toml);
        }
        if let Some(toml) = &self.user_config {
            write_file(&env.config_home.path().join("slugmap.toml"), toml);
        }
        env
    }
}
