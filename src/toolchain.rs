//! External tool locations and one invocation wrapper per pipeline stage.
//!
//! Tool paths are explicit configuration resolved once, not hard-coded at the
//! call sites: a JSON config file takes precedence, then per-tool environment
//! variables, then the conventional layout under the user's home directory.
//!
//! Each stage wrapper spawns its tool, waits for termination, and resolves
//! with the output path on exit code 0. No output is validated beyond the
//! exit code; a tool that exits 0 but writes a malformed file is the tool's
//! own contract violation. No timeout is enforced and no stage is retried.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::fsio;

/// Resolved locations of the external toolchain binaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toolchain {
    /// C frontend (emits LLVM bitcode)
    pub clang: PathBuf,
    /// LLVM static compiler (bitcode to target assembly)
    pub llc: PathBuf,
    /// Assembly to textual wasm module
    pub s2wasm: PathBuf,
    /// Textual wasm module to binary
    pub wast2wasm: PathBuf,
    /// Binary wasm module back to text
    pub wasm2wast: PathBuf,
    /// Binary wasm module merger
    pub wasm_merge: PathBuf,
}

impl Toolchain {
    /// Resolve tool locations from the environment.
    ///
    /// Per-tool environment variables (`C2WASM_CLANG`, `C2WASM_LLC`,
    /// `C2WASM_S2WASM`, `C2WASM_WAST2WASM`, `C2WASM_WASM2WAST`,
    /// `C2WASM_WASM_MERGE`) override the defaults under
    /// `~/prgs/llvmwasm`, `~/prgs/binaryen`, and `~/prgs/wabt`.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| Error::Io {
            path: PathBuf::from("~"),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine home directory",
            ),
        })?;
        let llvm = home.join("prgs").join("llvmwasm").join("bin");
        let binaryen = home.join("prgs").join("binaryen").join("bin");
        let wabt = home
            .join("prgs")
            .join("wabt")
            .join("out")
            .join("clang")
            .join("Debug");

        Ok(Self {
            clang: tool_path("C2WASM_CLANG", llvm.join("clang")),
            llc: tool_path("C2WASM_LLC", llvm.join("llc")),
            s2wasm: tool_path("C2WASM_S2WASM", binaryen.join("s2wasm")),
            wast2wasm: tool_path("C2WASM_WAST2WASM", wabt.join("wast2wasm")),
            wasm2wast: tool_path("C2WASM_WASM2WAST", wabt.join("wasm2wast")),
            wasm_merge: tool_path("C2WASM_WASM_MERGE", binaryen.join("wasm-merge")),
        })
    }

    /// Load tool locations from a JSON config file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fsio::read_all(path)?;
        serde_json::from_slice(&bytes).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Compile C source to LLVM bitcode.
    pub fn compile_to_bitcode(&self, input: &Path, output: &Path) -> Result<PathBuf> {
        let mut cmd = Command::new(&self.clang);
        cmd.arg("-emit-llvm")
            .arg("--target=wasm32")
            .arg("-Oz")
            .arg(input)
            .arg("-c")
            .arg("-o")
            .arg(output);
        run_stage("clang", cmd, vec![input.to_path_buf()], output)
    }

    /// Translate LLVM bitcode to target assembly.
    pub fn bitcode_to_asm(&self, input: &Path, output: &Path) -> Result<PathBuf> {
        let mut cmd = Command::new(&self.llc);
        cmd.arg("-asm-verbose=false").arg(input).arg("-o").arg(output);
        run_stage("llc", cmd, vec![input.to_path_buf()], output)
    }

    /// Assemble target assembly into a textual wasm module.
    pub fn asm_to_wat(&self, input: &Path, output: &Path) -> Result<PathBuf> {
        let mut cmd = Command::new(&self.s2wasm);
        cmd.arg(input).arg("-o").arg(output);
        run_stage("s2wasm", cmd, vec![input.to_path_buf()], output)
    }

    /// Translate a textual wasm module into the binary module format.
    pub fn wat_to_wasm(&self, input: &Path, output: &Path) -> Result<PathBuf> {
        let mut cmd = Command::new(&self.wast2wasm);
        cmd.arg(input).arg("-o").arg(output);
        run_stage("wast2wasm", cmd, vec![input.to_path_buf()], output)
    }

    /// Disassemble a binary wasm module back to text.
    pub fn wasm_to_wat(&self, input: &Path, output: &Path) -> Result<PathBuf> {
        let mut cmd = Command::new(&self.wasm2wast);
        cmd.arg(input).arg("-o").arg(output);
        run_stage("wasm2wast", cmd, vec![input.to_path_buf()], output)
    }

    /// Merge multiple binary wasm modules into one.
    pub fn merge_modules(&self, inputs: &[PathBuf], output: &Path) -> Result<PathBuf> {
        let mut cmd = Command::new(&self.wasm_merge);
        for input in inputs {
            cmd.arg(input);
        }
        cmd.arg("-o").arg(output);
        run_stage("wasm-merge", cmd, inputs.to_vec(), output)
    }
}

fn tool_path(env_var: &str, default: PathBuf) -> PathBuf {
    std::env::var_os(env_var)
        .map(PathBuf::from)
        .unwrap_or(default)
}

/// Spawn a stage command, wait for exit, and map the exit status onto the
/// stage contract: exit 0 resolves with the output path, anything else fails
/// with the tool identity, input/output paths, and exit code attached.
fn run_stage(
    tool: &'static str,
    mut cmd: Command,
    inputs: Vec<PathBuf>,
    output: &Path,
) -> Result<PathBuf> {
    debug!(tool, command = ?cmd, "spawning stage tool");
    let status = cmd.status().map_err(|source| Error::Spawn {
        tool: tool.to_string(),
        source,
    })?;
    if !status.success() {
        return Err(Error::Tool {
            tool: tool.to_string(),
            inputs,
            output: output.to_path_buf(),
            code: status.code(),
        });
    }
    Ok(output.to_path_buf())
}
