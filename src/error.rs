//! Structured error types for toolchain and sandbox failures.
//!
//! Each variant carries the context a caller needs to diagnose which stage
//! failed: the path for I/O errors, the tool identity plus input/output paths
//! and exit code for process errors, and the failing operation for errors the
//! wasm engine reports.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures surfaced by the toolchain driver and module sandbox.
#[derive(Debug)]
pub enum Error {
    /// A filesystem operation failed.
    Io {
        /// Path the operation was attempted on
        path: PathBuf,
        /// Underlying system error
        source: io::Error,
    },

    /// An external tool binary could not be launched at all.
    Spawn {
        /// Tool name (e.g. "clang")
        tool: String,
        /// Underlying system error from the spawn attempt
        source: io::Error,
    },

    /// An external tool ran but exited unsuccessfully.
    Tool {
        /// Tool name (e.g. "llc")
        tool: String,
        /// Input file(s) the tool was given
        inputs: Vec<PathBuf>,
        /// Output file the tool was asked to produce
        output: PathBuf,
        /// Exit code; `None` means the process was killed by a signal
        code: Option<i32>,
    },

    /// The wasm engine rejected a module compile or instantiate request.
    /// The engine's own error is passed through unchanged.
    Runtime {
        /// Operation that failed ("compile" or "instantiate")
        op: &'static str,
        /// Engine-reported error
        source: wasmtime::Error,
    },

    /// A toolchain configuration file could not be parsed.
    Config {
        /// Path to the config file
        path: PathBuf,
        /// Parse error text
        message: String,
    },
}

/// Convenience result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "i/o error: path={} err={}", path.display(), source)
            }
            Error::Spawn { tool, source } => {
                write!(f, "failed to spawn {tool}: {source}")
            }
            Error::Tool {
                tool,
                inputs,
                output,
                code,
            } => {
                write!(f, "{tool}: input=")?;
                for (i, input) in inputs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", input.display())?;
                }
                write!(f, " output={}", output.display())?;
                match code {
                    Some(code) => write!(f, " code={code}"),
                    None => write!(f, " terminated by signal"),
                }
            }
            Error::Runtime { op, source } => {
                write!(f, "wasm {op} failed: {source:#}")
            }
            Error::Config { path, message } => {
                write!(f, "invalid toolchain config {}: {message}", path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io { source, .. } | Error::Spawn { source, .. } => Some(source),
            // wasmtime::Error display (with the `:#` chain) already covers the
            // engine error; it does not implement std::error::Error directly.
            Error::Tool { .. } | Error::Runtime { .. } | Error::Config { .. } => None,
        }
    }
}
