//! The fixed C-to-wasm compilation pipeline.
//!
//! Four stages run strictly in sequence, each consuming the file the previous
//! stage produced: C source → bitcode → assembly → textual module → binary
//! module. Intermediate names append a stage suffix to the input file name;
//! early-stage artifacts land in the temp directory, the final two in the
//! output directory. The first stage failure aborts the whole call with that
//! stage's error, leaving already-produced intermediates on disk.

use std::path::{Path, PathBuf};

use tracing::info;
use wasmtime::{Extern, Instance, Module, Store};

use crate::error::{Error, Result};
use crate::fsio;
use crate::sandbox::Sandbox;
use crate::toolchain::Toolchain;

/// Compile a C source file to a binary wasm module file.
///
/// `out_dir` and `temp_dir` default to the input file's containing directory.
/// Returns the final `.wasm` path. Fails with an I/O error before any tool is
/// spawned if the input does not exist.
pub fn compile_source_to_wasm(
    toolchain: &Toolchain,
    input: &Path,
    out_dir: Option<&Path>,
    temp_dir: Option<&Path>,
) -> Result<PathBuf> {
    // Input must exist on disk before the first stage runs.
    fsio::stat(input)?;

    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::Io {
            path: input.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "input path has no file name",
            ),
        })?;
    let dir_name = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let out_dir = out_dir.unwrap_or(dir_name);
    let temp_dir = temp_dir.unwrap_or(dir_name);

    let bc = toolchain.compile_to_bitcode(input, &temp_dir.join(format!("{file_name}.bc")))?;
    info!(stage = "bitcode", path = %bc.display(), "stage complete");
    let asm = toolchain.bitcode_to_asm(&bc, &temp_dir.join(format!("{file_name}.s")))?;
    info!(stage = "assembly", path = %asm.display(), "stage complete");
    let wast = toolchain.asm_to_wat(&asm, &out_dir.join(format!("{file_name}.wast")))?;
    info!(stage = "module-text", path = %wast.display(), "stage complete");
    let wasm = toolchain.wat_to_wasm(&wast, &out_dir.join(format!("{file_name}.wasm")))?;
    info!(stage = "module-binary", path = %wasm.display(), "stage complete");
    Ok(wasm)
}

/// Compile a C source file and load the result as a wasm module.
pub fn compile_source_to_module(
    toolchain: &Toolchain,
    sandbox: &Sandbox,
    input: &Path,
    out_dir: Option<&Path>,
    temp_dir: Option<&Path>,
) -> Result<Module> {
    let wasm = compile_source_to_wasm(toolchain, input, out_dir, temp_dir)?;
    sandbox.load_module(&wasm)
}

/// Compile a C source file, load it, and instantiate it with the given
/// imports (pass an empty slice for a module with no imports).
pub fn compile_source_to_instance(
    toolchain: &Toolchain,
    sandbox: &Sandbox,
    store: &mut Store<()>,
    input: &Path,
    imports: &[Extern],
    out_dir: Option<&Path>,
    temp_dir: Option<&Path>,
) -> Result<Instance> {
    let module = compile_source_to_module(toolchain, sandbox, input, out_dir, temp_dir)?;
    sandbox.instantiate(store, &module, imports)
}
