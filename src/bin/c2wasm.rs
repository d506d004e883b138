//! c2wasm: drive the C-to-WebAssembly toolchain from the command line
//!
//! ## Example Usage
//!
//! ```bash
//! # Compile C source to a binary wasm module next to the input
//! c2wasm build src/inc.c
//!
//! # Merge two modules
//! c2wasm merge a.wasm b.wasm -o merged.wasm
//!
//! # Disassemble a module back to text
//! c2wasm dis merged.wasm
//!
//! # List a module's exports and imports
//! c2wasm inspect merged.wasm
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use c2wasm::{inspect, pipeline, Sandbox, Toolchain};

#[derive(Parser)]
#[command(
    name = "c2wasm",
    version,
    about = "Compile C to WebAssembly via an external toolchain and inspect the results"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Toolchain config file (JSON); default: env vars over ~/prgs layout
    #[arg(long, global = true)]
    toolchain: Option<PathBuf>,

    /// Output as JSON instead of a bare path
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a C source file to a binary wasm module
    Build {
        /// Path to the C source file
        input: PathBuf,

        /// Directory for the final .wast/.wasm artifacts (default: input's directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Directory for the intermediate .bc/.s artifacts (default: input's directory)
        #[arg(long)]
        temp_dir: Option<PathBuf>,
    },

    /// Merge multiple binary wasm modules into one
    Merge {
        /// Input module files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output module file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Disassemble a binary wasm module to text
    Dis {
        /// Input module file
        input: PathBuf,

        /// Output text file (default: input path with .wast appended)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List a module's exports and imports
    Inspect {
        /// Module file to inspect
        module: PathBuf,

        /// Prefix printed before each line
        #[arg(long)]
        prompt: Option<String>,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            out_dir,
            temp_dir,
        } => {
            let toolchain = load_toolchain(cli.toolchain.as_deref())?;
            let wasm = pipeline::compile_source_to_wasm(
                &toolchain,
                &input,
                out_dir.as_deref(),
                temp_dir.as_deref(),
            )?;
            report(cli.json, &wasm)
        }
        Commands::Merge { inputs, output } => {
            let toolchain = load_toolchain(cli.toolchain.as_deref())?;
            let merged = toolchain.merge_modules(&inputs, &output)?;
            report(cli.json, &merged)
        }
        Commands::Dis { input, output } => {
            let toolchain = load_toolchain(cli.toolchain.as_deref())?;
            let output = output.unwrap_or_else(|| {
                let mut name = input.clone().into_os_string();
                name.push(".wast");
                PathBuf::from(name)
            });
            let wast = toolchain.wasm_to_wat(&input, &output)?;
            report(cli.json, &wast)
        }
        Commands::Inspect { module, prompt } => {
            let sandbox = Sandbox::new();
            let module = sandbox.load_module(&module)?;
            inspect::print_exports(&module, prompt.as_deref());
            inspect::print_imports(&module, prompt.as_deref());
            Ok(())
        }
    }
}

fn load_toolchain(config: Option<&Path>) -> Result<Toolchain> {
    let toolchain = match config {
        Some(path) => Toolchain::from_config_file(path)?,
        None => Toolchain::resolve()?,
    };
    Ok(toolchain)
}

fn report(json: bool, path: &Path) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "success": true,
                "output": path,
            }))?
        );
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
