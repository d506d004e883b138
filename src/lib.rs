//! c2wasm: C-to-WebAssembly toolchain driver and module sandbox
//!
//! A thin orchestration layer over an external native toolchain:
//!
//! - **Toolchain driving**: spawn clang, llc, s2wasm, wast2wasm, wasm2wast,
//!   and wasm-merge in sequence, chaining each stage's output file into the
//!   next stage's input
//! - **Module loading**: compile a produced `.wasm` file into a live module
//!   in a local wasmtime sandbox and instantiate it with caller imports
//! - **Introspection**: enumerate a module's declared exports and imports in
//!   declaration order
//!
//! Every transformation is delegated to an external executable; this crate
//! only spawns each process with the right arguments, waits for exit, and
//! threads paths between stages. See [`pipeline`] for the fixed stage order
//! and [`toolchain`] for how tool locations are resolved.

pub mod error;
pub mod fsio;
pub mod inspect;
pub mod pipeline;
pub mod sandbox;
pub mod toolchain;

pub use error::{Error, Result};
pub use sandbox::Sandbox;
pub use toolchain::Toolchain;
