//! Module loading and instantiation in a local wasm engine.
//!
//! The sandbox does not pre-validate module bytes; malformed input surfaces
//! the engine's own compile error, and unsatisfied or mismatched imports
//! surface the engine's link error, both passed through unchanged.

use std::path::Path;

use wasmtime::{Engine, Extern, Instance, Module, Store};

use crate::error::{Error, Result};
use crate::fsio;

/// A local wasm engine that compiles and instantiates binary modules.
pub struct Sandbox {
    engine: Engine,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            engine: Engine::default(),
        }
    }

    /// Create a fresh store for instantiating modules.
    pub fn store(&self) -> Store<()> {
        Store::new(&self.engine, ())
    }

    /// Read a binary module file in full and compile it into a module.
    pub fn load_module(&self, path: &Path) -> Result<Module> {
        let bytes = fsio::read_all(path)?;
        Module::from_binary(&self.engine, &bytes).map_err(|source| Error::Runtime {
            op: "compile",
            source,
        })
    }

    /// Bind the module's declared imports against `imports` and produce a
    /// live instance. Pass an empty slice when the module imports nothing.
    pub fn instantiate(
        &self,
        store: &mut Store<()>,
        module: &Module,
        imports: &[Extern],
    ) -> Result<Instance> {
        Instance::new(store, module, imports).map_err(|source| Error::Runtime {
            op: "instantiate",
            source,
        })
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}
