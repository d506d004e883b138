//! Sandbox loading, instantiation, and interface display tests.
//!
//! Modules are generated from wasm text with the `wat` crate so the tests do
//! not depend on the external compilation toolchain.

use std::fs;

use tempfile::TempDir;
use wasmtime::Func;

use c2wasm::{inspect, Error, Sandbox};

/// Exports a single `inc(i32) -> i32` function.
const INC_WAT: &str = r#"
(module
  (func (export "inc") (param i32) (result i32)
    local.get 0
    i32.const 1
    i32.add))
"#;

/// Imports `env.getNumber` and exports memory plus a wrapper function, in
/// that declaration order.
const GET_NUMBER_WAT: &str = r#"
(module
  (import "env" "getNumber" (func $getNumber (result i32)))
  (memory (export "memory") 1)
  (func (export "getNumberAndInc") (result i32)
    call $getNumber
    i32.const 1
    i32.add))
"#;

fn write_module(dir: &TempDir, name: &str, wat: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, wat::parse_str(wat).unwrap()).unwrap();
    path
}

#[test]
fn loads_and_calls_an_exported_function() {
    let dir = TempDir::new().unwrap();
    let path = write_module(&dir, "inc.wasm", INC_WAT);

    let sandbox = Sandbox::new();
    let module = sandbox.load_module(&path).unwrap();
    let mut store = sandbox.store();
    let instance = sandbox.instantiate(&mut store, &module, &[]).unwrap();

    let inc = instance
        .get_typed_func::<i32, i32>(&mut store, "inc")
        .unwrap();
    assert_eq!(inc.call(&mut store, 1).unwrap(), 2);
}

#[test]
fn malformed_module_bytes_fail_to_compile() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.wasm");
    fs::write(&path, b"this is not a wasm module").unwrap();

    let sandbox = Sandbox::new();
    match sandbox.load_module(&path).unwrap_err() {
        Error::Runtime { op, .. } => assert_eq!(op, "compile"),
        other => panic!("expected Runtime error, got {other}"),
    }
}

#[test]
fn missing_module_file_is_an_io_error() {
    let sandbox = Sandbox::new();
    let err = sandbox
        .load_module(std::path::Path::new("no-such-module.wasm"))
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn unsatisfied_import_fails_instantiation() {
    let dir = TempDir::new().unwrap();
    let path = write_module(&dir, "needs-import.wasm", GET_NUMBER_WAT);

    let sandbox = Sandbox::new();
    let module = sandbox.load_module(&path).unwrap();
    let mut store = sandbox.store();

    match sandbox.instantiate(&mut store, &module, &[]).unwrap_err() {
        Error::Runtime { op, .. } => assert_eq!(op, "instantiate"),
        other => panic!("expected Runtime error, got {other}"),
    }
}

#[test]
fn host_import_is_callable_through_the_module() {
    let dir = TempDir::new().unwrap();
    let path = write_module(&dir, "get-number.wasm", GET_NUMBER_WAT);

    let sandbox = Sandbox::new();
    let module = sandbox.load_module(&path).unwrap();
    let mut store = sandbox.store();
    let get_number = Func::wrap(&mut store, || 41i32);
    let instance = sandbox
        .instantiate(&mut store, &module, &[get_number.into()])
        .unwrap();

    let get_number_and_inc = instance
        .get_typed_func::<(), i32>(&mut store, "getNumberAndInc")
        .unwrap();
    assert_eq!(get_number_and_inc.call(&mut store, ()).unwrap(), 42);
}

#[test]
fn export_lines_follow_declaration_order() {
    let dir = TempDir::new().unwrap();
    let path = write_module(&dir, "get-number.wasm", GET_NUMBER_WAT);

    let sandbox = Sandbox::new();
    let module = sandbox.load_module(&path).unwrap();

    assert_eq!(
        inspect::format_exports(&module, None),
        vec![
            "length=2",
            "[0] name=memory kind=memory",
            "[1] name=getNumberAndInc kind=function",
        ],
    );
}

#[test]
fn import_lines_use_the_unqualified_name() {
    let dir = TempDir::new().unwrap();
    let path = write_module(&dir, "get-number.wasm", GET_NUMBER_WAT);

    let sandbox = Sandbox::new();
    let module = sandbox.load_module(&path).unwrap();

    assert_eq!(
        inspect::format_imports(&module, None),
        vec!["length=1", "[0] name=getNumber kind=function"],
    );
}

#[test]
fn prompt_prefixes_header_and_entries() {
    let dir = TempDir::new().unwrap();
    let path = write_module(&dir, "inc.wasm", INC_WAT);

    let sandbox = Sandbox::new();
    let module = sandbox.load_module(&path).unwrap();

    assert_eq!(
        inspect::format_exports(&module, Some("exports")),
        vec!["exports length=1", "exports[0] name=inc kind=function"],
    );
    assert_eq!(
        inspect::format_imports(&module, Some("imports")),
        vec!["imports length=0"],
    );
}
