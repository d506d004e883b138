//! Display a module's declared exports and imports.
//!
//! Line format, preserved exactly for scripting consumers:
//!
//! ```text
//! <prompt >length=<count>
//! <prompt>[<index>] name=<name> kind=<kind>
//! ```
//!
//! The prompt is followed by a space on the header line and prepended as-is
//! on entry lines; with no prompt both prefixes are empty. Entries appear in
//! the module's own declaration order as reported by the engine, never
//! re-sorted.

use wasmtime::{ExternType, Module};

/// Stable kind name for an extern type.
pub fn extern_kind(ty: &ExternType) -> &'static str {
    match ty {
        ExternType::Func(_) => "function",
        ExternType::Global(_) => "global",
        ExternType::Memory(_) => "memory",
        ExternType::Table(_) => "table",
    }
}

/// Build the display lines for a module's export list.
pub fn format_exports(module: &Module, prompt: Option<&str>) -> Vec<String> {
    let entries: Vec<(String, ExternType)> = module
        .exports()
        .map(|export| (export.name().to_string(), export.ty()))
        .collect();
    format_entries(&entries, prompt)
}

/// Build the display lines for a module's import list.
pub fn format_imports(module: &Module, prompt: Option<&str>) -> Vec<String> {
    let entries: Vec<(String, ExternType)> = module
        .imports()
        .map(|import| (import.name().to_string(), import.ty()))
        .collect();
    format_entries(&entries, prompt)
}

/// Print a module's exports, one line per entry after a count header.
pub fn print_exports(module: &Module, prompt: Option<&str>) {
    for line in format_exports(module, prompt) {
        println!("{line}");
    }
}

/// Print a module's imports, one line per entry after a count header.
pub fn print_imports(module: &Module, prompt: Option<&str>) {
    for line in format_imports(module, prompt) {
        println!("{line}");
    }
}

fn format_entries(entries: &[(String, ExternType)], prompt: Option<&str>) -> Vec<String> {
    let header_prefix = prompt.map(|p| format!("{p} ")).unwrap_or_default();
    let entry_prefix = prompt.unwrap_or("");

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("{header_prefix}length={}", entries.len()));
    for (index, (name, ty)) in entries.iter().enumerate() {
        lines.push(format!(
            "{entry_prefix}[{index}] name={name} kind={}",
            extern_kind(ty)
        ));
    }
    lines
}
