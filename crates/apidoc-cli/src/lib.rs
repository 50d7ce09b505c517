//! Library wrapper around the `apidoc` binary.
//!
//! Compiling the binary crate root as a module lets `cargo test -p apidoc-cli --lib`
//! typecheck and unit-test the CLI without building the integration suite.
//!
//! Note: `fn main()` inside `main.rs` is just another function when compiled as a module.

#[allow(dead_code)]
#[path = "main.rs"]
mod main_bin;
