#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod binaries;
pub mod interpreter;
pub mod memory;
pub mod probe;
pub mod site;

pub use interpreter::Interpreter;
pub use probe::DefaultEnvironmentProbe;
