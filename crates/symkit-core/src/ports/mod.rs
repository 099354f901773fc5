//! Port definitions (trait abstractions) for the host environment.
//!
//! Ports define the interfaces the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No process or filesystem implementation details in any signature
//! - Core owns the trait and types, adapters own the probing
//! - The CLI wires the two together at bootstrap

pub mod environment;

pub use environment::{EnvironmentProbe, InstalledPackage, MemoryReading, ProbeError};
