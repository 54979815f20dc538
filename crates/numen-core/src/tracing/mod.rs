//! Observability for Numen.
//! `tracing` crate with `EnvFilter`, filter directives from `NUMEN_LOG`.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with};
