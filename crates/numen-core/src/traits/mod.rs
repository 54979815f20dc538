pub mod compatibility_engine;

pub use compatibility_engine::ICompatibilityEngine;
