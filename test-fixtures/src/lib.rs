//! Golden datasets for the Numen crates.
//!
//! The JSON files live under this crate's `golden/` directory and are
//! addressed through [`Golden`], so a renamed or missing file fails in one
//! place instead of in every test that reads it.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A golden data file shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Golden {
    CoreNumbers,
    InvalidDates,
}

impl Golden {
    pub const ALL: [Golden; 2] = [Golden::CoreNumbers, Golden::InvalidDates];

    /// Path relative to the `golden/` directory.
    pub fn relative_path(self) -> &'static str {
        match self {
            Golden::CoreNumbers => "numbers/core_numbers.json",
            Golden::InvalidDates => "numbers/invalid_dates.json",
        }
    }

    pub fn path(self) -> PathBuf {
        golden_dir().join(self.relative_path())
    }

    /// Deserialize the file into `T`.
    ///
    /// # Panics
    /// Panics with the file's path when it is unreadable or does not match `T`.
    pub fn load<T: DeserializeOwned>(self) -> T {
        let path = self.path();
        let content = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("golden {self:?} unreadable at {}: {e}", path.display())
        });
        serde_json::from_str(&content).unwrap_or_else(|e| {
            panic!("golden {self:?} at {} does not match its schema: {e}", path.display())
        })
    }

    /// The file as untyped JSON.
    pub fn value(self) -> serde_json::Value {
        self.load()
    }
}

/// `golden/` inside this crate. Fixed at compile time, so it resolves the
/// same way from every crate's tests.
pub fn golden_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// A golden file: a description plus its cases.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSet<T> {
    pub description: String,
    pub cases: Vec<T>,
}

/// Expected core numbers for one person. `*_safe` fields are the
/// compatibility-safe (1–9) forms. A vowel-only name has no personality.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreNumbersCase {
    pub full_name: String,
    pub birth_date: String,
    pub life_path: u32,
    pub destiny: u32,
    pub personality: Option<u32>,
    pub life_path_safe: u8,
    pub destiny_safe: u8,
    pub personality_safe: Option<u8>,
}

/// A birth date that strict parsing must reject, with the error variant name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidDateCase {
    pub birth_date: String,
    pub error: String,
}

pub fn core_numbers_cases() -> Vec<CoreNumbersCase> {
    Golden::CoreNumbers.load::<GoldenSet<CoreNumbersCase>>().cases
}

pub fn invalid_date_cases() -> Vec<InvalidDateCase> {
    Golden::InvalidDates.load::<GoldenSet<InvalidDateCase>>().cases
}
