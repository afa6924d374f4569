//! gsplit-core: Core library for splitting Gherkin Examples tables
//!
//! This library provides functionality to:
//! - Scan directories for `.feature` files
//! - Detect Examples tables with a single line-oriented pass per file
//! - Split each data row into a standalone, numbered scenario file
//! - Carry the preamble (tags included) into every generated file
//! - Copy files without tables verbatim into a mirrored output tree

pub mod buffer;
pub mod classify;
pub mod error;
pub mod export;
pub mod scanner;
pub mod splitter;

pub use buffer::{Line, ScenarioBuffer};
pub use error::{Error, Result};
pub use export::{process_tree, scenario_file_name, FileOutcome, FileReport, RunSummary};
pub use scanner::{is_feature_file, scan_directory, ScanResult};
pub use splitter::{split_feature, GeneratedScenario, SplitOutcome};
