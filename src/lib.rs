//! An optimal 3x3x3 Rubik's cube solver. Cube states are read from facelet strings, and shortest
//! solutions (in the half turn metric) are found with IDA* guided by pattern database heuristics.

#![deny(missing_docs)]

// The log prefix macros are declared before the modules so they are in scope everywhere.

/// Prefix a log message announcing the start of a long running task.
#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

/// Prefix a log message reporting progress.
#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

/// Prefix a log message reporting that a task finished.
#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}

pub mod coord;
pub mod cube333;
pub mod error;
pub mod moves;
