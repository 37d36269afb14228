pub mod bubble;
pub mod config;
pub mod error;
pub mod generate;
pub mod merge;
pub mod order;
pub mod render;
pub mod report;
pub mod sort;
pub mod trace;

pub use config::{Algorithm, SortOptions, TraceMode};
pub use error::{ComparisonError, Result};
pub use merge::merge;
pub use order::{Direction, Element};
pub use report::SortReport;
pub use sort::{sort, sort_bubble, sort_merge, sort_with, sort_with_trace};
pub use trace::{EventKind, SortStats, Trace, TraceEvent};
