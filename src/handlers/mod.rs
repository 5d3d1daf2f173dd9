pub mod analyze;

pub use analyze::{AnalyzeError, AnalyzeHandler};
