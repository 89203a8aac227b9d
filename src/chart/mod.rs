// Chart collaborator module
// Element model and the query contract fulfilled by the external chart parser

pub mod source;
pub mod types;

pub use source::ChartSource;
pub use types::{Arc, ArcColor, ArcSegment, ArcTap, Hold, QueryScope, Tap};
