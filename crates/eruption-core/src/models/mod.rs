//! Domain models for eruption assessments.

mod assessment;
mod chart;
mod patient;
mod tooth;

pub use assessment::*;
pub use chart::*;
pub use patient::*;
pub use tooth::*;
