pub mod aggregate;
pub mod attachment;
pub mod detail;
pub mod forms;
pub mod validation;

pub use aggregate::{AdvanceKind, AdvanceRequestDto, AdvanceRequestRecord};
