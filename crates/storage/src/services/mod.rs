pub mod finalization;
pub mod placement;
pub mod registration;
