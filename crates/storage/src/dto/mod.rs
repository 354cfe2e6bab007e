pub mod common;
pub mod competition;
pub mod people;
pub mod registration;
pub mod standings;
