pub mod competition;
pub mod organizer;
pub mod participant;
pub mod results;
pub mod team;
