mod competition;
mod organizer;
mod participant;
mod result;
mod team;

pub use competition::Competition;
pub use organizer::Organizer;
pub use participant::Participant;
pub use result::CompetitionResult;
pub use team::Team;
