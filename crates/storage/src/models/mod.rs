pub mod department;
pub mod event;
pub mod group;
pub mod institute;
pub mod participant;
pub mod winner;

pub use department::Department;
pub use event::Event;
pub use group::Group;
pub use institute::Institute;
pub use participant::Participant;
pub use winner::EventWiseWinner;
