pub mod dashboard;
pub mod departments;
pub mod events;
pub mod groups;
pub mod institutes;
pub mod participants;
pub mod winners;
