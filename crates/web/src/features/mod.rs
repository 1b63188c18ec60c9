pub mod dashboard;
pub mod participants;
pub mod quiz;
