pub mod answer;
pub mod participant;
pub mod result;
