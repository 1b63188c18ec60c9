mod answer;
mod participant;
mod test_result;

pub use answer::Answer;
pub use participant::Participant;
pub use test_result::TestResult;
