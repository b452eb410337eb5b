pub mod dashboard;
pub mod logbook;
pub mod schedule;
pub mod token;
pub mod workflow;
