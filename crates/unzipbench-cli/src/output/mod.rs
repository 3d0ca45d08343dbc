//! Report printing.

mod human;

pub use human::HumanReporter;
