pub mod compare;
pub mod known_for;
pub mod person_insights;
pub mod prediction;
pub mod providers;
