pub mod moves;
pub mod notation;
pub mod rules;
