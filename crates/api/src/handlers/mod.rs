pub mod alerts;
pub mod assignments;
pub mod health;
pub mod responders;
