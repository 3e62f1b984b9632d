pub mod analyze;
pub mod health;
pub mod home;
pub mod results;
