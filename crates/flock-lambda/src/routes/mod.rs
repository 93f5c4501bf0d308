pub mod assessments;
pub mod contacts;
pub mod health;
pub mod responses;
pub mod results;
