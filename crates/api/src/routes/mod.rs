pub mod health;
pub mod pets;
