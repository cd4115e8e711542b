pub mod classify;
pub mod logo;
pub mod prepare;
