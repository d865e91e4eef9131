pub mod discord;
pub mod release;
