pub mod current;
pub mod ws;
