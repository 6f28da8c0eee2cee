pub mod race;
pub mod tcp;
