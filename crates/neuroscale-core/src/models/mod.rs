pub mod patient;
pub mod record;
pub mod score;
