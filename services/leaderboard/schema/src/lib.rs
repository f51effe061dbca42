pub mod otps;
pub mod players;
pub mod scores;
