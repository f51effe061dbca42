pub mod leaderboard;
pub mod otp;
pub mod register;
pub mod score;
