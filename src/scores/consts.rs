pub const LEADERBOARD_SIZE: usize = 10;
