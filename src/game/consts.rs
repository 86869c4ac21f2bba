pub const MAX_ROUNDS: usize = 5;
pub const TIMER_SECONDS: u32 = 30;
