pub const MAX_USERNAME_LENGTH: usize = 25;
pub const EVENTS_CHANNEL_CAPACITY: usize = 64;
