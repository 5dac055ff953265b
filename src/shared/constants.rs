/// Length of generated session tokens (alphanumeric characters)
pub const SESSION_TOKEN_LENGTH: usize = 64;
