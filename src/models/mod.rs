pub mod day_token;
pub mod direction;
pub mod record;
