pub mod cautious_bot;
pub mod random_bot;
pub mod seeker_bot;
pub mod snake_bot;
