mod thought;

pub use thought::{Mood, MoodFilter, Scope, Thought};
