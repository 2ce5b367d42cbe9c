// The commands the recognizer ships with.

use crate::classifier::Classifier;
use crate::error::Result;
use crate::grammar::{Command, Grammar};

pub const WEATHER: &str = "weather";
pub const REMINDER: &str = "reminder";

/// "show me the weather"
pub fn weather() -> Result<Command> {
    Command::new(
        WEATHER,
        vec![Grammar::new(vec![Classifier::fixed("show me the weather")])?],
    )
}

/// "remind me to <reminder> <time>" or "<time> remind me to <reminder>"
pub fn reminder() -> Result<Command> {
    Command::new(
        REMINDER,
        vec![
            Grammar::new(vec![
                Classifier::time("time"),
                Classifier::fixed("remind me to"),
                Classifier::greedy("reminder"),
            ])?,
            Grammar::new(vec![
                Classifier::fixed("remind me to"),
                Classifier::greedy("reminder"),
                Classifier::time("time"),
            ])?,
        ],
    )
}
