use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::commands;
use crate::error::Result;
use crate::grammar::Command;
use crate::matcher::{MatchResult, match_grammar};

impl Command {
    /// Result of the first grammar, in declared order, that matches the sentence.
    pub fn matches(&self, sentence: &str, now: NaiveDateTime) -> Result<Option<MatchResult>> {
        for (alternative, grammar) in self.grammars().iter().enumerate() {
            if let Some(result) = match_grammar(grammar, sentence, now)? {
                debug!(command = self.name(), alternative, "grammar matched");
                return Ok(Some(result));
            }
        }
        Ok(None)
    }
}

/// A recognized sentence: the winning command and what its grammar extracted.
#[derive(Debug, Clone)]
pub struct Recognition<'r> {
    pub command: &'r Command,
    pub result: MatchResult,
}

// ------------- CommandRegistry -------------
/// Commands in registration order. Earlier commands win ties, so the order
/// of registration is part of the observable behavior.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }
    /// The built-in commands: `reminder`, then `weather`.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(commands::reminder()?);
        registry.register(commands::weather()?);
        Ok(registry)
    }
    pub fn register(&mut self, command: Command) {
        self.commands.push(command);
    }
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
    pub fn len(&self) -> usize {
        self.commands.len()
    }
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
    /// Recognizes the sentence relative to the local wall clock.
    pub fn recognize(&self, sentence: &str) -> Result<Option<Recognition<'_>>> {
        self.recognize_at(sentence, Local::now().naive_local())
    }
    /// Recognizes the sentence with time expressions resolved against `now`.
    pub fn recognize_at(
        &self,
        sentence: &str,
        now: NaiveDateTime,
    ) -> Result<Option<Recognition<'_>>> {
        let sentence = sentence.to_lowercase();
        let mut best: Option<Recognition> = None;
        for command in &self.commands {
            let Some(result) = command.matches(&sentence, now)? else {
                continue;
            };
            let better = match &best {
                Some(current) => result.quality() > current.result.quality(),
                None => true,
            };
            if better {
                best = Some(Recognition { command, result });
            }
        }
        match &best {
            Some(recognition) => info!(command = recognition.command.name(), "sentence recognized"),
            None => debug!(sentence = %sentence, "no command matched"),
        }
        Ok(best)
    }
}
