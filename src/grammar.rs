use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::classifier::Classifier;
use crate::error::{RecognizerError, Result};

lazy_static! {
    // keys end up as JSON object keys in the action layer
    static ref SNAKE_CASE: Regex = Regex::new(r"^[a-z][a-z0-9]*(?:_[a-z0-9]+)*$").unwrap();
}

// ------------- Grammar -------------
/// One accepted sentence shape: an ordered sequence of classifiers.
#[derive(Debug, Clone)]
pub struct Grammar {
    slots: Vec<Classifier>,
}

impl Grammar {
    pub fn new(slots: Vec<Classifier>) -> Result<Self> {
        if slots.is_empty() {
            return Err(RecognizerError::GrammarConfiguration(
                "a grammar needs at least one slot".into(),
            ));
        }
        if let Some(pair) = slots
            .windows(2)
            .find(|pair| !pair[0].is_completable() && !pair[1].is_completable())
        {
            return Err(RecognizerError::GrammarConfiguration(format!(
                "adjacent greedy slots {:?} and {:?} cannot be told apart",
                pair[0].key(),
                pair[1].key()
            )));
        }
        if slots
            .iter()
            .any(|slot| matches!(slot, Classifier::FixedPhrase { expected } if expected.is_empty()))
        {
            return Err(RecognizerError::GrammarConfiguration(
                "a fixed phrase needs at least one word".into(),
            ));
        }
        let mut keys = HashSet::new();
        for key in slots.iter().filter_map(Classifier::key) {
            if !SNAKE_CASE.is_match(key) {
                return Err(RecognizerError::GrammarConfiguration(format!(
                    "key '{key}' is not snake_case"
                )));
            }
            if !keys.insert(key) {
                return Err(RecognizerError::GrammarConfiguration(format!(
                    "key '{key}' appears more than once"
                )));
            }
        }
        Ok(Self { slots })
    }
    pub fn slots(&self) -> &[Classifier] {
        &self.slots
    }
}

// ------------- Command -------------
/// A named command accepting any of its grammars, tried in declared order.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    grammars: Vec<Grammar>,
}

impl Command {
    pub fn new(name: &str, grammars: Vec<Grammar>) -> Result<Self> {
        if !SNAKE_CASE.is_match(name) {
            return Err(RecognizerError::GrammarConfiguration(format!(
                "command name '{name}' is not snake_case"
            )));
        }
        if grammars.is_empty() {
            return Err(RecognizerError::GrammarConfiguration(format!(
                "command '{name}' has no grammars"
            )));
        }
        Ok(Self {
            name: name.to_owned(),
            grammars,
        })
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }
}
