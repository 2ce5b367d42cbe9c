// used for the timestamps that time expressions normalize into
use chrono::NaiveDateTime;
// used when values are handed to the action layer
use serde::Serialize;

use crate::error::Result;
use crate::time;

/// Outcome of offering a token prefix to a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The prefix cannot start this classifier's input.
    NotFound,
    /// The prefix is plausible but not yet complete.
    Processing,
    /// The prefix is a complete input.
    Done,
}

/// A normalized slot value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Tokens(Vec<String>),
    Time(NaiveDateTime),
}

impl Value {
    pub fn tokens(&self) -> Option<&[String]> {
        match self {
            Value::Tokens(tokens) => Some(tokens.as_slice()),
            Value::Time(_) => None,
        }
    }
    pub fn time(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Time(time) => Some(*time),
            Value::Tokens(_) => None,
        }
    }
}

// ------------- Classifier -------------
/// Recognizer and normalizer for one grammar slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classifier {
    /// An exact token sequence, never keyed.
    FixedPhrase { expected: Vec<String> },
    /// An unbounded run of tokens, ended only by the end of the sentence or by lookahead.
    Greedy { key: String },
    /// A date and/or time of day, see [`crate::time`].
    TimeExpression { key: String },
}

impl Classifier {
    pub fn fixed(phrase: &str) -> Self {
        Classifier::FixedPhrase {
            expected: phrase.split_whitespace().map(String::from).collect(),
        }
    }
    pub fn greedy(key: &str) -> Self {
        Classifier::Greedy { key: key.to_owned() }
    }
    pub fn time(key: &str) -> Self {
        Classifier::TimeExpression { key: key.to_owned() }
    }
    pub fn key(&self) -> Option<&str> {
        match self {
            Classifier::FixedPhrase { .. } => None,
            Classifier::Greedy { key } | Classifier::TimeExpression { key } => Some(key.as_str()),
        }
    }
    /// Whether the classifier can tell from the tokens alone that its input is complete.
    pub fn is_completable(&self) -> bool {
        !matches!(self, Classifier::Greedy { .. })
    }
    pub fn is_part_of_input(&self, tokens: &[String]) -> bool {
        match self {
            Classifier::FixedPhrase { expected } => expected.starts_with(tokens),
            Classifier::Greedy { .. } => true,
            Classifier::TimeExpression { .. } => {
                time::is_pending(tokens) || time::parse(tokens).is_some()
            }
        }
    }
    pub fn is_input_completed(&self, tokens: &[String]) -> bool {
        match self {
            Classifier::FixedPhrase { expected } => expected.as_slice() == tokens,
            Classifier::Greedy { .. } => false,
            Classifier::TimeExpression { .. } => time::parse(tokens).is_some(),
        }
    }
    pub fn status(&self, tokens: &[String]) -> Status {
        if !self.is_part_of_input(tokens) {
            Status::NotFound
        } else if self.is_input_completed(tokens) {
            Status::Done
        } else {
            Status::Processing
        }
    }
    /// Turns consumed tokens into a value. Only time expressions can fail.
    pub fn normalize(&self, tokens: &[String], now: NaiveDateTime) -> Result<Value> {
        match self {
            Classifier::FixedPhrase { .. } | Classifier::Greedy { .. } => {
                Ok(Value::Tokens(tokens.to_vec()))
            }
            Classifier::TimeExpression { .. } => time::normalize(tokens, now).map(Value::Time),
        }
    }
}
