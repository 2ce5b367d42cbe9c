//! Token-by-token matching of sentences against grammars.
//!
//! The token stream is an immutable slice; matching a segment returns the
//! consumed prefix and the caller advances its own cursor. A failed attempt
//! therefore never disturbs the tokens seen by the next attempt.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::classifier::{Classifier, Status, Value};
use crate::error::{RecognizerError, Result};
use crate::grammar::Grammar;

/// Ranking of a successful match; a match carrying data beats one without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchQuality {
    NoData,
    Data,
}

// ------------- MatchResult -------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Values of the keyed slots, by key.
    Data(BTreeMap<String, Value>),
    /// The grammar matched but has no keyed slots.
    NoData,
}

impl MatchResult {
    pub fn quality(&self) -> MatchQuality {
        match self {
            MatchResult::Data(_) => MatchQuality::Data,
            MatchResult::NoData => MatchQuality::NoData,
        }
    }
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            MatchResult::Data(values) => values.get(key),
            MatchResult::NoData => None,
        }
    }
    pub fn into_values(self) -> BTreeMap<String, Value> {
        match self {
            MatchResult::Data(values) => values,
            MatchResult::NoData => BTreeMap::new(),
        }
    }
}

pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(String::from).collect()
}

/// Consumes a prefix of `tokens` for `classifier`.
///
/// The prefix grows one token at a time. A completed prefix is remembered but
/// the classifier may still accept longer input (`tomorrow` then
/// `tomorrow at 5pm`), so growth only stops once the classifier rejects the
/// prefix or the tokens run out; the longest completed prefix wins.
/// A greedy classifier that runs out of tokens takes all of them.
pub fn match_segment<'t>(classifier: &Classifier, tokens: &'t [String]) -> Option<&'t [String]> {
    let mut completed = None;
    for end in 1..=tokens.len() {
        match classifier.status(&tokens[..end]) {
            Status::NotFound => break,
            Status::Processing => (),
            Status::Done => completed = Some(end),
        }
    }
    match completed {
        Some(end) => Some(&tokens[..end]),
        None if !classifier.is_completable() => Some(tokens),
        None => None,
    }
}

/// Splits `tokens` between a greedy run and the classifier `next` that follows it.
///
/// Split points are tried from the left and the greedy run keeps at least one
/// token. When `next` ends the grammar it has to consume every remaining token.
pub fn lookahead<'t>(
    next: &Classifier,
    next_is_last: bool,
    tokens: &'t [String],
) -> Result<Option<(&'t [String], &'t [String])>> {
    if !next.is_completable() {
        return Err(RecognizerError::GrammarConfiguration(format!(
            "greedy slot followed by greedy slot {:?}",
            next.key()
        )));
    }
    for split in 1..tokens.len() {
        let suffix = &tokens[split..];
        if let Some(consumed) = match_segment(next, suffix) {
            if next_is_last && consumed.len() != suffix.len() {
                trace!(split, "lookahead match leaves trailing tokens");
                continue;
            }
            return Ok(Some((&tokens[..split], consumed)));
        }
    }
    Ok(None)
}

/// Matches a whole sentence against one grammar.
///
/// Slots never backtrack into each other: once a slot has consumed its tokens
/// a later failure fails the grammar. Tokens left over after the last slot
/// are ignored.
pub fn match_grammar(
    grammar: &Grammar,
    sentence: &str,
    now: NaiveDateTime,
) -> Result<Option<MatchResult>> {
    let tokens = tokenize(sentence);
    let slots = grammar.slots();
    let mut values = BTreeMap::new();
    let mut cursor = 0;
    let mut index = 0;
    while index < slots.len() {
        let slot = &slots[index];
        let remaining = &tokens[cursor..];
        if !slot.is_completable() && index + 1 < slots.len() {
            let next = &slots[index + 1];
            let Some((run, consumed)) = lookahead(next, index + 2 == slots.len(), remaining)? else {
                debug!(slot = index, "no split point for greedy slot");
                return Ok(None);
            };
            record(&mut values, slot, run, now)?;
            record(&mut values, next, consumed, now)?;
            cursor += run.len() + consumed.len();
            index += 2;
        } else {
            let Some(consumed) = match_segment(slot, remaining) else {
                debug!(slot = index, "slot did not match");
                return Ok(None);
            };
            record(&mut values, slot, consumed, now)?;
            cursor += consumed.len();
            index += 1;
        }
    }
    if values.is_empty() {
        Ok(Some(MatchResult::NoData))
    } else {
        Ok(Some(MatchResult::Data(values)))
    }
}

fn record(
    values: &mut BTreeMap<String, Value>,
    slot: &Classifier,
    consumed: &[String],
    now: NaiveDateTime,
) -> Result<()> {
    if let Some(key) = slot.key() {
        values.insert(key.to_owned(), slot.normalize(consumed, now)?);
    }
    Ok(())
}
