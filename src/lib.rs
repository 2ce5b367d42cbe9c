//! Recognizer – matches free-form sentences against a small set of command grammars.
//!
//! A sentence such as `remind me to water the plants tomorrow at 9am` is split
//! into tokens and offered to every registered command. Each command owns one
//! or more grammars, and a grammar is an ordered sequence of slots:
//! * a [`classifier::Classifier::FixedPhrase`] must appear verbatim,
//! * a [`classifier::Classifier::Greedy`] takes an unbounded run of tokens,
//! * a [`classifier::Classifier::TimeExpression`] recognizes phrases like
//!   `tonight`, `at 5:30am` or `on sunday` and normalizes them to a timestamp.
//!
//! Keyed slots contribute their normalized values to a
//! [`matcher::MatchResult`]; a grammar made of fixed phrases only reports the
//! `NoData` sentinel instead.
//!
//! ## Modules
//! * [`classifier`] – slot classifiers and the values they produce.
//! * [`time`] – the time expression sub-grammar.
//! * [`grammar`] – validated grammars and commands.
//! * [`matcher`] – segment matching, lookahead and whole-grammar matching.
//! * [`registry`] – the [`registry::CommandRegistry`] picking the best command.
//! * [`commands`] – the built-in `reminder` and `weather` commands.
//! * [`action`] – the JSON action document for a recognition.
//! * [`settings`] – environment driven settings for the binary.
//!
//! ## Matching
//! Greedy slots cannot know where they end. When one is followed by another
//! slot, split points are probed from the left and the first point where the
//! following classifier matches ends the greedy run. Slots never backtrack
//! into each other, and words after the last slot are ignored.
//!
//! ## Quick Start
//! ```
//! use chrono::NaiveDate;
//! use recognizer::registry::CommandRegistry;
//! let registry = CommandRegistry::builtin().unwrap();
//! let now = NaiveDate::from_ymd_opt(2017, 6, 1).unwrap().and_hms_opt(10, 15, 0).unwrap();
//! let recognition = registry.recognize_at("remind me to do something tonight", now).unwrap().unwrap();
//! assert_eq!(recognition.command.name(), "reminder");
//! ```

pub mod action;
pub mod classifier;
pub mod commands;
pub mod error;
pub mod grammar;
pub mod matcher;
pub mod registry;
pub mod settings;
pub mod time;

pub use error::{RecognizerError, Result};
