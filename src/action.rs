//! Turns a recognition into the action document handed to the outside world:
//! `{"action": "<command>_action", "inputs": {...}}`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classifier::Value;
use crate::registry::Recognition;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    action: String,
    // a BTreeMap so inputs always serialize with sorted keys
    inputs: BTreeMap<String, Value>,
}

impl Action {
    pub fn new(name: &str, inputs: BTreeMap<String, Value>) -> Self {
        Self {
            action: name.to_owned(),
            inputs,
        }
    }
    pub fn from_recognition(recognition: Recognition<'_>) -> Self {
        Self::new(
            &format!("{}_action", recognition.command.name()),
            recognition.result.into_values(),
        )
    }
    pub fn name(&self) -> &str {
        &self.action
    }
    pub fn inputs(&self) -> &BTreeMap<String, Value> {
        &self.inputs
    }
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
