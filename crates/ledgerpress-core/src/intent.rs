//! Intents: unsigned, ordered descriptions of a ledger transaction
//!
//! An intent is a list of steps. Call steps invoke a cms entry point; a
//! transfer step hands objects produced by earlier steps to a recipient.
//! Building an intent performs no I/O.

use serde::{Deserialize, Serialize};

/// One argument of a call step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Argument {
    /// Shared or owned object by id
    Object { id: String },
    /// The ledger clock; the ledger collaborator supplies the concrete reference
    Clock,
    String { value: String },
    Address { value: String },
    Bool { value: bool },
    /// `index`-th value returned by step `step`
    Result { step: usize, index: usize },
}

impl Argument {
    pub fn object(id: impl Into<String>) -> Self {
        Argument::Object { id: id.into() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Argument::String {
            value: value.into(),
        }
    }

    pub fn address(value: impl Into<String>) -> Self {
        Argument::Address {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum IntentStep {
    Call {
        /// `<program>::cms::<function>`
        target: String,
        arguments: Vec<Argument>,
    },
    TransferObjects {
        objects: Vec<Argument>,
        recipient: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Entry function of the primary call, used for logging and error context
    pub op: String,
    pub steps: Vec<IntentStep>,
}

impl Intent {
    pub fn new(op: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            steps: Vec::new(),
        }
    }

    /// Append a call step and return its index
    pub fn call(&mut self, target: String, arguments: Vec<Argument>) -> usize {
        self.steps.push(IntentStep::Call { target, arguments });
        self.steps.len() - 1
    }

    /// Append a transfer of the first `count` results of `step` to `recipient`
    pub fn transfer_results(&mut self, step: usize, count: usize, recipient: impl Into<String>) {
        let objects = (0..count)
            .map(|index| Argument::Result { step, index })
            .collect();
        self.steps.push(IntentStep::TransferObjects {
            objects,
            recipient: recipient.into(),
        });
    }

    /// Copy of this intent with every clock argument bound to `clock_id`
    pub fn with_clock(&self, clock_id: &str) -> Intent {
        let bind = |arg: &Argument| match arg {
            Argument::Clock => Argument::object(clock_id),
            other => other.clone(),
        };
        let steps = self
            .steps
            .iter()
            .map(|step| match step {
                IntentStep::Call { target, arguments } => IntentStep::Call {
                    target: target.clone(),
                    arguments: arguments.iter().map(bind).collect(),
                },
                other => other.clone(),
            })
            .collect();
        Intent {
            op: self.op.clone(),
            steps,
        }
    }

    /// Call targets in step order
    pub fn targets(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                IntentStep::Call { target, .. } => Some(target.as_str()),
                IntentStep::TransferObjects { .. } => None,
            })
            .collect()
    }

    /// Objects and recipient of the closing transfer, if the intent ends with one
    pub fn final_transfer(&self) -> Option<(&[Argument], &str)> {
        match self.steps.last() {
            Some(IntentStep::TransferObjects { objects, recipient }) => {
                Some((objects.as_slice(), recipient.as_str()))
            }
            _ => None,
        }
    }
}
