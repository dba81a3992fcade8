//! Closed selector over the built-in disciplines.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rules::{Fcfs, Sjf, Sjfp};
use super::Discipline;

/// Names one of the built-in disciplines.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisciplineKind {
    /// First come first serve
    #[default]
    #[value(name = "FCFS")]
    Fcfs,
    /// Shortest job first
    #[value(name = "SJF")]
    Sjf,
    /// Shortest job first with preemption
    #[value(name = "SJFP")]
    Sjfp,
}

impl DisciplineKind {
    pub const ALL: [DisciplineKind; 3] = [Self::Fcfs, Self::Sjf, Self::Sjfp];

    /// Instantiates the discipline.
    pub fn rule(self) -> Arc<dyn Discipline> {
        match self {
            Self::Fcfs => Arc::new(Fcfs),
            Self::Sjf => Arc::new(Sjf),
            Self::Sjfp => Arc::new(Sjfp),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Sjfp => "SJFP",
        }
    }
}

impl fmt::Display for DisciplineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`DisciplineKind::from_str`] for unknown names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Bad scheduling type: {0} (expected FCFS, SJF or SJFP)")]
pub struct ParseDisciplineError(pub String);

impl FromStr for DisciplineKind {
    type Err = ParseDisciplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDisciplineError(s.to_string()))
    }
}
