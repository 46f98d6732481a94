//! Branch list bootstrap
//!
//! Splits the `/get_branches` payload into branch identifiers and registers
//! one publish control per branch.

use crate::error::Error;
use crate::session::{ControlRegistry, ControlSurface};
use crate::types::{Branch, ControlAction, ControlId};
use std::fmt;
use std::str::FromStr;

/// Segmentation rule for the branch-list payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BranchSplit {
    /// One branch per line, blank lines ignored
    #[default]
    Lines,
    /// One branch per character (servers that join names without separator)
    Chars,
    /// Branches separated by a character, empty segments ignored
    Delimiter(char),
}

impl BranchSplit {
    /// Split a payload into branches
    pub fn split(&self, payload: &str) -> Vec<Branch> {
        match self {
            Self::Lines => payload
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(Branch::new)
                .collect(),
            Self::Chars => payload.chars().map(|c| Branch::new(c.to_string())).collect(),
            Self::Delimiter(delim) => payload
                .split(*delim)
                .filter(|segment| !segment.is_empty())
                .map(Branch::new)
                .collect(),
        }
    }
}

impl FromStr for BranchSplit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lines" => Ok(Self::Lines),
            "chars" => Ok(Self::Chars),
            other => {
                let mut delim = other.strip_prefix("delim:").unwrap_or_default().chars();
                match (delim.next(), delim.next()) {
                    (Some(c), None) => Ok(Self::Delimiter(c)),
                    _ => Err(Error::Config(format!(
                        "invalid branch split {other:?}, expected lines, chars or delim:<char>"
                    ))),
                }
            }
        }
    }
}

impl fmt::Display for BranchSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lines => f.write_str("lines"),
            Self::Chars => f.write_str("chars"),
            Self::Delimiter(c) => write!(f, "delim:{c}"),
        }
    }
}

/// Builds publish controls from a branch-list payload
#[derive(Debug, Clone, Default)]
pub struct BranchListBuilder {
    split: BranchSplit,
}

impl BranchListBuilder {
    /// Create a builder using the given segmentation rule
    pub const fn new(split: BranchSplit) -> Self {
        Self { split }
    }

    /// Register one publish control per branch and show it on the surface
    ///
    /// Every control owns its branch, so activating it publishes exactly
    /// that branch.
    pub fn build(
        &self,
        payload: &str,
        registry: &mut ControlRegistry,
        surface: &dyn ControlSurface,
    ) -> Vec<ControlId> {
        self.split
            .split(payload)
            .into_iter()
            .map(|branch| {
                let control =
                    registry.register(format!("Publish {branch}"), ControlAction::Publish(branch));
                surface.add_control(control);
                control.id
            })
            .collect()
    }
}
