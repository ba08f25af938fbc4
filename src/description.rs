//! Splitting of free-form descriptions into narrative text and bullet items.

use serde::{Deserialize, Serialize};

use crate::bullet::BulletRule;

/// A description with its bullet lines pulled out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Non-bullet lines joined with a single space
    pub text: String,
    /// Bullet contents in input order, duplicates kept
    pub items: Vec<String>,
}

impl Description {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DescriptionParser {
    rule: BulletRule,
}

impl Default for DescriptionParser {
    fn default() -> Self {
        Self::new(BulletRule::DESCRIPTION)
    }
}

impl DescriptionParser {
    pub fn new(rule: BulletRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> BulletRule {
        self.rule
    }

    /// Lines are trimmed and empty ones dropped before classification, so a
    /// line holding only a marker ends up as narrative text.
    pub fn parse(&self, description: &str) -> Description {
        let mut narrative = Vec::new();
        let mut items = Vec::new();
        for line in description
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
        {
            match self.rule.strip(line) {
                Some(item) => items.push(item.to_string()),
                None => narrative.push(line),
            }
        }
        log::debug!(
            "parsed description into {} narrative lines and {} items",
            narrative.len(),
            items.len()
        );
        Description {
            text: narrative.join(" "),
            items,
        }
    }
}
