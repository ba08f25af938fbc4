//! Bullet-line detection rules.
//!
//! The HTML list transformer and the description splitter accept different
//! marker sets. Both rules are kept as named values so that either pipeline
//! can be pointed at either rule through configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much whitespace after the marker is consumed when extracting content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitespaceStrip {
    /// Only the single whitespace character that qualifies the marker
    One,
    /// The whole whitespace run following the marker
    All,
}

/// A bullet marker set plus the whitespace policy used to strip it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletRule {
    markers: &'static [char],
    whitespace: WhitespaceStrip,
}

impl BulletRule {
    /// `-` or `*` followed by whitespace. Used when rendering HTML lists.
    pub const LIST_BLOCK: BulletRule = BulletRule {
        markers: &['-', '*'],
        whitespace: WhitespaceStrip::One,
    };

    /// `-`, `*` or `+` followed by whitespace. Used when splitting descriptions.
    pub const DESCRIPTION: BulletRule = BulletRule {
        markers: &['-', '*', '+'],
        whitespace: WhitespaceStrip::All,
    };

    pub fn markers(&self) -> &'static [char] {
        self.markers
    }

    pub fn whitespace_strip(&self) -> WhitespaceStrip {
        self.whitespace
    }

    /// Returns the item content when `line` is a bullet line under this rule.
    ///
    /// `line` is expected to be trimmed by the caller. The content is returned
    /// as-is, an empty remainder is still a bullet.
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        let mut chars = line.char_indices();
        let (_, marker) = chars.next()?;
        if !self.markers.contains(&marker) {
            return None;
        }
        let (ws_start, ws) = chars.next()?;
        if !ws.is_whitespace() {
            return None;
        }
        let rest = &line[ws_start + ws.len_utf8()..];
        Some(match self.whitespace {
            WhitespaceStrip::One => rest,
            WhitespaceStrip::All => rest.trim_start(),
        })
    }

    pub fn is_bullet(&self, line: &str) -> bool {
        self.strip(line).is_some()
    }
}

/// Configuration-facing name of a [`BulletRule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BulletRuleName {
    ListBlock,
    Description,
}

impl BulletRuleName {
    pub fn rule(self) -> BulletRule {
        match self {
            BulletRuleName::ListBlock => BulletRule::LIST_BLOCK,
            BulletRuleName::Description => BulletRule::DESCRIPTION,
        }
    }
}

impl fmt::Display for BulletRuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulletRuleName::ListBlock => write!(f, "list-block"),
            BulletRuleName::Description => write!(f, "description"),
        }
    }
}
