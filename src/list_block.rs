//! Folding of consecutive bullet lines into list blocks.
//!
//! The input is the output of [`crate::inline::format_inline`]: a single string
//! whose lines are separated by [`LINE_BREAK`]. Lines are classified one by one,
//! then folded into blocks by a two-state machine (outside a list, inside a
//! list), then rendered back with [`LINE_BREAK`] between blocks.

use crate::bullet::BulletRule;
use crate::inline::LINE_BREAK;

pub const DEFAULT_LIST_CLASS: &str = "list-disc list-inside";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Item content with the marker stripped
    Bullet(&'a str),
    /// The untrimmed line
    Text(&'a str),
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Text(&'a str),
    List(Vec<&'a str>),
}

#[derive(Debug, PartialEq, Eq)]
enum ListState<'a> {
    Normal,
    InList(Vec<&'a str>),
}

pub fn classify_line(line: &str, rule: BulletRule) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Line::Blank
    } else if let Some(content) = rule.strip(trimmed) {
        Line::Bullet(content)
    } else {
        Line::Text(line)
    }
}

/// Folds classified lines into blocks.
///
/// Any non-bullet line closes an open list, blank lines included. Blank lines
/// produce no block of their own. A list still open at the end is closed.
pub fn fold_blocks<'a, I>(lines: I) -> Vec<Block<'a>>
where
    I: IntoIterator<Item = Line<'a>>,
{
    let mut blocks = Vec::new();
    let mut state = ListState::Normal;
    for line in lines {
        state = match (state, line) {
            (ListState::Normal, Line::Bullet(content)) => {
                log::trace!("opening list");
                ListState::InList(vec![content])
            }
            (ListState::InList(mut items), Line::Bullet(content)) => {
                items.push(content);
                ListState::InList(items)
            }
            (state, line) => {
                if let ListState::InList(items) = state {
                    log::trace!("closing list with {} items", items.len());
                    blocks.push(Block::List(items));
                }
                if let Line::Text(text) = line {
                    blocks.push(Block::Text(text));
                }
                ListState::Normal
            }
        };
    }
    if let ListState::InList(items) = state {
        log::trace!("closing list with {} items at end of input", items.len());
        blocks.push(Block::List(items));
    }
    blocks
}

#[derive(Debug, Clone)]
pub struct ListBlockTransformer {
    list_class: String,
    rule: BulletRule,
}

impl Default for ListBlockTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_CLASS, BulletRule::LIST_BLOCK)
    }
}

impl ListBlockTransformer {
    pub fn new(list_class: impl Into<String>, rule: BulletRule) -> Self {
        Self {
            list_class: list_class.into(),
            rule,
        }
    }

    pub fn list_class(&self) -> &str {
        &self.list_class
    }

    pub fn rule(&self) -> BulletRule {
        self.rule
    }

    pub fn classify<'a>(&self, formatted: &'a str) -> Vec<Line<'a>> {
        formatted
            .split(LINE_BREAK)
            .map(|line| classify_line(line, self.rule))
            .collect()
    }

    pub fn transform(&self, formatted: &str) -> String {
        let lines = self.classify(formatted);
        let line_count = lines.len();
        let blocks = fold_blocks(lines);
        log::debug!("folded {} lines into {} blocks", line_count, blocks.len());
        self.render(&blocks)
    }

    pub fn render(&self, blocks: &[Block<'_>]) -> String {
        let mut output = String::new();
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                output.push_str(LINE_BREAK);
            }
            match block {
                Block::Text(text) => output.push_str(text),
                Block::List(items) => {
                    output.push_str("<ul class=\"");
                    output.push_str(&self.list_class);
                    output.push_str("\">");
                    for item in items {
                        output.push_str("<li>");
                        output.push_str(item);
                        output.push_str("</li>");
                    }
                    output.push_str("</ul>");
                }
            }
        }
        output
    }
}
