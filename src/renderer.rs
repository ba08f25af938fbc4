use std::io;
use std::io::Write;

use crate::bullet::BulletRule;
use crate::description::{Description, DescriptionParser};
use crate::inline::format_inline;
use crate::list_block::{ListBlockTransformer, DEFAULT_LIST_CLASS};

pub trait Renderer {
    type Options;

    fn new(options: Self::Options) -> Self;
    fn format(&self, text: &str, output: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct HtmlRendererOptions {
    /// Class attribute of every emitted `<ul>`
    pub list_class: String,
    pub bullet_rule: BulletRule,
}

impl Default for HtmlRendererOptions {
    fn default() -> Self {
        Self {
            list_class: DEFAULT_LIST_CLASS.to_string(),
            bullet_rule: BulletRule::LIST_BLOCK,
        }
    }
}

/// Renders markdown-flavored text into an HTML fragment.
///
/// The output is not sanitized. Only feed it content from a trusted source.
pub struct HtmlRenderer {
    transformer: ListBlockTransformer,
}

impl Renderer for HtmlRenderer {
    type Options = HtmlRendererOptions;

    fn new(options: HtmlRendererOptions) -> Self {
        HtmlRenderer {
            transformer: ListBlockTransformer::new(options.list_class, options.bullet_rule),
        }
    }

    fn format(&self, text: &str, output: &mut dyn Write) -> io::Result<()> {
        output.write_all(self.render(text).as_bytes())
    }
}

impl HtmlRenderer {
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let formatted = format_inline(text);
        self.transformer.transform(&formatted)
    }
}

#[derive(Debug, Clone)]
pub struct DescriptionRendererOptions {
    pub bullet_rule: BulletRule,
    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl Default for DescriptionRendererOptions {
    fn default() -> Self {
        Self {
            bullet_rule: BulletRule::DESCRIPTION,
            pretty: false,
        }
    }
}

/// Writes the `{text, items}` split of a description as JSON.
pub struct DescriptionRenderer {
    parser: DescriptionParser,
    pretty: bool,
}

impl Renderer for DescriptionRenderer {
    type Options = DescriptionRendererOptions;

    fn new(options: DescriptionRendererOptions) -> Self {
        DescriptionRenderer {
            parser: DescriptionParser::new(options.bullet_rule),
            pretty: options.pretty,
        }
    }

    fn format(&self, text: &str, output: &mut dyn Write) -> io::Result<()> {
        let description = self.parse(text);
        if self.pretty {
            serde_json::to_writer_pretty(output, &description)?;
        } else {
            serde_json::to_writer(output, &description)?;
        }
        Ok(())
    }
}

impl DescriptionRenderer {
    pub fn parse(&self, text: &str) -> Description {
        self.parser.parse(text)
    }
}
