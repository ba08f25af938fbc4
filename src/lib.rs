pub mod bullet;
pub mod config;
pub mod description;
pub mod inline;
pub mod list_block;
pub mod renderer;
pub mod value;

pub use description::{Description, DescriptionParser};

use renderer::{HtmlRenderer, HtmlRendererOptions, Renderer};

/// Renders markdown-flavored text into an HTML fragment with the default options.
pub fn format_markdown(text: &str) -> String {
    HtmlRenderer::new(HtmlRendererOptions::default()).render(text)
}

/// Splits a description into narrative text and bullet items with the default rule.
pub fn parse_description(description: &str) -> Description {
    DescriptionParser::default().parse(description)
}
