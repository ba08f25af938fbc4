//! Tests for the markdown-to-HTML pipeline
//!
//! Covers inline emphasis, line breaks, list folding and the invariants the
//! output has to keep (every list closed, one `<li>` per bullet line).

use cms_markup::bullet::BulletRule;
use cms_markup::format_markdown;
use cms_markup::renderer::{HtmlRenderer, HtmlRendererOptions, Renderer};

const UL: &str = "<ul class=\"list-disc list-inside\">";

/// Helper to render through the streaming renderer with custom options
fn render_with(text: &str, options: HtmlRendererOptions) -> String {
    let renderer = HtmlRenderer::new(options);
    let mut output = Vec::new();
    renderer.format(text, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Number of lines in `text` that the HTML bullet rule accepts
fn count_bullet_lines(text: &str) -> usize {
    text.split('\n')
        .filter(|line| BulletRule::LIST_BLOCK.is_bullet(line.trim()))
        .count()
}

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// =============================================================================
// Inline Emphasis
// =============================================================================

mod inline {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(format_markdown("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn test_italic() {
        assert_eq!(format_markdown("*em*"), "<em>em</em>");
    }

    #[test]
    fn test_bold_before_italic() {
        assert_eq!(
            format_markdown("**Diskon** *terbatas*"),
            "<strong>Diskon</strong> <em>terbatas</em>"
        );
    }

    #[test]
    fn test_unbalanced_markers_render_literally() {
        assert_eq!(format_markdown("harga *mulai 50rb"), "harga *mulai 50rb");
    }

    #[test]
    fn test_emphasis_inside_list_item() {
        assert_eq!(
            format_markdown("- **Bahan** premium"),
            format!("{UL}<li><strong>Bahan</strong> premium</li></ul>")
        );
    }
}

// =============================================================================
// Line Breaks
// =============================================================================

mod line_breaks {
    use super::*;

    #[test]
    fn test_newline_becomes_break() {
        assert_eq!(format_markdown("a\nb"), "a<br />b");
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(format_markdown("a\n\n\nb"), "a<br />b");
        assert_eq!(format_markdown("\na\n"), "a");
    }

    #[test]
    fn test_text_lines_kept_verbatim() {
        assert_eq!(format_markdown("  a  \nb"), "  a  <br />b");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(format_markdown("   "), "");
        assert_eq!(format_markdown("\n"), "");
    }

    #[test]
    fn test_crlf_bullets() {
        assert_eq!(
            format_markdown("- a\r\n- b"),
            format!("{UL}<li>a</li><li>b</li></ul>")
        );
    }
}

// =============================================================================
// List Blocks
// =============================================================================

mod lists {
    use super::*;

    #[test]
    fn test_single_list() {
        assert_eq!(
            format_markdown("- a\n- b"),
            "<ul class=\"list-disc list-inside\"><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_list_between_text() {
        let output = format_markdown("intro\n- a\n- b\noutro");
        assert_eq!(
            output,
            format!("intro<br />{UL}<li>a</li><li>b</li></ul><br />outro")
        );
        assert_eq!(count_occurrences(&output, "<ul"), 1);
        assert_eq!(count_occurrences(&output, "</ul>"), 1);
    }

    #[test]
    fn test_star_marker() {
        assert_eq!(
            format_markdown("* one\n* two"),
            format!("{UL}<li>one</li><li>two</li></ul>")
        );
    }

    #[test]
    fn test_mixed_markers_share_a_list() {
        assert_eq!(
            format_markdown("- one\n* two"),
            format!("{UL}<li>one</li><li>two</li></ul>")
        );
    }

    #[test]
    fn test_plus_is_not_a_list_marker() {
        assert_eq!(format_markdown("+ a\n+ b"), "+ a<br />+ b");
    }

    #[test]
    fn test_indented_bullets() {
        assert_eq!(
            format_markdown("   - a\n\t- b"),
            format!("{UL}<li>a</li><li>b</li></ul>")
        );
    }

    #[test]
    fn test_only_first_whitespace_stripped() {
        assert_eq!(format_markdown("-  a"), format!("{UL}<li> a</li></ul>"));
    }

    #[test]
    fn test_blank_line_splits_lists() {
        assert_eq!(
            format_markdown("- a\n\n- b"),
            format!("{UL}<li>a</li></ul><br />{UL}<li>b</li></ul>")
        );
    }

    #[test]
    fn test_list_open_at_end_is_closed() {
        let output = format_markdown("Layanan:\n- Sablon\n- Bordir");
        assert!(output.ends_with("</ul>"));
    }

    #[test]
    fn test_two_lists_with_text_between() {
        let output = format_markdown("- a\ntengah\n- b\n- c");
        assert_eq!(
            output,
            format!("{UL}<li>a</li></ul><br />tengah<br />{UL}<li>b</li><li>c</li></ul>")
        );
    }

    #[test]
    fn test_marker_without_space_is_text() {
        assert_eq!(format_markdown("-a\n-"), "-a<br />-");
    }
}

// =============================================================================
// Options
// =============================================================================

mod options {
    use super::*;

    #[test]
    fn test_custom_list_class() {
        let output = render_with(
            "- a",
            HtmlRendererOptions {
                list_class: "features".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(output, "<ul class=\"features\"><li>a</li></ul>");
    }

    #[test]
    fn test_description_rule_in_html() {
        let output = render_with(
            "+ Satu\n+ Dua",
            HtmlRendererOptions {
                bullet_rule: BulletRule::DESCRIPTION,
                ..Default::default()
            },
        );
        assert_eq!(output, format!("{UL}<li>Satu</li><li>Dua</li></ul>"));
    }

    #[test]
    fn test_default_options_match_format_markdown() {
        let text = "Promo\n- **Kaos**\n- Jaket\nSelesai";
        assert_eq!(
            render_with(text, HtmlRendererOptions::default()),
            format_markdown(text)
        );
    }
}

// =============================================================================
// Invariants
// =============================================================================

mod invariants {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "plain",
        "- a",
        "- a\n- b",
        "intro\n- a\n- b\noutro",
        "- a\n\n- b\n\n\n- c",
        "* x\n+ y\n- z",
        "**Judul**\n- satu\n  - dua\nteks\n* tiga",
        "-\n- \n-x\n - y",
        "\n\n- a\n\n",
    ];

    #[test]
    fn test_li_count_matches_bullet_lines() {
        for sample in SAMPLES {
            let output = format_markdown(sample);
            assert_eq!(
                count_occurrences(&output, "<li>"),
                count_bullet_lines(sample),
                "sample: {sample:?}"
            );
        }
    }

    #[test]
    fn test_lists_always_closed() {
        for sample in SAMPLES {
            let output = format_markdown(sample);
            assert_eq!(
                count_occurrences(&output, "<ul"),
                count_occurrences(&output, "</ul>"),
                "sample: {sample:?}"
            );
            assert_eq!(
                count_occurrences(&output, "<li>"),
                count_occurrences(&output, "</li>"),
                "sample: {sample:?}"
            );
        }
    }

    #[test]
    fn test_plain_text_is_fixed_point() {
        for text in ["Kaos polos", "Baris satu\nBaris dua", "a\nb\nc"] {
            let once = format_markdown(text);
            assert_eq!(once, text.replace('\n', "<br />"));
            assert_eq!(format_markdown(&once), once);
        }
    }
}
