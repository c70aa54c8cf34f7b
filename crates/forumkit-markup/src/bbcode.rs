//! BBCode to HTML conversion.
//!
//! A fixed, ordered table of regex substitutions. Each rule recognizes one
//! bracket tag and emits HTML with the captured content interpolated
//! positionally. Rules are applied sequentially over the whole string, so a
//! later rule sees the output of earlier rules. Tags the table does not
//! recognize, and malformed or unclosed tags, pass through untouched.
//!
//! The converter performs no HTML escaping. See the crate-level security
//! note.

use std::sync::LazyLock;

use regex::Regex;

/// One bracket tag recognizer paired with its HTML replacement template.
///
/// The template uses the regex crate's `$n`/`${n}` syntax to interpolate
/// capture groups.
struct SubstitutionRule {
    pattern: Regex,
    template: &'static str,
}

impl SubstitutionRule {
    fn new(pattern: &str, template: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            template,
        }
    }
}

/// The fixed rule table, compiled once.
///
/// All patterns run in dot-matches-newline mode so tag bodies may span
/// lines. The `[img]` rule only accepts `http(s)` URLs ending in a known
/// image extension; the `[url]` rule only accepts `ftp`/`http(s)` URLs.
static RULES: LazyLock<Vec<SubstitutionRule>> = LazyLock::new(|| {
    vec![
        SubstitutionRule::new(
            r"(?s)\[img\](https?://.*?\.(?i:jpg|jpeg|gif|png|bmp))\[/img\]",
            r#"<img src="$1" alt="" />"#,
        ),
        SubstitutionRule::new(r"(?s)\[quote\](.*?)\[/quote\]", "<pre>$1</pre>"),
        SubstitutionRule::new(r"(?s)\[b\](.*?)\[/b\]", "<b>$1</b>"),
        SubstitutionRule::new(
            r"(?s)\[size=(.*?)\](.*?)\[/size\]",
            r#"<span style="font-size:${1}px;">$2</span>"#,
        ),
        SubstitutionRule::new(r"(?s)\[i\](.*?)\[/i\]", "<i>$1</i>"),
        SubstitutionRule::new(
            r"(?s)\[url\]((?:ftp|https?)://.*?)\[/url\]",
            r#"<a href="$1">$1</a>"#,
        ),
        SubstitutionRule::new(
            r"(?s)\[u\](.*?)\[/u\]",
            r#"<span style="text-decoration:underline;">$1</span>"#,
        ),
        SubstitutionRule::new(
            r"(?s)\[color=(.*?)\](.*?)\[/color\]",
            r#"<span style="color:${1};">$2</span>"#,
        ),
    ]
});

/// Convert BBCode bracket tags to HTML.
///
/// Supported tags: `[img]`, `[quote]`, `[b]`, `[size=N]`, `[i]`, `[url]`,
/// `[u]`, `[color=C]`. Input with no recognized tags is returned unchanged.
/// The conversion never fails.
///
/// Rules are applied one after another over the entire string, not in a
/// single merged pass: rule N operates on the output of rule N-1. Nested
/// tags are not interpreted recursively; the output for nested input is
/// whatever the non-overlapping single pass of each rule produces.
///
/// Captured content is inserted verbatim, without HTML escaping. Do not
/// feed untrusted input to this function unless the output is sanitized
/// afterwards.
#[must_use]
pub fn bbcode_to_html(input: &str) -> String {
    let mut html = input.to_owned();
    for rule in RULES.iter() {
        if rule.pattern.is_match(&html) {
            html = rule.pattern.replace_all(&html, rule.template).into_owned();
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_tags_is_identity() {
        let input = "plain text, no brackets & <em>markup</em> left alone";
        assert_eq!(bbcode_to_html(input), input);
    }

    #[test]
    fn test_bold() {
        assert_eq!(bbcode_to_html("[b]hi[/b]"), "<b>hi</b>");
    }

    #[test]
    fn test_italic_and_underline() {
        assert_eq!(bbcode_to_html("[i]slanted[/i]"), "<i>slanted</i>");
        assert_eq!(
            bbcode_to_html("[u]under[/u]"),
            r#"<span style="text-decoration:underline;">under</span>"#
        );
    }

    #[test]
    fn test_quote() {
        assert_eq!(bbcode_to_html("[quote]said[/quote]"), "<pre>said</pre>");
    }

    #[test]
    fn test_size() {
        assert_eq!(
            bbcode_to_html("[size=14]hi[/size]"),
            r#"<span style="font-size:14px;">hi</span>"#
        );
    }

    #[test]
    fn test_color() {
        assert_eq!(
            bbcode_to_html("[color=#ff0000]red[/color]"),
            r##"<span style="color:#ff0000;">red</span>"##
        );
    }

    #[test]
    fn test_url() {
        assert_eq!(
            bbcode_to_html("[url]http://example.com[/url]"),
            r#"<a href="http://example.com">http://example.com</a>"#
        );
        assert_eq!(
            bbcode_to_html("[url]ftp://example.com/file[/url]"),
            r#"<a href="ftp://example.com/file">ftp://example.com/file</a>"#
        );
    }

    #[test]
    fn test_url_scheme_rejected() {
        // Only ftp/http/https bodies match; anything else stays as-is.
        let input = "[url]javascript:alert(1)[/url]";
        assert_eq!(bbcode_to_html(input), input);
    }

    #[test]
    fn test_img() {
        assert_eq!(
            bbcode_to_html("[img]http://x.com/a.png[/img]"),
            r#"<img src="http://x.com/a.png" alt="" />"#
        );
    }

    #[test]
    fn test_img_extension_case_insensitive() {
        assert_eq!(
            bbcode_to_html("[img]https://x.com/photo.JPG[/img]"),
            r#"<img src="https://x.com/photo.JPG" alt="" />"#
        );
    }

    #[test]
    fn test_img_disallowed_extension_rejected() {
        let input = "[img]http://x.com/a.txt[/img]";
        assert_eq!(bbcode_to_html(input), input);
    }

    #[test]
    fn test_img_scheme_required() {
        let input = "[img]file:///etc/a.png[/img]";
        assert_eq!(bbcode_to_html(input), input);
    }

    #[test]
    fn test_body_spans_lines() {
        assert_eq!(
            bbcode_to_html("[quote]line one\nline two[/quote]"),
            "<pre>line one\nline two</pre>"
        );
    }

    #[test]
    fn test_unclosed_tag_untouched() {
        assert_eq!(bbcode_to_html("[b]dangling"), "[b]dangling");
    }

    #[test]
    fn test_multiple_occurrences() {
        assert_eq!(
            bbcode_to_html("[b]a[/b] and [b]b[/b]"),
            "<b>a</b> and <b>b</b>"
        );
    }

    #[test]
    fn test_mixed_tags() {
        assert_eq!(
            bbcode_to_html("[b]bold[/b] [i]italic[/i]"),
            "<b>bold</b> <i>italic</i>"
        );
    }

    // Nested same-tag input is handled by a non-recursive single pass: the
    // lazy match pairs the first opener with the first closer, leaving the
    // outer closer behind. Pinned here so the behavior stays put.
    #[test]
    fn test_nested_same_tag_single_pass() {
        assert_eq!(bbcode_to_html("[b][b]x[/b][/b]"), "<b>[b]x</b>[/b]");
    }

    // Rules run sequentially over the whole string, so a later rule matches
    // tags inside text an earlier rule already rewrote.
    #[test]
    fn test_later_rule_sees_earlier_output() {
        assert_eq!(
            bbcode_to_html("[quote][b]x[/b][/quote]"),
            "<pre><b>x</b></pre>"
        );
    }

    #[test]
    fn test_content_not_escaped() {
        // Documented compatibility behavior: captured text goes through
        // verbatim, markup included.
        assert_eq!(
            bbcode_to_html("[b]<script>bad()</script>[/b]"),
            "<b><script>bad()</script></b>"
        );
    }
}
