/*!
 * Tests for highlight and formatted rendering
 */

use catwork::render::{escape_html, Renderer};
use catwork::TagPattern;

fn renderer() -> Renderer<'static> {
    Renderer::new(TagPattern::standard())
}

/// Test that bold renders live in the formatted view
#[test]
fn test_renderFormatted_withBold_shouldRenderLive() {
    assert_eq!(renderer().render_formatted("<b>hi</b>"), "<b>hi</b>");
}

/// Test that square-bracket tokens are always chips
#[test]
fn test_renderFormatted_withSquareTag_shouldAlwaysChip() {
    let pattern = TagPattern::new(r"\[[^\]]+\]", ["x", "[x]"]).unwrap();
    let html = Renderer::new(&pattern).render_formatted("[x]");
    assert_eq!(html, "<span class=\"tag-chip\">[x]</span>");
}

/// Test that the highlight view never emits a live tag for any token
#[test]
fn test_highlight_withWhitelistedTags_shouldNeverRenderLive() {
    let text = "<b>a</b> <i>b</i> <u>c</u> <br/> <strong>d</strong> <em>e</em>";
    let html = renderer().highlight(text);
    let stripped = html
        .replace("<span class=\"tag-chip\">", "")
        .replace("</span>", "");
    assert!(!stripped.contains('<'), "unexpected live markup in {}", html);
}

/// Test that plain text is escaped in the formatted view
#[test]
fn test_renderFormatted_withSpecialChars_shouldEscape() {
    let html = renderer().render_formatted("1 & 2 <b>bold</b> \"c\" >");
    assert_eq!(html, "1 &amp; 2 <b>bold</b> &quot;c&quot; &gt;");
}

/// Test that attributes ride along with a whitelisted tag name
#[test]
fn test_renderFormatted_withAttributes_shouldUseFirstWord() {
    let html = renderer().render_formatted(r#"<b class="x">y</b>"#);
    assert_eq!(html, r#"<b class="x">y</b>"#);
}

/// Test escaping of tag chips containing quotes
#[test]
fn test_highlight_withQuotedAttribute_shouldEscapeChip() {
    let html = renderer().highlight(r#"<span title='a'>"#);
    assert_eq!(
        html,
        "<span class=\"tag-chip\">&lt;span title=&#x27;a&#x27;&gt;</span>"
    );
}

/// Test that escape is identity on safe text
#[test]
fn test_escapeHtml_withSafeText_shouldBeUnchanged() {
    assert_eq!(escape_html("Hola, ¿qué tal?"), "Hola, ¿qué tal?");
}
