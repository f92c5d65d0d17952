use super::*;

#[test]
fn bold_is_rendered_as_strong() {
    let html = render_markdown_html("Plants need **sunlight**.");
    assert!(html.contains("<strong>sunlight</strong>"));
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("safe <script>alert(1)</script> text");
    assert!(!html.contains("<script>"));
    assert!(html.contains("safe"));
}

#[test]
fn lists_render() {
    let html = render_markdown_html("- stomata\n- chlorophyll\n");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>stomata</li>"));
}

#[test]
fn plain_text_is_escaped() {
    let html = render_markdown_html("2 < 3 & 4 > 1");
    assert!(html.contains("&lt;"));
    assert!(html.contains("&amp;"));
}

#[test]
fn scores_use_four_decimals() {
    assert_eq!(format_score(0.5), "0.5000");
    assert_eq!(format_score(0.123_456), "0.1235");
}
