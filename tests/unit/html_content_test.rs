use readtimer::dom::html::parse_content;
use readtimer::dom::ContentElement;
use readtimer::services::read_timer::ReadTimer;
use readtimer::types::settings::ReadTimerSettings;

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_headings_and_paragraphs_in_document_order() {
    let el = parse_content("<h1>Title here</h1><p>One two three</p><h2>Next</h2>", 300.0);
    assert_eq!(
        el.texts_matching(&tags(&["h1", "h2", "p"])),
        vec!["Title here", "One two three", "Next"]
    );
    assert_eq!(el.height(), 300.0);
}

#[test]
fn test_descendant_text_is_included() {
    let el = parse_content("<p>Hello <strong>big</strong> world</p>", 100.0);
    assert_eq!(el.texts_matching(&tags(&["p"])), vec!["Hello big world"]);
    assert_eq!(el.texts_matching(&tags(&["strong"])), vec!["big"]);
}

#[test]
fn test_nested_matches_are_reported_separately() {
    let el = parse_content("<blockquote><p>quoted</p></blockquote>", 100.0);
    assert_eq!(
        el.texts_matching(&tags(&["blockquote", "p"])),
        vec!["quoted", "quoted"]
    );
}

#[test]
fn test_open_paragraph_closed_by_next_block() {
    let el = parse_content("<p>first<p>second<h3>third", 100.0);
    assert_eq!(el.texts_matching(&tags(&["p"])), vec!["first", "second"]);
    assert_eq!(el.texts_matching(&tags(&["h3"])), vec!["third"]);
}

#[test]
fn test_tag_names_are_case_insensitive() {
    let el = parse_content("<P>Upper case</P>", 100.0);
    assert_eq!(el.texts_matching(&tags(&["p"])), vec!["Upper case"]);
}

#[test]
fn test_image_heights_from_attributes() {
    let el = parse_content(
        r#"<p>x</p><img src="a.png" height="120"><img height=80 /><img src="b.png"><IMG HEIGHT='40px'>"#,
        100.0,
    );
    assert_eq!(el.image_heights(), vec![120.0, 80.0, 0.0, 40.0]);
}

#[test]
fn test_data_height_is_not_height() {
    let el = parse_content(r#"<img data-height="500" src="a.png">"#, 100.0);
    assert_eq!(el.image_heights(), vec![0.0]);
}

#[test]
fn test_scripts_styles_and_comments_are_skipped() {
    let html = r#"<!DOCTYPE html><!-- <p>hidden</p> --><p>shown</p>
<script>var x = "<p>nope</p>";</script><style>p { color: red }</style>"#;
    let el = parse_content(html, 100.0);
    assert_eq!(el.texts_matching(&tags(&["p"])), vec!["shown"]);
}

#[test]
fn test_void_elements_do_not_swallow_text() {
    let el = parse_content("<p>line one<br>line two</p><p>after</p>", 100.0);
    assert_eq!(el.texts_matching(&tags(&["p"])), vec!["line oneline two", "after"]);
}

#[test]
fn test_entities_are_not_decoded() {
    let el = parse_content("<p>fish &amp; chips</p>", 100.0);
    assert_eq!(el.texts_matching(&tags(&["p"])), vec!["fish &amp; chips"]);
}

#[test]
fn test_parsed_article_estimate() {
    let paragraph = format!("<p>{}</p>", vec!["word"; 70].join(" "));
    let html = paragraph.repeat(3);
    let el = parse_content(&html, 1000.0);
    let total = ReadTimer::compute_total_time(&ReadTimerSettings::default(), &el);
    assert_eq!(total, Ok(60));
}

#[test]
fn test_markup_without_content_tags_is_empty() {
    let el = parse_content("<div><span>only spans here</span></div>", 100.0);
    assert!(ReadTimer::compute_total_time(&ReadTimerSettings::default(), &el).is_err());
}

#[test]
fn test_less_than_in_prose_is_text() {
    let el = parse_content("<p>one < two three</p><p>four five</p>", 100.0);
    assert_eq!(
        el.texts_matching(&tags(&["p"])),
        vec!["one < two three", "four five"]
    );

    let settings = ReadTimerSettings {
        words_per_minute: 60.0,
        ..ReadTimerSettings::default()
    };
    assert_eq!(ReadTimer::compute_total_time(&settings, &el), Ok(6));
}

#[test]
fn test_less_than_before_digit_or_after_slash_is_text() {
    let el = parse_content("<p>x <3 and a </ b</p>", 100.0);
    assert_eq!(el.texts_matching(&tags(&["p"])), vec!["x <3 and a </ b"]);
}

#[test]
fn test_greater_than_inside_quoted_attribute() {
    let el = parse_content(
        r#"<p>alpha beta</p><img alt="a > b" height="50"><p>gamma</p>"#,
        100.0,
    );
    assert_eq!(el.image_heights(), vec![50.0]);
    assert_eq!(el.texts_matching(&tags(&["p"])), vec!["alpha beta", "gamma"]);

    let single = parse_content("<img title='x>y' height='30'>", 100.0);
    assert_eq!(single.image_heights(), vec![30.0]);
}
