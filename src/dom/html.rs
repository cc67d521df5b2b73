//! Builds a [`MemoryElement`] from a snapshot of the content's inner markup.
//!
//! This is a lenient scanner, not an HTML5 parser. It understands enough to
//! find elements, their descendant text and image heights:
//! - every opened element becomes a node, in document order, and receives
//!   the text of all its descendants;
//! - void elements (`img`, `br`, ...) and self-closed tags open nothing;
//! - a block-level opening tag implicitly closes an open `<p>`;
//! - comments, doctype and the bodies of `script`/`style` are skipped;
//! - a `<` not followed by a tag name is text, and a `>` inside a quoted
//!   attribute value does not end its tag.
//!
//! Entities are left undecoded.

use super::memory::MemoryElement;

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const CLOSES_PARAGRAPH: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "dl", "fieldset", "figure", "footer",
    "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "main", "nav", "ol", "p", "pre",
    "section", "table", "ul",
];

const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// Parses `html` into a content element with the given rendered height.
pub fn parse_content(html: &str, rendered_height: f64) -> MemoryElement {
    let mut element = MemoryElement::new(rendered_height);
    // (tag, index into `texts`)
    let mut open: Vec<(String, usize)> = Vec::new();
    let mut tags: Vec<String> = Vec::new();
    let mut texts: Vec<String> = Vec::new();

    let mut rest = html;
    while !rest.is_empty() {
        let Some(lt) = rest.find('<') else {
            append_text(&open, &mut texts, rest);
            break;
        };
        append_text(&open, &mut texts, &rest[..lt]);
        rest = &rest[lt..];

        if let Some(after) = rest.strip_prefix("<!--") {
            rest = match after.find("-->") {
                Some(end) => &after[end + 3..],
                None => "",
            };
            continue;
        }

        let after_lt = &rest[1..];
        let name_start = after_lt.strip_prefix('/').unwrap_or(after_lt);
        let opens_markup = after_lt.starts_with(['!', '?'])
            || name_start.starts_with(|c: char| c.is_ascii_alphabetic());
        if !opens_markup {
            // `a < b`, `x <3`: the '<' is literal text.
            append_text(&open, &mut texts, "<");
            rest = after_lt;
            continue;
        }

        let Some(gt) = tag_end(rest).or_else(|| rest.find('>')) else {
            // A dangling '<' is literal text.
            append_text(&open, &mut texts, rest);
            break;
        };
        let body = &rest[1..gt];
        rest = &rest[gt + 1..];

        if body.starts_with('!') || body.starts_with('?') {
            continue;
        }

        if let Some(closing) = body.strip_prefix('/') {
            let name = tag_name(closing);
            if let Some(pos) = open.iter().rposition(|(t, _)| *t == name) {
                open.truncate(pos);
            }
            continue;
        }

        let name = tag_name(body);

        if CLOSES_PARAGRAPH.contains(&name.as_str()) {
            if let Some(pos) = open.iter().rposition(|(t, _)| t == "p") {
                open.truncate(pos);
            }
        }

        if name == "img" {
            element.push_image(attribute_value(body, "height").and_then(parse_pixels).unwrap_or(0.0));
        }

        if RAW_TEXT_TAGS.contains(&name.as_str()) {
            let close = format!("</{}", name);
            rest = match find_ascii_case_insensitive(rest, &close) {
                Some(end) => match rest[end..].find('>') {
                    Some(gt) => &rest[end + gt + 1..],
                    None => "",
                },
                None => "",
            };
            continue;
        }

        tags.push(name.clone());
        texts.push(String::new());
        if !VOID_TAGS.contains(&name.as_str()) && !body.trim_end().ends_with('/') {
            open.push((name, texts.len() - 1));
        }
    }

    for (tag, text) in tags.iter().zip(texts.iter()) {
        element.push_node(tag, text);
    }
    element
}

fn append_text(open: &[(String, usize)], texts: &mut [String], text: &str) {
    if text.is_empty() {
        return;
    }
    for (_, idx) in open {
        texts[*idx].push_str(text);
    }
}

/// Offset of the `>` closing the tag that starts at `tag[0]`.
///
/// A `>` inside a quoted attribute value does not end the tag. `None` when
/// the tag or one of its quoted values is unterminated.
fn tag_end(tag: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut after_equals = false;
    for (i, c) in tag.char_indices().skip(1) {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '>' => return Some(i),
            '"' | '\'' if after_equals => quote = Some(c),
            '=' => {
                after_equals = true;
                continue;
            }
            c if c.is_ascii_whitespace() => continue,
            _ => {}
        }
        after_equals = false;
    }
    None
}

/// Lowercased tag name at the start of a tag body.
fn tag_name(body: &str) -> String {
    body.trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Value of attribute `name` inside a tag body, quoted or bare.
fn attribute_value<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    let lower = body.to_ascii_lowercase();
    let mut from = 0;
    while let Some(found) = lower[from..].find(name) {
        let start = from + found;
        from = start + name.len();

        let preceded_by_space = lower[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_whitespace());
        if !preceded_by_space {
            continue;
        }
        let after = lower[from..].trim_start();
        if !after.starts_with('=') {
            continue;
        }

        let value_start = body.len() - after.len() + 1;
        let value = body[value_start..].trim_start();
        return match value.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let inner = &value[1..];
                Some(inner.find(q).map_or(inner, |end| &inner[..end]))
            }
            Some(_) => {
                let end = value
                    .find(|c: char| c.is_ascii_whitespace() || c == '/')
                    .unwrap_or(value.len());
                Some(&value[..end])
            }
            None => None,
        };
    }
    None
}

fn parse_pixels(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|h| h.is_finite() && *h >= 0.0)
}

fn find_ascii_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(&needle.to_ascii_lowercase())
}
