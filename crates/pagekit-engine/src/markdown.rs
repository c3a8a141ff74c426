use pagekit_types::HeadingNode;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

fn level_number(level: HeadingLevel) -> u32 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Collect index headings from a CommonMark document, in order
///
/// `h1` is the page title and never enters the index; `h2` becomes depth 1,
/// `h3` depth 2 and so on. Heading attributes are left unparsed so a
/// trailing `{#id}` marker stays part of the title.
pub fn headings_from_markdown(source: &str) -> Vec<HeadingNode> {
    let mut headings = Vec::new();
    let mut current: Option<(u32, String)> = None;

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((level_number(level), String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take()
                    && level > 1
                {
                    let title = text.trim();
                    if !title.is_empty() {
                        headings.push(HeadingNode::new(title, level - 1));
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}
