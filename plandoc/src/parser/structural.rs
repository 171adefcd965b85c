use std::ops::Range;

use pulldown_cmark::{
    Event, HeadingLevel as CmarkLevel, OffsetIter, Options, Parser as CmarkParser, Tag, TagEnd,
};

use crate::block::{Block, HeadingLevel};
use crate::parser::anomaly::{AnomalyKind, ParseAnomaly};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Lazy iterator over the top-level blocks of a plan.
///
/// Each call to `next` pulls only the markdown events of one top-level
/// element. Elements that are not exported are skipped and recorded.
pub struct Blocks<'a> {
    events: OffsetIter<'a>,
    file_id: usize,
    anomalies: Vec<ParseAnomaly>,
}

impl<'a> Blocks<'a> {
    pub(crate) fn new(source: &'a str, file_id: usize) -> Self {
        let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
        Blocks {
            events: CmarkParser::new_ext(source, options).into_offset_iter(),
            file_id,
            anomalies: Vec::new(),
        }
    }

    /// Elements dropped so far.
    pub fn anomalies(&self) -> &[ParseAnomaly] {
        &self.anomalies
    }

    pub fn into_anomalies(self) -> Vec<ParseAnomaly> {
        self.anomalies
    }

    fn drop_element(&mut self, kind: AnomalyKind, span: Range<usize>) {
        self.anomalies.push(ParseAnomaly::new(kind, span, self.file_id));
    }
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        while let Some((event, range)) = self.events.next() {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    let text = collect_inline_text(&mut self.events);
                    let depth = cmark_level_to_u8(level);
                    match HeadingLevel::from_u8(depth) {
                        Some(level) => {
                            return Some(Block::Heading {
                                level,
                                text: text.trim().to_string(),
                            });
                        }
                        None => self.drop_element(AnomalyKind::DeepHeading(depth), range),
                    }
                }

                Event::Start(Tag::Paragraph) => {
                    let text = collect_inline_text(&mut self.events);
                    return Some(Block::Paragraph(text));
                }

                // Fenced and indented blocks are both kept verbatim.
                Event::Start(Tag::CodeBlock(_)) => {
                    let mut text = collect_inline_text(&mut self.events);
                    if text.ends_with('\n') {
                        text.pop();
                    }
                    return Some(Block::CodeBlock(text));
                }

                Event::Start(Tag::List(None)) => {
                    let items = collect_list_items(&mut self.events);
                    return Some(Block::List(items));
                }

                Event::Start(tag) => {
                    let kind = anomaly_kind(&tag);
                    skip_element(&mut self.events);
                    self.drop_element(kind, range);
                }

                Event::Rule => self.drop_element(AnomalyKind::Rule, range),

                Event::Html(_) | Event::InlineHtml(_) => {
                    self.drop_element(AnomalyKind::Html, range)
                }

                _ => {}
            }
        }

        None
    }
}

// ---------------------------------------------------------------------------
// Event collectors
// ---------------------------------------------------------------------------

/// Flatten everything up to the end tag of the element whose start was just
/// consumed into visible text.
fn collect_inline_text(events: &mut OffsetIter<'_>) -> String {
    let mut text = String::new();
    let mut depth = 0u32;

    for (event, _) in events.by_ref() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => break,
            Event::End(_) => depth -= 1,
            other => push_inline(&mut text, &other),
        }
    }

    text
}

/// Collect the items of an unordered list whose start was just consumed.
///
/// Nested list items (ordered or not) are appended after their parent item,
/// so the result is every item of the list in document order.
fn collect_list_items(events: &mut OffsetIter<'_>) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    // Indices into `items` of the list items currently open.
    let mut open: Vec<usize> = Vec::new();
    let mut list_depth = 1u32;

    for (event, _) in events.by_ref() {
        match event {
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => {
                list_depth -= 1;
                if list_depth == 0 {
                    break;
                }
            }
            Event::Start(Tag::Item) => {
                items.push(String::new());
                open.push(items.len() - 1);
            }
            Event::End(TagEnd::Item) => {
                open.pop();
            }
            // Loose list items wrap their text in paragraphs.
            Event::Start(Tag::Paragraph) => {
                if let Some(item) = open.last().map(|&i| &mut items[i]) {
                    if !item.is_empty() && !item.ends_with('\n') {
                        item.push(' ');
                    }
                }
            }
            Event::Start(_) | Event::End(_) => {}
            other => {
                if let Some(&i) = open.last() {
                    push_inline(&mut items[i], &other);
                }
            }
        }
    }

    items.into_iter().map(|item| item.trim().to_string()).collect()
}

/// Consume events up to the end of the element whose start was just consumed.
fn skip_element(events: &mut OffsetIter<'_>) {
    let mut depth = 0u32;
    for (event, _) in events.by_ref() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return,
            Event::End(_) => depth -= 1,
            _ => {}
        }
    }
}

fn push_inline(text: &mut String, event: &Event<'_>) {
    match event {
        Event::Text(s) | Event::Code(s) => text.push_str(s),
        Event::SoftBreak => text.push(' '),
        Event::HardBreak => text.push('\n'),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn cmark_level_to_u8(level: CmarkLevel) -> u8 {
    match level {
        CmarkLevel::H1 => 1,
        CmarkLevel::H2 => 2,
        CmarkLevel::H3 => 3,
        CmarkLevel::H4 => 4,
        CmarkLevel::H5 => 5,
        CmarkLevel::H6 => 6,
    }
}

fn anomaly_kind(tag: &Tag<'_>) -> AnomalyKind {
    match tag {
        Tag::List(Some(_)) => AnomalyKind::OrderedList,
        Tag::BlockQuote(_) => AnomalyKind::BlockQuote,
        Tag::Table(_) => AnomalyKind::Table,
        Tag::HtmlBlock => AnomalyKind::Html,
        _ => AnomalyKind::Other,
    }
}
