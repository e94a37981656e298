// Minimal markdown rendering for assistant output: headings, bullet items,
// paragraphs, with **bold** and `code` spans inline.
#![allow(non_snake_case)]
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum SpanStyle {
    Plain,
    Bold,
    Code,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineSpan {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: usize, spans: Vec<InlineSpan> },
    ListItem(Vec<InlineSpan>),
    Paragraph(Vec<InlineSpan>),
}

pub fn parse_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        let hashes = trimmed.chars().take_while(|c| *c == '#').count();
        if (1..=6).contains(&hashes) && trimmed[hashes..].starts_with(' ') {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading { level: hashes, spans: parse_spans(trimmed[hashes..].trim()) });
        } else if let Some(item) = trimmed.strip_prefix("* ").or_else(|| trimmed.strip_prefix("- ")) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::ListItem(parse_spans(item.trim())));
        } else {
            paragraph.push(trimmed);
        }
    }
    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(parse_spans(&paragraph.join(" "))));
        paragraph.clear();
    }
}

pub fn parse_spans(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut style = SpanStyle::Plain;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if style != SpanStyle::Code && rest.starts_with("**") {
            push_span(&mut current, &style, &mut spans);
            style = if style == SpanStyle::Bold { SpanStyle::Plain } else { SpanStyle::Bold };
            rest = &rest[2..];
        } else if style != SpanStyle::Bold && c == '`' {
            push_span(&mut current, &style, &mut spans);
            style = if style == SpanStyle::Code { SpanStyle::Plain } else { SpanStyle::Code };
            rest = &rest[1..];
        } else {
            current.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    push_span(&mut current, &style, &mut spans);
    spans
}

fn push_span(current: &mut String, style: &SpanStyle, spans: &mut Vec<InlineSpan>) {
    if !current.is_empty() {
        spans.push(InlineSpan { text: std::mem::take(current), style: style.clone() });
    }
}

#[component]
fn InlineSpans(spans: Vec<InlineSpan>) -> Element {
    let nodes = spans.into_iter().map(|span| match span.style {
        SpanStyle::Bold => rsx! { strong { "{span.text}" } },
        SpanStyle::Code => rsx! {
            code { style: "background: #374151; color: #34d399; border-radius: 4px; padding: 1px 4px;", "{span.text}" }
        },
        SpanStyle::Plain => rsx! { span { "{span.text}" } },
    });
    rsx! { {nodes} }
}

#[component]
pub fn Markdown(source: String) -> Element {
    let blocks = parse_blocks(&source).into_iter().map(|block| match block {
        Block::Heading { spans, .. } => rsx! {
            h3 { class: "accent", style: "font-size: 18px; margin: 16px 0 8px;", InlineSpans { spans: spans } }
        },
        Block::ListItem(spans) => rsx! {
            li { style: "margin: 6px 0 6px 16px;", InlineSpans { spans: spans } }
        },
        Block::Paragraph(spans) => rsx! {
            p { style: "margin-bottom: 8px;", InlineSpans { spans: spans } }
        },
    });
    rsx! {
        div { class: "markdown", {blocks} }
    }
}
