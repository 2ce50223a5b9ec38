//! Block-delimited document parser.
//!
//! A document is a sequence of blocks separated by a line holding only
//! `---`. Each block is a list of `key: value` lines; `key:` on its own opens
//! an indented continuation. Lines starting with `##` are comments. Parsing is
//! best-effort and never fails: anything unrecognized is skipped.

use crate::types::{Block, Document};
use regex::Regex;
use std::sync::LazyLock;

/// Separator between blocks: a `---` line between two line breaks.
static BLOCK_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n---\n").unwrap());

/// Parse a whole document into blocks, in source order.
pub fn parse(text: &str) -> Document {
    let text = text.replace("\r\n", "\n");

    let blocks: Vec<Block> = BLOCK_SEPARATOR
        .split(&text)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_block)
        .collect();

    log::debug!("Parsed {} block(s)", blocks.len());
    Document { blocks }
}

/// Parse the lines of a single block.
fn parse_block(chunk: &str) -> Block {
    let lines: Vec<&str> = chunk.lines().collect();
    let mut block = Block::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim_end();
        i += 1;

        if line.is_empty() || line.starts_with("##") {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            log::debug!("Ignoring line without a key: {:?}", line);
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if !value.is_empty() {
            block.set(key, value);
            continue;
        }

        // Continuation: consume indented lines; the first line that is not
        // indented is left for the outer loop.
        let mut collected = Vec::new();
        while let Some(stripped) = lines.get(i).and_then(|l| strip_indent(l)) {
            collected.push(stripped);
            i += 1;
        }
        block.set(key, collected.join("\n").trim_end());
    }

    block
}

/// Strip one indentation unit (four spaces or a tab), if present.
fn strip_indent(line: &str) -> Option<&str> {
    line.strip_prefix("    ").or_else(|| line.strip_prefix('\t'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_blocks() {
        let doc = parse("A\n---\nB");
        assert_eq!(doc.len(), 2);
        assert!(doc.blocks.iter().all(Block::is_empty));
    }

    #[test]
    fn test_empty_chunks_dropped() {
        let doc = parse("title: One\n---\n   \n---\ntitle: Two\n");
        let titles: Vec<_> = doc.iter().map(|b| b.title()).collect();
        assert_eq!(titles, vec![Some("One"), Some("Two")]);
    }

    #[test]
    fn test_separator_requires_own_line() {
        let doc = parse("title: a --- b\ncontent: x---y");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.blocks[0].title(), Some("a --- b"));
    }

    #[test]
    fn test_multiline_continuation() {
        let doc = parse("content:\n    foo\n    bar\n");
        assert_eq!(doc.blocks[0].get("content"), Some("foo\nbar"));
    }

    #[test]
    fn test_continuation_keeps_nested_indent_and_tabs() {
        let doc = parse("content:\n\tfirst\n        nested   \ntitle: After");
        let block = &doc.blocks[0];
        assert_eq!(block.get("content"), Some("first\n    nested"));
        assert_eq!(block.title(), Some("After"));
    }

    #[test]
    fn test_blank_line_ends_continuation() {
        let doc = parse("content1:\n    left\n\n    orphan\ncontent2: right");
        let block = &doc.blocks[0];
        assert_eq!(block.get("content1"), Some("left"));
        assert_eq!(block.get("content2"), Some("right"));
        assert_eq!(block.len(), 2);
    }

    #[test]
    fn test_empty_continuation() {
        let doc = parse("content:\ntitle: T");
        assert_eq!(doc.blocks[0].get("content"), Some(""));
        assert_eq!(doc.blocks[0].title(), Some("T"));
    }

    #[test]
    fn test_comments_and_junk_ignored() {
        let text = "## a comment: with colon\ntitle: Hello\njust some words\nfont_color: #fff";
        let block = &parse(text).blocks[0];
        assert_eq!(block.len(), 2);
        assert_eq!(block.title(), Some("Hello"));
        assert_eq!(block.font_color(), Some("#fff"));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let block = &parse("title: first\ntitle: second").blocks[0];
        assert_eq!(block.title(), Some("second"));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let block = &parse("slide_bg: C:/images/bg.png").blocks[0];
        assert_eq!(block.slide_bg(), Some("C:/images/bg.png"));
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let block = &parse("speaker: Ada\ntitle: T").blocks[0];
        assert_eq!(block.get("speaker"), Some("Ada"));
    }

    #[test]
    fn test_crlf_input() {
        let doc = parse("title: One\r\n---\r\ncontent:\r\n    a\r\n    b\r\n");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.blocks[1].get("content"), Some("a\nb"));
    }
}
