use crate::block::InlineNode;

const CODE_MARK: char = '`';
const BOLD_MARK: &str = "**";

/// What is left of a fragment after the inline code pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    Code(&'a str),
    /// A `**` outside any code span, not yet paired
    Marker,
}

/// Split block text into plain, inline code and bold nodes.
///
/// Inline code is recognized first, so `**` inside backticks is literal. A
/// bold span may then enclose inline code but never another bold span.
/// Unpaired markers stay in the surrounding plain text.
pub fn format_inline(text: &str) -> Vec<InlineNode> {
    let pieces = split_bold_markers(split_code_spans(text));
    let mut out = Vec::new();

    let mut i = 0;
    while i < pieces.len() {
        if pieces[i] == Piece::Marker {
            if let Some(close) = closing_marker(&pieces, i) {
                let mut inner = &pieces[i + 1..close];
                // Extra stars of a `***` run stay outside the bold span
                let mut lead = "";
                let mut head = None;
                if let Some((Piece::Text(first), rest)) = inner.split_first() {
                    let first: &str = first;
                    let trimmed = first.trim_start_matches('*');
                    lead = &first[..first.len() - trimmed.len()];
                    head = (!trimmed.is_empty()).then_some(trimmed);
                    inner = rest;
                }
                if head.is_some() || !inner.is_empty() {
                    if !lead.is_empty() {
                        push_text(&mut out, lead);
                    }
                    let mut bold = Vec::new();
                    if let Some(head) = head {
                        push_text(&mut bold, head);
                    }
                    for piece in inner {
                        push_piece(&mut bold, *piece);
                    }
                    out.push(InlineNode::Bold(bold));
                    i = close + 1;
                    continue;
                }
            }
        }
        push_piece(&mut out, pieces[i]);
        i += 1;
    }

    out
}

/// Pass 1: pair each backtick with the nearest following one.
fn split_code_spans(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(CODE_MARK) {
        let open = cursor + offset;
        let Some(len) = text[open + 1..].find(CODE_MARK) else {
            break;
        };
        if len == 0 {
            // "``" is not a span; the first backtick is literal
            cursor = open + 1;
            continue;
        }

        let close = open + 1 + len;
        if plain_start < open {
            pieces.push(Piece::Text(&text[plain_start..open]));
        }
        pieces.push(Piece::Code(&text[open + 1..close]));
        cursor = close + 1;
        plain_start = cursor;
    }

    if plain_start < text.len() {
        pieces.push(Piece::Text(&text[plain_start..]));
    }
    pieces
}

/// Pass 2 preparation: cut `**` markers out of the plain pieces.
fn split_bold_markers<'a>(pieces: Vec<Piece<'a>>) -> Vec<Piece<'a>> {
    let mut out = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let Piece::Text(text) = piece else {
            out.push(piece);
            continue;
        };
        for (n, part) in text.split(BOLD_MARK).enumerate() {
            if n > 0 {
                out.push(Piece::Marker);
            }
            if !part.is_empty() {
                out.push(Piece::Text(part));
            }
        }
    }
    out
}

/// Index of the marker closing the one at `open`, if the span between is non-empty.
fn closing_marker(pieces: &[Piece<'_>], open: usize) -> Option<usize> {
    let close = open + 1 + pieces[open + 1..].iter().position(|p| *p == Piece::Marker)?;
    (close > open + 1).then_some(close)
}

fn push_piece(out: &mut Vec<InlineNode>, piece: Piece<'_>) {
    match piece {
        Piece::Text(text) => push_text(out, text),
        Piece::Code(code) => out.push(InlineNode::InlineCode(code.to_string())),
        Piece::Marker => push_text(out, BOLD_MARK),
    }
}

/// Append plain text, merging with a preceding plain node.
fn push_text(out: &mut Vec<InlineNode>, text: &str) {
    if let Some(InlineNode::PlainText(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(InlineNode::PlainText(text.to_string()));
    }
}
