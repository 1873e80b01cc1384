//! Minimal HTML-fragment flattening for modal bodies.
//!
//! Modal content arrives as markup (`<p>` wrapped messages, fetched page
//! fragments). egui has no HTML renderer, so block elements become lines and
//! everything else becomes plain text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum LineKind {
    Heading,
    Bullet,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct MarkupLine {
    pub(super) kind: LineKind,
    pub(super) text: String,
}

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "br", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5", "h6", "section", "article",
    "header", "footer", "hr", "table", "tr", "blockquote", "pre",
];
const SKIPPED_TAGS: &[&str] = &["script", "style", "head", "title"];

struct LineBuilder {
    lines: Vec<MarkupLine>,
    current: String,
    kind: LineKind,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: String::new(),
            kind: LineKind::Text,
        }
    }

    fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                if !self.current.is_empty() && !self.current.ends_with(' ') {
                    self.current.push(' ');
                }
            } else {
                self.current.push(ch);
            }
        }
    }

    fn break_line(&mut self, next_kind: LineKind) {
        let text = self.current.trim_end().to_string();
        if !text.is_empty() {
            self.lines.push(MarkupLine {
                kind: self.kind.clone(),
                text,
            });
        }
        self.current.clear();
        self.kind = next_kind;
    }

    fn finish(mut self) -> Vec<MarkupLine> {
        self.break_line(LineKind::Text);
        self.lines
    }
}

fn tag_name(tag: &str) -> (bool, String) {
    let tag = tag.trim();
    let closing = tag.starts_with('/');
    let name = tag
        .trim_start_matches('/')
        .split(|ch: char| ch.is_whitespace() || ch == '/')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    (closing, name)
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find(';').filter(|end| *end <= 8) else {
            out.push('&');
            rest = &tail[1..];
            continue;
        };
        let decoded = match &tail[1..end] {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" | "#39" => Some('\''),
            "nbsp" => Some(' '),
            _ => None,
        };
        match decoded {
            Some(ch) => {
                out.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Flatten an HTML fragment into display lines.
pub(super) fn fragment_lines(html: &str) -> Vec<MarkupLine> {
    let mut builder = LineBuilder::new();
    let mut skipping: Option<String> = None;
    let mut rest = html;

    while !rest.is_empty() {
        let Some(open) = rest.find('<') else {
            if skipping.is_none() {
                builder.push_text(&decode_entities(rest));
            }
            break;
        };
        if skipping.is_none() {
            builder.push_text(&decode_entities(&rest[..open]));
        }
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            // Unterminated tag: keep the remainder as text.
            if skipping.is_none() {
                builder.push_text(&decode_entities(&rest[open..]));
            }
            break;
        };
        let (closing, name) = tag_name(&after[..close]);
        rest = &after[close + 1..];

        if let Some(skipped) = &skipping {
            if closing && *skipped == name {
                skipping = None;
            }
            continue;
        }
        if !closing && SKIPPED_TAGS.contains(&name.as_str()) {
            skipping = Some(name);
            continue;
        }
        if !BLOCK_TAGS.contains(&name.as_str()) {
            continue;
        }
        let next_kind = match (closing, name.as_str()) {
            (false, "h1" | "h2" | "h3" | "h4" | "h5" | "h6") => LineKind::Heading,
            (false, "li") => LineKind::Bullet,
            _ => LineKind::Text,
        };
        builder.break_line(next_kind);
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[MarkupLine]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn paragraph_message_becomes_one_line() {
        let lines = fragment_lines("<p>Saved.</p>");
        assert_eq!(
            lines,
            vec![MarkupLine {
                kind: LineKind::Text,
                text: "Saved.".to_string()
            }]
        );
    }

    #[test]
    fn block_elements_split_lines_and_inline_tags_vanish() {
        let lines = fragment_lines(
            "<h2>Title</h2>\n<p>Some <strong>bold</strong>\n   text.</p><ul><li>one</li><li>two</li></ul>",
        );
        assert_eq!(texts(&lines), vec!["Title", "Some bold text.", "one", "two"]);
        assert_eq!(lines[0].kind, LineKind::Heading);
        assert_eq!(lines[1].kind, LineKind::Text);
        assert_eq!(lines[2].kind, LineKind::Bullet);
        assert_eq!(lines[3].kind, LineKind::Bullet);
    }

    #[test]
    fn entities_are_decoded_and_unknown_ones_kept() {
        let lines = fragment_lines("<p>a &amp; b &lt;c&gt; &copy; &quot;d&quot;</p>");
        assert_eq!(texts(&lines), vec!["a & b <c> &copy; \"d\""]);
    }

    #[test]
    fn script_and_style_bodies_are_dropped() {
        let lines = fragment_lines("<style>p { color: red }</style><p>kept</p><script>alert(1)</script>");
        assert_eq!(texts(&lines), vec!["kept"]);
    }

    #[test]
    fn plain_text_and_unterminated_tags_survive() {
        assert_eq!(texts(&fragment_lines("just text")), vec!["just text"]);
        assert_eq!(texts(&fragment_lines("a < b")), vec!["a < b"]);
        assert!(fragment_lines("   ").is_empty());
    }
}
