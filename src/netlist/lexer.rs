//! Line scanner for netlist text.
//!
//! The netlist grammar is line oriented, so the lexer hands out one
//! [`LexedLine`] per meaningful line: the whitespace-delimited words and every
//! `key="value"` pair found anywhere on that line. Blank lines and `#`
//! comments never leave the lexer.

use log::trace;

/// A `key="value"` pair borrowed from the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// A non-empty, non-comment netlist line.
#[derive(Debug, Clone, PartialEq)]
pub struct LexedLine<'a> {
    /// Line number (1-indexed)
    pub line: usize,
    /// Whitespace-delimited words, identity token first
    pub words: Vec<&'a str>,
    /// Parameter pairs in encounter order
    pub params: Vec<Param<'a>>,
}

impl<'a> LexedLine<'a> {
    /// The first word of the line.
    pub fn identity(&self) -> &'a str {
        self.words.first().copied().unwrap_or_default()
    }
}

/// Lines of text ending in `\n`, `\r\n` or a lone `\r`.
///
/// Unlike `str::lines`, a lone `\r` also ends a line.
#[derive(Debug, Clone)]
pub struct RawLines<'a> {
    rest: &'a str,
}

impl<'a> RawLines<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for RawLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let rest = self.rest;
        match rest.find(|ch: char| ch == '\n' || ch == '\r') {
            Some(end) => {
                let break_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &rest[end + break_len..];
                Some(&rest[..end])
            }
            None => {
                self.rest = "";
                Some(rest)
            }
        }
    }
}

/// Lexer yielding the meaningful lines of a netlist.
pub struct Lexer<'a> {
    lines: std::iter::Enumerate<RawLines<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: RawLines::new(input).enumerate(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, raw) = self.lines.next()?;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            trace!("line {}: {}", idx + 1, text);
            return Some(LexedLine {
                line: idx + 1,
                words: text.split_whitespace().collect(),
                params: scan_params(text),
            });
        }
    }
}

/// Word characters allowed in parameter keys.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Find every `key="value"` pair in a line, left to right.
///
/// Keys are maximal runs of word characters directly followed by `="`.
/// Values run to the next `"` and must be non-empty; there is no escaping.
/// Pairs never overlap: scanning resumes after the closing quote.
pub fn scan_params(text: &str) -> Vec<Param<'_>> {
    let mut params = Vec::new();
    // Keys may not start before `floor` (end of the previous pair)
    let mut floor = 0;
    let mut search = 0;

    while let Some(rel) = text[search..].find("=\"") {
        let eq = search + rel;
        let key_start = text[floor..eq]
            .char_indices()
            .rev()
            .take_while(|&(_, ch)| is_word_char(ch))
            .last()
            .map(|(i, _)| floor + i);
        let value_start = eq + 2;
        let closing = text[value_start..].find('"').map(|i| value_start + i);

        match (key_start, closing) {
            (Some(key_start), Some(close)) if close > value_start => {
                params.push(Param {
                    key: &text[key_start..eq],
                    value: &text[value_start..close],
                });
                floor = close + 1;
                search = floor;
            }
            _ => search = eq + 1,
        }
    }

    params
}
