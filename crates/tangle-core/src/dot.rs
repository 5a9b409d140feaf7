//! DOT loader.
//!
//! Reads the directed-graph subset of Graphviz DOT into a
//! [`GraphDescription`]. Vertices are numbered in order of first
//! appearance, whether that is a node statement or an edge chain, and
//! edges keep their declaration order. Both orders matter downstream:
//! they decide vertex indexes and the order children are printed in.

use crate::description::GraphDescription;
use crate::error::{ParseError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

// ─────────────────────────────────────────────────────────────────────────────
// Tokens
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    /// Bare word, numeral or quoted string.
    Id(String),
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semi,
    Comma,
    Equals,
    /// `->`
    Arrow,
    /// `--`
    Line,
    Colon,
}

impl TokenKind {
    fn describe(&self) -> String {
        match self {
            TokenKind::Id(s) => s.clone(),
            TokenKind::LBrace => "{".into(),
            TokenKind::RBrace => "}".into(),
            TokenKind::LBracket => "[".into(),
            TokenKind::RBracket => "]".into(),
            TokenKind::Semi => ";".into(),
            TokenKind::Comma => ",".into(),
            TokenKind::Equals => "=".into(),
            TokenKind::Arrow => "->".into(),
            TokenKind::Line => "--".into(),
            TokenKind::Colon => ":".into(),
        }
    }
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    line: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexer
// ─────────────────────────────────────────────────────────────────────────────

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.' || !c.is_ascii()
}

fn tokenize(src: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut line = 1;
    let mut at_line_start = true;

    while pos < chars.len() {
        let c = chars[pos];

        if c == '\n' {
            line += 1;
            pos += 1;
            at_line_start = true;
            continue;
        }
        if c.is_whitespace() {
            pos += 1;
            continue;
        }

        // `#` lines are preprocessor output and count as comments.
        if c == '#' && at_line_start {
            while pos < chars.len() && chars[pos] != '\n' {
                pos += 1;
            }
            continue;
        }
        at_line_start = false;

        let next = chars.get(pos + 1).copied();
        let single = match c {
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            ';' => Some(TokenKind::Semi),
            ',' => Some(TokenKind::Comma),
            '=' => Some(TokenKind::Equals),
            ':' => Some(TokenKind::Colon),
            _ => None,
        };
        if let Some(kind) = single {
            tokens.push(Token { kind, line });
            pos += 1;
            continue;
        }

        match (c, next) {
            ('/', Some('/')) => {
                while pos < chars.len() && chars[pos] != '\n' {
                    pos += 1;
                }
            }
            ('/', Some('*')) => {
                pos += 2;
                loop {
                    match (chars.get(pos), chars.get(pos + 1)) {
                        (Some('*'), Some('/')) => {
                            pos += 2;
                            break;
                        }
                        (Some('\n'), _) => {
                            line += 1;
                            pos += 1;
                        }
                        (Some(_), _) => pos += 1,
                        (None, _) => {
                            return Err(ParseError::UnexpectedEof {
                                expected: "end of comment",
                            })
                        }
                    }
                }
            }
            ('-', Some('>')) => {
                tokens.push(Token {
                    kind: TokenKind::Arrow,
                    line,
                });
                pos += 2;
            }
            ('-', Some('-')) => {
                tokens.push(Token {
                    kind: TokenKind::Line,
                    line,
                });
                pos += 2;
            }
            ('"', _) => {
                let start_line = line;
                let mut text = String::new();
                pos += 1;
                loop {
                    match chars.get(pos) {
                        Some('"') => {
                            pos += 1;
                            break;
                        }
                        Some('\\') => {
                            match chars.get(pos + 1) {
                                Some('"') => text.push('"'),
                                Some('\\') => text.push('\\'),
                                // Line continuation
                                Some('\n') => line += 1,
                                Some(other) => {
                                    text.push('\\');
                                    text.push(*other);
                                }
                                None => {
                                    return Err(ParseError::UnterminatedString {
                                        line: start_line,
                                    })
                                }
                            }
                            pos += 2;
                        }
                        Some(ch) => {
                            if *ch == '\n' {
                                line += 1;
                            }
                            text.push(*ch);
                            pos += 1;
                        }
                        None => return Err(ParseError::UnterminatedString { line: start_line }),
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Id(text),
                    line: start_line,
                });
            }
            ('-', Some(d)) if d.is_ascii_digit() || d == '.' => {
                let start = pos;
                pos += 1;
                while pos < chars.len() && is_id_char(chars[pos]) {
                    pos += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Id(chars[start..pos].iter().collect()),
                    line,
                });
            }
            (ch, _) if is_id_char(ch) => {
                let start = pos;
                while pos < chars.len() && is_id_char(chars[pos]) {
                    pos += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Id(chars[start..pos].iter().collect()),
                    line,
                });
            }
            (ch, _) => {
                return Err(ParseError::UnexpectedToken {
                    line,
                    found: ch.to_string(),
                    expected: "a DOT token",
                })
            }
        }
    }

    Ok(tokens)
}

// ─────────────────────────────────────────────────────────────────────────────
// Parser
// ─────────────────────────────────────────────────────────────────────────────

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    desc: GraphDescription,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            desc: GraphDescription::new(),
        }
    }

    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some(TokenKind::Id(s)) if s.eq_ignore_ascii_case(keyword))
    }

    fn next(&mut self, expected: &'static str) -> Result<Token> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ParseError::UnexpectedEof { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<()> {
        let token = self.next(expected)?;
        if token.kind == kind {
            Ok(())
        } else {
            Err(unexpected(&token, expected))
        }
    }

    fn expect_id(&mut self, expected: &'static str) -> Result<String> {
        let token = self.next(expected)?;
        match token.kind {
            TokenKind::Id(s) => Ok(s),
            _ => Err(unexpected(&token, expected)),
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn current_line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(1)
    }

    /// `["strict"] ("digraph" | "graph") [id] "{" stmt_list "}"`
    fn parse_graph(mut self) -> Result<GraphDescription> {
        if self.peek_keyword("strict") {
            self.pos += 1;
        }

        let header = self.next("'digraph'")?;
        match &header.kind {
            TokenKind::Id(s) if s.eq_ignore_ascii_case("digraph") => {}
            TokenKind::Id(s) if s.eq_ignore_ascii_case("graph") => {
                warn!("undirected graph header; edges are read as directed");
            }
            _ => return Err(unexpected(&header, "'digraph'")),
        }

        if let Some(TokenKind::Id(_)) = self.peek() {
            self.desc.name = Some(self.expect_id("graph name")?);
        }

        self.expect(TokenKind::LBrace, "'{'")?;
        self.parse_stmt_list()?;
        self.expect(TokenKind::RBrace, "'}'")?;

        if let Some(token) = self.tokens.get(self.pos) {
            return Err(unexpected(token, "end of input"));
        }

        Ok(self.desc)
    }

    fn parse_stmt_list(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                None | Some(TokenKind::RBrace) => return Ok(()),
                Some(TokenKind::Semi) => {
                    self.pos += 1;
                }
                _ => self.parse_stmt()?,
            }
        }
    }

    fn parse_stmt(&mut self) -> Result<()> {
        if self.peek_keyword("subgraph") || self.peek() == Some(&TokenKind::LBrace) {
            return Err(ParseError::Unsupported {
                line: self.current_line(),
                feature: "subgraph",
            });
        }

        // graph/node/edge default attribute statements carry nothing we keep.
        if self.peek_keyword("graph") || self.peek_keyword("node") || self.peek_keyword("edge") {
            self.pos += 1;
            self.parse_attr_lists()?;
            return Ok(());
        }

        let id = self.expect_id("node id")?;

        // Graph attribute: `key = value`
        if self.eat(&TokenKind::Equals) {
            self.expect_id("attribute value")?;
            return Ok(());
        }

        if self.peek() == Some(&TokenKind::Colon) {
            return Err(ParseError::Unsupported {
                line: self.current_line(),
                feature: "node port",
            });
        }

        let first = self.desc.intern(&id);

        if matches!(self.peek(), Some(TokenKind::Arrow | TokenKind::Line)) {
            let mut from = first;
            while let Some(TokenKind::Arrow | TokenKind::Line) = self.peek() {
                if self.peek() == Some(&TokenKind::Line) {
                    warn!(line = self.current_line(), "'--' edge read as directed");
                }
                self.pos += 1;
                let target = self.expect_id("edge target")?;
                let to = self.desc.intern(&target);
                self.desc.push_edge(from, to);
                from = to;
            }
            // Edge attributes do not affect the graph.
            self.parse_attr_lists()?;
        } else {
            for (key, value) in self.parse_attr_lists()? {
                if key == "label" {
                    self.desc.set_value(first, value);
                }
            }
        }

        Ok(())
    }

    /// `("[" [a_list] "]")*`
    fn parse_attr_lists(&mut self) -> Result<Vec<(String, String)>> {
        let mut attrs = Vec::new();
        while self.eat(&TokenKind::LBracket) {
            loop {
                if self.eat(&TokenKind::RBracket) {
                    break;
                }
                let key = self.expect_id("attribute name")?;
                self.expect(TokenKind::Equals, "'='")?;
                let value = self.expect_id("attribute value")?;
                attrs.push((key, value));
                if !self.eat(&TokenKind::Comma) {
                    self.eat(&TokenKind::Semi);
                }
            }
        }
        Ok(attrs)
    }
}

fn unexpected(token: &Token, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        line: token.line,
        found: token.kind.describe(),
        expected,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Parses DOT text into a graph description.
pub fn parse_str(text: &str) -> Result<GraphDescription> {
    let tokens = tokenize(text)?;
    let desc = Parser::new(tokens).parse_graph()?;
    debug!(
        vertices = desc.vertices.len(),
        edges = desc.edges.len(),
        "parsed graph description"
    );
    Ok(desc)
}

/// Reads and parses a DOT file.
pub fn load_file(path: impl AsRef<Path>) -> Result<GraphDescription> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text)
}
