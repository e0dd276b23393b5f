//! Token kinds and the fixed lookup tables behind them.

use std::fmt;

/// The coarse classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Separator,
    Operator,
    Literal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Separator => "separator",
            TokenKind::Operator => "operator",
            TokenKind::Literal => "literal",
        };
        f.write_str(text)
    }
}

/// Reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Exit,
    Let,
}

impl Keyword {
    /// Look up a scanned word in the keyword table.
    pub fn from_text(text: &str) -> Option<Keyword> {
        match text {
            "exit" => Some(Keyword::Exit),
            "let" => Some(Keyword::Let),
            _ => None,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Keyword::Exit => "exit",
            Keyword::Let => "let",
        }
    }
}

/// Single-character punctuation that groups or terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Semicolon,
}

impl Separator {
    pub fn from_char(ch: char) -> Option<Separator> {
        match ch {
            '(' => Some(Separator::OpenParen),
            ')' => Some(Separator::CloseParen),
            '[' => Some(Separator::OpenBracket),
            ']' => Some(Separator::CloseBracket),
            '{' => Some(Separator::OpenBrace),
            '}' => Some(Separator::CloseBrace),
            ';' => Some(Separator::Semicolon),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Separator::OpenParen => '(',
            Separator::CloseParen => ')',
            Separator::OpenBracket => '[',
            Separator::CloseBracket => ']',
            Separator::OpenBrace => '{',
            Separator::CloseBrace => '}',
            Separator::Semicolon => ';',
        }
    }
}

/// Single-character operators. Only `+ - * / =` take part in the grammar;
/// `%` and `^` are scanned so that they surface as parse errors, not lex errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Equals,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            '%' => Some(Operator::Percent),
            '^' => Some(Operator::Caret),
            '=' => Some(Operator::Equals),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
            Operator::Percent => '%',
            Operator::Caret => '^',
            Operator::Equals => '=',
        }
    }
}
