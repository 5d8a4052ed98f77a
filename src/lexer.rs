use logos::Logos;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Default, Clone, PartialEq, Eq, Debug)]
pub enum LexErrorKind {
    #[default]
    #[error("unknown character")]
    UnknownCharacter,
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("error tokenising lexeme '{lexeme}' at {index}")]
pub struct LexError {
    lexeme: String,
    index: usize,
    source: LexErrorKind,
}

#[derive(Logos, Hash, PartialEq, Eq, Clone, Copy, Debug)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
pub enum Token<'source> {
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[regex(r"[A-Za-z0-9]+", |lex| lex.slice())]
    Word(&'source str),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeftParen => "(".fmt(f),
            Self::RightParen => ")".fmt(f),
            Self::Word(s) => s.fmt(f),
        }
    }
}

pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        tokens.push(token.map_err(|source| LexError {
            lexeme: lexer.slice().to_owned(),
            index: lexer.span().start,
            source,
        })?);
    }
    Ok(tokens)
}
