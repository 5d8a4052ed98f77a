use crate::lexer::{self, LexError, Token};
use crate::model::typing::{TypeConstant, TypeTerm, TypeVariable};
use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Clone, Error, PartialEq, Eq, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("syntax error in type term '{input}': {}", .messages.join("; "))]
    Syntax { input: String, messages: Vec<String> },
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// A parsed type term whose variables are still names.
#[derive(Clone, PartialEq, Eq, Debug)]
enum TypeSyntax<'a> {
    Individual,
    Boolean,
    Var(&'a str),
    Function(Box<TypeSyntax<'a>>, Box<TypeSyntax<'a>>),
}

impl<'a> TypeSyntax<'a> {
    fn from_word(word: &'a str) -> Option<Self> {
        match word {
            "i" => Some(Self::Individual),
            "o" => Some(Self::Boolean),
            _ if word.starts_with('t') && word[1..].bytes().all(|b| b.is_ascii_digit()) => Some(Self::Var(word)),
            _ => None,
        }
    }
}

/// `A B C` reads as `((A B) C)`: each further term is an argument type
/// and everything to its left the result type.
fn type_parser<'a>() -> impl Parser<Token<'a>, TypeSyntax<'a>, Error = Simple<Token<'a>>> {
    recursive(|type_parser| {
        let word_parser = select! {Token::Word(w) => w}.try_map(|w, span| {
            TypeSyntax::from_word(w).ok_or_else(|| Simple::custom(span, format!("bad token in type term: '{w}'")))
        });

        let paren_parser = type_parser.delimited_by(just(Token::LeftParen), just(Token::RightParen));

        let atom = word_parser.or(paren_parser);

        atom.clone()
            .then(atom.repeated())
            .foldl(|to, from| TypeSyntax::Function(Box::new(from), Box::new(to)))
    })
    .then_ignore(end())
}

fn describe(error: Simple<Token>) -> String {
    match error.reason() {
        SimpleReason::Custom(message) => message.clone(),
        _ => match error.found() {
            Some(token) => format!("unexpected '{token}' at token {}", error.span().start),
            None => "unexpected end of input".to_owned(),
        },
    }
}

/// Parses type terms, giving every occurrence of a variable name the same
/// [`TypeVariable`] across all terms parsed by this parser.
#[derive(Default, Debug)]
pub struct TypeParser {
    scope: HashMap<String, TypeVariable>,
}

impl TypeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, source: &str) -> Result<TypeTerm> {
        let tokens = lexer::lex(source)?;
        let syntax = type_parser().parse(tokens.as_slice()).map_err(|errors| ParseError::Syntax {
            input: source.to_owned(),
            messages: errors.into_iter().map(describe).collect(),
        })?;
        Ok(self.lower(&syntax))
    }

    /// The variable this parser uses for `name`, if it has seen it.
    pub fn var(&self, name: &str) -> Option<&TypeVariable> {
        self.scope.get(name)
    }

    fn lower(&mut self, syntax: &TypeSyntax) -> TypeTerm {
        match syntax {
            TypeSyntax::Individual => TypeConstant::INDIVIDUAL.into(),
            TypeSyntax::Boolean => TypeConstant::BOOLEAN.into(),
            TypeSyntax::Var(name) => (self.scope.entry((*name).to_owned()))
                .or_insert_with(|| TypeVariable::named(*name))
                .clone()
                .into(),
            TypeSyntax::Function(from, to) => {
                let from = self.lower(from);
                let to = self.lower(to);
                TypeTerm::function(from, to)
            }
        }
    }
}

/// Parses one type term with a parser of its own.
pub fn parse_type(source: &str) -> Result<TypeTerm> {
    TypeParser::new().parse(source)
}
