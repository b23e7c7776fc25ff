use std::{error::Error, fmt};

use natroot_util::{
  nat::Nat,
  parser::{Parser, ParserState},
};

use crate::{
  lexer::Token,
  table::{Row, Table},
};

/// Parses tables of the form
///
/// ```text
/// // comments are allowed
/// root(13, 2) = 3
/// root(0x1_0000, 4) = 16
/// ```
pub struct TableParser<'src> {
  pub state: ParserState<'src, Token>,
}

#[derive(Debug, Clone)]
pub enum ParseError<'src> {
  LexError,
  /// `found` is `None` at the end of the input.
  UnexpectedToken { expected: Token, found: Option<&'src str> },
  InvalidNum(&'src str),
  InvalidDegree(&'src str),
}

type Parse<'src, T = ()> = Result<T, ParseError<'src>>;

impl<'src> Parser<'src> for TableParser<'src> {
  type Token = Token;
  type Error = ParseError<'src>;

  fn state(&mut self) -> &mut ParserState<'src, Self::Token> {
    &mut self.state
  }

  fn lex_error(&self) -> Self::Error {
    ParseError::LexError
  }

  fn unexpected_error(&self, expected: Token) -> ParseError<'src> {
    let found = self.state.token.map(|_| self.state.lexer.slice());
    ParseError::UnexpectedToken { expected, found }
  }
}

impl<'src> TableParser<'src> {
  pub fn parse(src: &'src str) -> Parse<'src, Table> {
    let mut parser = TableParser { state: ParserState::new(src) };
    parser.bump()?;
    let mut rows = Vec::new();
    while !parser.at_end() {
      rows.push(parser.parse_row()?);
    }
    Ok(Table { rows })
  }

  fn parse_row(&mut self) -> Parse<'src, Row> {
    self.expect(Token::Root)?;
    self.expect(Token::OpenParen)?;
    let number = self.parse_nat()?;
    self.expect(Token::Comma)?;
    let degree = self.parse_degree()?;
    self.expect(Token::CloseParen)?;
    self.expect(Token::Eq)?;
    let expected = self.parse_nat()?;
    Ok(Row { number, degree, expected })
  }

  fn parse_nat(&mut self) -> Parse<'src, Nat> {
    let token = self.expect(Token::Num)?;
    Nat::from_literal(token).ok_or(ParseError::InvalidNum(token))
  }

  fn parse_degree(&mut self) -> Parse<'src, u32> {
    let token = self.expect(Token::Num)?;
    Nat::from_literal(token)
      .and_then(|degree| degree.as_u32())
      .filter(|&degree| degree >= 2)
      .ok_or(ParseError::InvalidDegree(token))
  }
}

impl fmt::Display for ParseError<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParseError::LexError => f.write_str("unrecognized input"),
      ParseError::UnexpectedToken { expected, found } => {
        write!(f, "expected {expected}, found ")?;
        match found {
          Some(found) => write!(f, "`{found}`"),
          None => f.write_str("end of input"),
        }
      }
      ParseError::InvalidNum(num) => write!(f, "invalid number `{num}`"),
      ParseError::InvalidDegree(num) => {
        write!(f, "invalid root degree `{num}`; must be an integer of at least 2")
      }
    }
  }
}

impl Error for ParseError<'_> {}

#[cfg(test)]
mod tests {
  use super::*;

  fn row(number: &str, degree: u32, expected: &str) -> Row {
    Row { number: number.parse().unwrap(), degree, expected: expected.parse().unwrap() }
  }

  #[test]
  fn rows() {
    let table = TableParser::parse(
      "
        // line comment
        root(13, 2) = 3
        root( 4096 ,3 )=16 /* block /* nested */ comment */ root(0x1_0000, 0b100) = 0o20
        root(170_141_183_460_469_231_731_687_303_715_884_105_727, 6) = 2353973
      ",
    )
    .unwrap();
    assert_eq!(
      table.rows,
      [
        row("13", 2, "3"),
        row("4096", 3, "16"),
        row("65536", 4, "16"),
        row("170141183460469231731687303715884105727", 6, "2353973"),
      ]
    );
  }

  #[test]
  fn empty() {
    assert!(TableParser::parse("").unwrap().rows.is_empty());
    assert!(TableParser::parse("  // nothing here\n").unwrap().rows.is_empty());
  }

  #[test]
  fn degree_below_two() {
    let err = TableParser::parse("root(8, 1) = 8").unwrap_err();
    assert!(matches!(err, ParseError::InvalidDegree("1")));
    assert_eq!(err.to_string(), "invalid root degree `1`; must be an integer of at least 2");
  }

  #[test]
  fn degree_too_wide() {
    let err = TableParser::parse("root(8, 4294967296) = 1").unwrap_err();
    assert!(matches!(err, ParseError::InvalidDegree("4294967296")));
  }

  #[test]
  fn invalid_num() {
    let err = TableParser::parse("root(12ab, 2) = 3").unwrap_err();
    assert!(matches!(err, ParseError::InvalidNum("12ab")));
    let err = TableParser::parse("root(0x_, 2) = 3").unwrap_err();
    assert!(matches!(err, ParseError::InvalidNum("0x_")));
  }

  #[test]
  fn unexpected() {
    let err = TableParser::parse("root(13, 2) 3").unwrap_err();
    assert!(matches!(
      err,
      ParseError::UnexpectedToken { expected: Token::Eq, found: Some("3") }
    ));
    assert_eq!(err.to_string(), "expected `=`, found `3`");
    let err = TableParser::parse("root(13, 2) =  \n").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { expected: Token::Num, found: None }));
    assert_eq!(err.to_string(), "expected a number, found end of input");
    let err = TableParser::parse("13").unwrap_err();
    assert_eq!(err.to_string(), "expected `root`, found `13`");
  }

  #[test]
  fn block_comments() {
    let table = TableParser::parse("/* a /* b */ root(1, 2) = 0 */ root(4, 2) = 2").unwrap();
    assert_eq!(table.rows, [row("4", 2, "2")]);
    let src = "root(4, 2) = 2 /* unterminated /* nested */ root(9, 2) = 3";
    let table = TableParser::parse(src).unwrap();
    assert_eq!(table.rows, [row("4", 2, "2")]);
  }

  #[test]
  fn lex_error() {
    assert!(matches!(TableParser::parse("root(-1, 2) = 0"), Err(ParseError::LexError)));
  }
}
