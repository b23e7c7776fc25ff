use std::fmt;

use logos::Logos;
use natroot_util::lexer::lex_block_comment;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
  #[token("root")]
  Root,
  #[token("(")]
  OpenParen,
  #[token(")")]
  CloseParen,
  #[token(",")]
  Comma,
  #[token("=")]
  Eq,

  #[regex(r"\d[\d\w]*")]
  Num,

  #[regex("//.*", logos::skip)]
  #[token("/*", lex_block_comment)]
  Skip,
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Token::Root => "`root`",
      Token::OpenParen => "`(`",
      Token::CloseParen => "`)`",
      Token::Comma => "`,`",
      Token::Eq => "`=`",
      Token::Num => "a number",
      Token::Skip => "a comment",
    })
  }
}
