use logos::Lexer;

use crate::lexer::Token;

pub struct ParserState<'src, T: Token> {
  pub lexer: Lexer<'src, T>,
  /// The current token; `None` once the source is exhausted.
  pub token: Option<T>,
}

impl<'src, T: Token> ParserState<'src, T> {
  pub fn new(src: &'src str) -> Self {
    ParserState { lexer: T::lexer(src), token: None }
  }
}

/// A recursive-descent cursor over a token stream.
pub trait Parser<'src> {
  type Token: Token;
  type Error;

  fn state(&mut self) -> &mut ParserState<'src, Self::Token>;

  fn lex_error(&self) -> Self::Error;

  /// The error for finding something other than `expected` at the current
  /// token.
  fn unexpected_error(&self, expected: Self::Token) -> Self::Error;

  fn bump(&mut self) -> Result<(), Self::Error> {
    let token = match self.state().lexer.next() {
      None => None,
      Some(Ok(token)) => Some(token),
      Some(Err(_)) => return Err(self.lex_error()),
    };
    self.state().token = token;
    Ok(())
  }

  fn at_end(&mut self) -> bool {
    self.state().token.is_none()
  }

  /// Consumes a token of kind `kind`, returning its source text.
  fn expect(&mut self, kind: Self::Token) -> Result<&'src str, Self::Error> {
    if self.state().token != Some(kind) {
      return Err(self.unexpected_error(kind));
    }
    let token = self.state().lexer.slice();
    self.bump()?;
    Ok(token)
  }
}
