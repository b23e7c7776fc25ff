use std::fmt::Debug;

use logos::{Lexer, Logos};

/// A token kind lexed from `str` source with no extra lexer state.
pub trait Token: for<'src> Logos<'src, Source = str, Extras = ()> + Copy + Eq + Debug {}

impl<T> Token for T where T: for<'src> Logos<'src, Source = str, Extras = ()> + Copy + Eq + Debug {}

/// Skips a `/* */` comment whose opening delimiter has just been lexed.
/// Comments nest; an unterminated comment runs to the end of the source.
pub fn lex_block_comment<'src, T: Logos<'src, Source = str>>(
  lexer: &mut Lexer<'src, T>,
) -> logos::Skip {
  let rest = lexer.remainder().as_bytes();
  let mut depth = 1;
  let mut len = 0;
  while depth > 0 && len < rest.len() {
    match &rest[len..] {
      [b'/', b'*', ..] => {
        depth += 1;
        len += 2;
      }
      [b'*', b'/', ..] => {
        depth -= 1;
        len += 2;
      }
      _ => len += 1,
    }
  }
  // delimiters are ascii, so `len` is always on a char boundary
  lexer.bump(len);
  logos::Skip
}
