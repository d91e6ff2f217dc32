//! Shell-like tokenization of the free-form extra-arguments string

use crate::error::ArgumentError;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between tokens
    Blank,
    /// Inside an unquoted word
    Word,
    /// Inside '...' (opened at the stored byte offset)
    Single(usize),
    /// Inside "..." (opened at the stored byte offset)
    Double(usize),
}

/// Split `input` into arguments using POSIX shell quoting rules.
///
/// Whitespace separates tokens. Single quotes are literal. Double quotes group
/// and honour `\"`, `\\`, `\$` and `` \` `` escapes; any other backslash is kept.
/// Outside quotes a backslash escapes the next character. Adjacent quoted and
/// unquoted pieces join into one token, and `""` yields an empty token.
pub fn split_arguments(input: &str) -> Result<Vec<String>, ArgumentError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = State::Blank;
    let mut chars = input.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match state {
            State::Blank | State::Word => match c {
                c if c.is_whitespace() => {
                    if state == State::Word {
                        tokens.push(std::mem::take(&mut current));
                        state = State::Blank;
                    }
                }
                '\'' => state = State::Single(pos),
                '"' => state = State::Double(pos),
                '\\' => match chars.next() {
                    Some((_, escaped)) => {
                        current.push(escaped);
                        state = State::Word;
                    }
                    None => return Err(ArgumentError::TrailingEscape),
                },
                c => {
                    current.push(c);
                    state = State::Word;
                }
            },
            State::Single(_) => match c {
                '\'' => state = State::Word,
                c => current.push(c),
            },
            State::Double(_) => match c {
                '"' => state = State::Word,
                '\\' => match chars.peek() {
                    Some(&(_, next)) if matches!(next, '"' | '\\' | '$' | '`') => {
                        current.push(next);
                        chars.next();
                    }
                    Some(_) => current.push('\\'),
                    None => return Err(ArgumentError::TrailingEscape),
                },
                c => current.push(c),
            },
        }
    }

    match state {
        State::Single(position) => Err(ArgumentError::UnbalancedQuote {
            quote: '\'',
            position,
        }),
        State::Double(position) => Err(ArgumentError::UnbalancedQuote {
            quote: '"',
            position,
        }),
        State::Word => {
            tokens.push(current);
            Ok(tokens)
        }
        State::Blank => Ok(tokens),
    }
}
