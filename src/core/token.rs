//! Printable values passed to an emission call
//!
//! A token sequence is conceptually `key, value, key, value, ...`. Every token
//! renders through its [`Display`](fmt::Display) impl, which is the single
//! textual representation formatters rely on.

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

/// A single printable value in a token sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// An absent optional value
    None,
    /// A value rendered through its `Display` impl
    Text(String),
    /// A record or sequence rendered through its `Debug` impl
    Composite(String),
}

impl Token {
    /// Capture any `Display` value
    pub fn display(value: &impl fmt::Display) -> Self {
        Token::Text(value.to_string())
    }

    /// Capture any `Debug` value, e.g. a struct, tuple or collection
    ///
    /// The nested representation is kept verbatim; it is never re-split into
    /// key/value pairs.
    ///
    /// ```
    /// use readable::Token;
    ///
    /// let token = Token::debug(&vec![1, 2, 3]);
    /// assert_eq!(token.to_string(), "[1, 2, 3]");
    /// ```
    pub fn debug(value: &impl fmt::Debug) -> Self {
        Token::Composite(format!("{:?}", value))
    }

    /// Rendered text, borrowed when the token already holds a string
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Token::Str(s) | Token::Text(s) | Token::Composite(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// `true` for tokens that render as nothing at all
    pub fn is_blank(&self) -> bool {
        match self {
            Token::None => true,
            Token::Str(s) | Token::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Str(s) | Token::Text(s) | Token::Composite(s) => f.write_str(s),
            Token::Int(i) => write!(f, "{}", i),
            Token::Uint(u) => write!(f, "{}", u),
            Token::Float(fl) => write!(f, "{}", fl),
            Token::Bool(b) => write!(f, "{}", b),
            Token::Char(c) => write!(f, "{}", c),
            Token::None => f.write_str("<none>"),
        }
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Str(s)
    }
}

impl From<&String> for Token {
    fn from(s: &String) -> Self {
        Token::Str(s.clone())
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Str(s.to_string())
    }
}

impl From<Cow<'_, str>> for Token {
    fn from(s: Cow<'_, str>) -> Self {
        Token::Str(s.into_owned())
    }
}

impl From<&Token> for Token {
    fn from(t: &Token) -> Self {
        t.clone()
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Token {
            fn from(i: $t) -> Self {
                Token::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Token {
            fn from(u: $t) -> Self {
                Token::Uint(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<i128> for Token {
    fn from(i: i128) -> Self {
        Token::Text(i.to_string())
    }
}

impl From<u128> for Token {
    fn from(u: u128) -> Self {
        Token::Text(u.to_string())
    }
}

impl From<f32> for Token {
    fn from(f: f32) -> Self {
        Token::Float(f as f64)
    }
}

impl From<f64> for Token {
    fn from(f: f64) -> Self {
        Token::Float(f)
    }
}

impl From<bool> for Token {
    fn from(b: bool) -> Self {
        Token::Bool(b)
    }
}

impl From<char> for Token {
    fn from(c: char) -> Self {
        Token::Char(c)
    }
}

impl From<Duration> for Token {
    fn from(d: Duration) -> Self {
        Token::Composite(format!("{:?}", d))
    }
}

impl From<fmt::Arguments<'_>> for Token {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Token::Text(args.to_string())
    }
}

impl<T: Into<Token>> From<Option<T>> for Token {
    fn from(value: Option<T>) -> Self {
        value.map_or(Token::None, Into::into)
    }
}
