//! Stream insertion and extraction.
//!
//! Writing emits the active alternative through its own [`Display`]; no tag
//! is written. Reading parses one whitespace-delimited token with the
//! [`FromStr`] of the alternative that is *already* active and never picks a
//! different alternative. A value therefore only round-trips when the reader
//! has the same alternative selected as the writer.
//!
//! The whole token must parse. A `char` alternative therefore accepts only
//! one-character tokens, and `"42abc"` is an error for an integer
//! alternative rather than `42` followed by `abc` left in the stream.
//!
//! [`Display`]: core::fmt::Display
//!
//! ```rust
//! use std::io::Cursor;
//! use evariant::Variant;
//!
//! let mut v: Variant![i32, String] = Variant::new(0);
//! v.read_from(&mut Cursor::new("  42 rest")).unwrap();
//! assert_eq!(v.get::<i32, _>(), Ok(&42));
//!
//! let mut out = Vec::new();
//! v.write_to(&mut out).unwrap();
//! assert_eq!(out, b"42");
//! ```

use core::str::FromStr;
use std::{
    boxed::Box,
    error::Error as StdError,
    io::{self, BufRead, Write},
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    error::ReadError,
    sum::{
        derive::SumDisplay,
        repr::{Nil, SumList},
    },
    variant::Variant,
};

/// Type lists every element of which can be parsed from a token.
pub trait SumParse: SumList {
    #[doc(hidden)]
    unsafe fn parse_into(this: &mut Self::Repr, tag: u8, token: &str) -> Result<(), ReadError>;
}

impl SumParse for () {
    unsafe fn parse_into(_: &mut Nil, tag: u8, _: &str) -> Result<(), ReadError> {
        unreachable!("tag {tag} is out of range of the sum")
    }
}

impl<Head, Tail> SumParse for (Head, Tail)
where
    Head: FromStr,
    Head::Err: StdError + Send + Sync + 'static,
    Tail: SumParse,
{
    unsafe fn parse_into(this: &mut Self::Repr, tag: u8, token: &str) -> Result<(), ReadError> {
        if tag != 0 {
            return unsafe { Tail::parse_into(&mut this.next, tag - 1, token) };
        }
        match token.parse::<Head>() {
            Ok(value) => {
                let slot = unsafe { &mut this.data };
                **slot = value;
                Ok(())
            }
            Err(source) => Err(ReadError::Parse {
                ty: core::any::type_name::<Head>(),
                input: token.to_string(),
                source: Box::new(source),
            }),
        }
    }
}

/// Reads one token, skipping leading ASCII whitespace.
///
/// The delimiter that ends the token is left in the reader.
fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

impl<S: SumList> Variant<S> {
    /// Writes the active alternative with its [`Display`](core::fmt::Display)
    /// implementation.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()>
    where
        S: SumDisplay,
    {
        write!(writer, "{self}")
    }

    /// Reads one whitespace-delimited token into the active alternative.
    ///
    /// On failure the active value is left unchanged.
    pub fn read_from<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> Result<(), ReadError>
    where
        S: SumParse,
    {
        match read_token(reader)? {
            Some(token) => self.parse_active(&token),
            None => {
                tracing::trace!(active = self.index(), "stream ended before a token");
                Err(ReadError::Eof)
            }
        }
    }

    /// Parses `token` with the active alternative's [`FromStr`].
    pub fn parse_active(&mut self, token: &str) -> Result<(), ReadError>
    where
        S: SumParse,
    {
        let sum = self.as_sum_mut();
        let result = unsafe { S::parse_into(&mut sum.data, sum.tag, token) };
        if let Err(err) = &result {
            tracing::trace!(active = self.index(), %err, "failed to parse into active alternative");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufReader, Cursor, Read},
        string::{String, ToString},
        vec::Vec,
    };

    use assert_matches::assert_matches;

    use super::*;

    type Ev = crate::Variant![i32, f64, String];

    #[test]
    fn write_has_no_tag() {
        let mut out = Vec::new();
        Ev::new("ostream test".to_string()).write_to(&mut out).unwrap();
        Ev::new(7).write_to(&mut out).unwrap();
        assert_eq!(out, b"ostream test7");
    }

    #[test]
    fn read_into_active_string() {
        let mut ev = Ev::new(String::new());
        ev.read_from(&mut Cursor::new("istream_test")).unwrap();
        assert_eq!(ev.get::<String, _>().map(String::as_str), Ok("istream_test"));
    }

    #[test]
    fn round_trip_with_same_alternative() {
        let original = Ev::new(2.75);
        let mut out = Vec::new();
        original.write_to(&mut out).unwrap();

        let mut fresh = Ev::new(0.0);
        fresh.read_from(&mut out.as_slice()).unwrap();
        assert_eq!(fresh, original);
    }

    #[test]
    fn reads_with_the_active_alternative_rules() {
        let mut out = Vec::new();
        Ev::new(2.75).write_to(&mut out).unwrap();

        let mut as_text = Ev::new(String::new());
        as_text.read_from(&mut out.as_slice()).unwrap();
        assert_eq!(as_text.index(), 2);
        assert_eq!(as_text.to::<String>(), "2.75");

        let mut as_int = Ev::new(1);
        let err = as_int.read_from(&mut out.as_slice()).unwrap_err();
        assert_matches!(err, ReadError::Parse { ty: "i32", ref input, .. } if input == "2.75");
        assert_eq!(as_int.get::<i32, _>(), Ok(&1));
    }

    #[test]
    fn tokens_are_whitespace_delimited() {
        let mut reader = Cursor::new("  first\n\tsecond  ");
        let mut ev = Ev::new(String::new());

        ev.read_from(&mut reader).unwrap();
        assert_eq!(ev.to_string(), "first");
        ev.read_from(&mut reader).unwrap();
        assert_eq!(ev.to_string(), "second");
        assert_matches!(ev.read_from(&mut reader), Err(ReadError::Eof));

        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert!(rest.is_empty());
    }

    #[test]
    fn delimiter_stays_in_the_reader() {
        let mut reader = BufReader::with_capacity(2, Cursor::new("abcdef ghi"));
        let mut ev = Ev::new(String::new());
        ev.read_from(&mut reader).unwrap();
        assert_eq!(ev.to_string(), "abcdef");

        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " ghi");
    }

    #[test]
    fn whole_token_must_parse() {
        let mut reader = Cursor::new("42abc xy");
        let mut ev = Ev::new(0);
        let err = ev.read_from(&mut reader).unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(ev.get::<i32, _>(), Ok(&0));

        let mut c: crate::Variant![char, i32] = crate::Variant::new('a');
        assert_matches!(c.read_from(&mut reader), Err(ReadError::Parse { ty: "char", .. }));
        c.parse_active("z").unwrap();
        assert_eq!(c.get::<char, _>(), Ok(&'z'));
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let mut ev = Ev::new(String::new());
        let err = ev.read_from(&mut &[0xffu8, 0xfe][..]).unwrap_err();
        assert_matches!(err, ReadError::Io(ref e) if e.kind() == io::ErrorKind::InvalidData);
    }
}
