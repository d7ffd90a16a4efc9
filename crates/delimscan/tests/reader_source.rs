#![allow(missing_docs)]
use std::io::{self, Cursor, Read, Seek, SeekFrom};

use delimscan::{
    CharSource, Delimiter, DelimiterSet, Desync, ReaderSource, ScanError, Scanner, SourceError,
    Token,
};

const SQL: &str = "SELECT naïve, 名前 FROM café WHERE note<>'🦀' AND x<=1;";

fn sql_delimiters() -> DelimiterSet {
    let mut set = DelimiterSet::new();
    set.add(Delimiter::regex(r"\s+").unwrap());
    for op in [",", ";", "'", "<", "<=", "<>", "="] {
        set.add(Delimiter::literal(op).unwrap());
    }
    set
}

fn texts<S: CharSource>(scanner: &mut Scanner<S>, delimiters: &DelimiterSet) -> Vec<String> {
    scanner
        .tokens(delimiters)
        .map(|t| t.unwrap().text().unwrap().to_owned())
        .collect()
}

/// Hands out at most one byte per call and reports `Interrupted` every
/// other call.
struct Trickle<R> {
    inner: R,
    interrupt: bool,
}

impl<R: Read> Read for Trickle<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::ErrorKind::Interrupted.into());
        }
        let len = buf.len().min(1);
        self.inner.read(&mut buf[..len])
    }
}

impl<R: Seek> Seek for Trickle<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// Fails every read.
struct Broken;

impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

impl Seek for Broken {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Ok(0)
    }
}

#[test]
fn multibyte_input_round_trips_for_every_chunk_size() {
    let delimiters = sql_delimiters();
    let expected = texts(&mut Scanner::from(SQL), &delimiters);
    assert_eq!(
        expected,
        [
            "SELECT", " ", "naïve", ",", " ", "名前", " ", "FROM", " ", "café", " ", "WHERE",
            " ", "note", "<>", "'", "🦀", "'", " ", "AND", " ", "x", "<=", "1", ";",
        ]
    );

    for chunk_size in [1, 2, 3, 5, 7, 64, 8192] {
        let source = ReaderSource::with_chunk_size(Cursor::new(SQL), chunk_size).unwrap();
        let mut scanner = Scanner::new(source);
        let tokens = texts(&mut scanner, &delimiters);
        assert_eq!(tokens, expected, "chunk size {chunk_size}");
        assert_eq!(tokens.concat(), SQL);
        assert_eq!(scanner.position(), SQL.len() as u64);
    }
}

#[test]
fn peek_discards_read_ahead() {
    let delimiters = sql_delimiters();
    let source = ReaderSource::with_chunk_size(Cursor::new(SQL), 3).unwrap();
    let mut scanner = Scanner::new(source);
    let mut seen = Vec::new();
    loop {
        let peeked = scanner.peek(&delimiters).unwrap();
        let read = scanner.read(&delimiters).unwrap();
        assert_eq!(peeked, read);
        if read.is_end() {
            break;
        }
        seen.push(read);
    }
    let rebuilt: String = seen.iter().filter_map(Token::text).collect();
    assert_eq!(rebuilt, SQL);
}

#[test]
fn short_and_interrupted_reads() {
    let delimiters = sql_delimiters();
    let reader = Trickle {
        inner: Cursor::new(SQL),
        interrupt: false,
    };
    let mut scanner = Scanner::new(ReaderSource::new(reader).unwrap());
    assert_eq!(texts(&mut scanner, &delimiters).concat(), SQL);
}

#[test]
fn misaligned_source_is_a_desync() {
    let delimiters = sql_delimiters();
    let mut scanner = Scanner::new(ReaderSource::new(Cursor::new("名前")).unwrap());
    scanner.get_mut().seek(1).unwrap();
    let err = scanner.read(&delimiters).unwrap_err();
    assert!(matches!(
        err,
        ScanError::Desync(Desync::Source { position: 1 })
    ));
}

#[test]
fn io_errors_surface_as_source_errors() {
    let delimiters = sql_delimiters();
    let mut scanner = Scanner::new(ReaderSource::new(Broken).unwrap());
    let err = scanner.read(&delimiters).unwrap_err();
    assert!(matches!(err, ScanError::Source(SourceError::Io(_))));
}

#[test]
fn invalid_utf8_is_reported_with_its_offset() {
    let delimiters = sql_delimiters();
    let bytes = b"ab,\xFFcd".to_vec();
    let mut scanner = Scanner::new(ReaderSource::new(Cursor::new(bytes)).unwrap());
    assert_eq!(scanner.read(&delimiters).unwrap().text(), Some("ab"));
    assert_eq!(scanner.read(&delimiters).unwrap_err().to_string(), "source error: invalid UTF-8 at byte 3");
}
