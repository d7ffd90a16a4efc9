#![no_main]
use std::io::Cursor;

use arbitrary::Arbitrary;
use delimscan::{
    CharSource, Delimiter, DelimiterSet, ReaderSource, Scanner, ScannerOptions, StrSource, Token,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    literals: Vec<String>,
    regexes: Vec<String>,
    chunk_size: u8,
}

fn options() -> ScannerOptions {
    ScannerOptions {
        panic_on_error: true,
        ..Default::default()
    }
}

fn scan_all<S: CharSource>(source: S, delimiters: &DelimiterSet) -> Vec<Token> {
    let mut scanner = Scanner::with_options(source, options());
    let mut tokens = Vec::new();
    loop {
        let peeked = scanner.peek(delimiters).unwrap();
        let token = scanner.read(delimiters).unwrap();
        assert_eq!(peeked, token, "peek disagrees with read");
        if token.is_end() {
            return tokens;
        }
        tokens.push(token);
    }
}

fuzz_target!(|input: Input| {
    let mut delimiters: DelimiterSet = input
        .literals
        .iter()
        .take(8)
        .filter_map(|l| Delimiter::literal(l.as_str()).ok())
        .collect();
    // Malformed or oversized expressions are simply skipped.
    delimiters.extend(
        input
            .regexes
            .iter()
            .take(2)
            .filter(|r| r.len() <= 16)
            .filter_map(|r| Delimiter::regex(r).ok()),
    );

    let tokens = scan_all(StrSource::new(&input.text), &delimiters);

    let mut rebuilt = String::new();
    for token in &tokens {
        let lexeme = token.lexeme().expect("only words and delimiters are collected");
        assert!(!lexeme.text.is_empty(), "empty token");
        assert_eq!(lexeme.position, rebuilt.len() as u64, "token out of place");
        rebuilt.push_str(&lexeme.text);
    }
    assert_eq!(rebuilt, input.text, "round trip");

    let chunk_size = usize::from(input.chunk_size.max(1));
    let source = ReaderSource::with_chunk_size(Cursor::new(input.text.as_bytes()), chunk_size)
        .expect("cursor reports its position");
    assert_eq!(scan_all(source, &delimiters), tokens, "reader disagrees");
});
