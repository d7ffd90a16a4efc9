//! Splits SQL read from stdin (or a built-in sample) into words and
//! delimiters, switching delimiter sets inside quoted strings.
//!
//! ```sh
//! RUST_LOG=delimscan=trace cargo run -p delimscan --example sql_words < query.sql
//! ```
#![allow(missing_docs)]

use std::io::{self, Cursor, IsTerminal, Read};

use delimscan::{Delimiter, DelimiterSet, ReaderSource, Scanner, Token};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "SELECT name, 'it''s ok' FROM café WHERE id<>7;";

fn code_delimiters() -> Result<DelimiterSet, delimscan::PatternError> {
    let mut set = DelimiterSet::new();
    set.add(Delimiter::regex(r"\s+")?);
    for op in [",", ";", "(", ")", "'", "=", "<", ">", "<=", ">=", "<>"] {
        set.add(Delimiter::literal(op)?);
    }
    Ok(set)
}

fn quoted_delimiters() -> Result<DelimiterSet, delimscan::PatternError> {
    ["'", "''"].into_iter().map(Delimiter::literal).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut input = Vec::new();
    if io::stdin().is_terminal() {
        input.extend_from_slice(SAMPLE.as_bytes());
    } else {
        io::stdin().read_to_end(&mut input)?;
    }

    let code = code_delimiters()?;
    let quoted = quoted_delimiters()?;
    let mut in_string = false;
    let mut scanner = Scanner::new(ReaderSource::new(Cursor::new(input))?);

    loop {
        let delimiters = if in_string { &quoted } else { &code };
        match scanner.read(delimiters)? {
            Token::EndOfInput => break,
            Token::Word(lexeme) => println!("{:>6}  word       {:?}", lexeme.position, lexeme.text),
            Token::Delimiter(lexeme) => {
                println!("{:>6}  delimiter  {:?}", lexeme.position, lexeme.text);
                if lexeme.text == "'" {
                    in_string = !in_string;
                }
            }
        }
    }
    Ok(())
}
