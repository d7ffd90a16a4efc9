use quickcheck::{Arbitrary, Gen};

use crate::{Delimiter, DelimiterSet};

// Small enough that delimiters show up often; mixes 1- to 4-byte characters.
const ALPHABET: &[char] = &['a', 'b', ',', ';', '=', ' ', 'é', '日', '🦀'];

/// An input string plus literal delimiters drawn from the same alphabet.
#[derive(Debug, Clone)]
pub(crate) struct Case {
    pub input: String,
    pub delimiters: Vec<String>,
    /// Read-ahead chunk size for `ReaderSource`.
    pub chunk_size: usize,
}

impl Case {
    pub fn delimiter_set(&self) -> DelimiterSet {
        self.delimiters
            .iter()
            .map(|d| Delimiter::literal(d.as_str()).expect("non-empty by construction"))
            .collect()
    }
}

fn pick(g: &mut Gen, len: usize) -> String {
    (0..len)
        .map(|_| *g.choose(ALPHABET).expect("alphabet is not empty"))
        .collect()
}

impl Arbitrary for Case {
    fn arbitrary(g: &mut Gen) -> Self {
        let input_len = usize::arbitrary(g) % 48;
        let input = pick(g, input_len);
        let count = usize::arbitrary(g) % 4;
        let delimiters = (0..count)
            .map(|_| {
                let len = 1 + usize::arbitrary(g) % 3;
                pick(g, len)
            })
            .collect();
        let chunk_size = 1 + usize::arbitrary(g) % 8;
        Case {
            input,
            delimiters,
            chunk_size,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chunk_size = self.chunk_size;
        Box::new(
            (self.input.clone(), self.delimiters.clone())
                .shrink()
                .map(move |(input, delimiters)| Case {
                    input,
                    delimiters: delimiters.into_iter().filter(|d| !d.is_empty()).collect(),
                    chunk_size,
                }),
        )
    }
}
