use crate::domain::model::Samples;
use crate::domain::ports::InputSource;
use crate::utils::error::{BenchError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::Path;

/// Reads whitespace-separated `i32` tokens from any buffered reader.
pub struct ReaderInput<R: BufRead> {
    reader: R,
    name: String,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
        }
    }
}

impl ReaderInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), "stdin")
    }
}

impl ReaderInput<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), path.display().to_string()))
    }
}

impl<R: BufRead> InputSource for ReaderInput<R> {
    fn describe(&self) -> &str {
        &self.name
    }

    fn read_samples(&mut self, expected: usize) -> Result<Samples> {
        let mut values: Vec<i32> = Vec::new();
        values
            .try_reserve_exact(expected)
            .map_err(|source| BenchError::AllocationError {
                requested: expected,
                source,
            })?;

        let mut buf = Vec::new();
        while values.len() < expected {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(BenchError::ShortInputError {
                    expected,
                    found: values.len(),
                });
            }

            let line = std::str::from_utf8(&buf).map_err(|source| BenchError::EncodingError {
                index: values.len(),
                source,
            })?;

            for token in line.split_whitespace() {
                if values.len() == expected {
                    break;
                }
                let value = token.parse::<i32>().map_err(|source| BenchError::ParseError {
                    index: values.len(),
                    token: token.to_string(),
                    source,
                })?;
                values.push(value);
            }
        }

        Ok(Samples::from(values))
    }
}
