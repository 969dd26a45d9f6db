use crate::error::DatasetError;
use crate::game_visitor::GameVisitor;
use crate::record::GameRecord;
use pgn_reader::BufferedReader;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::mem;
use std::path::Path;
use tracing::debug;

/// Blank lines that close a record: one after the headers, one after the movetext
const BLANK_LINES_PER_RECORD: usize = 2;

/// Lazily splits a stream of concatenated PGN games into parsed records.
///
/// A record ends at its second blank line. Trailing content that never
/// reaches that point is dropped without being parsed.
pub struct GameExtractor<R> {
    reader: R,
    buffer: String,
    line: String,
    blank_lines: usize,
    finished: bool,
}

impl<R: BufRead> GameExtractor<R> {
    pub fn new(reader: R) -> Self {
        GameExtractor {
            reader,
            buffer: String::new(),
            line: String::new(),
            blank_lines: 0,
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for GameExtractor<R> {
    type Item = Result<GameRecord, DatasetError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => {
                    self.finished = true;
                    if !self.buffer.trim().is_empty() {
                        debug!(
                            bytes = self.buffer.len(),
                            "dropping unterminated record at end of input"
                        );
                    }
                }
                Ok(_) => {
                    self.buffer.push_str(&self.line);
                    if self.line.trim().is_empty() {
                        self.blank_lines += 1;
                    }

                    if self.blank_lines == BLANK_LINES_PER_RECORD {
                        self.blank_lines = 0;
                        let record = mem::take(&mut self.buffer);

                        if record.trim().is_empty() {
                            // only blank lines, nothing to parse
                            continue;
                        }
                        return Some(parse_record(&record));
                    }
                }
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err.into()));
                }
            }
        }

        None
    }
}

/// Splits a text stream into games, see [`GameExtractor`]
pub fn extract_games<R: BufRead>(reader: R) -> GameExtractor<R> {
    GameExtractor::new(reader)
}

/// Opens a .pgn or .pgn.zst file and extracts its games
pub fn open_games<P: AsRef<Path>>(path: P) -> io::Result<GameExtractor<Box<dyn BufRead>>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    // decompress if necessary
    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "zst") {
        Box::new(zstd::Decoder::new(file)?)
    } else {
        Box::new(file)
    };

    Ok(extract_games(Box::new(BufReader::new(reader))))
}

/// Parses the first game of a single PGN record
pub fn parse_record(text: &str) -> Result<GameRecord, DatasetError> {
    let mut reader = BufferedReader::new(text.as_bytes());
    let mut visitor = GameVisitor::new();

    match reader.read_game(&mut visitor)? {
        Some(record) => record,
        None => Err(DatasetError::MalformedRecord("no game found".to_string())),
    }
}
