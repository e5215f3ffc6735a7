use crate::board::{Board, ParseError};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for puzzle loading operations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error when reading from file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Missing or malformed size and count header
    #[error("Invalid header: {0}")]
    Header(String),
    /// Fewer tiles than the header announces
    #[error("Expected {expected} tiles, found {found}")]
    Truncated { expected: usize, found: usize },
    /// Tiles that do not form a valid board
    #[error("Invalid board: {0}")]
    Board(#[from] ParseError),
}

/// A wriggler puzzle as written in a puzzle file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub width: usize,
    pub height: usize,
    pub wriggler_count: usize,
    /// Tile characters in row-major order
    pub cells: Vec<char>,
}

impl Puzzle {
    /// Parse a puzzle description.
    ///
    /// The format is:
    /// - width and height
    /// - the number of wrigglers
    /// - `width * height` tile characters in row-major order
    ///
    /// Whitespace separates the three numbers and is otherwise ignored, so
    /// tiles may be written one per token or packed together. Anything after
    /// the last tile is ignored.
    pub fn from_text(contents: &str) -> Result<Self, LoadError> {
        let mut tokens = contents.split_whitespace();
        let width = Self::header_value(tokens.next(), "width")?;
        let height = Self::header_value(tokens.next(), "height")?;
        let wriggler_count = Self::header_value(tokens.next(), "wriggler count")?;

        let expected = width
            .checked_mul(height)
            .ok_or_else(|| LoadError::Header(format!("board {}x{} is too large", width, height)))?;
        let cells: Vec<char> = tokens.flat_map(str::chars).take(expected).collect();
        if cells.len() < expected {
            return Err(LoadError::Truncated {
                expected,
                found: cells.len(),
            });
        }

        Ok(Puzzle {
            width,
            height,
            wriggler_count,
            cells,
        })
    }

    fn header_value(token: Option<&str>, name: &str) -> Result<usize, LoadError> {
        let token = token.ok_or_else(|| LoadError::Header(format!("missing {}", name)))?;
        token
            .parse()
            .map_err(|_| LoadError::Header(format!("{} '{}' is not a number", name, token)))
    }

    /// Parse a puzzle description from a text file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    pub fn board(&self) -> Result<Board, LoadError> {
        let board = Board::from_chars(self.width, self.height, self.wriggler_count, &self.cells)?;
        Ok(board)
    }

    /// Read a puzzle file and build its board.
    pub fn load(path: impl AsRef<Path>) -> Result<Board, LoadError> {
        Self::from_file(path)?.board()
    }
}
