use arrayvec::ArrayVec;
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

use crate::key::WrigglerKey;
use crate::zobrist::Zobrist;

pub const MAX_SIZE: usize = 64;
pub const MAX_WRIGGLERS: usize = 10;

/// An `(x, y)` cell coordinate, origin top-left.
pub type Position = (u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction of the step from `from` to the 4-adjacent cell `to`.
    fn between(from: Position, to: Position) -> Option<Direction> {
        ALL_DIRECTIONS.into_iter().find(|dir| {
            let (dx, dy) = dir.delta();
            from.0 as i32 + dx as i32 == to.0 as i32 && from.1 as i32 + dy as i32 == to.1 as i32
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Left => write!(f, "Left"),
            Direction::Right => write!(f, "Right"),
        }
    }
}

/// Which end of a wriggler moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    Head,
    Tail,
}

pub const ALL_ENDS: [End; 2] = [End::Head, End::Tail];

impl End {
    pub fn opposite(&self) -> End {
        match self {
            End::Head => End::Tail,
            End::Tail => End::Head,
        }
    }
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            End::Head => write!(f, "head"),
            End::Tail => write!(f, "tail"),
        }
    }
}

/// A single grid cell.
///
/// Heads and interior segments carry the direction of the next cell toward
/// the tail; tails carry the id of the wriggler they end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Head(Direction),
    Segment(Direction),
    Tail(u8),
}

impl Tile {
    /// Decode a tile character. Characters outside the puzzle alphabet are empty space.
    ///
    /// Characters:
    /// - `U`, `D`, `L`, `R` = head, facing the next segment
    /// - `^`, `v`, `<`, `>` = interior segment, facing the next segment
    /// - `0`-`9` = tail of the wriggler with that id
    /// - `x` = wall
    pub fn from_char(ch: char) -> Tile {
        match ch {
            'U' => Tile::Head(Direction::Up),
            'D' => Tile::Head(Direction::Down),
            'L' => Tile::Head(Direction::Left),
            'R' => Tile::Head(Direction::Right),
            '^' => Tile::Segment(Direction::Up),
            'v' => Tile::Segment(Direction::Down),
            '<' => Tile::Segment(Direction::Left),
            '>' => Tile::Segment(Direction::Right),
            'x' => Tile::Wall,
            '0'..='9' => Tile::Tail(ch as u8 - b'0'),
            _ => Tile::Empty,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Tile::Empty => 'e',
            Tile::Wall => 'x',
            Tile::Head(Direction::Up) => 'U',
            Tile::Head(Direction::Down) => 'D',
            Tile::Head(Direction::Left) => 'L',
            Tile::Head(Direction::Right) => 'R',
            Tile::Segment(Direction::Up) => '^',
            Tile::Segment(Direction::Down) => 'v',
            Tile::Segment(Direction::Left) => '<',
            Tile::Segment(Direction::Right) => '>',
            Tile::Tail(id) => (b'0' + id) as char,
        }
    }

    pub fn is_wriggler(self) -> bool {
        matches!(self, Tile::Head(_) | Tile::Segment(_) | Tile::Tail(_))
    }

    /// Swap a head for an interior segment facing the same way, and back.
    fn flipped(self) -> Tile {
        match self {
            Tile::Head(dir) => Tile::Segment(dir),
            Tile::Segment(dir) => Tile::Head(dir),
            other => panic!("Cannot flip direction of tile '{}'", other.to_char()),
        }
    }
}

/// A single end-segment move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub wriggler: u8,
    pub end: End,
    pub direction: Direction,
}

impl Move {
    pub fn new(wriggler: u8, end: End, direction: Direction) -> Self {
        Move {
            wriggler,
            end,
            direction,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wriggler #{} {} {}", self.wriggler, self.end, self.direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wriggler {
    id: u8,
    // Head first, tail last
    positions: VecDeque<Position>,
}

impl Wriggler {
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn positions(&self) -> &VecDeque<Position> {
        &self.positions
    }

    pub fn head(&self) -> Position {
        self.positions[0]
    }

    pub fn tail(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    pub fn end(&self, end: End) -> Position {
        match end {
            End::Head => self.head(),
            End::Tail => self.tail(),
        }
    }
}

/// Error type for board construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("board size {width}x{height} must be between 1x1 and {max}x{max}", max = MAX_SIZE)]
    Size { width: usize, height: usize },
    #[error("expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },
    #[error("board declares {declared} wrigglers but {found} heads were found")]
    WrigglerCount { declared: usize, found: usize },
    #[error("{0} wrigglers exceed the maximum of {max}", max = MAX_WRIGGLERS)]
    TooManyWrigglers(usize),
    #[error("wriggler {id} leaves the board at ({x}, {y})")]
    OutOfBounds { id: u8, x: u8, y: u8 },
    #[error("wriggler {id} runs into '{tile}' at ({x}, {y})")]
    Broken { id: u8, tile: char, x: u8, y: u8 },
    #[error("wriggler {id} ends in the tail of wriggler {tail}")]
    TailMismatch { id: u8, tail: u8 },
    #[error("tile '{tile}' at ({x}, {y}) does not belong to any wriggler")]
    Orphan { tile: char, x: u8, y: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [[Tile; MAX_SIZE]; MAX_SIZE],
    width: u8,
    height: u8,
    wrigglers: ArrayVec<Wriggler, MAX_WRIGGLERS>,
}

impl Board {
    /// Build a board from `width * height` tile characters in row-major order.
    ///
    /// Wrigglers are numbered in the row-major order of their heads. Each one is
    /// traced from its head along the encoded directions until its tail, whose
    /// digit must equal the wriggler's id.
    pub fn from_chars(
        width: usize,
        height: usize,
        wriggler_count: usize,
        cells: &[char],
    ) -> Result<Self, ParseError> {
        if width == 0 || height == 0 || width > MAX_SIZE || height > MAX_SIZE {
            return Err(ParseError::Size { width, height });
        }
        if cells.len() != width * height {
            return Err(ParseError::TileCount {
                expected: width * height,
                found: cells.len(),
            });
        }
        if wriggler_count > MAX_WRIGGLERS {
            return Err(ParseError::TooManyWrigglers(wriggler_count));
        }

        let mut tiles = [[Tile::Empty; MAX_SIZE]; MAX_SIZE];
        let mut heads = Vec::new();
        for (i, &ch) in cells.iter().enumerate() {
            let (x, y) = (i % width, i / width);
            let tile = Tile::from_char(ch);
            if let Tile::Head(_) = tile {
                heads.push((x as u8, y as u8));
            }
            tiles[y][x] = tile;
        }

        if heads.len() != wriggler_count {
            return Err(ParseError::WrigglerCount {
                declared: wriggler_count,
                found: heads.len(),
            });
        }

        let mut board = Board {
            tiles,
            width: width as u8,
            height: height as u8,
            wrigglers: ArrayVec::new(),
        };

        let mut claimed = [[false; MAX_SIZE]; MAX_SIZE];
        for (id, &head) in heads.iter().enumerate() {
            let positions = board.trace(id as u8, head, &mut claimed)?;
            board.wrigglers.push(Wriggler {
                id: id as u8,
                positions,
            });
        }

        for y in 0..board.height {
            for x in 0..board.width {
                let tile = board.get_tile(x, y);
                if tile.is_wriggler() && !claimed[y as usize][x as usize] {
                    return Err(ParseError::Orphan {
                        tile: tile.to_char(),
                        x,
                        y,
                    });
                }
            }
        }

        Ok(board)
    }

    /// Follow a wriggler's encoded directions from its head to its tail.
    fn trace(
        &self,
        id: u8,
        head: Position,
        claimed: &mut [[bool; MAX_SIZE]; MAX_SIZE],
    ) -> Result<VecDeque<Position>, ParseError> {
        let mut positions = VecDeque::new();
        let mut pos = head;

        loop {
            let (x, y) = pos;
            let tile = self.get_tile(x, y);
            if claimed[y as usize][x as usize] {
                return Err(ParseError::Broken {
                    id,
                    tile: tile.to_char(),
                    x,
                    y,
                });
            }
            claimed[y as usize][x as usize] = true;
            positions.push_back(pos);

            let dir = match tile {
                Tile::Tail(tail) if tail == id => return Ok(positions),
                Tile::Tail(tail) => return Err(ParseError::TailMismatch { id, tail }),
                Tile::Head(dir) if positions.len() == 1 => dir,
                Tile::Segment(dir) => dir,
                other => {
                    return Err(ParseError::Broken {
                        id,
                        tile: other.to_char(),
                        x,
                        y,
                    });
                }
            };

            pos = self
                .move_pos(x, y, dir)
                .ok_or(ParseError::OutOfBounds { id, x, y })?;
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn get_tile(&self, x: u8, y: u8) -> Tile {
        self.tiles[y as usize][x as usize]
    }

    fn set_tile(&mut self, pos: Position, tile: Tile) {
        self.tiles[pos.1 as usize][pos.0 as usize] = tile;
    }

    pub fn wriggler_count(&self) -> usize {
        self.wrigglers.len()
    }

    #[cfg(test)]
    pub fn wrigglers(&self) -> &[Wriggler] {
        &self.wrigglers
    }

    /// Panics if no wriggler has the given id.
    pub fn wriggler(&self, id: u8) -> &Wriggler {
        assert!(
            (id as usize) < self.wrigglers.len(),
            "Invalid wriggler id: {}",
            id
        );
        &self.wrigglers[id as usize]
    }

    /// Move from position (x, y) in the given direction.
    /// Returns Some((new_x, new_y)) if the new position is within bounds, None otherwise.
    fn move_pos(&self, x: u8, y: u8, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.delta();
        let new_x = x as i32 + dx as i32;
        let new_y = y as i32 + dy as i32;

        if new_x >= 0 && new_y >= 0 && new_x < self.width as i32 && new_y < self.height as i32 {
            Some((new_x as u8, new_y as u8))
        } else {
            None
        }
    }

    /// Whether the given end can step into the adjacent cell: it must be on
    /// the board and empty.
    pub fn can_move(&self, id: u8, end: End, direction: Direction) -> bool {
        let (x, y) = self.wriggler(id).end(end);
        self.move_pos(x, y, direction)
            .is_some_and(|(nx, ny)| self.get_tile(nx, ny) == Tile::Empty)
    }

    /// Step one end of a wriggler into the adjacent cell, dragging the body along.
    /// Returns false and leaves the board untouched if `can_move` does not hold.
    pub fn apply_move(&mut self, id: u8, end: End, direction: Direction) -> bool {
        if !self.can_move(id, end, direction) {
            return false;
        }
        let (x, y) = self.wriggler(id).end(end);
        let Some(target) = self.move_pos(x, y, direction) else {
            return false;
        };

        let positions = &mut self.wrigglers[id as usize].positions;
        match end {
            End::Head => {
                let old_head = positions[0];
                let vacated = positions.pop_back();
                positions.push_front(target);
                let new_tail = positions[positions.len() - 1];

                if let Some(vacated) = vacated {
                    self.set_tile(vacated, Tile::Empty);
                }
                let old_tile = self.get_tile(old_head.0, old_head.1);
                self.set_tile(old_head, old_tile.flipped());
                self.set_tile(new_tail, Tile::Tail(id));
                self.set_tile(target, Tile::Head(direction.opposite()));
            }
            End::Tail => {
                let old_tail = positions[positions.len() - 1];
                let vacated = positions.pop_front();
                positions.push_back(target);
                let new_head = positions[0];

                if let Some(vacated) = vacated {
                    self.set_tile(vacated, Tile::Empty);
                }
                self.set_tile(old_tail, Tile::Segment(direction));
                let head_tile = self.get_tile(new_head.0, new_head.1);
                self.set_tile(new_head, head_tile.flipped());
                self.set_tile(target, Tile::Tail(id));
            }
        }

        true
    }

    /// Direction the opposite end must step in to undo a move of `end`.
    /// Must be computed before the move is applied.
    pub fn undo_direction(&self, id: u8, end: End) -> Direction {
        let positions = self.wriggler(id).positions();
        let len = positions.len();
        let (from, to) = match end {
            End::Head => (positions[len - 2], positions[len - 1]),
            End::Tail => (positions[1], positions[0]),
        };
        match Direction::between(from, to) {
            Some(dir) => dir,
            None => panic!("Wriggler {} is not contiguous at {:?}", id, to),
        }
    }

    /// Undo a move of `end` by stepping the opposite end in `direction`, as
    /// returned by [`Board::undo_direction`] before the move.
    /// Panics if the opposite end cannot move, since the board is then corrupt.
    pub fn move_back(&mut self, id: u8, end: End, direction: Direction) {
        let moved = self.apply_move(id, end.opposite(), direction);
        assert!(moved, "Cannot move wriggler {} back {}", id, direction);
    }

    /// Snapshot of a wriggler's body for path deduplication.
    pub fn state_key(&self, id: u8, zobrist: &Zobrist) -> WrigglerKey {
        WrigglerKey::new(zobrist, self.wriggler(id))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let line = (0..self.width)
                .map(|x| self.get_tile(x, y).to_char().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a board from rows of tile characters; whitespace is ignored.
    pub(crate) fn board(width: usize, height: usize, count: usize, rows: &str) -> Board {
        let cells: Vec<char> = rows.chars().filter(|c| !c.is_whitespace()).collect();
        Board::from_chars(width, height, count, &cells).unwrap()
    }

    fn parse(width: usize, height: usize, count: usize, rows: &str) -> Result<Board, ParseError> {
        let cells: Vec<char> = rows.chars().filter(|c| !c.is_whitespace()).collect();
        Board::from_chars(width, height, count, &cells)
    }

    fn positions(board: &Board, id: u8) -> Vec<Position> {
        board.wriggler(id).positions().iter().copied().collect()
    }

    fn assert_contiguous(board: &Board) {
        for wriggler in board.wrigglers() {
            let body: Vec<Position> = wriggler.positions().iter().copied().collect();
            assert!(body.len() >= 2);
            for pair in body.windows(2) {
                let dx = (pair[0].0 as i32 - pair[1].0 as i32).abs();
                let dy = (pair[0].1 as i32 - pair[1].1 as i32).abs();
                assert_eq!(dx + dy, 1, "gap in wriggler {}", wriggler.id());
            }
            for (i, pos) in body.iter().enumerate() {
                assert!(!body[i + 1..].contains(pos), "overlap in wriggler {}", wriggler.id());
            }
        }
    }

    const TWO_WRIGGLERS: &str = "R > v e\n\
                                 x e 0 e\n\
                                 D e e e\n\
                                 1 e e e";

    #[test]
    fn test_parse_basic_board() {
        let board = board(4, 4, 2, TWO_WRIGGLERS);

        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 4);
        assert_eq!(board.wriggler_count(), 2);
        assert_eq!(positions(&board, 0), vec![(0, 0), (1, 0), (2, 0), (2, 1)]);
        assert_eq!(positions(&board, 1), vec![(0, 2), (0, 3)]);
        assert_eq!(board.get_tile(0, 1), Tile::Wall);
        assert_eq!(board.get_tile(1, 1), Tile::Empty);
    }

    #[test]
    fn test_ids_follow_head_order() {
        // The tail of wriggler 1 comes first in row-major order, but its head
        // comes second.
        let board = board(3, 2, 2, "1 R 0\nU e e");
        assert_eq!(positions(&board, 0), vec![(1, 0), (2, 0)]);
        assert_eq!(positions(&board, 1), vec![(0, 1), (0, 0)]);
    }

    #[test]
    fn test_unknown_characters_are_empty() {
        let board = board(3, 1, 1, "R 0 .");
        assert_eq!(board.get_tile(2, 0), Tile::Empty);
        assert_eq!(board.to_string(), "R 0 e\n");
    }

    #[test]
    fn test_trace_off_board() {
        let result = parse(2, 1, 1, "e R");
        assert_eq!(result, Err(ParseError::OutOfBounds { id: 0, x: 1, y: 0 }));
    }

    #[test]
    fn test_trace_into_wall() {
        let result = parse(3, 1, 1, "R x 0");
        assert!(matches!(result, Err(ParseError::Broken { id: 0, tile: 'x', .. })));
    }

    #[test]
    fn test_trace_loop() {
        let result = parse(2, 2, 1, "R v\n^ <");
        assert!(matches!(result, Err(ParseError::Broken { id: 0, .. })));
    }

    #[test]
    fn test_tail_mismatch() {
        let result = parse(2, 1, 1, "R 3");
        assert_eq!(result, Err(ParseError::TailMismatch { id: 0, tail: 3 }));
    }

    #[test]
    fn test_wriggler_count_mismatch() {
        let result = parse(2, 1, 2, "R 0");
        assert_eq!(
            result,
            Err(ParseError::WrigglerCount {
                declared: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_orphan_segment() {
        let result = parse(3, 1, 1, "R 0 >");
        assert_eq!(
            result,
            Err(ParseError::Orphan {
                tile: '>',
                x: 2,
                y: 0
            })
        );
    }

    #[test]
    fn test_size_validation() {
        assert!(matches!(
            Board::from_chars(0, 1, 0, &[]),
            Err(ParseError::Size { .. })
        ));
        let cells = vec!['e'; (MAX_SIZE + 1) * 2];
        assert!(matches!(
            Board::from_chars(MAX_SIZE + 1, 2, 0, &cells),
            Err(ParseError::Size { .. })
        ));
        assert_eq!(
            Board::from_chars(2, 2, 0, &['e'; 3]),
            Err(ParseError::TileCount {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let original = board(4, 4, 2, TWO_WRIGGLERS);
        let rendered = original.to_string();
        assert_eq!(rendered, "R > v e\nx e 0 e\nD e e e\n1 e e e\n");

        let reparsed = board(4, 4, 2, &rendered);
        assert_eq!(reparsed.wrigglers(), original.wrigglers());
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_can_move() {
        let board = board(4, 4, 2, TWO_WRIGGLERS);

        // Head at (0, 0): up and left are off the board, right is its own body,
        // down is a wall.
        for dir in ALL_DIRECTIONS {
            assert!(!board.can_move(0, End::Head, dir), "head {}", dir);
        }
        assert!(board.can_move(0, End::Tail, Direction::Down));
        assert!(board.can_move(0, End::Tail, Direction::Left));
        assert!(board.can_move(0, End::Tail, Direction::Right));
        assert!(!board.can_move(0, End::Tail, Direction::Up));

        assert!(board.can_move(1, End::Head, Direction::Right));
        assert!(!board.can_move(1, End::Head, Direction::Up));
        assert!(board.can_move(1, End::Tail, Direction::Right));
        assert!(!board.can_move(1, End::Tail, Direction::Down));
    }

    #[test]
    fn test_move_head() {
        let mut board = board(4, 4, 2, TWO_WRIGGLERS);
        assert!(board.apply_move(1, End::Head, Direction::Right));

        assert_eq!(positions(&board, 1), vec![(1, 2), (0, 2)]);
        assert_eq!(board.to_string(), "R > v e\nx e 0 e\n1 L e e\ne e e e\n");
        assert_contiguous(&board);
    }

    #[test]
    fn test_move_tail() {
        let mut board = board(4, 4, 2, TWO_WRIGGLERS);
        assert!(board.apply_move(0, End::Tail, Direction::Left));

        assert_eq!(positions(&board, 0), vec![(1, 0), (2, 0), (2, 1), (1, 1)]);
        assert_eq!(board.to_string(), "e R v e\nx 0 < e\nD e e e\n1 e e e\n");
        assert_contiguous(&board);
    }

    #[test]
    fn test_apply_move_follows_can_move() {
        let original = board(4, 4, 2, TWO_WRIGGLERS);

        for id in 0..2u8 {
            for end in ALL_ENDS {
                for dir in ALL_DIRECTIONS {
                    let mut board = original.clone();
                    let allowed = board.can_move(id, end, dir);
                    assert_eq!(board.apply_move(id, end, dir), allowed, "{} {} {}", id, end, dir);
                    assert_eq!(board == original, !allowed);
                }
            }
        }
    }

    #[test]
    fn test_move_blocked_leaves_board_untouched() {
        let mut board = board(4, 4, 2, TWO_WRIGGLERS);
        let original = board.clone();

        assert!(!board.apply_move(0, End::Head, Direction::Down));
        assert!(!board.apply_move(0, End::Tail, Direction::Up));
        assert!(!board.apply_move(1, End::Tail, Direction::Down));
        assert_eq!(board, original);
    }

    #[test]
    fn test_move_back_restores_board() {
        let original = board(4, 4, 2, TWO_WRIGGLERS);

        for id in 0..2u8 {
            for end in ALL_ENDS {
                for dir in ALL_DIRECTIONS {
                    let mut board = original.clone();
                    let undo = board.undo_direction(id, end);
                    if board.apply_move(id, end, dir) {
                        assert_ne!(board, original);
                        board.move_back(id, end, undo);
                        assert_eq!(board, original, "Failed for {} {} {}", id, end, dir);
                    }
                }
            }
        }
    }

    #[test]
    fn test_two_segment_wriggler_reverses() {
        let mut board = board(2, 2, 1, "R 0\ne e");
        let original = board.clone();

        let undo = board.undo_direction(0, End::Tail);
        assert_eq!(undo, Direction::Left);
        assert!(board.apply_move(0, End::Tail, Direction::Down));
        assert_eq!(board.to_string(), "e D\ne 0\n");

        board.move_back(0, End::Tail, undo);
        assert_eq!(board, original);
    }

    #[test]
    fn test_contiguous_after_walk() {
        let mut board = board(4, 4, 2, TWO_WRIGGLERS);
        let walk = [
            Move::new(0, End::Tail, Direction::Down),
            Move::new(0, End::Tail, Direction::Down),
            Move::new(1, End::Head, Direction::Right),
            Move::new(0, End::Head, Direction::Down),
            Move::new(1, End::Tail, Direction::Right),
            Move::new(0, End::Tail, Direction::Left),
        ];
        for mv in walk {
            board.apply_move(mv.wriggler, mv.end, mv.direction);
            assert_contiguous(&board);
        }

        let reparsed = self::board(4, 4, 2, &board.to_string());
        assert_eq!(reparsed.wrigglers(), board.wrigglers());
    }

    #[test]
    #[should_panic(expected = "Cannot move wriggler 0 back")]
    fn test_move_back_blocked() {
        let mut board = board(3, 1, 1, "R 0 e");
        board.move_back(0, End::Tail, Direction::Left);
    }

    #[test]
    #[should_panic(expected = "Invalid wriggler id")]
    fn test_invalid_wriggler() {
        let board = board(2, 1, 1, "R 0");
        board.can_move(4, End::Head, Direction::Up);
    }
}
