use serde::{Deserialize, Serialize};

/// Grid coordinate. Rows grow downward, so `y - 1` is "up" on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Pos { y: self.y - 1, x: self.x },
            Direction::Right => Pos { y: self.y, x: self.x + 1 },
            Direction::Down => Pos { y: self.y + 1, x: self.x },
            Direction::Left => Pos { y: self.y, x: self.x - 1 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    Nothing,
    Floor,
    Wall,
    Player,
}

impl Tile {
    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Floor | Tile::Player)
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Nothing => ' ',
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Player => '@',
        }
    }

    /// Short label shown when the pointer hovers a tile.
    pub fn description(self) -> &'static str {
        match self {
            Tile::Nothing => "nothing",
            Tile::Floor => "floor",
            Tile::Wall => "wall",
            Tile::Player => "you",
        }
    }

    pub(crate) fn code(self) -> u8 {
        match self {
            Tile::Nothing => 0,
            Tile::Floor => 1,
            Tile::Wall => 2,
            Tile::Player => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// WASD mapping. Expects an already upper-cased key.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'W' => Some(Direction::Up),
            'A' => Some(Direction::Left),
            'S' => Some(Direction::Down),
            'D' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Start,
    SeedEntry,
    Play,
}
