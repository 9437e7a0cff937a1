use super::coords::WorldPoint;
use serde::{Deserialize, Serialize};

/// Heading of an agent along the isometric tile axes.
///
/// North decreases the row, East increases the column, South increases the
/// row and West decreases the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Maps `0..=3` onto N, E, S, W. Values are taken modulo 4.
    #[must_use]
    pub const fn from_index(index: u64) -> Self {
        match index % 4 {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn turn_left(self) -> Self {
        Self::from_index(self as u64 + 3)
    }

    #[must_use]
    pub const fn turn_right(self) -> Self {
        Self::from_index(self as u64 + 1)
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::from_index(self as u64 + 2)
    }

    /// World-space step per unit of speed: two x units per y unit, matching
    /// the 2:1 isometric tile spacing.
    #[must_use]
    pub const fn vector(self) -> (i64, i64) {
        match self {
            Direction::North => (2, -1),
            Direction::East => (2, 1),
            Direction::South => (-2, 1),
            Direction::West => (-2, -1),
        }
    }

    /// Quadrant heading of a force vector.
    #[must_use]
    pub const fn from_quadrant(dx: i64, dy: i64) -> Self {
        if dx >= 0 && dy < 0 {
            Direction::North
        } else if dx >= 0 {
            Direction::East
        } else if dy >= 0 {
            Direction::South
        } else {
            Direction::West
        }
    }
}

/// A single exploring vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    /// X in fixed-point hundredths.
    pub x: i64,
    /// Y in fixed-point hundredths.
    pub y: i64,
    pub direction: Direction,
    pub team: u8,
    /// Index into the vehicle table.
    pub vehicle_type: u8,
}

impl Agent {
    #[must_use]
    pub const fn new(position: WorldPoint, direction: Direction, team: u8, vehicle_type: u8) -> Self {
        Self {
            x: position.x,
            y: position.y,
            direction,
            team,
            vehicle_type,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    #[inline]
    pub fn set_position(&mut self, point: WorldPoint) {
        self.x = point.x;
        self.y = point.y;
    }

    #[must_use]
    pub fn snapshot(&self, index: usize) -> AgentSnapshot {
        AgentSnapshot {
            index,
            x: self.x,
            y: self.y,
            direction: self.direction.index(),
            team: self.team,
            vehicle_type: self.vehicle_type,
        }
    }
}

/// Flat, render-friendly row of the agent table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub index: usize,
    pub x: i64,
    pub y: i64,
    pub direction: u8,
    pub team: u8,
    pub vehicle_type: u8,
}
