//! Factory Method: the base abstraction fixes the algorithm, implementors
//! only decide which concrete product gets created.
//!
//! Two examples live here: a logistics company that started with trucks and
//! later added ships, and the classic maze game whose `create_maze` stays the
//! same while the room, wall and door hooks vary.

use tracing::debug;

// ============================================================================
// Logistics
// ============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait Transporter {
    fn deliver(&self, payload: u32) -> String;
}

pub trait Logistics {
    /// The factory method.
    fn create_transporter(&self) -> Box<dyn Transporter>;

    /// Business logic that only knows about the [`Transporter`] interface.
    fn plan_delivery(&self, payload: u32) -> String {
        let transporter = self.create_transporter();
        transporter.deliver(payload)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Truck;

#[derive(Debug, Default, Clone, Copy)]
pub struct Ship;

impl Transporter for Truck {
    fn deliver(&self, payload: u32) -> String {
        format!("Delivering {payload} using a truck.")
    }
}

impl Transporter for Ship {
    fn deliver(&self, payload: u32) -> String {
        format!("Delivering {payload} using a ship.")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RoadLogistics;

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaLogistics;

impl Logistics for RoadLogistics {
    fn create_transporter(&self) -> Box<dyn Transporter> {
        Box::new(Truck)
    }
}

impl Logistics for SeaLogistics {
    fn create_transporter(&self) -> Box<dyn Transporter> {
        Box::new(Ship)
    }
}

// ============================================================================
// Maze game
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    Basic,
    Bombed,
    Enchanted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Basic,
    Bombed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Door {
    Basic,
    Enchanted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    number: u32,
    kind: RoomKind,
    walls: Vec<Wall>,
    doors: Vec<Door>,
}

impl Room {
    pub fn new(number: u32, kind: RoomKind) -> Self {
        Self {
            number,
            kind,
            walls: Vec::new(),
            doors: Vec::new(),
        }
    }

    pub fn add_walls(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    pub fn add_door(&mut self, door: Door) {
        self.doors.push(door);
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Maze {
    rooms: Vec<Room>,
}

impl Maze {
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}

/// Hook methods. Each defaults to the basic part; games override what differs.
pub trait MazeGame {
    fn make_room(&self, number: u32) -> Room {
        Room::new(number, RoomKind::Basic)
    }

    fn make_walls(&self) -> Wall {
        Wall::Basic
    }

    fn make_door(&self) -> Door {
        Door::Basic
    }
}

/// The fixed construction algorithm.
///
/// Blanket-implemented for every [`MazeGame`], so no game can replace it;
/// games only influence the result through their hooks.
pub trait MazeGameExt: MazeGame {
    fn create_maze(&self) -> Maze;
}

impl<G: MazeGame + ?Sized> MazeGameExt for G {
    fn create_maze(&self) -> Maze {
        let mut maze = Maze::default();

        for number in 1..=2 {
            let mut room = self.make_room(number);
            room.add_walls(self.make_walls());
            room.add_door(self.make_door());
            maze.add_room(room);
        }

        debug!(rooms = maze.rooms().len(), "Maze created");
        maze
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardMazeGame;

impl MazeGame for StandardMazeGame {}

/// Will have bombed rooms and walls.
#[derive(Debug, Default, Clone, Copy)]
pub struct BombedMazeGame;

impl MazeGame for BombedMazeGame {
    fn make_room(&self, number: u32) -> Room {
        Room::new(number, RoomKind::Bombed)
    }

    fn make_walls(&self) -> Wall {
        Wall::Bombed
    }
}

/// Will have enchanted rooms and doors.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnchantedMazeGame;

impl MazeGame for EnchantedMazeGame {
    fn make_room(&self, number: u32) -> Room {
        Room::new(number, RoomKind::Enchanted)
    }

    fn make_door(&self) -> Door {
        Door::Enchanted
    }
}
