use grid_2d::{Coord, Grid, Size};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: u32 = 5;
pub const INTERIOR_MIN: i32 = 1;
pub const INTERIOR_MAX: i32 = BOARD_SIZE as i32 - 2;
pub const CHEF_START: Coord = Coord { x: 2, y: 2 };

// The 12 boundary cells surrounding the 3x3 interior, corners excluded.
// Items and the goal spawn onto these; the rest stay out of bounds.
pub const ELIGIBLE_SPAWN_COORDS: [Coord; 12] = [
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: 2 },
    Coord { x: 0, y: 3 },
    Coord { x: 1, y: 0 },
    Coord { x: 2, y: 0 },
    Coord { x: 3, y: 0 },
    Coord { x: 4, y: 1 },
    Coord { x: 4, y: 2 },
    Coord { x: 4, y: 3 },
    Coord { x: 1, y: 4 },
    Coord { x: 2, y: 4 },
    Coord { x: 3, y: 4 },
];

// Fixed assignment order for freshly spawned cells
pub const ITEM_SPAWN_ORDER: [Cell; 4] = [
    Cell::PeanutButter,
    Cell::Jelly,
    Cell::Bread,
    Cell::Goal,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Chef,
    Jelly,
    PeanutButter,
    Bread,
    Goal,
    OutOfBounds,
}

impl Cell {
    pub fn ingredient(self) -> Option<Ingredient> {
        match self {
            Self::PeanutButter => Some(Ingredient::PeanutButter),
            Self::Jelly => Some(Ingredient::Jelly),
            Self::Bread => Some(Ingredient::Bread),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ingredient {
    PeanutButter,
    Jelly,
    Bread,
}

impl Ingredient {
    pub fn name(self) -> &'static str {
        match self {
            Self::PeanutButter => "peanut butter",
            Self::Jelly => "jelly",
            Self::Bread => "bread",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collected {
    pub peanut_butter: bool,
    pub jelly: bool,
    pub bread: bool,
}

impl Collected {
    pub fn all(self) -> bool {
        self.peanut_butter && self.jelly && self.bread
    }
    pub fn contains(self, ingredient: Ingredient) -> bool {
        match ingredient {
            Ingredient::PeanutButter => self.peanut_butter,
            Ingredient::Jelly => self.jelly,
            Ingredient::Bread => self.bread,
        }
    }
    fn mark(&mut self, ingredient: Ingredient) {
        match ingredient {
            Ingredient::PeanutButter => self.peanut_butter = true,
            Ingredient::Jelly => self.jelly = true,
            Ingredient::Bread => self.bread = true,
        }
    }
}

// Symbolic mesh identity resolved by the asset collaborator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshId {
    Chef,
    Jelly,
    PeanutButter,
    Bread,
    Goal,
}

impl MeshId {
    pub fn name(self) -> &'static str {
        match self {
            Self::Chef => "chef",
            Self::Jelly => "jelly",
            Self::PeanutButter => "peanut_butter",
            Self::Bread => "bread",
            Self::Goal => "goal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotation(pub f32);

impl Rotation {
    pub const IDENTITY: Self = Self(0.);
}

// Display data derived from a cell value. Never authoritative: recomputed
// from the grid whenever the renderer asks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub mesh: MeshId,
    pub rotation: Rotation,
}

pub fn is_interior(coord: Coord) -> bool {
    coord.x >= INTERIOR_MIN
        && coord.x <= INTERIOR_MAX
        && coord.y >= INTERIOR_MIN
        && coord.y <= INTERIOR_MAX
}

fn is_spawn_ring(coord: Coord) -> bool {
    let edge = |a: i32| a == 0 || a == BOARD_SIZE as i32 - 1;
    let mid = |a: i32| a >= INTERIOR_MIN && a <= INTERIOR_MAX;
    (edge(coord.x) && mid(coord.y)) || (edge(coord.y) && mid(coord.x))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid<Cell>,
    chef_coord: Coord,
    collected: Collected,
}

impl Board {
    pub fn new() -> Self {
        let grid = Grid::new_copy(Size::new(BOARD_SIZE, BOARD_SIZE), Cell::Empty);
        let mut board = Self {
            grid,
            chef_coord: CHEF_START,
            collected: Collected::default(),
        };
        board.initialize();
        board
    }

    // Validating constructor: the grid must be the fixed size and contain
    // exactly one chef
    pub fn from_grid(grid: Grid<Cell>) -> Self {
        assert!(
            grid.size() == Size::new(BOARD_SIZE, BOARD_SIZE),
            "board must be {}x{} (got {:?})",
            BOARD_SIZE,
            BOARD_SIZE,
            grid.size()
        );
        let mut chef_coord = None;
        for (coord, &cell) in grid.enumerate() {
            if cell == Cell::Chef {
                assert!(
                    chef_coord.is_none(),
                    "board contains more than one chef ({:?} and {:?})",
                    chef_coord.unwrap(),
                    coord
                );
                chef_coord = Some(coord);
            }
        }
        let chef_coord = chef_coord.expect("board contains no chef");
        Self {
            grid,
            chef_coord,
            collected: Collected::default(),
        }
    }

    // Reset to the fixed layout. The sole entry point for (re)starting a
    // round: called once at construction and again on every win.
    pub fn initialize(&mut self) {
        for coord in self.grid.size().coord_iter_row_major() {
            *self.grid.get_checked_mut(coord) = if coord == CHEF_START {
                Cell::Chef
            } else if is_spawn_ring(coord) {
                Cell::OutOfBounds
            } else {
                Cell::Empty
            };
        }
        self.chef_coord = CHEF_START;
        self.collected = Collected::default();
    }

    // Pick-and-remove four times from the candidate pool, assigning cells
    // in ITEM_SPAWN_ORDER. Must follow every call to `initialize`.
    pub fn spawn_items<R: Rng>(&mut self, candidates: &[Coord], rng: &mut R) {
        assert!(
            candidates.len() >= ITEM_SPAWN_ORDER.len(),
            "spawn_items requires at least {} candidate cells (got {})",
            ITEM_SPAWN_ORDER.len(),
            candidates.len()
        );
        let mut pool = candidates.to_vec();
        for &item in ITEM_SPAWN_ORDER.iter() {
            let index = rng.gen_range(0..pool.len());
            let coord = pool.remove(index);
            *self.grid.get_checked_mut(coord) = item;
        }
    }

    pub fn decoration_of(&self, coord: Coord) -> Option<Decoration> {
        let mesh = match *self.grid.get_checked(coord) {
            Cell::Chef => MeshId::Chef,
            Cell::Jelly => MeshId::Jelly,
            Cell::PeanutButter => MeshId::PeanutButter,
            Cell::Bread => MeshId::Bread,
            Cell::Goal => MeshId::Goal,
            Cell::Empty | Cell::OutOfBounds => return None,
        };
        Some(Decoration {
            mesh,
            rotation: Rotation::IDENTITY,
        })
    }

    // Every in-bounds cell gets a floor tile regardless of decoration
    pub fn is_tile(&self, coord: Coord) -> bool {
        self.grid.get(coord).is_some()
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        *self.grid.get_checked(coord)
    }

    pub fn chef_coord(&self) -> Coord {
        self.chef_coord
    }

    pub fn collected(&self) -> Collected {
        self.collected
    }

    pub fn move_chef(&mut self, dest: Coord) {
        *self.grid.get_checked_mut(self.chef_coord) = Cell::Empty;
        *self.grid.get_checked_mut(dest) = Cell::Chef;
        self.chef_coord = dest;
    }

    pub fn collect_ingredient(&mut self, coord: Coord) -> Ingredient {
        let cell = *self.grid.get_checked(coord);
        let ingredient = match cell.ingredient() {
            Some(ingredient) => ingredient,
            None => panic!("no ingredient at {:?} (found {:?})", coord, cell),
        };
        self.collected.mark(ingredient);
        *self.grid.get_checked_mut(coord) = Cell::Empty;
        ingredient
    }

    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, coord: Coord, cell: Cell) {
        *self.grid.get_checked_mut(coord) = cell;
    }
}
