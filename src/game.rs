use crate::board::{is_interior, Board, Cell, Collected, Ingredient, ELIGIBLE_SPAWN_COORDS};
use coord_2d::Coord;
use direction::CardinalDirection;
use rand::SeedableRng;
use rand_isaac::Isaac64Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogMessage {
    ChefCollects(Ingredient),
    AllIngredientsCollected,
    GoalStillLocked,
    RoundWon,
}

// Offset of one step in `direction` in board space, where y points north.
// The renderer flips y when mapping board coords to screen coords.
pub fn direction_offset(direction: CardinalDirection) -> Coord {
    match direction {
        CardinalDirection::North => Coord::new(0, 1),
        CardinalDirection::South => Coord::new(0, -1),
        CardinalDirection::East => Coord::new(1, 0),
        CardinalDirection::West => Coord::new(-1, 0),
    }
}

#[derive(Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    rng: Isaac64Rng,
    message_log: Vec<LogMessage>,
    rounds_won: u32,
}

impl GameState {
    pub fn new(rng_seed: u64) -> Self {
        println!("RNG Seed: {}", rng_seed);
        let mut rng = Isaac64Rng::seed_from_u64(rng_seed);
        let mut board = Board::new();
        board.spawn_items(&ELIGIBLE_SPAWN_COORDS, &mut rng);
        Self {
            board,
            rng,
            message_log: Vec::new(),
            rounds_won: 0,
        }
    }

    // Sole input-driven entry point. Each call is one discrete step; the
    // input layer has already filtered out auto-repeat duplicates. Returns
    // whether the event changed the game state.
    pub fn handle_direction(&mut self, direction: CardinalDirection) -> bool {
        let target = self.board.chef_coord() + direction_offset(direction);
        if is_interior(target) {
            self.board.move_chef(target);
            true
        } else {
            // Edge of the interior plus an outward press: the chef reaches
            // for whatever sits on the boundary cell instead of moving.
            self.reach_for(target)
        }
    }

    fn reach_for(&mut self, target: Coord) -> bool {
        match self.board.cell(target) {
            Cell::PeanutButter | Cell::Jelly | Cell::Bread => {
                let ingredient = self.board.collect_ingredient(target);
                self.message_log.push(LogMessage::ChefCollects(ingredient));
                if self.board.collected().all() {
                    self.message_log.push(LogMessage::AllIngredientsCollected);
                }
                true
            }
            Cell::Goal => {
                if self.board.collected().all() {
                    self.rounds_won += 1;
                    self.message_log.push(LogMessage::RoundWon);
                    self.board.initialize();
                    self.board.spawn_items(&ELIGIBLE_SPAWN_COORDS, &mut self.rng);
                    true
                } else {
                    self.message_log.push(LogMessage::GoalStillLocked);
                    false
                }
            }
            Cell::Empty | Cell::OutOfBounds | Cell::Chef => false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn collected(&self) -> Collected {
        self.board.collected()
    }

    pub fn message_log(&self) -> &[LogMessage] {
        &self.message_log
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    #[cfg(test)]
    pub(crate) fn from_board(board: Board, rng_seed: u64) -> Self {
        Self {
            board,
            rng: Isaac64Rng::seed_from_u64(rng_seed),
            message_log: Vec::new(),
            rounds_won: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MeshId, CHEF_START, ITEM_SPAWN_ORDER};
    use direction::CardinalDirection::{East, North, South, West};
    use rand::Rng;

    fn empty_ring_game() -> GameState {
        // Fixed layout, nothing spawned on the ring
        GameState::from_board(Board::new(), 0)
    }

    // Controlled layout: goal north, ingredients west, south and east
    fn scenario_game() -> GameState {
        let mut board = Board::new();
        board.set_cell(Coord::new(2, 4), Cell::Goal);
        board.set_cell(Coord::new(0, 2), Cell::PeanutButter);
        board.set_cell(Coord::new(2, 0), Cell::Jelly);
        board.set_cell(Coord::new(4, 2), Cell::Bread);
        GameState::from_board(board, 0)
    }

    fn count_cells(board: &Board, target: Cell) -> usize {
        board
            .size()
            .coord_iter_row_major()
            .filter(|&coord| board.cell(coord) == target)
            .count()
    }

    fn assert_fresh_round(board: &Board) {
        assert_eq!(board.chef_coord(), CHEF_START);
        assert_eq!(board.collected(), Collected::default());
        for &item in ITEM_SPAWN_ORDER.iter() {
            assert_eq!(count_cells(board, item), 1, "{:?}", item);
        }
        for coord in board.size().coord_iter_row_major() {
            if ITEM_SPAWN_ORDER.contains(&board.cell(coord)) {
                assert!(ELIGIBLE_SPAWN_COORDS.contains(&coord), "at {:?}", coord);
            }
        }
    }

    #[test]
    fn there_is_always_exactly_one_chef() {
        let mut game = GameState::new(12345);
        let mut rng = Isaac64Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let direction = match rng.gen_range(0..4) {
                0 => North,
                1 => South,
                2 => East,
                _ => West,
            };
            game.handle_direction(direction);
            let board = game.board();
            assert_eq!(count_cells(board, Cell::Chef), 1);
            assert_eq!(board.cell(board.chef_coord()), Cell::Chef);
        }
    }

    #[test]
    fn pressing_north_at_the_interior_edge_reaches_instead_of_moving() {
        let mut game = scenario_game();
        assert!(game.handle_direction(North));
        assert_eq!(game.board().chef_coord(), Coord::new(2, 3));
        // chef is against the interior edge now; a further press resolves
        // against (2, 4) without moving
        game.handle_direction(North);
        assert_eq!(game.board().chef_coord(), Coord::new(2, 3));
    }

    #[test]
    fn collecting_an_ingredient_empties_the_cell_and_sets_the_flag() {
        let mut game = scenario_game();
        assert!(game.handle_direction(West)); // move to (1, 2)
        assert!(game.handle_direction(West)); // reach for the peanut butter
        assert_eq!(game.board().chef_coord(), Coord::new(1, 2));
        assert!(game.collected().peanut_butter);
        assert!(!game.collected().jelly);
        assert!(!game.collected().bread);
        assert_eq!(game.board().cell(Coord::new(0, 2)), Cell::Empty);
        assert_eq!(
            game.message_log(),
            &[LogMessage::ChefCollects(Ingredient::PeanutButter)]
        );
        // the slot is spent; pressing again does nothing
        let before = game.board().clone();
        assert!(!game.handle_direction(West));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn pressing_into_an_empty_boundary_is_idempotent() {
        let mut game = empty_ring_game();
        game.handle_direction(North); // chef to (2, 3)
        let before = game.board().clone();
        assert!(!game.handle_direction(North));
        assert_eq!(*game.board(), before);
        assert_eq!(game.collected(), Collected::default());
        assert!(game.message_log().is_empty());
    }

    #[test]
    fn goal_does_not_resolve_until_all_ingredients_are_collected() {
        let mut game = scenario_game();
        // peanut butter
        game.handle_direction(West);
        game.handle_direction(West);
        // jelly
        game.handle_direction(East);
        game.handle_direction(South);
        game.handle_direction(South);
        assert!(game.collected().peanut_butter);
        assert!(game.collected().jelly);
        assert!(!game.collected().bread);
        // press toward the goal with bread still missing
        game.handle_direction(North);
        game.handle_direction(North);
        let collected_before = game.collected();
        assert!(!game.handle_direction(North));
        assert_eq!(game.collected(), collected_before);
        assert_eq!(game.board().cell(Coord::new(2, 4)), Cell::Goal);
        assert_eq!(game.rounds_won(), 0);
        assert_eq!(game.message_log().last(), Some(&LogMessage::GoalStillLocked));
    }

    #[test]
    fn delivering_all_ingredients_wins_and_resets_the_round() {
        let mut game = scenario_game();
        // peanut butter at (0, 2)
        game.handle_direction(West);
        game.handle_direction(West);
        // jelly at (2, 0)
        game.handle_direction(East);
        game.handle_direction(South);
        game.handle_direction(South);
        // bread at (4, 2)
        game.handle_direction(North);
        game.handle_direction(East);
        game.handle_direction(East);
        assert!(game.collected().all());
        assert_eq!(
            game.message_log().last(),
            Some(&LogMessage::AllIngredientsCollected)
        );
        // goal at (2, 4)
        game.handle_direction(West);
        game.handle_direction(North);
        assert!(game.handle_direction(North));
        assert_eq!(game.rounds_won(), 1);
        assert!(game.message_log().contains(&LogMessage::RoundWon));
        assert_fresh_round(game.board());
    }

    #[test]
    fn the_game_loops_over_many_rounds() {
        // rely on the spawned layout: find each item and walk to it
        let mut game = GameState::new(98765);
        for round in 0..5 {
            assert_eq!(game.rounds_won(), round);
            let coord_of = |game: &GameState, target: Cell| {
                game.board()
                    .size()
                    .coord_iter_row_major()
                    .find(|&coord| game.board().cell(coord) == target)
                    .unwrap()
            };
            for target in [
                Cell::PeanutButter,
                Cell::Jelly,
                Cell::Bread,
                Cell::Goal,
            ] {
                let coord = coord_of(&game, target);
                walk_to_and_reach(&mut game, coord);
            }
            assert_fresh_round(game.board());
        }
    }

    // Walk the chef through the interior until it is adjacent to `target`
    // on the ring, then press outward once
    fn walk_to_and_reach(game: &mut GameState, target: Coord) {
        let (stand_at, press) = if target.x == 0 {
            (Coord::new(1, target.y), West)
        } else if target.x == 4 {
            (Coord::new(3, target.y), East)
        } else if target.y == 0 {
            (Coord::new(target.x, 1), South)
        } else {
            (Coord::new(target.x, 3), North)
        };
        while game.board().chef_coord() != stand_at {
            let chef = game.board().chef_coord();
            let direction = if chef.x < stand_at.x {
                East
            } else if chef.x > stand_at.x {
                West
            } else if chef.y < stand_at.y {
                North
            } else {
                South
            };
            game.handle_direction(direction);
        }
        game.handle_direction(press);
    }

    #[test]
    fn decorations_track_the_chef() {
        let mut game = empty_ring_game();
        assert_eq!(
            game.board().decoration_of(CHEF_START).map(|d| d.mesh),
            Some(MeshId::Chef)
        );
        game.handle_direction(East);
        assert_eq!(game.board().decoration_of(CHEF_START), None);
        assert_eq!(
            game.board().decoration_of(Coord::new(3, 2)).map(|d| d.mesh),
            Some(MeshId::Chef)
        );
    }
}
