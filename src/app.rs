use crate::board::{Decoration, MeshId, BOARD_SIZE};
use crate::game::GameState;
use crate::ui::{UiData, UiView};
use chargrid::{
    app::{App as ChargridApp, ControlFlow},
    input::{keys, Input, KeyboardInput},
    render::{ColModify, Frame, View, ViewCell, ViewContext},
};
use coord_2d::Coord;
use direction::CardinalDirection;
use std::time::Duration;

pub mod colours {
    use crate::board::Ingredient;
    use rgb24::Rgb24;

    pub const CHEF: Rgb24 = Rgb24::new_grey(255);
    pub const PEANUT_BUTTER: Rgb24 = Rgb24::new(187, 127, 0);
    pub const JELLY: Rgb24 = Rgb24::new(187, 0, 187);
    pub const BREAD: Rgb24 = Rgb24::new(255, 255, 187);
    pub const GOAL: Rgb24 = Rgb24::new(0, 187, 0);
    pub const FLOOR: Rgb24 = Rgb24::new_grey(63);

    pub fn ingredient_colour(ingredient: Ingredient) -> Rgb24 {
        match ingredient {
            Ingredient::PeanutButter => PEANUT_BUTTER,
            Ingredient::Jelly => JELLY,
            Ingredient::Bread => BREAD,
        }
    }
}

struct AppData {
    game_state: GameState,
}

impl AppData {
    fn new(rng_seed: u64) -> Self {
        Self {
            game_state: GameState::new(rng_seed),
        }
    }
    fn handle_input(&mut self, input: Input) {
        match input {
            Input::Keyboard(key) => match key {
                KeyboardInput::Left => {
                    self.game_state.handle_direction(CardinalDirection::West);
                }
                KeyboardInput::Right => {
                    self.game_state.handle_direction(CardinalDirection::East);
                }
                KeyboardInput::Up => {
                    self.game_state.handle_direction(CardinalDirection::North);
                }
                KeyboardInput::Down => {
                    self.game_state.handle_direction(CardinalDirection::South);
                }
                _ => (),
            },
            _ => (),
        }
    }
}

// Board coords put y to the north; screen coords put y downwards
fn board_to_screen_coord(coord: Coord) -> Coord {
    Coord::new(coord.x, BOARD_SIZE as i32 - 1 - coord.y)
}

// The asset collaborator: resolves a symbolic mesh identity to something
// renderable, which for this frontend is a coloured glyph
fn decoration_view_cell(decoration: Decoration) -> ViewCell {
    match decoration.mesh {
        MeshId::Chef => ViewCell::new()
            .with_character('@')
            .with_foreground(colours::CHEF),
        MeshId::PeanutButter => ViewCell::new()
            .with_character('p')
            .with_foreground(colours::PEANUT_BUTTER),
        MeshId::Jelly => ViewCell::new()
            .with_character('j')
            .with_foreground(colours::JELLY),
        MeshId::Bread => ViewCell::new()
            .with_character('b')
            .with_foreground(colours::BREAD),
        MeshId::Goal => ViewCell::new()
            .with_character('*')
            .with_foreground(colours::GOAL),
    }
}

struct AppView {
    ui_view: UiView,
}

impl AppView {
    fn new() -> Self {
        Self {
            ui_view: UiView::default(),
        }
    }
}

impl<'a> View<&'a AppData> for AppView {
    fn view<F: Frame, C: ColModify>(
        &mut self,
        data: &'a AppData,
        context: ViewContext<C>,
        frame: &mut F,
    ) {
        let board = data.game_state.board();
        for coord in board.size().coord_iter_row_major() {
            let screen_coord = board_to_screen_coord(coord);
            if board.is_tile(coord) {
                let floor = ViewCell::new()
                    .with_character('.')
                    .with_foreground(colours::FLOOR);
                frame.set_cell_relative(screen_coord, 0, floor, context);
            }
            if let Some(decoration) = board.decoration_of(coord) {
                frame.set_cell_relative(
                    screen_coord,
                    1,
                    decoration_view_cell(decoration),
                    context,
                );
            }
        }
        let ui_offset = Coord::new(0, BOARD_SIZE as i32 + 1);
        let ui_data = UiData {
            collected: data.game_state.collected(),
            rounds_won: data.game_state.rounds_won(),
            messages: data.game_state.message_log(),
        };
        self.ui_view
            .view(ui_data, context.add_offset(ui_offset), frame);
    }
}

pub struct App {
    data: AppData,
    view: AppView,
}

impl App {
    pub fn new(rng_seed: u64) -> Self {
        Self {
            data: AppData::new(rng_seed),
            view: AppView::new(),
        }
    }
}

impl ChargridApp for App {
    fn on_input(&mut self, input: Input) -> Option<ControlFlow> {
        match input {
            Input::Keyboard(keys::ETX) | Input::Keyboard(keys::ESCAPE) => Some(ControlFlow::Exit),
            other => {
                self.data.handle_input(other);
                None
            }
        }
    }
    fn on_frame<F, C>(
        &mut self,
        _since_last_frame: Duration,
        view_context: ViewContext<C>,
        frame: &mut F,
    ) -> Option<ControlFlow>
    where
        F: Frame,
        C: ColModify,
    {
        self.view.view(&self.data, view_context, frame);
        None
    }
}
