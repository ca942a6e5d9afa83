use rand::Rng;

mod app;
mod board;
mod game;
mod ui;

use app::App;

struct Args {
    rng_seed: u64,
}

impl Args {
    fn parser() -> impl meap::Parser<Item = Self> {
        meap::let_map! {
            let {
                rng_seed = opt_opt::<u64, _>("INT", 'r')
                    .name("rng-seed")
                    .desc("seed for item placement rng")
                    .with_default_lazy_general(|| rand::thread_rng().gen());
            } in {
                Self { rng_seed }
            }
        }
    }
}

fn main() {
    use meap::Parser;
    let Args { rng_seed } = Args::parser().with_help_default().parse_env_or_exit();
    use chargrid_graphical::{Context, ContextDescriptor, Dimensions, FontBytes};
    const CELL_SIZE_PX: f64 = 24.;
    const SCREEN_WIDTH_CELLS: f64 = 36.;
    const SCREEN_HEIGHT_CELLS: f64 = 14.;
    let context = Context::new(ContextDescriptor {
        font_bytes: FontBytes {
            normal: include_bytes!("./fonts/DejaVuSansMono.ttf").to_vec(),
            bold: include_bytes!("./fonts/DejaVuSansMono-Bold.ttf").to_vec(),
        },
        title: "PB&J Chef".to_string(),
        window_dimensions: Dimensions {
            width: SCREEN_WIDTH_CELLS * CELL_SIZE_PX,
            height: SCREEN_HEIGHT_CELLS * CELL_SIZE_PX,
        },
        cell_dimensions: Dimensions {
            width: CELL_SIZE_PX,
            height: CELL_SIZE_PX,
        },
        font_dimensions: Dimensions {
            width: CELL_SIZE_PX,
            height: CELL_SIZE_PX,
        },
        font_source_dimensions: Dimensions {
            width: CELL_SIZE_PX as f32,
            height: CELL_SIZE_PX as f32,
        },
        underline_width: 0.1,
        underline_top_offset: 0.8,
        resizable: false,
    })
    .expect("Failed to initialize graphical context");
    let app = App::new(rng_seed);
    context.run_app(app);
}
