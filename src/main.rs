use std::process::ExitCode;
use std::time::Instant;

use glow::HasContext;

use crate::abs::App;
use crate::config::Config;
use crate::error::AppError;
use crate::input::{FrameAction, InputEvent, KeyboardState};
use crate::render::house::HouseRenderer;
use crate::timing::FrameStats;

mod abs;
mod config;
mod error;
mod input;
mod logging;
mod render;
mod timing;

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(config.log_level) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ AppError::Sdl(_)) => {
            log::error!("Failed to create OpenGL context: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let mut app = App::new(&config.window, &config.gl)?;

    let (width, height) = app.drawable_size();
    unsafe {
        app.gl.viewport(0, 0, width, height);
    }

    let house = HouseRenderer::new(&app.gl)?;

    let [r, g, b, a] = config.clear_color;
    let mut keyboard = KeyboardState::default();
    let mut stats = FrameStats::new();
    let mut last_frame_time = Instant::now();

    'running: loop {
        let now = Instant::now();
        if let Some(fps) = stats.tick(now.duration_since(last_frame_time)) {
            log::debug!("{fps:.1} fps");
        }
        last_frame_time = now;

        keyboard.begin_frame();
        let events: Vec<InputEvent> = app
            .event_pump
            .poll_iter()
            .filter_map(|event| InputEvent::from_sdl(&event))
            .collect();
        for event in events {
            match input::handle_event(event, &mut keyboard) {
                FrameAction::Quit => break 'running,
                FrameAction::Resize(..) => {
                    // the drawable size can differ from the reported window size
                    let (width, height) = app.drawable_size();
                    unsafe {
                        app.gl.viewport(0, 0, width, height);
                    }
                }
                FrameAction::Continue => {}
            }
        }
        if keyboard.quit_requested() {
            break 'running;
        }

        unsafe {
            app.gl.clear_color(r, g, b, a);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        house.draw();

        app.swap();
    }

    log::info!("Closing after {} frames", stats.total_frames());
    Ok(())
}
