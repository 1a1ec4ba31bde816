use anyhow::Result;
use log::info;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;

mod app;
mod core;
mod engine;
mod game;

use app::App;
use game::pet::PetConfig;

fn main() -> Result<()> {
    // Initialize logger; RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Desktop Pet...");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&event_loop, PetConfig::default())?;

    info!("Drag the pet with the left mouse button, right-click it for options");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                window_id,
                event: WindowEvent::Destroyed,
            } => {
                info!("Window {:?} destroyed", window_id);
            }
            Event::WindowEvent { window_id, event } => {
                app.window_event(window_id, event, elwt);
            }
            Event::AboutToWait => {
                app.about_to_wait(elwt);
            }
            Event::LoopExiting => {
                app.log_summary();
                info!("Goodbye");
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
