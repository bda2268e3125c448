use anyhow::{Context, Result};
use glam::Vec2;
use log::{error, info};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::{AssetLoader, FrameStore};
use engine::game_loop::TickClock;
use engine::input::InputManager;
use engine::renderer::{Camera, PixelsRenderer, RenderSink, SpriteDraw};
use game::characters::{AnimationCategory, Character, Facing, FrameRegistry, BASE_STATS};
use game::config::AppConfig;
use game::level::{Level, RapierPlatformer, TileMap};
use game::simulation::Simulation;

/// Everything loaded from disk before the window opens
struct Scene {
    level: Level,
    simulation: Simulation<RapierPlatformer>,
    frames: FrameStore,
}

fn load_scene(config: &AppConfig) -> Result<Scene> {
    let loader = AssetLoader::new(config.asset_root());
    let mut frames = FrameStore::new();

    let map_path = config.map_path();
    let map = TileMap::load(&map_path)
        .with_context(|| format!("Failed to load map {}", map_path.display()))?;
    let physics = RapierPlatformer::new(&map, config.tile_size);
    let level = Level::load(&map, config.tile_size, &loader, &mut frames)
        .context("Failed to load level tiles")?;

    let registry =
        FrameRegistry::load(&loader, &mut frames).context("Failed to load character frames")?;
    info!("Loaded {} frames", frames.len());

    let stand = registry
        .sequence(AnimationCategory::Stand, Facing::Right)?
        .get(0)
        .context("Standing sequence has no first frame")?;
    let stand_size = registry
        .frame_size(stand)
        .context("Standing frame size unknown")?;

    let spawn = Vec2::new(
        config.screen_width as f32 / 2.0,
        config.screen_height as f32 / 2.0,
    );
    let character = Character::new(spawn, stand_size, BASE_STATS);
    let simulation = Simulation::new(character, physics, registry, Camera::new(config.viewport()))?;

    Ok(Scene {
        level,
        simulation,
        frames,
    })
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Scroll Animator...");

    let config = AppConfig::from_env();
    let Scene {
        level,
        mut simulation,
        frames,
    } = load_scene(&config)?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.screen_width,
                config.screen_height,
            ))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = PixelsRenderer::new(
        window.clone(),
        Arc::new(frames),
        config.screen_width,
        config.screen_height,
    )?;
    renderer.set_viewport(simulation.camera().viewport());

    let mut input = InputManager::default();
    let mut clock = TickClock::new();
    let failure: Rc<RefCell<Option<anyhow::Error>>> = Rc::new(RefCell::new(None));
    let loop_failure = Rc::clone(&failure);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                if let Err(e) = renderer.resize(physical_size.width, physical_size.height) {
                    error!("Resize failed: {}", e);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => input.reset(),
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => input.process_keyboard_event(&event),
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                for _ in 0..clock.begin_frame() {
                    let events = input.drain();
                    match simulation.tick(&events) {
                        Ok(report) => {
                            if let Some(viewport) = report.viewport {
                                renderer.set_viewport(viewport);
                            }
                        }
                        Err(e) => {
                            error!("Animation failed: {}", e);
                            *loop_failure.borrow_mut() = Some(e.into());
                            elwt.exit();
                            return;
                        }
                    }
                }

                let sprites: Vec<SpriteDraw> = level
                    .visible_tiles(simulation.camera().visible_rect())
                    .copied()
                    .chain(simulation.character_sprite())
                    .collect();

                if let Err(e) = renderer.draw(&sprites) {
                    error!("Render failed: {}", e);
                    *loop_failure.borrow_mut() = Some(e.into());
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    if let Some(e) = failure.borrow_mut().take() {
        return Err(e);
    }

    info!("Goodbye");
    Ok(())
}
