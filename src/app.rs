// Host application: connects winit windows, the GPU and audio to the pet
//
// The pet window shows the current frame and receives drag and click input.
// A second, normally hidden window shows the right-click menu through egui.

use crate::engine::assets::AssetLoader;
use crate::engine::audio::ClickSound;
use crate::engine::input::{popup_origin, Action, InputBindings, InputSource, PointerTracker};
use crate::engine::renderer::{GpuContext, MenuPainter, SpriteRenderer, Texture};
use crate::engine::scheduler::Scheduler;
use crate::game::pet::{FrameRef, MenuCommand, MenuOutcome, PetConfig, PetController, SpriteSet};
use anyhow::{Context, Result};
use glam::IVec2;
use log::{debug, error, info};
use rand::rngs::ThreadRng;
use std::sync::Arc;
use std::time::Instant;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopWindowTarget};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder, WindowId, WindowLevel};

/// Used when the windowing system cannot report a monitor
const FALLBACK_SCREEN_SIZE: PhysicalSize<u32> = PhysicalSize::new(1920, 1080);

pub struct App {
    gpu: GpuContext,
    pet: SpriteRenderer,
    menu: MenuPainter,

    sprites: SpriteSet<Texture>,

    controller: PetController,
    scheduler: Scheduler,
    rng: ThreadRng,
    sound: ClickSound,

    bindings: InputBindings,
    pointer: PointerTracker,
    menu_open: bool,

    /// Where the pet window actually is, as last reported by the platform
    window_origin: IVec2,
    /// Window origin last sent to the windowing system
    applied_position: IVec2,
    /// Frame last presented in the pet window
    shown_frame: Option<FrameRef>,
}

impl App {
    /// Load assets, open both windows and initialize the GPU.
    ///
    /// Assets are decoded before any window is created, so a missing or
    /// broken file aborts startup without flashing a window.
    pub fn new(event_loop: &EventLoopWindowTarget<()>, config: PetConfig) -> Result<Self> {
        config.validate().context("Invalid pet configuration")?;

        let loader = AssetLoader::new(&config.asset_dir);
        info!("Loading assets from {}", loader.base_path().display());
        let images = SpriteSet::load(&loader, &config).context("Failed to load pet images")?;
        let sound = ClickSound::load(&loader, &config.click_sound)
            .context("Failed to load click sound")?;
        if !sound.is_audible() {
            info!("Running without sound");
        }

        let (frame_width, frame_height) = images.frame_size();
        let controller = PetController::new(config.clone(), images.walk_frame_count(), frame_width);
        let position = controller.position();

        let pet_window = Arc::new(
            WindowBuilder::new()
                .with_title(&config.window_title)
                .with_decorations(false)
                .with_transparent(true)
                .with_resizable(false)
                .with_window_level(window_level(controller.settings().always_on_top))
                .with_inner_size(PhysicalSize::new(frame_width, frame_height))
                .with_position(PhysicalPosition::new(position.x, position.y))
                .build(event_loop)?,
        );

        let (menu_width, menu_height) = controller.menu().size();
        let menu_window = Arc::new(
            WindowBuilder::new()
                .with_title(format!("{} Menu", config.window_title))
                .with_decorations(false)
                .with_resizable(false)
                .with_visible(false)
                .with_window_level(WindowLevel::AlwaysOnTop)
                .with_inner_size(LogicalSize::new(menu_width, menu_height))
                .build(event_loop)?,
        );

        info!("Windows created successfully");

        let window_origin = pet_window
            .outer_position()
            .map(|origin| IVec2::new(origin.x, origin.y))
            .unwrap_or(position);

        let (gpu, pet_target) = pollster::block_on(GpuContext::new(pet_window))?;
        let pet = SpriteRenderer::new(&gpu, pet_target);
        let menu = MenuPainter::new(&gpu, gpu.create_target(menu_window)?);

        let mut frame_index = 0;
        let sprites = images.map(|image| {
            frame_index += 1;
            Texture::from_image(&gpu, &image, &format!("Pet Frame {}", frame_index))
        });

        let mut scheduler = Scheduler::new();
        scheduler.schedule(controller.start());

        Ok(Self {
            gpu,
            pet,
            menu,
            sprites,
            controller,
            scheduler,
            rng: rand::thread_rng(),
            sound,
            bindings: InputBindings::default(),
            pointer: PointerTracker::new(),
            menu_open: false,
            window_origin,
            applied_position: position,
            shown_frame: None,
        })
    }

    /// Dispatch a window event to the pet or the menu
    pub fn window_event(
        &mut self,
        window_id: WindowId,
        event: WindowEvent,
        elwt: &EventLoopWindowTarget<()>,
    ) {
        if window_id == self.pet.window().id() {
            self.pet_event(event, elwt);
        } else if window_id == self.menu.window().id() {
            self.menu_event(event, elwt);
        }
    }

    /// Run due timer tasks and sleep until the next one
    pub fn about_to_wait(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let now = Instant::now();
        if let Some(task) = self.scheduler.take_due(now) {
            let screen_width = self.screen_size().width;
            let next = self.controller.run_task(task, screen_width, &mut self.rng);
            self.scheduler.schedule(next);
            self.sync_pet();
        }

        match self.scheduler.next_deadline() {
            Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => elwt.set_control_flow(ControlFlow::Wait),
        }
    }

    /// Log how long the pet ran before the loop exits
    pub fn log_summary(&self) {
        info!(
            "Ran {} timer tasks in {:.1}s",
            self.scheduler.fired_count(),
            self.scheduler.elapsed().as_secs_f32()
        );
    }

    fn pet_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                self.pet.resize(&self.gpu, size);
                self.pet.window().request_redraw();
            }
            WindowEvent::Moved(origin) => {
                self.window_origin = IVec2::new(origin.x, origin.y);
            }
            WindowEvent::RedrawRequested => {
                let frame = self.controller.frame();
                if let Err(e) = self.pet.render(&self.gpu, self.sprites.frame(frame)) {
                    error!("Failed to render pet: {}", e);
                }
                self.shown_frame = Some(frame);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.moved(position);
                if self.controller.is_dragging() {
                    // Cursor positions are relative to where the window is,
                    // which can trail the origin last requested
                    let root = self.pointer.root(self.window_origin);
                    if root.and_then(|root| self.controller.drag_to(root)).is_some() {
                        self.sync_pet();
                    }
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if !self.controller.is_dragging() {
                    self.pointer.left();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.pet_button(button, state);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if !event.repeat {
                        let action = self.bindings.resolve(InputSource::key(code), event.state);
                        if action == Some(Action::DismissMenu) {
                            self.close_menu();
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn pet_button(&mut self, button: MouseButton, state: ElementState) {
        match self.bindings.resolve(InputSource::mouse(button), state) {
            Some(Action::Grab) => {
                self.close_menu();
                let local = self.pointer.local().unwrap_or(IVec2::ZERO);
                self.controller.begin_drag(local);
                if self.controller.should_play_click() {
                    self.sound.play();
                }
            }
            Some(Action::Release) => self.controller.end_drag(),
            Some(Action::OpenMenu) => self.open_menu(),
            Some(Action::DismissMenu) => self.close_menu(),
            None => {}
        }
    }

    fn menu_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        if self.menu.on_window_event(&event) {
            self.menu.window().request_redraw();
        }

        match event {
            WindowEvent::CloseRequested | WindowEvent::Focused(false) => self.close_menu(),
            WindowEvent::Resized(size) => self.menu.resize(&self.gpu, size),
            WindowEvent::RedrawRequested if self.menu_open => {
                match self.menu.paint(&self.gpu, self.controller.menu()) {
                    Ok(Some(command)) => {
                        self.close_menu();
                        self.run_command(command, elwt);
                    }
                    Ok(None) => {}
                    Err(e) => error!("Failed to render menu: {}", e),
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let action = self.bindings.resolve(InputSource::key(code), event.state);
                    if action == Some(Action::DismissMenu) {
                        self.close_menu();
                    }
                }
            }
            _ => {}
        }
    }

    fn run_command(&mut self, command: MenuCommand, elwt: &EventLoopWindowTarget<()>) {
        debug!("Menu command {:?}", command);
        match self.controller.invoke(command) {
            MenuOutcome::Continue => {
                let on_top = self.controller.settings().always_on_top;
                self.pet.window().set_window_level(window_level(on_top));
            }
            MenuOutcome::Exit => {
                info!("Exit requested, shutting down...");
                elwt.exit();
            }
        }
    }

    fn open_menu(&mut self) {
        let Some(anchor) = self.pointer.root(self.window_origin) else {
            return;
        };

        let screen = self.screen_size();
        let window = self.menu.window();
        let origin = popup_origin(anchor, window.outer_size(), screen);

        window.set_outer_position(PhysicalPosition::new(origin.x, origin.y));
        window.set_visible(true);
        window.focus_window();
        window.request_redraw();
        self.menu_open = true;
    }

    fn close_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            self.menu.window().set_visible(false);
        }
    }

    /// Push the controller's position and frame to the pet window
    fn sync_pet(&mut self) {
        let position = self.controller.position();
        if position != self.applied_position {
            self.pet
                .window()
                .set_outer_position(PhysicalPosition::new(position.x, position.y));
            self.applied_position = position;
        }

        if self.shown_frame != Some(self.controller.frame()) {
            self.pet.window().request_redraw();
        }
    }

    fn screen_size(&self) -> PhysicalSize<u32> {
        let window: &Window = self.pet.window();
        match window.current_monitor().or_else(|| window.primary_monitor()) {
            Some(monitor) => monitor.size(),
            None => {
                debug!("No monitor reported, assuming {:?}", FALLBACK_SCREEN_SIZE);
                FALLBACK_SCREEN_SIZE
            }
        }
    }
}

fn window_level(always_on_top: bool) -> WindowLevel {
    if always_on_top {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    }
}
