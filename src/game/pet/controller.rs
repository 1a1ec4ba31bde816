// Pet controller
//
// Owns all mutable pet state and turns host events (timer tasks, pointer
// events, menu commands) into state changes. It never touches a window; the
// host reads `position()`, `frame()` and `settings()` back after each call
// and applies them.

use super::animation::{FrameRef, WalkCycle};
use super::config::PetConfig;
use super::drag::DragSession;
use super::menu::{sound_label, ContextMenu, MenuCommand};
use super::settings::Settings;
use super::state::{Motion, PetState};
use crate::core::math::max_offset;
use crate::engine::scheduler::{Schedule, Task};
use glam::IVec2;
use rand::Rng;
use std::time::Duration;

/// What the host should do after a menu command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Keep running; window attributes may need to be re-applied
    Continue,
    /// Leave the event loop
    Exit,
}

/// Drives the walk/pause state machine for one pet
#[derive(Debug)]
pub struct PetController {
    config: PetConfig,
    state: PetState,
    walk: WalkCycle,
    frame: FrameRef,
    /// Pixel width of every frame, used for the right screen edge
    frame_width: u32,
    drag: Option<DragSession>,
    settings: Settings,
    menu: ContextMenu,
}

impl PetController {
    /// Create a controller for a walk cycle of `walk_frame_count` frames
    pub fn new(config: PetConfig, walk_frame_count: usize, frame_width: u32) -> Self {
        let state = PetState::new(config.start_position);
        let settings = Settings::default();

        Self {
            menu: ContextMenu::new(&settings),
            frame: FrameRef::standing(state.facing),
            walk: WalkCycle::new(walk_frame_count),
            config,
            state,
            frame_width,
            drag: None,
            settings,
        }
    }

    /// First task to schedule when the host starts
    pub fn start(&self) -> Schedule {
        log::debug!("Walk cycle has {} frames", self.walk.frame_count());
        Schedule::tick(Duration::ZERO)
    }

    /// Run a scheduled task and return the one that should follow it
    pub fn run_task<R: Rng>(&mut self, task: Task, screen_width: u32, rng: &mut R) -> Schedule {
        match task {
            Task::Tick => self.animate(screen_width, rng),
            Task::Resume => self.resume(screen_width, rng),
        }
    }

    /// One animation tick.
    ///
    /// While walking this shows the next walk frame and steps the pet.
    /// Every tick then rolls for a pause.
    pub fn animate<R: Rng>(&mut self, screen_width: u32, rng: &mut R) -> Schedule {
        if self.state.motion.is_walking() {
            let shown = self.walk.advance();
            self.frame = FrameRef::walking(shown, self.state.facing);

            if self.drag.is_none() {
                let max_x = max_offset(screen_width, self.frame_width);
                if self.state.walk(self.config.move_distance, max_x) {
                    log::debug!(
                        "Reached edge at x={}, now facing {:?}",
                        self.state.position.x,
                        self.state.facing
                    );
                }
            }
        }

        if rng.gen_bool(self.config.pause_probability) {
            self.state.motion = Motion::Paused;
            self.frame = FrameRef::standing(self.state.facing);

            let millis = rng.gen_range(self.config.pause_duration_ms.clone());
            log::debug!("Pausing for {} ms", millis);
            Schedule::resume(Duration::from_millis(millis))
        } else {
            Schedule::tick(self.config.animation_interval)
        }
    }

    /// Leave the paused state and tick straight away
    pub fn resume<R: Rng>(&mut self, screen_width: u32, rng: &mut R) -> Schedule {
        log::debug!("Resuming walk");
        self.state.motion = Motion::Walking;
        self.animate(screen_width, rng)
    }

    /// Pointer pressed at `local_pointer` inside the pet window
    pub fn begin_drag(&mut self, local_pointer: IVec2) {
        self.drag = Some(DragSession::begin(local_pointer));
    }

    /// Pointer moved to `root_pointer` in screen coordinates.
    ///
    /// Returns the new window origin while a drag is in progress.
    pub fn drag_to(&mut self, root_pointer: IVec2) -> Option<IVec2> {
        let session = self.drag?;
        self.state.position = session.window_origin(root_pointer);
        Some(self.state.position)
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether a click should play the click sound
    pub fn should_play_click(&self) -> bool {
        self.settings.sound_enabled
    }

    /// Apply a context menu command
    pub fn invoke(&mut self, command: MenuCommand) -> MenuOutcome {
        match command {
            MenuCommand::ToggleAlwaysOnTop => {
                let on_top = self.settings.toggle_always_on_top();
                log::info!("Always on top: {}", on_top);
                MenuOutcome::Continue
            }
            MenuCommand::ToggleSound => {
                let enabled = self.settings.toggle_sound();
                if self.menu.set_label(MenuCommand::ToggleSound, sound_label(enabled)) {
                    log::debug!("Menu now shows {:?}", sound_label(enabled));
                }
                log::info!("Sound enabled: {}", enabled);
                MenuOutcome::Continue
            }
            MenuCommand::Exit => MenuOutcome::Exit,
        }
    }

    /// Current window origin
    pub fn position(&self) -> IVec2 {
        self.state.position
    }

    /// Image the host should display
    pub fn frame(&self) -> FrameRef {
        self.frame
    }

    #[cfg(test)]
    pub fn state(&self) -> &PetState {
        &self.state
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pet::animation::Pose;
    use crate::game::pet::state::Facing;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SCREEN: u32 = 1920;
    const FRAME_WIDTH: u32 = 120;
    const FRAMES: usize = 6;

    fn never_pausing() -> PetController {
        let config = PetConfig::default().with_pauses(0.0, 2000..=5000);
        PetController::new(config, FRAMES, FRAME_WIDTH)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_starts_walking_right() {
        let pet = never_pausing();
        assert_eq!(pet.state().motion, Motion::Walking);
        assert_eq!(pet.state().facing, Facing::Right);
        assert_eq!(pet.position(), IVec2::new(200, 200));
        assert_eq!(pet.start().task, Task::Tick);
    }

    #[test]
    fn test_tick_moves_and_schedules_next_tick() {
        let mut pet = never_pausing();
        let next = pet.animate(SCREEN, &mut rng());
        assert_eq!(next, Schedule::tick(Duration::from_millis(100)));
        assert_eq!(pet.position(), IVec2::new(205, 200));
        assert_eq!(pet.frame(), FrameRef::walking(0, Facing::Right));
    }

    #[test]
    fn test_position_stays_on_screen() {
        let mut pet = never_pausing();
        let mut rng = rng();
        let max_x = (SCREEN - FRAME_WIDTH) as i32;

        for _ in 0..5000 {
            let before = pet.state().facing;
            pet.animate(SCREEN, &mut rng);
            let x = pet.position().x;
            assert!((0..=max_x).contains(&x), "x={} out of bounds", x);

            let at_edge = x == 0 || x == max_x;
            assert_eq!(pet.state().facing != before, at_edge);
            assert_eq!(pet.position().y, 200);
        }
    }

    #[test]
    fn test_frames_cycle_without_skipping() {
        let mut pet = never_pausing();
        let mut rng = rng();
        for tick in 0..40 {
            pet.animate(SCREEN, &mut rng);
            match pet.frame().pose {
                Pose::Walking(index) => assert_eq!(index, tick % FRAMES),
                Pose::Standing => panic!("never-pausing pet stood still"),
            }
        }
    }

    #[test]
    fn test_narrow_screen_pins_to_origin() {
        let mut pet = never_pausing();
        let mut rng = rng();
        for _ in 0..10 {
            pet.animate(FRAME_WIDTH / 2, &mut rng);
            assert_eq!(pet.position().x, 0);
        }
    }

    #[test]
    fn test_pause_shows_standing_frame() {
        let config = PetConfig::default().with_pauses(1.0, 2000..=5000);
        let mut pet = PetController::new(config, FRAMES, FRAME_WIDTH);

        let next = pet.animate(SCREEN, &mut rng());
        assert_eq!(next.task, Task::Resume);
        assert!(next.delay >= Duration::from_millis(2000));
        assert!(next.delay <= Duration::from_millis(5000));
        assert_eq!(pet.state().motion, Motion::Paused);
        assert_eq!(pet.frame(), FrameRef::standing(Facing::Right));
    }

    #[test]
    fn test_paused_tick_does_not_move() {
        let config = PetConfig::default().with_pauses(1.0, 10..=10);
        let mut pet = PetController::new(config, FRAMES, FRAME_WIDTH);
        let mut rng = rng();

        pet.animate(SCREEN, &mut rng);
        let position = pet.position();
        pet.animate(SCREEN, &mut rng);
        assert_eq!(pet.position(), position);
        assert_eq!(pet.frame().pose, Pose::Standing);
    }

    #[test]
    fn test_resume_walks_immediately() {
        let config = PetConfig::default().with_pauses(1.0, 10..=10);
        let mut pet = PetController::new(config, FRAMES, FRAME_WIDTH);
        let mut rng = rng();

        pet.animate(SCREEN, &mut rng);
        let before = pet.position();
        pet.run_task(Task::Resume, SCREEN, &mut rng);
        assert_eq!(pet.position().x, before.x + 5);
    }

    #[test]
    fn test_pause_draws_within_bounds() {
        let config = PetConfig::default();
        let mut pet = PetController::new(config, FRAMES, FRAME_WIDTH);
        let mut rng = rng();
        let trials = 20_000;
        let mut pauses = 0;

        let mut next = pet.start();
        for _ in 0..trials {
            next = pet.run_task(next.task, SCREEN, &mut rng);
            if next.task == Task::Resume {
                pauses += 1;
                assert!(next.delay >= Duration::from_millis(2000));
                assert!(next.delay <= Duration::from_millis(5000));
            } else {
                assert_eq!(next.delay, Duration::from_millis(100));
            }
        }

        assert_abs_diff_eq!(pauses as f64 / trials as f64, 0.10, epsilon = 0.02);
    }

    #[test]
    fn test_drag_sets_position_from_pointer() {
        let mut pet = never_pausing();
        pet.begin_drag(IVec2::new(30, 40));

        let moves = [IVec2::new(500, 500), IVec2::new(20, 700), IVec2::new(1000, 10)];
        for pointer in moves {
            assert_eq!(pet.drag_to(pointer), Some(pointer - IVec2::new(30, 40)));
        }
        assert_eq!(pet.position(), IVec2::new(970, -30));

        pet.end_drag();
        assert_eq!(pet.drag_to(IVec2::new(0, 0)), None);
        assert_eq!(pet.position(), IVec2::new(970, -30));
    }

    #[test]
    fn test_release_without_drag_is_ignored() {
        let mut pet = never_pausing();
        pet.end_drag();
        assert!(!pet.is_dragging());
        assert_eq!(pet.drag_to(IVec2::new(50, 50)), None);
        assert_eq!(pet.position(), IVec2::new(200, 200));
    }

    #[test]
    fn test_drag_tracks_pointer_while_window_lags() {
        use crate::engine::input::PointerTracker;
        use winit::dpi::PhysicalPosition;

        let mut pet = never_pausing();
        let mut pointer = PointerTracker::new();
        let grab = IVec2::new(30, 40);
        pet.begin_drag(grab);

        // Each move request reaches the real window one event late
        let mut window_origin = IVec2::new(200, 200);
        let mut requested = window_origin;
        let mut origins = Vec::new();
        for step in 1..=3 {
            let screen = IVec2::new(200, 200) + grab + IVec2::new(10 * step, 0);
            let local = screen - window_origin;
            pointer.moved(PhysicalPosition::new(local.x as f64, local.y as f64));

            let root = pointer.root(window_origin).unwrap();
            window_origin = requested;
            requested = pet.drag_to(root).unwrap();
            origins.push(requested.x);
        }

        assert_eq!(origins, vec![210, 220, 230]);
        assert_eq!(pet.position(), IVec2::new(260, 240) - grab);
    }

    #[test]
    fn test_ticks_hold_position_while_dragging() {
        let mut pet = never_pausing();
        let mut rng = rng();
        pet.begin_drag(IVec2::new(10, 10));
        pet.drag_to(IVec2::new(410, 310));

        pet.animate(SCREEN, &mut rng);
        assert_eq!(pet.position(), IVec2::new(400, 300));
        assert_eq!(pet.frame().pose, Pose::Walking(0));
    }

    #[test]
    fn test_toggle_always_on_top_twice() {
        let mut pet = never_pausing();
        let original = pet.settings().always_on_top;
        assert_eq!(pet.invoke(MenuCommand::ToggleAlwaysOnTop), MenuOutcome::Continue);
        assert_ne!(pet.settings().always_on_top, original);
        pet.invoke(MenuCommand::ToggleAlwaysOnTop);
        assert_eq!(pet.settings().always_on_top, original);
    }

    #[test]
    fn test_toggle_sound_updates_label_once() {
        let mut pet = never_pausing();
        for toggle in 1..=4u64 {
            let before = pet.menu().label(MenuCommand::ToggleSound).map(str::to_string);
            pet.invoke(MenuCommand::ToggleSound);
            let enabled = pet.settings().sound_enabled;

            assert_ne!(
                pet.menu().label(MenuCommand::ToggleSound).map(str::to_string),
                before
            );
            assert_eq!(
                pet.menu().label(MenuCommand::ToggleSound),
                Some(sound_label(enabled))
            );
            assert_eq!(enabled, toggle % 2 == 0);
            assert_eq!(pet.should_play_click(), enabled);
        }
    }

    #[test]
    fn test_exit_command() {
        let mut pet = never_pausing();
        assert_eq!(pet.invoke(MenuCommand::Exit), MenuOutcome::Exit);
    }
}
