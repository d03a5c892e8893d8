use std::error::Error;
use std::sync::Arc;

use glam::Vec2;
use instant::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use sparkpet::toy::{FetchBall, Plate};
use sparkpet::{ConfigError, CreatureController, PetConfig, Viewport};

use crate::render::instance::SpriteInstance;
use crate::render::GpuState;

/// Target simulation tick rate (seconds per tick).
const TICK_RATE: f64 = 1.0 / 60.0;
/// Max accumulated time before we clamp (prevents spiral of death).
const MAX_ACCUMULATOR: f64 = 0.25;
/// How often to log FPS (seconds).
const FPS_LOG_INTERVAL: f64 = 5.0;
/// Env var naming an alternate config file.
const CONFIG_ENV: &str = "SPARKPET_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "sparkpet.ron";

/// Keyboard celebration: duration (s), hop height (px), full turns.
const CELEBRATE_KEY_ARGS: (f32, f32, f32) = (2.2, 120.0, 2.0);

// ---------------------------------------------------------------------------
// Frame timing
// ---------------------------------------------------------------------------

struct FrameStats {
    frame_count: u64,
    last_log_time: Instant,
    frame_time_sum: f64,
    frame_time_min: f64,
    frame_time_max: f64,
    frames_since_log: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            frame_count: 0,
            last_log_time: Instant::now(),
            frame_time_sum: 0.0,
            frame_time_min: f64::MAX,
            frame_time_max: 0.0,
            frames_since_log: 0,
        }
    }

    fn record_frame(&mut self, dt: f64, pet: Option<&CreatureController>) {
        self.frame_count += 1;
        self.frames_since_log += 1;
        self.frame_time_sum += dt;
        self.frame_time_min = self.frame_time_min.min(dt);
        self.frame_time_max = self.frame_time_max.max(dt);

        let elapsed = self.last_log_time.elapsed().as_secs_f64();
        if elapsed >= FPS_LOG_INTERVAL {
            let avg_ms = (self.frame_time_sum / self.frames_since_log as f64) * 1000.0;
            let fps = self.frames_since_log as f64 / elapsed;
            log::info!(
                "FPS: {:.0} | avg: {:.2}ms | min: {:.2}ms | max: {:.2}ms | total frames: {}",
                fps,
                avg_ms,
                self.frame_time_min * 1000.0,
                self.frame_time_max * 1000.0,
                self.frame_count,
            );
            if let Some(pet) = pet {
                log::info!(
                    "Pet: {} | frustration: {:.0} | happiness: {:.0}",
                    pet.mood().label(),
                    pet.frustration(),
                    pet.happiness(),
                );
            }
            self.last_log_time = Instant::now();
            self.frame_time_sum = 0.0;
            self.frame_time_min = f64::MAX;
            self.frame_time_max = 0.0;
            self.frames_since_log = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The pet and its props. Built once the window size is known.
struct Scene {
    pet: CreatureController,
    plate: Plate,
    ball: FetchBall,
    viewport: Viewport,
}

impl Scene {
    fn new(config: PetConfig, viewport: Viewport) -> Self {
        let frame = Vec2::new(config.walk.frame_width, config.walk.frame_height);
        let pet = CreatureController::new(viewport.size() * 0.5, config, viewport);
        Self {
            pet,
            plate: Plate::new(frame, viewport),
            ball: FetchBall::new(viewport),
            viewport,
        }
    }

    fn tick(&mut self, dt: f32) {
        self.pet.tick(dt);
        // Fetch finished: play the happy cue.
        if self.pet.just_arrived() {
            self.pet.trigger_happy_once();
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        self.viewport = viewport;
        self.pet.set_viewport(viewport);
        self.plate.relayout(viewport);
        self.ball.relayout(viewport);
    }

    // Toys see pointer events before the pet does.

    fn pointer_down(&mut self, p: Vec2) {
        if self.ball.pointer_down(p, &mut self.pet) {
            return;
        }
        if self.plate.pointer_down(p, &mut self.pet) {
            return;
        }
        if !self.pet.on_pointer_down(p.x, p.y) {
            // A click anywhere still means someone is there.
            self.pet.notify_activity();
        }
    }

    fn pointer_moved(&mut self, p: Vec2) {
        self.plate.pointer_moved(p, self.viewport, &mut self.pet);
    }

    fn pointer_up(&mut self) {
        self.plate.pointer_up(&mut self.pet);
    }

    fn key_pressed(&mut self, key: &Key) {
        let Key::Character(c) = key else {
            return;
        };
        match c.as_str() {
            "f" | "F" => {
                self.pet.feed();
            }
            "h" | "H" => {
                self.pet.trigger_happy_once();
            }
            "c" | "C" => {
                let (duration, peak, rotations) = CELEBRATE_KEY_ARGS;
                self.pet.celebrate(duration, peak, rotations);
            }
            _ => {}
        }
    }

    fn build_instances(&self, out: &mut Vec<SpriteInstance>) {
        out.clear();
        out.push(SpriteInstance::from_plate(&self.plate));
        out.push(SpriteInstance::from_ball(&self.ball));
        out.push(SpriteInstance::from_pose(&self.pet.pose()));
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Top-level application state.
struct App {
    config: PetConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    scene: Option<Scene>,

    // Fixed timestep
    last_frame_time: Option<Instant>,
    accumulator: f64,
    tick_count: u64,

    // Frame timing
    frame_stats: FrameStats,

    /// Last known pointer position in physical pixels.
    cursor: Vec2,

    // Reusable instance buffer (avoid per-frame allocation)
    instance_buf: Vec<SpriteInstance>,

    /// Setup failure raised inside the event loop, returned from `run`.
    fatal: Option<Box<dyn Error>>,
}

impl App {
    fn new(config: PetConfig) -> Self {
        Self {
            config,
            window: None,
            gpu: None,
            scene: None,
            last_frame_time: None,
            accumulator: 0.0,
            tick_count: 0,
            frame_stats: FrameStats::new(),
            cursor: Vec2::ZERO,
            instance_buf: Vec::with_capacity(4),
            fatal: None,
        }
    }

    /// Run fixed-timestep simulation ticks.
    fn run_fixed_update(&mut self, dt: f64) {
        self.accumulator += dt;

        if self.accumulator > MAX_ACCUMULATOR {
            self.accumulator = MAX_ACCUMULATOR;
        }

        let Some(scene) = &mut self.scene else {
            return;
        };
        while self.accumulator >= TICK_RATE {
            scene.tick(TICK_RATE as f32);
            self.accumulator -= TICK_RATE;
            self.tick_count += 1;
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Box<dyn Error>) {
        log::error!("Startup failed: {err}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn on_keyboard(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        // Any key counts as the user being around.
        scene.pet.notify_activity();
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if event.logical_key == Key::Named(NamedKey::Escape) {
            log::info!("ESC pressed, exiting");
            event_loop.exit();
            return;
        }
        scene.key_pressed(&event.logical_key);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("SparkPet")
            .with_inner_size(LogicalSize::new(1280.0, 720.0))
            .with_min_inner_size(LogicalSize::new(320.0, 240.0));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let gpu = match GpuState::new(window.clone()) {
            Ok(gpu) => gpu,
            Err(e) => return self.fail(event_loop, e.into()),
        };
        self.gpu = Some(gpu);
        log::info!("wgpu + sprite pipeline initialized");

        let viewport = Viewport::new(size.width as f32, size.height as f32);
        self.scene = Some(Scene::new(self.config.clone(), viewport));

        // Continuous game loop
        event_loop.set_control_flow(ControlFlow::Poll);
        self.window = Some(window);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                }
                if new_size.width == 0 || new_size.height == 0 {
                    return;
                }
                if let Some(scene) = &mut self.scene {
                    scene.resize(Viewport::new(new_size.width as f32, new_size.height as f32));
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                if let Some(scene) = &mut self.scene {
                    scene.pointer_moved(self.cursor);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(scene) = &mut self.scene {
                    match state {
                        ElementState::Pressed => scene.pointer_down(self.cursor),
                        ElementState::Released => scene.pointer_up(),
                    }
                }
            }
            WindowEvent::Touch(touch) => {
                let p = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                self.cursor = p;
                if let Some(scene) = &mut self.scene {
                    match touch.phase {
                        TouchPhase::Started => scene.pointer_down(p),
                        TouchPhase::Moved => scene.pointer_moved(p),
                        TouchPhase::Ended | TouchPhase::Cancelled => scene.pointer_up(),
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.on_keyboard(event_loop, &event);
            }
            WindowEvent::RedrawRequested => {
                // --- Timing ---
                let now = Instant::now();
                if let Some(last) = self.last_frame_time {
                    let dt = now.duration_since(last).as_secs_f64();
                    self.frame_stats
                        .record_frame(dt, self.scene.as_ref().map(|s| &s.pet));
                    self.run_fixed_update(dt);
                }
                self.last_frame_time = Some(now);

                // --- Render ---
                if let Some(scene) = &self.scene {
                    scene.build_instances(&mut self.instance_buf);
                }
                if let Some(gpu) = &mut self.gpu {
                    gpu.render(&self.instance_buf);
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("Shutting down after {} ticks", self.tick_count);
    }
}

/// Read the RON config named by `SPARKPET_CONFIG`, or `sparkpet.ron`.
/// A missing file means defaults; a broken one is an error.
fn load_config() -> Result<PetConfig, ConfigError> {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    match PetConfig::load(&path) {
        Ok(config) => {
            log::info!("Loaded config from {path}");
            Ok(config)
        }
        Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No config at {path}, using defaults");
            Ok(PetConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Entry point: load config, create the event loop and run.
pub fn run() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    if let Some(err) = app.fatal.take() {
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkpet::Mood;

    const DT: f32 = 1.0 / 60.0;

    fn scene() -> Scene {
        Scene::new(PetConfig::default(), Viewport::new(1280.0, 720.0))
    }

    fn run_for(scene: &mut Scene, seconds: f32) {
        for _ in 0..(seconds / DT).round() as usize {
            scene.tick(DT);
        }
    }

    #[test]
    fn any_click_keeps_pet_awake() {
        let mut scene = scene();
        run_for(&mut scene, 29.0);
        assert_ne!(scene.pet.mood(), Mood::Sleep);

        scene.pointer_down(Vec2::new(1270.0, 10.0));
        scene.pointer_up();
        run_for(&mut scene, 2.0);
        assert_ne!(scene.pet.mood(), Mood::Sleep);
    }

    #[test]
    fn minimised_window_leaves_scene_alone() {
        let mut scene = scene();
        scene.tick(DT);
        let (pet, plate, ball) = (scene.pet.position(), scene.plate.pos, scene.ball.pos);

        scene.resize(Viewport::new(0.0, 0.0));
        scene.tick(DT);
        assert_eq!(scene.viewport, Viewport::new(1280.0, 720.0));
        assert!(scene.pet.position().distance(pet) < 10.0);
        assert_eq!(scene.plate.pos, plate);
        assert_eq!(scene.ball.pos, ball);
    }
}
