//! Game context and frame loop.
//!
//! [`Game`] owns everything the demo mutates per tick: the camera, the
//! character pose, both fox clips, the textures and the grayscale shader.
//! [`Game::run`] drives the tick sequence in a fixed order: refresh input,
//! check the quit combo, update state, render the world under the camera,
//! render the UI layer, then measure the frame delta for the next tick.
//!
//! The loop uses a variable timestep clamped to [`MAX_FRAME_DELTA`] so a
//! long stall moves the character and animations by at most one clamped
//! step instead of teleporting them.

use raylib::prelude::*;

use crate::input::codes::{KeyCode, MouseButton};
use crate::input::{Input, InputMode};
use crate::visuals::animatedsprite::AnimatedSprite;

/// Character speed in world pixels per second.
const CHARACTER_SPEED: f32 = 150.0;
/// Uniform draw scale of the fox sprite.
const CHARACTER_SCALE: f32 = 3.0;
/// Degrees per second the gem spins at.
const GEM_ROTATION_SPEED: f32 = 50.0;
/// Click feedback decay in units per second (the timer is set to 1 on click).
const CLICK_TIMER_DECAY: f32 = 2.0;
/// Amplitude of the camera's vertical bob in world pixels.
const CAMERA_BOB_AMPLITUDE: f32 = 50.0;
/// Upper bound for the per-tick delta, in seconds.
const MAX_FRAME_DELTA: f64 = 1.0 / 30.0;

/// Limit a measured frame delta so stalls cannot produce a huge step.
fn clamp_frame_delta(dt: f64) -> f64 {
    dt.min(MAX_FRAME_DELTA)
}

/// Character pose derived from movement input, read by rendering to pick
/// the clip and the facing flip.
#[derive(Debug, Clone, Copy)]
pub struct CharacterState {
    pub position: Vector2,
    pub moving: bool,
    pub flipped: bool,
}

impl CharacterState {
    pub fn new() -> Self {
        Self {
            position: Vector2::zero(),
            moving: false,
            flipped: false,
        }
    }

    /// Apply one tick of directional input.
    ///
    /// `direction` accumulates -1/0/+1 per axis from the pressed keys. A
    /// non-zero vector is normalized before scaling, so diagonal movement
    /// covers the same distance per tick as movement along one axis.
    /// Facing only changes while there is horizontal input; vertical-only
    /// movement keeps the previous flip. A zero vector marks the character
    /// as not moving and touches nothing else.
    pub fn apply_movement(&mut self, direction: Vector2, speed: f32, dt: f32) {
        let length = direction.length();
        if length > 0.0 {
            let step = direction.scale_by(1.0 / length).scale_by(speed * dt);
            self.position = self.position + step;
            self.moving = true;
            if direction.x != 0.0 {
                self.flipped = direction.x < 0.0;
            }
        } else {
            self.moving = false;
        }
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the demo owns and mutates across ticks.
///
/// Construction loads all GPU resources once; they are released by Drop
/// when the value leaves scope, so `Game` must be dropped before the
/// raylib handle that created them.
pub struct Game {
    running: bool,
    camera: Camera2D,
    window_size: Vector2,
    input: Input,

    gem_texture: Texture2D,
    fox_texture: Texture2D,
    grayscale_shader: Shader,
    fox_idle: AnimatedSprite,
    fox_walk: AnimatedSprite,

    character: CharacterState,
    cursor_position: Vector2,
    cursor_world_position: Vector2,
    mouse_click_timer: f32,
    gem_rotation: f32,
    fps: f32,
}

impl Game {
    /// Load textures, shader and clips. Fails with a description of the
    /// first resource that could not be loaded.
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Self, String> {
        let gem_texture = rl
            .load_texture(thread, "./assets/sprites/gem.png")
            .map_err(|e| format!("Failed to load gem texture: {}", e))?;
        let fox_texture = rl
            .load_texture(thread, "./assets/sprites/fox_animations.png")
            .map_err(|e| format!("Failed to load fox sheet: {}", e))?;

        // A missing shader file falls back to raylib's default shader and
        // the gem simply renders in color.
        let grayscale_shader = rl.load_shader(
            thread,
            Some("./assets/shaders/grayscale.vs"),
            Some("./assets/shaders/grayscale.fs"),
        );

        // Idle and walk are the first two rows of the same 5-column sheet.
        let fox_idle = AnimatedSprite::new(
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 32.0, y: 32.0 },
            Vector2 { x: 0.5, y: 0.5 },
            5,
            0.2,
            5,
            0,
            true,
        )
        .map_err(|e| format!("Invalid idle clip: {}", e))?;
        let fox_walk = AnimatedSprite::new(
            Vector2 { x: 0.0, y: 32.0 },
            Vector2 { x: 32.0, y: 32.0 },
            Vector2 { x: 0.5, y: 0.5 },
            5,
            0.2,
            5,
            0,
            true,
        )
        .map_err(|e| format!("Invalid walk clip: {}", e))?;

        let window_size = Vector2 {
            x: rl.get_screen_width() as f32,
            y: rl.get_screen_height() as f32,
        };
        let camera = Camera2D {
            target: Vector2::zero(),
            offset: window_size.scale_by(0.5),
            rotation: 0.0,
            zoom: 1.0,
        };

        let mut game = Self {
            running: false,
            camera,
            window_size,
            input: Input::new(),
            gem_texture,
            fox_texture,
            grayscale_shader,
            fox_idle,
            fox_walk,
            character: CharacterState::new(),
            cursor_position: Vector2::zero(),
            cursor_world_position: Vector2::zero(),
            mouse_click_timer: 0.0,
            gem_rotation: 0.0,
            fps: 0.0,
        };

        // Both clips run from the start; selection happens at render time.
        game.fox_idle.play();
        game.fox_walk.play();

        log::info!(
            "Game resources loaded: gem {}x{}, fox sheet {}x{}",
            game.gem_texture.width,
            game.gem_texture.height,
            game.fox_texture.width,
            game.fox_texture.height
        );

        Ok(game)
    }

    /// Run the frame loop until the window closes or Alt+F4 fires.
    pub fn run(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.running = true;
        // The first tick has no measurement yet; assume the clamp value.
        let mut delta_time = MAX_FRAME_DELTA;

        while self.running && !rl.window_should_close() {
            let frame_start = rl.get_time();

            self.window_size = Vector2 {
                x: rl.get_screen_width() as f32,
                y: rl.get_screen_height() as f32,
            };
            self.input.refresh(self.window_size);

            if self.input.key(rl, KeyCode::LeftAlt, InputMode::Down)
                && self.input.key(rl, KeyCode::F4, InputMode::Pressed)
            {
                self.running = false;
            }

            self.update(rl, delta_time);

            {
                let mut d = rl.begin_drawing(thread);
                d.clear_background(Color::GRAY);
                {
                    let mut d2 = d.begin_mode2D(self.camera);
                    self.render(&mut d2);
                }
                self.render_ui(&mut d);
            }

            delta_time = clamp_frame_delta(rl.get_time() - frame_start);
        }

        log::info!("Frame loop stopped");
    }

    /// Advance all per-tick state from the current input and delta.
    fn update(&mut self, rl: &RaylibHandle, dt: f64) {
        self.gem_rotation += GEM_ROTATION_SPEED * dt as f32;
        self.fps = (1.0 / dt) as f32;

        self.camera.target = Vector2 {
            x: 0.0,
            y: rl.get_time().sin() as f32 * CAMERA_BOB_AMPLITUDE,
        };
        self.camera.offset = self.window_size.scale_by(0.5);

        self.cursor_position = self.input.cursor_normalized(rl);
        self.cursor_world_position = self.input.cursor_world(rl, self.camera);

        if self.input.mouse_button(rl, MouseButton::Left, InputMode::Down) {
            self.mouse_click_timer = 1.0;
        } else {
            self.mouse_click_timer =
                (self.mouse_click_timer - dt as f32 * CLICK_TIMER_DECAY).max(0.0);
        }

        let mut direction = Vector2::zero();
        if self.input.key(rl, KeyCode::A, InputMode::Down)
            || self.input.key(rl, KeyCode::Left, InputMode::Down)
        {
            direction.x -= 1.0;
        }
        if self.input.key(rl, KeyCode::D, InputMode::Down)
            || self.input.key(rl, KeyCode::Right, InputMode::Down)
        {
            direction.x += 1.0;
        }
        if self.input.key(rl, KeyCode::W, InputMode::Down)
            || self.input.key(rl, KeyCode::Up, InputMode::Down)
        {
            direction.y -= 1.0;
        }
        if self.input.key(rl, KeyCode::S, InputMode::Down)
            || self.input.key(rl, KeyCode::Down, InputMode::Down)
        {
            direction.y += 1.0;
        }
        self.character
            .apply_movement(direction, CHARACTER_SPEED, dt as f32);

        if self.input.key(rl, KeyCode::R, InputMode::Pressed) {
            self.fox_idle.reset();
            self.fox_walk.reset();
        }

        // Both clips advance every tick so switching between them never
        // shows a stale frame.
        self.fox_idle.advance(dt);
        self.fox_walk.advance(dt);
    }

    /// Draw the world layer: axes, the cursor's world position and the fox.
    fn render(&self, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
        d2.draw_line(-1000, 0, 1000, 0, Color::RED.fade(0.5));
        d2.draw_line(0, -1000, 0, 1000, Color::GREEN.fade(0.5));

        d2.draw_circle(
            self.cursor_world_position.x as i32,
            self.cursor_world_position.y as i32,
            10.0,
            Color::BLUE.fade(0.5),
        );

        let clip = if self.character.moving {
            &self.fox_walk
        } else {
            &self.fox_idle
        };
        clip.render(
            d2,
            &self.fox_texture,
            self.character.position,
            0.0,
            Vector2 {
                x: CHARACTER_SCALE,
                y: CHARACTER_SCALE,
            },
            Color::WHITE,
            self.character.flipped,
            false,
        );
    }

    /// Draw the screen-space layer: shapes, caption, cursor feedback, the
    /// shaded gem and the FPS counter.
    fn render_ui(&mut self, d: &mut RaylibDrawHandle) {
        d.draw_rectangle(25, 25, 50, 50, Color::RED);
        d.draw_circle(
            (self.window_size.x * 0.5) as i32,
            (self.window_size.y * 0.5 - 50.0) as i32,
            70.0,
            Color::GREEN.fade(0.3),
        );

        let caption = "Hello, Text!";
        let caption_size = 28;
        let caption_width = d.measure_text(caption, caption_size);
        d.draw_text(
            caption,
            (self.window_size.x * 0.5) as i32 - caption_width / 2,
            10 + caption_size / 2,
            caption_size,
            Color::BLACK,
        );

        // Screen-space cursor echo, swelling while the click timer runs.
        d.draw_circle(
            (self.cursor_position.x * self.window_size.x) as i32,
            (self.cursor_position.y * self.window_size.y) as i32,
            20.0 + 20.0 * self.mouse_click_timer,
            Color::PURPLE.fade(0.3 + 0.3 * self.mouse_click_timer),
        );

        let source = Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.gem_texture.width as f32,
            height: self.gem_texture.height as f32,
        };
        let dest = Rectangle {
            x: self.window_size.x - 100.0,
            y: 10.0,
            width: 100.0,
            height: 100.0,
        };
        let origin = Vector2 { x: 50.0, y: 50.0 };
        {
            let mut shaded = d.begin_shader_mode(&mut self.grayscale_shader);
            shaded.draw_texture_pro(
                &self.gem_texture,
                source,
                dest,
                origin,
                self.gem_rotation,
                Color::WHITE,
            );
        }

        let fps_text = format!("FPS: {:.2}", self.fps);
        let fps_size = 20;
        let fps_width = d.measure_text(&fps_text, fps_size);
        d.draw_text(
            &fps_text,
            self.window_size.x as i32 - fps_width - 10,
            10,
            fps_size,
            Color::BLACK,
        );
    }
}
