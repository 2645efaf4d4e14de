//! Keyboard, mouse and cursor queries.
//!
//! Submodules overview:
//! - [`codes`] – the closed key/button sets game code is allowed to ask about
//!
//! [`Input`] is refreshed at the top of every tick with the current window
//! size and answers all digital queries through the backend's own per-frame
//! edge detection. No key history is kept here, which means every answer is
//! only meaningful within the tick it was asked in.

pub mod codes;

use raylib::prelude::{Camera2D, RaylibHandle, Vector2};

use self::codes::{KeyCode, MouseButton};

/// How a digital input's state is interrogated for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum InputMode {
    /// True only on the tick the input went from up to down.
    Pressed,
    /// True every tick the input is held.
    Down,
    /// True only on the tick the input went from down to up.
    Released,
    /// True every tick the input is not held.
    Up,
}

/// Per-tick input surface.
#[derive(Debug, Clone, Copy)]
pub struct Input {
    /// Window size captured by [`refresh`](Input::refresh), the denominator
    /// for cursor normalization.
    screen_size: Vector2,
}

impl Input {
    pub fn new() -> Self {
        Self {
            screen_size: Vector2::zero(),
        }
    }

    /// Capture the window size used for cursor normalization this tick.
    pub fn refresh(&mut self, screen_size: Vector2) {
        self.screen_size = screen_size;
    }

    /// Query a keyboard key in the given mode.
    pub fn key(&self, rl: &RaylibHandle, code: KeyCode, mode: InputMode) -> bool {
        let key = code.to_raylib();
        match mode {
            InputMode::Pressed => rl.is_key_pressed(key),
            InputMode::Down => rl.is_key_down(key),
            InputMode::Released => rl.is_key_released(key),
            InputMode::Up => rl.is_key_up(key),
        }
    }

    /// Query a mouse button in the given mode.
    pub fn mouse_button(&self, rl: &RaylibHandle, button: MouseButton, mode: InputMode) -> bool {
        let button = button.to_raylib();
        match mode {
            InputMode::Pressed => rl.is_mouse_button_pressed(button),
            InputMode::Down => rl.is_mouse_button_down(button),
            InputMode::Released => rl.is_mouse_button_released(button),
            InputMode::Up => rl.is_mouse_button_up(button),
        }
    }

    /// Cursor position scaled into [0,1] against the refreshed window size.
    pub fn cursor_normalized(&self, rl: &RaylibHandle) -> Vector2 {
        normalize_cursor(rl.get_mouse_position(), self.screen_size)
    }

    /// Cursor position mapped through the inverse of `camera`'s transform.
    pub fn cursor_world(&self, rl: &RaylibHandle, camera: Camera2D) -> Vector2 {
        rl.get_screen_to_world2D(rl.get_mouse_position(), camera)
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

/// Divide a pixel position by the window size, component-wise. A zero
/// dimension yields 0 for that component instead of dividing by zero.
fn normalize_cursor(position: Vector2, screen_size: Vector2) -> Vector2 {
    Vector2 {
        x: if screen_size.x > 0.0 {
            position.x / screen_size.x
        } else {
            0.0
        },
        y: if screen_size.y > 0.0 {
            position.y / screen_size.y
        } else {
            0.0
        },
    }
}
