//! Closed key and mouse-button sets.
//!
//! Game code asks about input exclusively through [`KeyCode`] and
//! [`MouseButton`]; the lookup tables below translate them to the backend's
//! own enums, so no raw platform key constants appear outside this module.

use raylib::prelude::KeyboardKey;
use raylib::prelude::MouseButton as RaylibMouseButton;

/// Every keyboard key the game is allowed to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum KeyCode {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    // Top-row digits
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    // Special keys
    Space,
    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    Right,
    Left,
    Down,
    Up,
    PageUp,
    PageDown,
    Home,
    End,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
    LeftShift,
    LeftControl,
    LeftAlt,
    LeftSuper,
    RightShift,
    RightControl,
    RightAlt,
    RightSuper,
    Menu,
    // Keypad
    Kp0,
    Kp1,
    Kp2,
    Kp3,
    Kp4,
    Kp5,
    Kp6,
    Kp7,
    Kp8,
    Kp9,
    KpDecimal,
    KpDivide,
    KpMultiply,
    KpSubtract,
    KpAdd,
    KpEnter,
    KpEqual,
}

impl KeyCode {
    /// Translate to the backend's key enum. Exhaustive by construction, so
    /// adding a variant without a mapping fails to compile.
    pub(crate) fn to_raylib(self) -> KeyboardKey {
        match self {
            KeyCode::A => KeyboardKey::KEY_A,
            KeyCode::B => KeyboardKey::KEY_B,
            KeyCode::C => KeyboardKey::KEY_C,
            KeyCode::D => KeyboardKey::KEY_D,
            KeyCode::E => KeyboardKey::KEY_E,
            KeyCode::F => KeyboardKey::KEY_F,
            KeyCode::G => KeyboardKey::KEY_G,
            KeyCode::H => KeyboardKey::KEY_H,
            KeyCode::I => KeyboardKey::KEY_I,
            KeyCode::J => KeyboardKey::KEY_J,
            KeyCode::K => KeyboardKey::KEY_K,
            KeyCode::L => KeyboardKey::KEY_L,
            KeyCode::M => KeyboardKey::KEY_M,
            KeyCode::N => KeyboardKey::KEY_N,
            KeyCode::O => KeyboardKey::KEY_O,
            KeyCode::P => KeyboardKey::KEY_P,
            KeyCode::Q => KeyboardKey::KEY_Q,
            KeyCode::R => KeyboardKey::KEY_R,
            KeyCode::S => KeyboardKey::KEY_S,
            KeyCode::T => KeyboardKey::KEY_T,
            KeyCode::U => KeyboardKey::KEY_U,
            KeyCode::V => KeyboardKey::KEY_V,
            KeyCode::W => KeyboardKey::KEY_W,
            KeyCode::X => KeyboardKey::KEY_X,
            KeyCode::Y => KeyboardKey::KEY_Y,
            KeyCode::Z => KeyboardKey::KEY_Z,
            KeyCode::Zero => KeyboardKey::KEY_ZERO,
            KeyCode::One => KeyboardKey::KEY_ONE,
            KeyCode::Two => KeyboardKey::KEY_TWO,
            KeyCode::Three => KeyboardKey::KEY_THREE,
            KeyCode::Four => KeyboardKey::KEY_FOUR,
            KeyCode::Five => KeyboardKey::KEY_FIVE,
            KeyCode::Six => KeyboardKey::KEY_SIX,
            KeyCode::Seven => KeyboardKey::KEY_SEVEN,
            KeyCode::Eight => KeyboardKey::KEY_EIGHT,
            KeyCode::Nine => KeyboardKey::KEY_NINE,
            KeyCode::F1 => KeyboardKey::KEY_F1,
            KeyCode::F2 => KeyboardKey::KEY_F2,
            KeyCode::F3 => KeyboardKey::KEY_F3,
            KeyCode::F4 => KeyboardKey::KEY_F4,
            KeyCode::F5 => KeyboardKey::KEY_F5,
            KeyCode::F6 => KeyboardKey::KEY_F6,
            KeyCode::F7 => KeyboardKey::KEY_F7,
            KeyCode::F8 => KeyboardKey::KEY_F8,
            KeyCode::F9 => KeyboardKey::KEY_F9,
            KeyCode::F10 => KeyboardKey::KEY_F10,
            KeyCode::F11 => KeyboardKey::KEY_F11,
            KeyCode::F12 => KeyboardKey::KEY_F12,
            KeyCode::Space => KeyboardKey::KEY_SPACE,
            KeyCode::Escape => KeyboardKey::KEY_ESCAPE,
            KeyCode::Enter => KeyboardKey::KEY_ENTER,
            KeyCode::Tab => KeyboardKey::KEY_TAB,
            KeyCode::Backspace => KeyboardKey::KEY_BACKSPACE,
            KeyCode::Insert => KeyboardKey::KEY_INSERT,
            KeyCode::Delete => KeyboardKey::KEY_DELETE,
            KeyCode::Right => KeyboardKey::KEY_RIGHT,
            KeyCode::Left => KeyboardKey::KEY_LEFT,
            KeyCode::Down => KeyboardKey::KEY_DOWN,
            KeyCode::Up => KeyboardKey::KEY_UP,
            KeyCode::PageUp => KeyboardKey::KEY_PAGE_UP,
            KeyCode::PageDown => KeyboardKey::KEY_PAGE_DOWN,
            KeyCode::Home => KeyboardKey::KEY_HOME,
            KeyCode::End => KeyboardKey::KEY_END,
            KeyCode::CapsLock => KeyboardKey::KEY_CAPS_LOCK,
            KeyCode::ScrollLock => KeyboardKey::KEY_SCROLL_LOCK,
            KeyCode::NumLock => KeyboardKey::KEY_NUM_LOCK,
            KeyCode::PrintScreen => KeyboardKey::KEY_PRINT_SCREEN,
            KeyCode::Pause => KeyboardKey::KEY_PAUSE,
            KeyCode::LeftShift => KeyboardKey::KEY_LEFT_SHIFT,
            KeyCode::LeftControl => KeyboardKey::KEY_LEFT_CONTROL,
            KeyCode::LeftAlt => KeyboardKey::KEY_LEFT_ALT,
            KeyCode::LeftSuper => KeyboardKey::KEY_LEFT_SUPER,
            KeyCode::RightShift => KeyboardKey::KEY_RIGHT_SHIFT,
            KeyCode::RightControl => KeyboardKey::KEY_RIGHT_CONTROL,
            KeyCode::RightAlt => KeyboardKey::KEY_RIGHT_ALT,
            KeyCode::RightSuper => KeyboardKey::KEY_RIGHT_SUPER,
            KeyCode::Menu => KeyboardKey::KEY_KB_MENU,
            KeyCode::Kp0 => KeyboardKey::KEY_KP_0,
            KeyCode::Kp1 => KeyboardKey::KEY_KP_1,
            KeyCode::Kp2 => KeyboardKey::KEY_KP_2,
            KeyCode::Kp3 => KeyboardKey::KEY_KP_3,
            KeyCode::Kp4 => KeyboardKey::KEY_KP_4,
            KeyCode::Kp5 => KeyboardKey::KEY_KP_5,
            KeyCode::Kp6 => KeyboardKey::KEY_KP_6,
            KeyCode::Kp7 => KeyboardKey::KEY_KP_7,
            KeyCode::Kp8 => KeyboardKey::KEY_KP_8,
            KeyCode::Kp9 => KeyboardKey::KEY_KP_9,
            KeyCode::KpDecimal => KeyboardKey::KEY_KP_DECIMAL,
            KeyCode::KpDivide => KeyboardKey::KEY_KP_DIVIDE,
            KeyCode::KpMultiply => KeyboardKey::KEY_KP_MULTIPLY,
            KeyCode::KpSubtract => KeyboardKey::KEY_KP_SUBTRACT,
            KeyCode::KpAdd => KeyboardKey::KEY_KP_ADD,
            KeyCode::KpEnter => KeyboardKey::KEY_KP_ENTER,
            KeyCode::KpEqual => KeyboardKey::KEY_KP_EQUAL,
        }
    }
}

/// Every mouse button the game is allowed to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Side,
    Extra,
    Forward,
    Back,
}

impl MouseButton {
    pub(crate) fn to_raylib(self) -> RaylibMouseButton {
        match self {
            MouseButton::Left => RaylibMouseButton::MOUSE_BUTTON_LEFT,
            MouseButton::Right => RaylibMouseButton::MOUSE_BUTTON_RIGHT,
            MouseButton::Middle => RaylibMouseButton::MOUSE_BUTTON_MIDDLE,
            MouseButton::Side => RaylibMouseButton::MOUSE_BUTTON_SIDE,
            MouseButton::Extra => RaylibMouseButton::MOUSE_BUTTON_EXTRA,
            MouseButton::Forward => RaylibMouseButton::MOUSE_BUTTON_FORWARD,
            MouseButton::Back => RaylibMouseButton::MOUSE_BUTTON_BACK,
        }
    }
}
