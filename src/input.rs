//! Per-frame input handling.

use std::collections::HashSet;

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
    pub released: HashSet<Keycode>,
}

impl KeyboardState {
    /// Clears the keys pressed or released during the previous frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    /// Whether Escape is held, or was tapped during this frame.
    pub fn quit_requested(&self) -> bool {
        self.down.contains(&Keycode::Escape) || self.pressed.contains(&Keycode::Escape)
    }
}

/// The subset of window events the render loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Close,
    Resized(i32, i32),
    KeyDown { keycode: Keycode, repeat: bool },
    KeyUp { keycode: Keycode, repeat: bool },
}

impl InputEvent {
    /// Picks out the events the loop cares about. Everything else yields `None`.
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match *event {
            Event::Quit { .. } => Some(Self::Close),
            Event::Window {
                win_event: WindowEvent::Resized(width, height),
                ..
            }
            | Event::Window {
                win_event: WindowEvent::SizeChanged(width, height),
                ..
            } => Some(Self::Resized(width, height)),
            Event::KeyDown {
                keycode: Some(keycode),
                repeat,
                ..
            } => Some(Self::KeyDown { keycode, repeat }),
            Event::KeyUp {
                keycode: Some(keycode),
                repeat,
                ..
            } => Some(Self::KeyUp { keycode, repeat }),
            _ => None,
        }
    }
}

/// What the render loop should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    Continue,
    Quit,
    /// The window was resized to the given size in pixels.
    Resize(i32, i32),
}

/// Updates `keyboard` from `event` and classifies it for the render loop.
///
/// Closing the window quits right away. Escape is picked up from the keyboard state once the
/// frame's events are drained, see [`KeyboardState::quit_requested`].
pub fn handle_event(event: InputEvent, keyboard: &mut KeyboardState) -> FrameAction {
    match event {
        InputEvent::Close => FrameAction::Quit,
        InputEvent::Resized(width, height) => FrameAction::Resize(width, height),
        InputEvent::KeyDown { keycode, repeat } => {
            if !repeat {
                keyboard.down.insert(keycode);
                keyboard.pressed.insert(keycode);
            }
            FrameAction::Continue
        }
        InputEvent::KeyUp { keycode, repeat } => {
            if !repeat {
                keyboard.down.remove(&keycode);
                keyboard.released.insert(keycode);
            }
            FrameAction::Continue
        }
    }
}
