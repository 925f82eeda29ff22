use cgmath::Vector3;
use winit::{
    event::{ElementState, MouseButton},
    keyboard::{Key, NamedKey},
};

/// Horizontal movement along the world axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in world space. Forward is -Z.
    pub fn offset(&self) -> Vector3<f32> {
        use Direction::*;
        match self {
            Forward => Vector3::new(0., 0., -1.),
            Back => Vector3::new(0., 0., 1.),
            Left => Vector3::new(-1., 0., 0.),
            Right => Vector3::new(1., 0., 0.),
        }
    }
}

/// A discrete player input, independent of the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Move(Direction),
    Jump,
    Break,
    Place,
    /// Mouse movement in normalised screen coordinates
    Look(f32, f32),
}

impl InputEvent {
    /// Translate a key press. Held keys come through again as repeats.
    pub fn from_key(key: &Key, state: ElementState) -> Option<Self> {
        if !state.is_pressed() {
            return None;
        }

        match key.as_ref() {
            Key::Character("w") => Some(Self::Move(Direction::Forward)),
            Key::Character("s") => Some(Self::Move(Direction::Back)),
            Key::Character("a") => Some(Self::Move(Direction::Left)),
            Key::Character("d") => Some(Self::Move(Direction::Right)),
            Key::Named(NamedKey::Space) => Some(Self::Jump),
            _ => None,
        }
    }

    pub fn from_mouse_button(button: MouseButton, state: ElementState) -> Option<Self> {
        if !state.is_pressed() {
            return None;
        }

        match button {
            MouseButton::Left => Some(Self::Break),
            MouseButton::Right => Some(Self::Place),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Vector3;
    use winit::{
        event::{ElementState, MouseButton},
        keyboard::{Key, NamedKey},
    };

    use super::{Direction, InputEvent};

    #[test]
    fn test_keys() {
        let pressed =
            |c: &str| InputEvent::from_key(&Key::Character(c.into()), ElementState::Pressed);

        assert_eq!(pressed("w"), Some(InputEvent::Move(Direction::Forward)));
        assert_eq!(pressed("s"), Some(InputEvent::Move(Direction::Back)));
        assert_eq!(pressed("a"), Some(InputEvent::Move(Direction::Left)));
        assert_eq!(pressed("d"), Some(InputEvent::Move(Direction::Right)));
        assert_eq!(pressed("q"), None);
        assert_eq!(
            InputEvent::from_key(&Key::Named(NamedKey::Space), ElementState::Pressed),
            Some(InputEvent::Jump)
        );

        // Releases do nothing
        assert_eq!(
            InputEvent::from_key(&Key::Character("w".into()), ElementState::Released),
            None
        );
    }

    #[test]
    fn test_mouse() {
        assert_eq!(
            InputEvent::from_mouse_button(MouseButton::Left, ElementState::Pressed),
            Some(InputEvent::Break)
        );
        assert_eq!(
            InputEvent::from_mouse_button(MouseButton::Right, ElementState::Pressed),
            Some(InputEvent::Place)
        );
        assert_eq!(
            InputEvent::from_mouse_button(MouseButton::Middle, ElementState::Pressed),
            None
        );
        assert_eq!(
            InputEvent::from_mouse_button(MouseButton::Right, ElementState::Released),
            None
        );
    }

    #[test]
    fn test_offsets() {
        assert_eq!(
            Direction::Forward.offset() + Direction::Back.offset(),
            Vector3::new(0., 0., 0.)
        );
        assert_eq!(Direction::Right.offset().x, 1.);
    }
}
