//! Divider controller
//!
//! Controls:
//! - Mouse drag (any button held): move the comparison divider horizontally
//!
//! The divider is an integer pixel column, always inside `[0, width]`.

use winit::event::{ElementState, MouseButton};

/// Tracks mouse state and the divider column
pub struct DividerController {
    // Mouse state
    buttons_held: u32,

    // Divider state
    divider_x: u32,
    width: u32,
}

impl DividerController {
    /// Create a controller for a window of the given width, divider centred
    pub fn new(width: u32) -> Self {
        Self {
            buttons_held: 0,
            divider_x: width / 2,
            width,
        }
    }

    /// Current divider column in pixels
    pub fn divider_x(&self) -> u32 {
        self.divider_x
    }

    /// Whether any mouse button is held
    pub fn is_dragging(&self) -> bool {
        self.buttons_held > 0
    }

    /// Window was resized: recentre the divider
    pub fn reset(&mut self, width: u32) {
        self.width = width;
        self.divider_x = width / 2;
    }

    /// Process mouse button input
    ///
    /// A press only starts the drag; the divider follows the first motion.
    pub fn process_mouse_button(&mut self, _button: MouseButton, state: ElementState) {
        self.buttons_held = match state {
            ElementState::Pressed => self.buttons_held + 1,
            // Releases can arrive for presses that happened outside the window
            ElementState::Released => self.buttons_held.saturating_sub(1),
        };
    }

    /// Process cursor movement (physical pixels)
    ///
    /// Returns true if the divider moved.
    pub fn process_cursor_moved(&mut self, x: f64) -> bool {
        if !self.is_dragging() {
            return false;
        }

        let before = self.divider_x;
        self.set_divider(x);
        before != self.divider_x
    }

    fn set_divider(&mut self, x: f64) {
        // Truncate toward zero like an integer mouse position, then clamp
        let x = x.trunc().clamp(0.0, self.width as f64);
        self.divider_x = x as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: &mut DividerController) {
        c.process_mouse_button(MouseButton::Left, ElementState::Pressed);
    }

    fn release(c: &mut DividerController) {
        c.process_mouse_button(MouseButton::Left, ElementState::Released);
    }

    #[test]
    fn test_starts_centred() {
        let c = DividerController::new(1280);
        assert_eq!(c.divider_x(), 640);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_odd_width_rounds_down() {
        let c = DividerController::new(801);
        assert_eq!(c.divider_x(), 400);
    }

    #[test]
    fn test_motion_without_drag_is_ignored() {
        let mut c = DividerController::new(1000);
        assert!(!c.process_cursor_moved(100.0));
        assert_eq!(c.divider_x(), 500);
    }

    #[test]
    fn test_drag_moves_divider() {
        let mut c = DividerController::new(1000);
        c.process_cursor_moved(300.0);
        press(&mut c);
        assert_eq!(c.divider_x(), 500);

        assert!(c.process_cursor_moved(420.7));
        assert_eq!(c.divider_x(), 420);

        release(&mut c);
        c.process_cursor_moved(10.0);
        assert_eq!(c.divider_x(), 420);
    }

    #[test]
    fn test_drag_is_clamped_to_window() {
        let mut c = DividerController::new(1000);
        press(&mut c);

        c.process_cursor_moved(-50.0);
        assert_eq!(c.divider_x(), 0);

        c.process_cursor_moved(5000.0);
        assert_eq!(c.divider_x(), 1000);
    }

    #[test]
    fn test_any_button_drags() {
        let mut c = DividerController::new(1000);
        c.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(c.is_dragging());
        assert!(c.process_cursor_moved(10.0));
        assert_eq!(c.divider_x(), 10);
    }

    #[test]
    fn test_drag_continues_until_all_buttons_released() {
        let mut c = DividerController::new(1000);
        press(&mut c);
        c.process_mouse_button(MouseButton::Middle, ElementState::Pressed);
        release(&mut c);
        assert!(c.process_cursor_moved(250.0));

        c.process_mouse_button(MouseButton::Middle, ElementState::Released);
        assert!(!c.is_dragging());
        assert!(!c.process_cursor_moved(700.0));
        assert_eq!(c.divider_x(), 250);
    }

    #[test]
    fn test_stray_release_does_not_underflow() {
        let mut c = DividerController::new(1000);
        release(&mut c);
        assert!(!c.is_dragging());
        press(&mut c);
        assert!(c.is_dragging());
    }

    #[test]
    fn test_reset_recentres() {
        let mut c = DividerController::new(1000);
        press(&mut c);
        c.process_cursor_moved(900.0);
        c.reset(600);
        assert_eq!(c.divider_x(), 300);

        // New width also becomes the clamp bound
        c.process_cursor_moved(900.0);
        assert_eq!(c.divider_x(), 600);
    }
}
