use std::cell::RefCell;
use std::rc::Rc;

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Live device position.
    Location,
    /// Map with a single pickable marker.
    MapPicker,
}

/// Host navigation. Launching is fire-and-forget and carries no data.
pub trait Navigator {
    /// Opens the given screen.
    fn launch(&mut self, screen: Screen);
}

/// Navigator that only records launched screens.
///
/// Clones share the same record, so a host can keep one handle and give another to a screen.
#[derive(Debug, Clone, Default)]
pub struct NavigationLog {
    launched: Rc<RefCell<Vec<Screen>>>,
}

impl NavigationLog {
    /// Screens launched so far, oldest first.
    pub fn launched(&self) -> Vec<Screen> {
        self.launched.borrow().clone()
    }

    /// Removes and returns the launched screens.
    pub fn drain(&self) -> Vec<Screen> {
        std::mem::take(&mut *self.launched.borrow_mut())
    }
}

impl Navigator for NavigationLog {
    fn launch(&mut self, screen: Screen) {
        self.launched.borrow_mut().push(screen);
    }
}
