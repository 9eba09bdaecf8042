#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Interaction {
    Click,
    Touch,
}

/// Listener that fires on the first matching interaction and then detaches.
///
/// `unsubscribe` is idempotent so teardown can call it whether or not the
/// listener already fired.
#[derive(Debug)]
pub struct OneShotListener {
    kinds: &'static [Interaction],
    armed: bool,
}

impl OneShotListener {
    pub fn register(kinds: &'static [Interaction]) -> Self {
        Self { kinds, armed: true }
    }

    /// Returns true exactly once, for the first interaction of a listened kind.
    pub fn fire(&mut self, event: Interaction) -> bool {
        if !self.armed || !self.kinds.contains(&event) {
            return false;
        }
        self.unsubscribe();
        true
    }

    pub fn unsubscribe(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
