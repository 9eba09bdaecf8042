#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum RevealState {
    #[default]
    Landing,
    Card,
}

/// One-way `Landing -> Card` switch.
#[derive(Debug, Default)]
pub struct Reveal {
    state: RevealState,
}

impl Reveal {
    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn opened(&self) -> bool {
        self.state == RevealState::Card
    }

    /// Returns true only for the call that performed the transition.
    pub fn open(&mut self) -> bool {
        match self.state {
            RevealState::Landing => {
                self.state = RevealState::Card;
                true
            }
            RevealState::Card => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_once() {
        let mut r = Reveal::default();
        assert!(!r.opened());
        assert!(r.open());
        assert!(r.opened());
        assert!(!r.open());
        assert_eq!(r.state(), RevealState::Card);
    }
}
