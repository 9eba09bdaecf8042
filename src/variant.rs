//! Declarative animation variants.
//!
//! A [`Variant`] pairs a `hidden` and a `visible` [`Visual`] with the
//! [`Transition`] that moves between them. Scenes keep a clock per animated
//! subtree and ask the variant for the visual at that time; the tables below
//! are the whole choreography of the greeting.

use crate::carousel::Direction;
use crate::constants::*;
use crate::ease::{Ease, PHOTO_CURVE};

/// Visual properties an animated element can carry. `x`/`y` are pixel offsets
/// from the element's layout position, `rotate` is in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
}

impl Visual {
    pub const REST: Visual = Visual {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const fn faded() -> Visual {
        Visual {
            opacity: 0.0,
            ..Visual::REST
        }
    }

    pub fn lerp(&self, to: &Visual, t: f32) -> Visual {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Visual {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotate: mix(self.rotate, to.rotate),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration: f32, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
        }
    }

    /// Eased progress in `[0, 1]` after `elapsed` seconds.
    pub fn progress(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.ease.apply(local / self.duration)
    }

    pub fn end(&self) -> f32 {
        self.delay + self.duration
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub hidden: Visual,
    pub visible: Visual,
    pub transition: Transition,
}

impl Variant {
    /// Visual `elapsed` seconds after the element was told to become visible.
    pub fn show(&self, elapsed: f32) -> Visual {
        self.hidden
            .lerp(&self.visible, self.transition.progress(elapsed))
    }

    /// Visual `elapsed` seconds after the element was told to leave.
    pub fn hide(&self, elapsed: f32) -> Visual {
        self.visible
            .lerp(&self.hidden, self.transition.progress(elapsed))
    }

    pub fn settled(&self, elapsed: f32) -> bool {
        elapsed >= self.transition.end()
    }
}

/// Parent orchestration: children start `delay_children` after the parent and
/// each later child waits a further `stagger_children`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub delay_children: f32,
    pub stagger_children: f32,
}

impl Stagger {
    pub fn child_elapsed(&self, parent_elapsed: f32, index: usize) -> f32 {
        parent_elapsed - self.delay_children - self.stagger_children * index as f32
    }
}

pub const CONTAINER: Variant = Variant {
    hidden: Visual::faded(),
    visible: Visual::REST,
    transition: Transition::new(0.3, Ease::EaseOut),
};

pub const CONTAINER_STAGGER: Stagger = Stagger {
    delay_children: 0.3,
    stagger_children: 0.2,
};

pub const ITEM: Variant = Variant {
    hidden: Visual {
        opacity: 0.0,
        y: 20.0,
        ..Visual::REST
    },
    visible: Visual::REST,
    transition: Transition::new(0.6, Ease::EaseOut),
};

pub const IMAGE_MAIN: Variant = Variant {
    hidden: Visual {
        opacity: 0.0,
        scale: 0.5,
        ..Visual::REST
    },
    visible: Visual::REST,
    transition: Transition::new(0.5, PHOTO_CURVE),
};

pub const IMAGE_SIDE_LEFT: Variant = Variant {
    hidden: Visual {
        opacity: 0.0,
        x: -50.0,
        y: -50.0,
        rotate: -30.0,
        scale: 1.0,
    },
    visible: Visual {
        rotate: -8.0,
        ..Visual::REST
    },
    transition: Transition::new(0.7, PHOTO_CURVE),
};

pub const IMAGE_SIDE_RIGHT: Variant = Variant {
    hidden: Visual {
        opacity: 0.0,
        x: 50.0,
        y: 50.0,
        rotate: 30.0,
        scale: 1.0,
    },
    visible: Visual {
        rotate: 6.0,
        ..Visual::REST
    },
    transition: Transition::new(0.7, PHOTO_CURVE),
};

/// Landing page leaving the stage; played with [`Variant::hide`].
pub const LANDING: Variant = Variant {
    hidden: Visual {
        opacity: 0.0,
        scale: 0.9,
        ..Visual::REST
    },
    visible: Visual::REST,
    transition: Transition::new(0.5, Ease::EaseOut),
};

pub const CARD: Variant = Variant {
    hidden: Visual {
        opacity: 0.0,
        y: 40.0,
        scale: 0.95,
        ..Visual::REST
    },
    visible: Visual::REST,
    transition: Transition::new(0.6, Ease::EaseOut),
};

/// Pointer resting on a button.
pub const HOVER: Variant = Variant {
    hidden: Visual::REST,
    visible: Visual {
        scale: 1.05,
        ..Visual::REST
    },
    transition: Transition::new(0.15, Ease::EaseOut),
};

/// Button held down.
pub const TAP: Variant = Variant {
    hidden: Visual::REST,
    visible: Visual {
        scale: 0.95,
        ..Visual::REST
    },
    transition: Transition::new(0.1, Ease::EaseOut),
};

/// Enter and exit variants for a carousel slide moving in `direction`.
///
/// A forward move enters from the right and exits to the left.
pub fn slide(direction: Direction) -> (Variant, Variant) {
    let sign = match direction {
        Direction::Backward => -1.0,
        _ => 1.0,
    };
    let transition = Transition::new(SLIDE_DURATION, Ease::OutCubic);
    let enter = Variant {
        hidden: Visual {
            opacity: 0.0,
            x: sign * SLIDE_OFFSET,
            ..Visual::REST
        },
        visible: Visual::REST,
        transition,
    };
    let exit = Variant {
        hidden: Visual {
            opacity: 0.0,
            x: -sign * SLIDE_OFFSET,
            ..Visual::REST
        },
        visible: Visual::REST,
        transition,
    };
    (enter, exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_starts_hidden_and_settles_visible() {
        for v in [CONTAINER, ITEM, IMAGE_MAIN, IMAGE_SIDE_LEFT, IMAGE_SIDE_RIGHT, CARD] {
            assert_eq!(v.show(0.0), v.hidden);
            assert_eq!(v.show(v.transition.end()), v.visible);
            assert!(v.settled(v.transition.end()));
        }
    }

    #[test]
    fn hide_runs_backwards() {
        assert_eq!(LANDING.hide(0.0), Visual::REST);
        assert_eq!(LANDING.hide(10.0).opacity, 0.0);
        assert_eq!(LANDING.hide(10.0).scale, 0.9);
    }

    #[test]
    fn delay_holds_hidden() {
        let delayed = Transition {
            delay: 1.0,
            ..ITEM.transition
        };
        assert_eq!(delayed.progress(0.5), 0.0);
        assert_eq!(delayed.progress(1.6), 1.0);
    }

    #[test]
    fn stagger_offsets_children() {
        let s = CONTAINER_STAGGER;
        assert!((s.child_elapsed(1.0, 0) - 0.7).abs() < 1e-6);
        assert!((s.child_elapsed(1.0, 2) - 0.3).abs() < 1e-6);
        assert!(s.child_elapsed(0.2, 0) < 0.0);
    }

    #[test]
    fn side_images_settle_tilted() {
        assert_eq!(IMAGE_SIDE_LEFT.show(1.0).rotate, -8.0);
        assert_eq!(IMAGE_SIDE_RIGHT.show(1.0).rotate, 6.0);
    }

    #[test]
    fn hover_grows_and_tap_shrinks() {
        assert_eq!(HOVER.show(0.0), Visual::REST);
        assert_eq!(HOVER.show(1.0).scale, 1.05);
        assert_eq!(TAP.show(1.0).scale, 0.95);
        assert_eq!(TAP.show(1.0).opacity, 1.0);
        assert!(TAP.transition.end() < HOVER.transition.end());
    }

    #[test]
    fn slide_direction_picks_side() {
        let (enter, exit) = slide(Direction::Forward);
        assert!(enter.hidden.x > 0.0);
        assert!(exit.hidden.x < 0.0);

        let (enter, exit) = slide(Direction::Backward);
        assert!(enter.hidden.x < 0.0);
        assert!(exit.hidden.x > 0.0);
    }
}
