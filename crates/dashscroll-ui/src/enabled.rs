use std::fmt;

/// Whether a scroll engine accepts input.
///
/// Either a fixed flag or a predicate re-evaluated every frame, so a widget
/// can tie scrolling to state it does not own (e.g. "only while the panel is
/// visible").
pub enum Enabled {
    Flag(bool),
    Predicate(Box<dyn Fn() -> bool>),
}

impl Enabled {
    pub fn from_fn(predicate: impl Fn() -> bool + 'static) -> Self {
        Self::Predicate(Box::new(predicate))
    }

    pub fn resolve(&self) -> bool {
        match self {
            Enabled::Flag(flag) => *flag,
            Enabled::Predicate(predicate) => predicate(),
        }
    }
}

impl Default for Enabled {
    fn default() -> Self {
        Self::Flag(true)
    }
}

impl From<bool> for Enabled {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl fmt::Debug for Enabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Enabled::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            Enabled::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
