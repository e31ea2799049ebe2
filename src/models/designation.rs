//! Terminal classification values

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One building block of a classification label.
///
/// Declaration order is display order; `key()` order is canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Rotated,
    Swapped,
    Mirrored,
    Flipped,
    Inverted,
    Rewound,
    Repeated,
    Modular,
}

impl Component {
    /// Display order
    pub const ALL: [Component; 8] = [
        Component::Rotated,
        Component::Swapped,
        Component::Mirrored,
        Component::Flipped,
        Component::Inverted,
        Component::Rewound,
        Component::Repeated,
        Component::Modular,
    ];

    /// Lowercase key used for canonical ids
    pub fn key(&self) -> &'static str {
        match self {
            Component::Rotated => "rotated",
            Component::Swapped => "swapped",
            Component::Mirrored => "mirrored",
            Component::Flipped => "flipped",
            Component::Inverted => "inverted",
            Component::Rewound => "rewound",
            Component::Repeated => "repeated",
            Component::Modular => "modular",
        }
    }

    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Component::Rotated => "Rotated",
            Component::Swapped => "Swapped",
            Component::Mirrored => "Mirrored",
            Component::Flipped => "Flipped",
            Component::Inverted => "Inverted",
            Component::Rewound => "Rewound",
            Component::Repeated => "Repeated",
            Component::Modular => "Modular",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unordered set of components, stored as an 8-bit field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComponentSet(u8);

impl ComponentSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, component: Component) {
        self.0 |= component.bit();
    }

    pub fn with(mut self, component: Component) -> Self {
        self.insert(component);
        self
    }

    pub fn contains(&self, component: Component) -> bool {
        self.0 & component.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in display order
    pub fn iter(&self) -> impl Iterator<Item = Component> + '_ {
        Component::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Members sorted alphabetically by key
    pub fn canonical(&self) -> Vec<Component> {
        let mut components: Vec<Component> = self.iter().collect();
        components.sort_by_key(|c| c.key());
        components
    }
}

impl FromIterator<Component> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut set = ComponentSet::new();
        for component in iter {
            set.insert(component);
        }
        set
    }
}

impl Serialize for ComponentSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ComponentSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let components = Vec::<Component>::deserialize(deserializer)?;
        Ok(components.into_iter().collect())
    }
}

/// Size of the rotation step a Rotated label refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationInterval {
    Half,
    Quarter,
}

impl RotationInterval {
    pub fn symbol(&self) -> &'static str {
        match self {
            RotationInterval::Half => "½",
            RotationInterval::Quarter => "¼",
        }
    }
}

/// Final classification record for a sequence or a section of one
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SequenceDesignation {
    #[serde(default)]
    pub components: ComponentSet,
    #[serde(default)]
    pub rotation_interval: Option<RotationInterval>,
    #[serde(default)]
    pub base_word: Option<String>,
    #[serde(default)]
    pub base_word_fragment: Option<String>,
}

impl SequenceDesignation {
    /// No components and no base word
    pub fn freeform() -> Self {
        Self::default()
    }

    pub fn is_freeform(&self) -> bool {
        self.components.is_empty() && self.base_word.is_none()
    }
}
