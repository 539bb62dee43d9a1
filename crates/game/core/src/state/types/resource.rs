/// Canonical terrain and inventory item classes.
///
/// Domain checks compare kinds by value; two ladder instances are
/// behaviourally identical regardless of where they were created.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    Soil,
    Stone,
    Wood,
    Ore,
    Ladder,
}

/// Opaque visual key the presentation layer maps to an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteKey(pub u16);

impl SpriteKey {
    pub const SOIL: Self = Self(1);
    pub const STONE: Self = Self(2);
    pub const WOOD: Self = Self(3);
    pub const ORE: Self = Self(4);
    pub const LADDER: Self = Self(5);
    pub const PLAYER: Self = Self(6);
}

/// Immutable descriptor of a terrain or inventory item.
///
/// A resource is owned by the cell holding it until dug, then by the
/// inventory that received it; the value itself never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    kind: ResourceKind,
    sprite: SpriteKey,
}

impl Resource {
    pub const fn new(kind: ResourceKind, sprite: SpriteKey) -> Self {
        Self { kind, sprite }
    }

    /// A ladder carrying the given visual key.
    pub const fn ladder(sprite: SpriteKey) -> Self {
        Self::new(ResourceKind::Ladder, sprite)
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn sprite(&self) -> SpriteKey {
        self.sprite
    }

    pub fn is_ladder(&self) -> bool {
        self.kind == ResourceKind::Ladder
    }
}
