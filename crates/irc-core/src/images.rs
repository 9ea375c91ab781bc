//! Facing → overlay image triple, and the holder for the active triple.

use crate::facing::Facing;
use fnv::FnvHashMap;

/// The three state images shown for one facing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSet {
    pub ground_state: String,
    pub transition_state: String,
    pub product: String,
}

impl ImageSet {
    pub fn new(
        ground_state: impl Into<String>,
        transition_state: impl Into<String>,
        product: impl Into<String>,
    ) -> Self {
        Self {
            ground_state: ground_state.into(),
            transition_state: transition_state.into(),
            product: product.into(),
        }
    }

    /// `{base}/{facing}_gs.png`, `{base}/{facing}_ts.png`, `{base}/{facing}_pr.png`.
    pub fn templated(base: &str, facing: Facing) -> Self {
        let base = base.trim_end_matches('/');
        let name = facing.name();
        Self::new(
            format!("{base}/{name}_gs.png"),
            format!("{base}/{name}_ts.png"),
            format!("{base}/{name}_pr.png"),
        )
    }
}

/// Lookup table built once at startup. Every facing has an entry.
#[derive(Clone, Debug)]
pub struct ImageTable {
    sets: FnvHashMap<Facing, ImageSet>,
}

impl ImageTable {
    pub fn from_base(base: &str) -> Self {
        Self::from_fn(|facing| ImageSet::templated(base, facing))
    }

    pub fn from_fn(mut make: impl FnMut(Facing) -> ImageSet) -> Self {
        let sets = Facing::ALL.iter().map(|&f| (f, make(f))).collect();
        Self { sets }
    }

    pub fn get(&self, facing: Facing) -> &ImageSet {
        // from_fn fills every facing
        &self.sets[&facing]
    }
}

/// The facing currently shown and its image triple.
///
/// The triple is only ever replaced as a whole, together with the facing.
#[derive(Clone, Debug)]
pub struct ActiveImages {
    facing: Facing,
    active: ImageSet,
}

impl ActiveImages {
    pub fn new(initial: Facing, table: &ImageTable) -> Self {
        Self {
            facing: initial,
            active: table.get(initial).clone(),
        }
    }

    pub fn current_facing(&self) -> Facing {
        self.facing
    }

    pub fn active(&self) -> &ImageSet {
        &self.active
    }

    /// Switch to `facing`'s triple. The ground-state path is the change
    /// sentinel: when it matches the active one nothing is touched and
    /// `false` is returned.
    pub fn set_facing(&mut self, facing: Facing, table: &ImageTable) -> bool {
        let candidate = table.get(facing);
        if candidate.ground_state == self.active.ground_state {
            return false;
        }
        self.facing = facing;
        self.active = candidate.clone();
        true
    }
}
