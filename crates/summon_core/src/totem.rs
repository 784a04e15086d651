//! Totem state holder.
//!
//! A totem is a short-lived, owner-bound creature: it counts down a fixed
//! duration, may channel one spell, and holds a weak (id-based) reference to
//! its summoner. All transitions live in `lifecycle`; this type only carries
//! state plus small queries.

use summon_data::{AuraKind, SpellId, TotemEntry};

use crate::unit::{Health, Team, Transform, UnitId};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TotemId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TotemMode {
    /// Applies its spell once, on itself, at summon time.
    Passive,
    /// Fires on a cadence owned by the external spell engine.
    Active,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeathState {
    Alive,
    Dead,
}

#[derive(Clone, Debug)]
pub struct Totem {
    pub id: TotemId,
    pub entry: TotemEntry,
    pub name: String,
    pub(crate) owner: UnitId,
    pub(crate) creator: UnitId,
    pub team: Team,
    pub faction: u32,
    pub level: u32,
    pub tr: Transform,
    pub hp: Health,
    pub(crate) spell: Option<SpellId>,
    pub(crate) mode: TotemMode,
    /// Milliseconds until forced teardown; never increases.
    pub duration_ms: u32,
    pub death_state: DeathState,
    pub in_combat: bool,
    /// Aura kinds the base creature check treats as immune (from the template).
    pub immune_auras: Vec<AuraKind>,
    pub addon_visual: Option<u32>,
    pub(crate) torn_down: bool,
}

impl Totem {
    /// The summoner, as a weak reference: resolve through the unit store on
    /// every use. Set once at creation, immutable afterwards.
    #[inline]
    pub fn owner(&self) -> UnitId {
        self.owner
    }

    #[inline]
    pub fn creator(&self) -> UnitId {
        self.creator
    }

    /// Spell this totem channels; `None` means purely cosmetic.
    #[inline]
    pub fn spell(&self) -> Option<SpellId> {
        self.spell
    }

    #[inline]
    pub fn mode(&self) -> TotemMode {
        self.mode
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.death_state == DeathState::Alive
    }
}
