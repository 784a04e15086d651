//! Owner-side unit slice: the minimum of a combatant the totem lifecycle
//! touches (identity, team/faction/level, liveness, AI capability, totem
//! slot bookkeeping).

use glam::Vec3;

use crate::ai::CreatureAi;
use crate::totem::TotemId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Team {
    Alliance,
    Horde,
    /// Creatures summon without a team.
    None,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnitKind {
    Player,
    Creature,
}

#[derive(Copy, Clone, Debug)]
pub struct Health {
    pub hp: i32,
    pub max: i32,
}
impl Health {
    #[inline]
    pub fn alive(&self) -> bool {
        self.hp > 0
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Transform {
    pub pos: Vec3,
    pub yaw: f32,
    pub radius: f32,
}

/// One slot per totem element; a unit keeps at most one totem per slot.
pub const MAX_TOTEM_SLOTS: usize = 4;

pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub team: Team,
    pub faction: u32,
    pub level: u32,
    pub tr: Transform,
    pub hp: Health,
    /// Scripted-behavior capability; creatures only, players never carry one.
    pub ai: Option<Box<dyn CreatureAi>>,
    pub totem_slots: [Option<TotemId>; MAX_TOTEM_SLOTS],
}

impl Unit {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp.alive()
    }

    /// Record a freshly summoned totem in the first free slot.
    pub fn remember_totem(&mut self, totem: TotemId) {
        if self.totem_slots.iter().any(|s| *s == Some(totem)) {
            return;
        }
        if let Some(slot) = self.totem_slots.iter_mut().find(|s| s.is_none()) {
            *slot = Some(totem);
        }
    }

    /// Drop a despawning totem from the owner's bookkeeping.
    pub fn forget_totem(&mut self, totem: TotemId) {
        for slot in &mut self.totem_slots {
            if *slot == Some(totem) {
                *slot = None;
            }
        }
    }
}
