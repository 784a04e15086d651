//! Host outbox: event buses drained by external collaborators after each
//! tick. Animations go to the broadcast layer (best-effort, at-most-once,
//! no ack); effect commands go to the effect engine.

use summon_data::SpellId;

use crate::totem::TotemId;
use crate::unit::UnitId;

/// Cosmetic animation notifications for current observers. A dropped event
/// only loses an animation, so delivery is fire-and-forget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimEvent {
    Spawn(TotemId),
    Despawn(TotemId),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EffectTarget {
    Unit(UnitId),
    Totem(TotemId),
}

/// Commands for the external effect engine; this core never resolves them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EffectCmd {
    Cast {
        caster: TotemId,
        target: EffectTarget,
        spell: SpellId,
        /// Triggered casts bypass resistance/miss checks.
        triggered: bool,
    },
    RemoveAuras {
        target: EffectTarget,
        spell: SpellId,
    },
}

#[derive(Default, Debug)]
pub struct Outbox {
    pub anims: Vec<AnimEvent>,
    pub effects: Vec<EffectCmd>,
}

impl Outbox {
    pub fn drain_anims(&mut self) -> Vec<AnimEvent> {
        std::mem::take(&mut self.anims)
    }

    pub fn drain_effects(&mut self) -> Vec<EffectCmd> {
        std::mem::take(&mut self.effects)
    }
}
