//! Scripted-AI capability for creature owners.
//!
//! Players never carry this; the lifecycle does a capability-presence check
//! (`unit.ai.is_some()`), not a type switch.

use crate::totem::TotemId;

pub trait CreatureAi {
    /// The owner just summoned `totem`.
    fn just_summoned(&mut self, _totem: TotemId) {}

    /// The owner's summoned `totem` despawned.
    fn summoned_despawn(&mut self, _totem: TotemId) {}
}
