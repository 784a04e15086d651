//! Owner-coupling and immunity policies: pure functions over totem state.

use summon_data::{AuraKind, EffectKind, SpellSpec, SpellSpecDb};

use crate::totem::{Totem, TotemMode};
use crate::unit::Unit;

/// Copy owner identity, faction and level onto the totem. Applied once at
/// creation and never re-synchronized; totems are short-lived, so later
/// owner changes are allowed to go stale.
pub fn inherit_from_owner(totem: &mut Totem, owner: &Unit) {
    totem.creator = owner.id;
    totem.owner = owner.id;
    totem.faction = owner.faction;
    totem.level = owner.level;
}

/// A channelled spell with a cast time makes the totem active; everything
/// else stays at the default `Passive`. One-way, computed once.
pub fn classify_mode(totem: &mut Totem, spells: &SpellSpecDb) {
    let Some(spell) = totem.spell() else {
        return;
    };
    if let Some(spec) = spells.get(spell)
        && spec.cast_time_ms > 0
    {
        totem.mode = TotemMode::Active;
    }
}

/// Totem-wide immunity table for one spell slot.
///
/// Totems cannot be compelled: the forced-attack-redirection effect and the
/// {periodic damage, periodic leech, fear, transform, taunt} aura kinds are
/// always immune. Anything else falls through to the base creature check
/// (template-declared immunities).
pub fn is_immune_to_spell_effect(totem: &Totem, spell: &SpellSpec, index: usize) -> bool {
    let Some(slot) = spell.slots.get(index) else {
        return false;
    };
    if slot.effect == EffectKind::AttackMe {
        return true;
    }
    if let Some(aura) = slot.aura {
        match aura {
            AuraKind::PeriodicDamage
            | AuraKind::PeriodicLeech
            | AuraKind::ModFear
            | AuraKind::Transform
            | AuraKind::ModTaunt => return true,
            _ => {}
        }
        return totem.immune_auras.contains(&aura);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totem::{DeathState, TotemId};
    use crate::unit::{Health, Team, Transform, UnitId};
    use glam::Vec3;
    use summon_data::{SpellId, SpellSlot, TotemEntry};

    fn totem() -> Totem {
        Totem {
            id: TotemId(1),
            entry: TotemEntry(3527),
            name: "Test Totem".into(),
            owner: UnitId(0),
            creator: UnitId(0),
            team: Team::None,
            faction: 0,
            level: 1,
            tr: Transform { pos: Vec3::ZERO, yaw: 0.0, radius: 0.5 },
            hp: Health { hp: 5, max: 5 },
            spell: Some(SpellId(5672)),
            mode: TotemMode::Passive,
            duration_ms: 60_000,
            death_state: DeathState::Alive,
            in_combat: false,
            immune_auras: vec![],
            addon_visual: None,
            torn_down: false,
        }
    }

    fn spec_with(effect: EffectKind, aura: Option<AuraKind>) -> SpellSpec {
        SpellSpec {
            id: SpellId(900),
            name: "probe".into(),
            cast_time_ms: 0,
            slots: vec![SpellSlot { effect, aura }],
        }
    }

    #[test]
    fn compelling_kinds_always_immune() {
        let t = totem();
        assert!(is_immune_to_spell_effect(&t, &spec_with(EffectKind::AttackMe, None), 0));
        for aura in [
            AuraKind::PeriodicDamage,
            AuraKind::PeriodicLeech,
            AuraKind::ModFear,
            AuraKind::Transform,
            AuraKind::ModTaunt,
        ] {
            assert!(
                is_immune_to_spell_effect(&t, &spec_with(EffectKind::ApplyAura, Some(aura)), 0),
                "expected immunity to {aura:?}"
            );
        }
    }

    #[test]
    fn other_kinds_delegate_to_base_check() {
        let mut t = totem();
        let stat = spec_with(EffectKind::ApplyAura, Some(AuraKind::ModStat));
        assert!(!is_immune_to_spell_effect(&t, &stat, 0));
        t.immune_auras.push(AuraKind::ModStat);
        assert!(is_immune_to_spell_effect(&t, &stat, 0));
        // plain damage effect with no aura is never table-immune
        assert!(!is_immune_to_spell_effect(&t, &spec_with(EffectKind::SchoolDamage, None), 0));
    }

    #[test]
    fn out_of_range_slot_is_not_immune() {
        let t = totem();
        assert!(!is_immune_to_spell_effect(&t, &spec_with(EffectKind::AttackMe, None), 3));
    }

    #[test]
    fn cast_time_classifies_active() {
        let db = SpellSpecDb::builtin_defaults();
        let mut passive = totem();
        classify_mode(&mut passive, &db);
        assert_eq!(passive.mode(), TotemMode::Passive);

        let mut active = totem();
        active.spell = Some(SpellId(3606));
        classify_mode(&mut active, &db);
        assert_eq!(active.mode(), TotemMode::Active);

        let mut cosmetic = totem();
        cosmetic.spell = None;
        classify_mode(&mut cosmetic, &db);
        assert_eq!(cosmetic.mode(), TotemMode::Passive);
    }
}
