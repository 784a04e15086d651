use glam::Vec3;
use summon_core::{AnimEvent, Team, WorldState, lifecycle};
use summon_data::{SpellSpecDb, TotemEntry, TotemTemplateDb};

#[test]
fn visual_only_totem_never_touches_the_effect_engine() {
    let spells = SpellSpecDb::builtin_defaults();
    let templates = TotemTemplateDb::builtin_defaults();
    let tpl = templates.get(TotemEntry(15439)).expect("sentry marker template");
    assert!(tpl.spell.is_none());

    let mut w = WorldState::new();
    let owner = w.spawn_player(Vec3::ZERO, Team::Horde);
    let id = w.summon_totem(owner, tpl, Vec3::ZERO, 30_000, &spells).unwrap();

    // animation + owner bookkeeping still happen
    assert!(w.outbox.drain_anims().contains(&AnimEvent::Spawn(id)));
    assert_eq!(w.unit(owner).unwrap().totem_slots[0], Some(id));
    assert!(w.totem(id).unwrap().addon_visual.is_some());
    assert!(w.outbox.drain_effects().is_empty(), "no cast for a cosmetic totem");

    lifecycle::unsummon(&mut w, id);
    assert!(w.outbox.drain_effects().is_empty(), "no aura removal either");
    assert!(w.outbox.drain_anims().contains(&AnimEvent::Despawn(id)));
    assert_eq!(w.unit(owner).unwrap().totem_slots[0], None, "slot still freed");
}
