#![allow(clippy::float_cmp)]

use glam::Vec3;
use summon_core::{Team, WorldState};
use summon_data::{SpellSpecDb, TotemEntry, TotemTemplateDb};

#[test]
fn large_height_difference_snaps_to_owner() {
    let spells = SpellSpecDb::builtin_defaults();
    let templates = TotemTemplateDb::builtin_defaults();
    let tpl = templates.get(TotemEntry(3527)).unwrap();

    let mut w = WorldState::new();
    let owner = w.spawn_player(Vec3::new(0.0, 10.0, 0.0), Team::Alliance);
    let id = w
        .summon_totem(owner, tpl, Vec3::new(1.0, 20.0, 0.0), 60_000, &spells)
        .unwrap();
    assert_eq!(w.totem(id).unwrap().tr.pos.y, 10.0, "10.0 delta clamps");
}

#[test]
fn small_height_difference_is_kept() {
    let spells = SpellSpecDb::builtin_defaults();
    let templates = TotemTemplateDb::builtin_defaults();
    let tpl = templates.get(TotemEntry(3527)).unwrap();

    let mut w = WorldState::new();
    let owner = w.spawn_player(Vec3::new(0.0, 10.0, 0.0), Team::Alliance);
    let id = w
        .summon_totem(owner, tpl, Vec3::new(1.0, 13.0, 0.0), 60_000, &spells)
        .unwrap();
    assert_eq!(w.totem(id).unwrap().tr.pos.y, 13.0, "3.0 delta is within threshold");
}

#[test]
fn clamp_works_below_owner_too() {
    let spells = SpellSpecDb::builtin_defaults();
    let templates = TotemTemplateDb::builtin_defaults();
    let tpl = templates.get(TotemEntry(3527)).unwrap();

    let mut w = WorldState::new();
    let owner = w.spawn_player(Vec3::new(0.0, 0.0, 0.0), Team::Alliance);
    let id = w
        .summon_totem(owner, tpl, Vec3::new(1.0, -8.0, 0.0), 60_000, &spells)
        .unwrap();
    assert_eq!(w.totem(id).unwrap().tr.pos.y, 0.0);
}
