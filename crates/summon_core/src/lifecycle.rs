//! Totem lifecycle: create -> summon -> per-tick update -> unsummon.
//!
//! All transitions are free functions over `&mut WorldState`, invoked
//! synchronously from the host's single-threaded tick driver. Failures never
//! propagate past this module: placement failure aborts creation, owner loss
//! and expiry resolve into teardown.

use glam::Vec3;
use thiserror::Error;

use summon_data::{SpellSpecDb, TotemTemplate};

use crate::WorldState;
use crate::events::{AnimEvent, EffectCmd, EffectTarget};
use crate::totem::{DeathState, Totem, TotemId, TotemMode};
use crate::unit::{Health, Team, Transform, UnitId, UnitKind};
use crate::policy;

/// Totems must stay at the owner's height when the candidate point drifts
/// further than this (swimming or elevated summoner).
pub const MAX_VERTICAL_OFFSET: f32 = 5.0;

#[derive(Debug, Error)]
pub enum SummonError {
    #[error("owner unit {0:?} not found")]
    OwnerMissing(UnitId),
    #[error("no valid placement near the requested position")]
    Placement,
}

/// Build a totem from its template at a placement-resolved position.
///
/// The totem is fully constructed and coupled to its owner but not yet in
/// the live set; pass it to [`summon`]. On error nothing is left registered
/// and the caller must not proceed to summon.
pub fn create_totem(
    world: &mut WorldState,
    owner: UnitId,
    template: &TotemTemplate,
    candidate: Vec3,
    duration_ms: u32,
    spells: &SpellSpecDb,
) -> Result<Totem, SummonError> {
    let (owner_pos, team) = {
        let o = world.unit(owner).ok_or(SummonError::OwnerMissing(owner))?;
        let team = match o.kind {
            UnitKind::Player => o.team,
            UnitKind::Creature => Team::None,
        };
        (o.tr.pos, team)
    };

    let mut pos = world.placement.select_final_point(candidate);
    // Keep the totem at the summoner's height (swimming caster etc.).
    if (pos.y - owner_pos.y).abs() > MAX_VERTICAL_OFFSET {
        pos.y = owner_pos.y;
    }
    let Some(pos) = world.placement.relocate(pos) else {
        log::warn!("totem {:?}: no valid placement near {candidate}", template.entry);
        return Err(SummonError::Placement);
    };

    let id = world.alloc_totem_id();
    let mut totem = Totem {
        id,
        entry: template.entry,
        name: template.name.clone(),
        owner,
        creator: owner,
        team,
        faction: 0,
        level: 1,
        tr: Transform { pos, yaw: 0.0, radius: template.radius_m },
        hp: Health { hp: template.health, max: template.health },
        spell: template.spell,
        mode: TotemMode::Passive,
        duration_ms,
        death_state: DeathState::Alive,
        in_combat: false,
        immune_auras: template.immune_auras.clone(),
        addon_visual: template.addon_visual,
        torn_down: false,
    };

    {
        let o = world.unit(owner).ok_or(SummonError::OwnerMissing(owner))?;
        policy::inherit_from_owner(&mut totem, o);
    }
    policy::classify_mode(&mut totem, spells);

    if let Some(hook) = world.instance.as_mut() {
        hook.on_creature_create(id);
    }

    Ok(totem)
}

/// Enter the live set and fire summon side effects: one spawn-animation
/// broadcast, owner bookkeeping and AI notification, and for passive totems
/// a single triggered self-cast of the channelled spell.
///
/// Totems carry no AI of their own; scripted reactions live on the owner.
pub fn summon(world: &mut WorldState, totem: Totem) -> TotemId {
    let id = totem.id;
    let owner = totem.owner();
    let spell = totem.spell();
    let mode = totem.mode();
    log::debug!("summon totem {id:?} ({}) for owner {owner:?}", totem.name);
    world.totems.push(totem);

    world.outbox.anims.push(AnimEvent::Spawn(id));

    if let Some(o) = world.unit_mut(owner) {
        o.remember_totem(id);
        if o.kind == UnitKind::Creature
            && let Some(ai) = o.ai.as_mut()
        {
            ai.just_summoned(id);
        }
    }

    // Some totems exist just for their visual appearance.
    let Some(spell) = spell else {
        return id;
    };

    match mode {
        TotemMode::Passive => {
            world.outbox.effects.push(EffectCmd::Cast {
                caster: id,
                target: EffectTarget::Totem(id),
                spell,
                triggered: true,
            });
        }
        // Active totems fire on a cadence owned by the spell engine;
        // nothing happens at summon time.
        TotemMode::Active => {}
    }
    id
}

/// One tick of totem upkeep. Owner loss, owner death, own death and duration
/// expiry all resolve into [`unsummon`] on this exact call; otherwise the
/// remaining duration shrinks by `diff_ms` and the rest of the tick
/// (movement, combat bookkeeping) is the host's base update.
pub fn update_totem(world: &mut WorldState, id: TotemId, diff_ms: u32) {
    let Some(t) = world.totem(id) else {
        return;
    };
    let (owner, alive, duration) = (t.owner(), t.is_alive(), t.duration_ms);

    let owner_ok = world.unit(owner).is_some_and(|o| o.is_alive());
    if !owner_ok || !alive {
        unsummon(world, id);
        return;
    }

    if duration <= diff_ms {
        unsummon(world, id);
        return;
    }
    if let Some(t) = world.totem_mut(id) {
        t.duration_ms = duration - diff_ms;
    }
}

/// Idempotent teardown. Ordered: despawn animation, combat stop, aura
/// removal from self, owner-side cleanup (slot bookkeeping, owner aura,
/// same-sub-group auras, AI notification), forced death state, deferred
/// removal. A second call on a torn-down totem is a no-op.
pub fn unsummon(world: &mut WorldState, id: TotemId) {
    let Some(t) = world.totem_mut(id) else {
        return;
    };
    if t.torn_down {
        return;
    }
    t.torn_down = true;
    let (owner, spell, was_alive) = (t.owner(), t.spell(), t.is_alive());
    log::debug!("unsummon totem {id:?} (owner {owner:?})");

    world.outbox.anims.push(AnimEvent::Despawn(id));

    if let Some(t) = world.totem_mut(id) {
        t.in_combat = false;
    }

    if let Some(spell) = spell {
        world.outbox.effects.push(EffectCmd::RemoveAuras {
            target: EffectTarget::Totem(id),
            spell,
        });
    }

    if let Some(owner_kind) = world.unit(owner).map(|o| o.kind) {
        if let Some(o) = world.unit_mut(owner) {
            o.forget_totem(id);
        }
        if let Some(spell) = spell {
            world.outbox.effects.push(EffectCmd::RemoveAuras {
                target: EffectTarget::Unit(owner),
                spell,
            });
            // Aura cleanup cascades to the owner's sub-group only, not the
            // whole group. Not only players can summon (scripted AI), but
            // only players group.
            if owner_kind == UnitKind::Player {
                let same_subgroup: Vec<UnitId> = world
                    .groups
                    .group_of(owner)
                    .map(|g| {
                        g.members()
                            .filter(|&m| m != owner && g.same_subgroup(owner, m))
                            .collect()
                    })
                    .unwrap_or_default();
                for member in same_subgroup {
                    world.outbox.effects.push(EffectCmd::RemoveAuras {
                        target: EffectTarget::Unit(member),
                        spell,
                    });
                }
            }
        }
        if owner_kind == UnitKind::Creature
            && let Some(o) = world.unit_mut(owner)
            && let Some(ai) = o.ai.as_mut()
        {
            ai.summoned_despawn(id);
        }
    }

    // Unsummon looks like a totem kill; the despawn animation needs a death.
    if was_alive && let Some(t) = world.totem_mut(id) {
        t.death_state = DeathState::Dead;
    }

    world.schedule_removal(id);
}
