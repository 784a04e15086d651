//! summon_core: authoritative summoned-entity (totem) lifecycle.
//!
//! A totem is a short-lived creature bound to a summoner: it inherits the
//! owner's identity at creation, counts down a fixed duration on the host's
//! tick, and tears itself down when it expires or the owner dies or
//! disappears. Teardown cascades aura cleanup to the owner and the owner's
//! sub-group and notifies a creature owner's scripted AI.
//!
//! The heavy collaborators (spell resolution, spatial placement, broadcast,
//! group storage) stay external: placement and instance tracking are trait
//! seams, and everything fire-and-forget (animations, effect commands) is
//! queued on an outbox the host drains after each tick.

use glam::Vec3;

pub mod ai;
pub mod events;
pub mod group;
pub mod lifecycle;
pub mod map;
pub mod policy;
pub mod totem;
pub mod unit;

pub use ai::CreatureAi;
pub use events::{AnimEvent, EffectCmd, EffectTarget, Outbox};
pub use group::{GroupId, GroupState};
pub use lifecycle::SummonError;
pub use map::{InstanceHook, PassThroughPlacement, Placement};
pub use totem::{DeathState, Totem, TotemId, TotemMode};
pub use unit::{Health, MAX_TOTEM_SLOTS, Team, Transform, Unit, UnitId, UnitKind};

use summon_data::{SpellSpecDb, TotemTemplate};

/// Authoritative state for the slice of the world the totem lifecycle
/// touches: units, live totems, groups, collaborator seams and the outbox.
pub struct WorldState {
    next_unit_id: u32,
    next_totem_id: u32,
    pub units: Vec<Unit>,
    pub totems: Vec<Totem>,
    pub groups: GroupState,
    pub outbox: Outbox,
    pub placement: Box<dyn Placement>,
    pub instance: Option<Box<dyn InstanceHook>>,
    remove_queue: Vec<TotemId>,
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState {
    pub fn new() -> Self {
        Self {
            next_unit_id: 1,
            next_totem_id: 1,
            units: Vec::new(),
            totems: Vec::new(),
            groups: GroupState::default(),
            outbox: Outbox::default(),
            placement: Box::new(PassThroughPlacement),
            instance: None,
            remove_queue: Vec::new(),
        }
    }

    pub fn with_placement(placement: Box<dyn Placement>) -> Self {
        Self { placement, ..Self::new() }
    }

    pub fn spawn_player(&mut self, pos: Vec3, team: Team) -> UnitId {
        self.spawn_unit(UnitKind::Player, pos, team, None)
    }

    pub fn spawn_creature(&mut self, pos: Vec3) -> UnitId {
        self.spawn_unit(UnitKind::Creature, pos, Team::None, None)
    }

    pub fn spawn_creature_with_ai(&mut self, pos: Vec3, ai: Box<dyn CreatureAi>) -> UnitId {
        self.spawn_unit(UnitKind::Creature, pos, Team::None, Some(ai))
    }

    fn spawn_unit(
        &mut self,
        kind: UnitKind,
        pos: Vec3,
        team: Team,
        ai: Option<Box<dyn CreatureAi>>,
    ) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id = self.next_unit_id.wrapping_add(1);
        self.units.push(Unit {
            id,
            kind,
            team,
            faction: 35,
            level: 1,
            tr: Transform { pos, yaw: 0.0, radius: 0.7 },
            hp: Health { hp: 100, max: 100 },
            ai,
            totem_slots: [None; MAX_TOTEM_SLOTS],
        });
        id
    }

    #[inline]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    #[inline]
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    #[inline]
    pub fn totem(&self, id: TotemId) -> Option<&Totem> {
        self.totems.iter().find(|t| t.id == id)
    }

    #[inline]
    pub fn totem_mut(&mut self, id: TotemId) -> Option<&mut Totem> {
        self.totems.iter_mut().find(|t| t.id == id)
    }

    /// Create and summon in one step; the common host path.
    pub fn summon_totem(
        &mut self,
        owner: UnitId,
        template: &TotemTemplate,
        candidate: Vec3,
        duration_ms: u32,
        spells: &SpellSpecDb,
    ) -> Result<TotemId, SummonError> {
        let totem = lifecycle::create_totem(self, owner, template, candidate, duration_ms, spells)?;
        Ok(lifecycle::summon(self, totem))
    }

    /// One simulation tick: advance every live totem, then sweep the
    /// deferred-removal queue. Removal is deferred so in-flight references
    /// from earlier in the tick stay valid.
    pub fn update(&mut self, diff_ms: u32) {
        let ids: Vec<TotemId> = self.totems.iter().map(|t| t.id).collect();
        for id in ids {
            lifecycle::update_totem(self, id, diff_ms);
        }
        self.sweep_removals();
    }

    pub(crate) fn alloc_totem_id(&mut self) -> TotemId {
        let id = TotemId(self.next_totem_id);
        self.next_totem_id = self.next_totem_id.wrapping_add(1);
        id
    }

    pub(crate) fn schedule_removal(&mut self, id: TotemId) {
        self.remove_queue.push(id);
    }

    /// Drop every totem scheduled for removal. `update` calls this at end
    /// of tick; hosts that unsummon outside the tick sweep explicitly.
    pub fn sweep_removals(&mut self) {
        if self.remove_queue.is_empty() {
            return;
        }
        use std::collections::HashSet;
        let set: HashSet<TotemId> = self.remove_queue.drain(..).collect();
        self.totems.retain(|t| !set.contains(&t.id));
    }
}
