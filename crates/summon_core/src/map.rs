//! Map-side collaborator seams: placement resolution and instance tracking.
//! The actual spatial queries live in the host map service.

use glam::Vec3;

use crate::totem::TotemId;

pub trait Placement {
    /// Refine a candidate point (ground snap, collision nudge).
    fn select_final_point(&self, pos: Vec3) -> Vec3 {
        pos
    }

    /// Commit the point; `None` when no valid nearby position exists.
    fn relocate(&self, pos: Vec3) -> Option<Vec3>;
}

/// Accepts every candidate unchanged; hosts with real terrain replace this.
#[derive(Default, Debug)]
pub struct PassThroughPlacement;

impl Placement for PassThroughPlacement {
    fn relocate(&self, pos: Vec3) -> Option<Vec3> {
        Some(pos)
    }
}

/// Instance-data tracking. Only fires for entities created inside the map,
/// not for ones that move into it; non-players do not change maps.
pub trait InstanceHook {
    fn on_creature_create(&mut self, totem: TotemId);
}
