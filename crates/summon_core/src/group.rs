//! Party/group membership queries.
//!
//! Teardown-time aura cleanup is scoped to the owner's *sub-group*, not the
//! whole group, so the only interesting query is `same_subgroup`.

use crate::unit::UnitId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupId(pub u32);

#[derive(Copy, Clone, Debug)]
struct Member {
    unit: UnitId,
    subgroup: u8,
}

#[derive(Debug)]
pub struct Group {
    pub id: GroupId,
    members: Vec<Member>,
}

impl Group {
    pub fn add_member(&mut self, unit: UnitId, subgroup: u8) {
        if self.members.iter().any(|m| m.unit == unit) {
            return;
        }
        self.members.push(Member { unit, subgroup });
    }

    pub fn members(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.members.iter().map(|m| m.unit)
    }

    pub fn subgroup_of(&self, unit: UnitId) -> Option<u8> {
        self.members.iter().find(|m| m.unit == unit).map(|m| m.subgroup)
    }

    pub fn same_subgroup(&self, a: UnitId, b: UnitId) -> bool {
        match (self.subgroup_of(a), self.subgroup_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}

#[derive(Default, Debug)]
pub struct GroupState {
    next_id: u32,
    groups: Vec<Group>,
}

impl GroupState {
    pub fn create(&mut self) -> GroupId {
        let id = GroupId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.groups.push(Group { id, members: Vec::new() });
        id
    }

    pub fn get_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// The group `unit` belongs to, if any.
    pub fn group_of(&self, unit: UnitId) -> Option<&Group> {
        self.groups.iter().find(|g| g.subgroup_of(unit).is_some())
    }
}
