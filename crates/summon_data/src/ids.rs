//! Opaque identifiers shared between the data store and the sim core.

use serde::Deserialize;

/// Identifier of a spell in the static spell store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct SpellId(pub u32);

/// Identifier of a totem template (creature entry).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TotemEntry(pub u32);
