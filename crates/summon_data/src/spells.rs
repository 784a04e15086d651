//! Spell specifications used by the summoning core.
//!
//! Only the fields the totem lifecycle consults are modeled: cast time (the
//! passive/active classifier) and the per-slot effect/aura kinds (immunity
//! checks). Resolution math lives in the external effect engine.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::ids::SpellId;

/// Effect kind carried by one spell slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Forces the target to attack the caster.
    AttackMe,
    ApplyAura,
    SchoolDamage,
    Heal,
    Dummy,
}

/// Aura kind applied when a slot's effect is `ApplyAura`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuraKind {
    PeriodicDamage,
    PeriodicLeech,
    ModFear,
    Transform,
    ModTaunt,
    PeriodicHeal,
    ModResistance,
    ModStat,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct SpellSlot {
    pub effect: EffectKind,
    #[serde(default)]
    pub aura: Option<AuraKind>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SpellSpec {
    pub id: SpellId,
    pub name: String,
    #[serde(default)]
    pub cast_time_ms: u32,
    #[serde(default)]
    pub slots: Vec<SpellSlot>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SpellSpecDb {
    #[serde(rename = "spell", default)]
    pub spells: Vec<SpellSpec>,
}

impl SpellSpecDb {
    /// Load `data/config/spells.toml`, or fall back to compiled-in defaults.
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/spells.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let db: Self = toml::from_str(&txt).context("parse spells TOML")?;
            Ok(db)
        } else {
            Ok(Self::builtin_defaults())
        }
    }

    pub fn builtin_defaults() -> Self {
        let spells = vec![
            SpellSpec {
                id: SpellId(5672),
                name: "Healing Stream".into(),
                cast_time_ms: 0,
                slots: vec![SpellSlot { effect: EffectKind::ApplyAura, aura: Some(AuraKind::PeriodicHeal) }],
            },
            SpellSpec {
                id: SpellId(8072),
                name: "Stoneskin".into(),
                cast_time_ms: 0,
                slots: vec![SpellSlot { effect: EffectKind::ApplyAura, aura: Some(AuraKind::ModResistance) }],
            },
            SpellSpec {
                id: SpellId(3606),
                name: "Searing Bolt".into(),
                cast_time_ms: 1500,
                slots: vec![SpellSlot { effect: EffectKind::SchoolDamage, aura: None }],
            },
        ];
        Self { spells }
    }

    pub fn get(&self, id: SpellId) -> Option<&SpellSpec> {
        self.spells.iter().find(|s| s.id == id)
    }
}
