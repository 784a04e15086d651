//! Totem template store (creature-entry static data).
//!
//! Templates carry the per-entry constants the lifecycle needs to stamp out a
//! totem: base health and radius, the channelled spell, declared immunities
//! for the base immunity check, and optional cosmetic addon data.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::ids::{SpellId, TotemEntry};
use crate::spells::AuraKind;

#[derive(Clone, Debug, Deserialize)]
pub struct TotemTemplate {
    pub entry: TotemEntry,
    pub name: String,
    pub health: i32,
    #[serde(default = "default_radius")]
    pub radius_m: f32,
    /// Spell this totem channels; absent for purely cosmetic totems.
    #[serde(default)]
    pub spell: Option<SpellId>,
    /// Aura kinds the base creature check treats as immune, beyond the
    /// totem-wide table.
    #[serde(default)]
    pub immune_auras: Vec<AuraKind>,
    /// Cosmetic addon visual (emote/mount-style display id); no gameplay effect.
    #[serde(default)]
    pub addon_visual: Option<u32>,
}

fn default_radius() -> f32 {
    0.5
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TotemTemplateDb {
    #[serde(rename = "totem", default)]
    pub totems: Vec<TotemTemplate>,
}

impl TotemTemplateDb {
    /// Load `data/config/totems.toml`, or fall back to compiled-in defaults.
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/totems.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let db: Self = toml::from_str(&txt).context("parse totems TOML")?;
            Ok(db)
        } else {
            Ok(Self::builtin_defaults())
        }
    }

    pub fn builtin_defaults() -> Self {
        let totems = vec![
            TotemTemplate {
                entry: TotemEntry(3527),
                name: "Healing Stream Totem".into(),
                health: 5,
                radius_m: 0.5,
                spell: Some(SpellId(5672)),
                immune_auras: vec![],
                addon_visual: None,
            },
            TotemTemplate {
                entry: TotemEntry(5873),
                name: "Stoneskin Totem".into(),
                health: 5,
                radius_m: 0.5,
                spell: Some(SpellId(8072)),
                immune_auras: vec![],
                addon_visual: None,
            },
            TotemTemplate {
                entry: TotemEntry(2523),
                name: "Searing Totem".into(),
                health: 9,
                radius_m: 0.5,
                spell: Some(SpellId(3606)),
                immune_auras: vec![],
                addon_visual: None,
            },
            // Visual-only marker totem; never touches the effect engine.
            TotemTemplate {
                entry: TotemEntry(15439),
                name: "Sentry Marker Totem".into(),
                health: 5,
                radius_m: 0.5,
                spell: None,
                immune_auras: vec![],
                addon_visual: Some(2),
            },
        ];
        Self { totems }
    }

    pub fn get(&self, entry: TotemEntry) -> Option<&TotemTemplate> {
        self.totems.iter().find(|t| t.entry == entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_defaults_include_cosmetic_totem() {
        let db = TotemTemplateDb::builtin_defaults();
        let sentry = db.get(TotemEntry(15439)).expect("sentry present");
        assert!(sentry.spell.is_none());
        assert!(sentry.addon_visual.is_some());
    }

    #[test]
    fn load_default_parses_shipped_data() {
        let db = TotemTemplateDb::load_default().expect("load");
        let heal = db.get(TotemEntry(3527)).expect("healing stream totem present");
        assert_eq!(heal.spell, Some(SpellId(5672)));
    }

    #[test]
    fn parses_totem_toml_with_defaults() {
        let txt = r#"
            [[totem]]
            entry = 7
            name = "Bare Totem"
            health = 5
        "#;
        let db: TotemTemplateDb = toml::from_str(txt).expect("parse");
        let t = db.get(TotemEntry(7)).expect("present");
        assert!(t.spell.is_none());
        assert!((t.radius_m - 0.5).abs() < 1e-6);
    }
}
