//! summon_data: data schemas and loaders for the summoning sim.
//!
//! Extracted so the authoritative core can depend on a stable data API
//! without carrying TOML/file-path concerns itself. Loaders resolve files
//! under the workspace `data/` directory and fall back to compiled-in
//! defaults when a file is absent, so tests and tools run from any crate.

pub mod ids;
pub mod spells;
pub mod totems;

pub use ids::{SpellId, TotemEntry};
pub use spells::{AuraKind, EffectKind, SpellSlot, SpellSpec, SpellSpecDb};
pub use totems::{TotemTemplate, TotemTemplateDb};

pub(crate) fn data_root() -> std::path::PathBuf {
    // Prefer top-level workspace `data/` so tests and tools can run from any crate.
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}
