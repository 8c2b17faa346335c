//! Read-only registry of the built-in profiles
//!
//! Built once on first access and never mutated afterwards, so lookups are
//! safe from any thread.

use super::Profile;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

static HTML: Lazy<Profile> = Lazy::new(Profile::html);
static XHTML: Lazy<Profile> = Lazy::new(Profile::xhtml);
static XML: Lazy<Profile> = Lazy::new(Profile::xml);
static CSS: Lazy<Profile> = Lazy::new(Profile::css);

static REGISTRY: Lazy<FxHashMap<&'static str, &'static Profile>> = Lazy::new(|| {
    let mut profiles: FxHashMap<&'static str, &'static Profile> = FxHashMap::default();
    profiles.insert("html", &*HTML);
    profiles.insert("xhtml", &*XHTML);
    profiles.insert("xml", &*XML);
    profiles.insert("css", &*CSS);
    tracing::trace!(count = profiles.len(), "built profile registry");
    profiles
});

/// Look up a built-in profile by name
pub fn get(name: &str) -> Option<&'static Profile> {
    REGISTRY.get(name).copied()
}

/// The default profile (`html`)
pub fn html() -> &'static Profile {
    &HTML
}

/// Names of all built-in profiles, sorted
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}
