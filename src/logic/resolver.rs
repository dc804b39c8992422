//! Package & Service Resolver
//!
//! Translates a profile selection into the concrete package and unit names
//! the session installs.
//!
//! # Design
//!
//! - **Order preserving**: packages install in declaration order, so the
//!   output is deduplicated but never sorted
//! - **Pure logic**: No I/O, no side effects; only resolves names
//!
//! # Resolution Rules
//!
//! | Source                 | Resolved To |
//! |------------------------|-------------|
//! | `desktop().display_server` | Windowing subsystem packages (xorg-server) |
//! | `packages()`           | Profile packages |
//! | `services()`           | Companion units (minus the greeter unit) |
//! | greeter override / `default_greeter_type()` | Greeter packages + unit |

use std::collections::HashSet;

use crate::profiles::Profile;
use crate::types::GreeterType;

/// Packages for a profile: display-server dependencies first, then the
/// profile's own list. Duplicates keep their first position.
pub fn resolve_profile_packages(profile: &Profile) -> Vec<&str> {
    let mut packages: Vec<&str> = Vec::new();

    if let Some(desktop) = profile.desktop() {
        packages.extend_from_slice(desktop.display_server.packages());
    }
    packages.extend(profile.packages());

    dedup_preserving_order(packages)
}

/// Greeter to install: an explicit choice wins over the profile default.
pub fn resolve_greeter(profile: &Profile, greeter_override: Option<GreeterType>) -> Option<GreeterType> {
    greeter_override.or_else(|| profile.default_greeter_type())
}

/// Companion units for a profile. The greeter unit is left out; it is
/// enabled together with the greeter packages.
pub fn resolve_companion_services(
    profile: &Profile,
    greeter_override: Option<GreeterType>,
) -> Vec<&str> {
    let greeter_unit = resolve_greeter(profile, greeter_override).map(|g| g.service());
    let services = profile
        .services()
        .into_iter()
        .filter(|service| Some(*service) != greeter_unit)
        .collect();
    dedup_preserving_order(services)
}

fn dedup_preserving_order(items: Vec<&str>) -> Vec<&str> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}
