use dioxus::prelude::*;
use serde::Deserialize;

use crate::stores::profiles::Profile;

const SEED: &str = include_str!("matches.json");

#[derive(Debug, Deserialize)]
struct SeedFile {
    me: Profile,
    #[serde(default)]
    matches: Vec<Profile>,
}

/// The signed-in member
pub static CURRENT_USER: GlobalSignal<Option<Profile>> = Signal::global(|| None);

/// People the signed-in member has matched with
pub static MATCHES: GlobalSignal<Vec<Profile>> = Signal::global(Vec::new);

/// Parse seed data, dropping profiles that fail validation
fn parse_seed(json: &str) -> Result<(Option<Profile>, Vec<Profile>), String> {
    let seed: SeedFile =
        serde_json::from_str(json).map_err(|e| format!("Invalid seed data: {}", e))?;

    let me = match seed.me.validate() {
        Ok(()) => Some(seed.me),
        Err(e) => {
            log::warn!("Skipping own profile: {}", e);
            None
        }
    };

    let matches = seed
        .matches
        .into_iter()
        .filter(|profile| match profile.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Skipping match: {}", e);
                false
            }
        })
        .collect();

    Ok((me, matches))
}

/// Load the bundled profiles into the stores
pub fn init_matches() {
    match parse_seed(SEED) {
        Ok((me, matches)) => {
            log::info!("Loaded {} matches", matches.len());
            *CURRENT_USER.write() = me;
            *MATCHES.write() = matches;
        }
        Err(e) => log::error!("Failed to load matches: {}", e),
    }
}

/// Look up a match by name
pub fn find_match(name: &str) -> Option<Profile> {
    let key = name.trim();
    MATCHES.read().iter().find(|p| p.key().as_str() == key).cloned()
}
