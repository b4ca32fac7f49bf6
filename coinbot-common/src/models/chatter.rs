use serde::{Deserialize, Serialize};

/// Point-in-time listing of who is present in the channel, as returned by
/// the chatters endpoint. Fetched fresh for every payout, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatterSnapshot {
    pub viewers: Vec<String>,
    pub moderators: Vec<String>,
    pub vips: Vec<String>,
}

impl ChatterSnapshot {
    /// The payout audience: vips, then viewers, then moderators, with
    /// case-insensitive duplicates removed (first occurrence wins). A name
    /// listed in two categories must still receive exactly one grant.
    pub fn merged_unique(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.vips
            .iter()
            .chain(self.viewers.iter())
            .chain(self.moderators.iter())
            .filter(|name| seen.insert(name.to_lowercase()))
            .cloned()
            .collect()
    }
}
