//! Region lookup for the devops runner

use fleetnet_config::RegionEntry;
use fleetnet_core::RegionRef;
use std::collections::HashMap;

/// Regions the runner knows how to address
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    regions: HashMap<RegionRef, RegionEntry>,
}

impl RegionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: RegionEntry) {
        self.regions.insert(entry.uuid, entry);
    }

    pub fn get(&self, region: &RegionRef) -> Option<&RegionEntry> {
        self.regions.get(region)
    }
}

impl FromIterator<RegionEntry> for RegionCatalog {
    fn from_iter<I: IntoIterator<Item = RegionEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.add(entry);
        }
        catalog
    }
}
