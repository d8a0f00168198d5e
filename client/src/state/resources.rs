//! Resource catalogue filtering.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use gateway::model::{Resource, ResourceKind};

/// Tabs above the resource grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResourceFilter {
    #[default]
    All,
    Room,
    Equipment,
}

impl ResourceFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Room, Self::Equipment];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Room => "Rooms",
            Self::Equipment => "Equipment",
        }
    }

    #[must_use]
    pub fn matches(self, kind: ResourceKind) -> bool {
        match self {
            Self::All => true,
            Self::Room => kind == ResourceKind::Room,
            Self::Equipment => kind == ResourceKind::Equipment,
        }
    }

    /// Resources shown under this tab, in list order.
    #[must_use]
    pub fn visible(self, resources: &[Resource]) -> Vec<Resource> {
        resources
            .iter()
            .filter(|resource| self.matches(resource.kind))
            .cloned()
            .collect()
    }
}
