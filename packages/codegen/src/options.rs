use serde::{Deserialize, Serialize};

/// Options recognized by mixin composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Copy the mixin member's documentation comment onto the forwarder
    pub include_documentation: bool,

    /// Wrap generated members in a region named after the mixin reference.
    /// Only affects output layout, never resolution
    pub create_regions: bool,

    /// Render property, indexer and event accessors on a single line
    pub avoid_line_breaks_in_properties: bool,

    /// Thread the mixin through the target's constructors
    pub inject_mixins: bool,

    /// Add the mixin's interfaces to the child's base list
    pub add_interfaces_to_child: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            include_documentation: false,
            create_regions: false,
            avoid_line_breaks_in_properties: false,
            inject_mixins: true,
            add_interfaces_to_child: false,
        }
    }
}

impl Settings {
    /// Only member forwarding, no extras
    pub fn minimal() -> Self {
        Self {
            include_documentation: false,
            create_regions: false,
            avoid_line_breaks_in_properties: false,
            inject_mixins: false,
            add_interfaces_to_child: false,
        }
    }

    /// Every option enabled
    pub fn full() -> Self {
        Self {
            include_documentation: true,
            create_regions: true,
            avoid_line_breaks_in_properties: true,
            inject_mixins: true,
            add_interfaces_to_child: true,
        }
    }
}
