//! Schema descriptor
//!
//! The fixed, ordered attribute table of the elastic pool data source.
//! Required attributes are the lookup keys the caller must supply; computed
//! attributes are filled from the remote snapshot. Type coercion and
//! validation beyond required-ness belong to the consuming engine.

/// Semantic type of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    String,
    Int,
    Float,
    Bool,
    /// String-to-string mapping with unique keys
    Map,
}

/// Whether the caller supplies the attribute or the read computes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Required,
    Computed,
}

/// One attribute of the data source
#[derive(Debug, Clone, Copy)]
pub struct AttributeDef {
    pub name: &'static str,
    pub kind: AttrKind,
    pub classification: Classification,
}

const ATTRIBUTES: &[AttributeDef] = &[
    AttributeDef {
        name: "name",
        kind: AttrKind::String,
        classification: Classification::Required,
    },
    AttributeDef {
        name: "resource_group_name",
        kind: AttrKind::String,
        classification: Classification::Required,
    },
    AttributeDef {
        name: "server_name",
        kind: AttrKind::String,
        classification: Classification::Required,
    },
    AttributeDef {
        name: "location",
        kind: AttrKind::String,
        classification: Classification::Computed,
    },
    AttributeDef {
        name: "max_size_bytes",
        kind: AttrKind::Int,
        classification: Classification::Computed,
    },
    AttributeDef {
        name: "max_size_gb",
        kind: AttrKind::Float,
        classification: Classification::Computed,
    },
    AttributeDef {
        name: "per_db_min_capacity",
        kind: AttrKind::Int,
        classification: Classification::Computed,
    },
    AttributeDef {
        name: "per_db_max_capacity",
        kind: AttrKind::Int,
        classification: Classification::Computed,
    },
    AttributeDef {
        name: "tags",
        kind: AttrKind::Map,
        classification: Classification::Computed,
    },
    AttributeDef {
        name: "zone_redundant",
        kind: AttrKind::Bool,
        classification: Classification::Computed,
    },
];

/// The full attribute table, in declaration order
pub fn attributes() -> &'static [AttributeDef] {
    ATTRIBUTES
}

/// Look up a single attribute by name
pub fn attribute(name: &str) -> Option<&'static AttributeDef> {
    ATTRIBUTES.iter().find(|a| a.name == name)
}

/// Names of the required (lookup key) attributes, in declaration order
pub fn required_attributes() -> impl Iterator<Item = &'static AttributeDef> {
    ATTRIBUTES
        .iter()
        .filter(|a| a.classification == Classification::Required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_three_required_lookup_keys() {
        let required: Vec<&str> = required_attributes().map(|a| a.name).collect();
        assert_eq!(required, vec!["name", "resource_group_name", "server_name"]);
    }

    #[test]
    fn table_has_ten_attributes_in_declared_order() {
        let names: Vec<&str> = attributes().iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            vec![
                "name",
                "resource_group_name",
                "server_name",
                "location",
                "max_size_bytes",
                "max_size_gb",
                "per_db_min_capacity",
                "per_db_max_capacity",
                "tags",
                "zone_redundant",
            ]
        );
    }

    #[test]
    fn kinds_match_the_declared_schema() {
        assert_eq!(attribute("max_size_gb").unwrap().kind, AttrKind::Float);
        assert_eq!(attribute("max_size_bytes").unwrap().kind, AttrKind::Int);
        assert_eq!(attribute("tags").unwrap().kind, AttrKind::Map);
        assert_eq!(attribute("zone_redundant").unwrap().kind, AttrKind::Bool);
        assert_eq!(
            attribute("per_db_min_capacity").unwrap().kind,
            AttrKind::Int
        );
        assert!(attribute("no_such_attr").is_none());
    }
}
