use serde::{Deserialize, Serialize};

/// The skeleton shape a page asks for when it starts loading.
///
/// [`SkeletonVariant::Auto`] delegates the choice to the route resolver, every
/// other value pins the generic skeleton of the same name regardless of the
/// current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkeletonVariant {
    #[default]
    Auto,
    Page,
    Card,
    Table,
    Dashboard,
}

impl SkeletonVariant {
    pub const ALL: [SkeletonVariant; 5] = [
        SkeletonVariant::Auto,
        SkeletonVariant::Page,
        SkeletonVariant::Card,
        SkeletonVariant::Table,
        SkeletonVariant::Dashboard,
    ];

    /// The skeleton pinned by this variant, `None` for [`SkeletonVariant::Auto`]
    pub fn pinned_kind(self) -> Option<SkeletonKind> {
        match self {
            SkeletonVariant::Auto => None,
            SkeletonVariant::Page => Some(SkeletonKind::Page),
            SkeletonVariant::Card => Some(SkeletonKind::Card),
            SkeletonVariant::Table => Some(SkeletonKind::Table),
            SkeletonVariant::Dashboard => Some(SkeletonKind::Dashboard),
        }
    }
}

impl core::fmt::Display for SkeletonVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SkeletonVariant::Auto => "auto",
            SkeletonVariant::Page => "page",
            SkeletonVariant::Card => "card",
            SkeletonVariant::Table => "table",
            SkeletonVariant::Dashboard => "dashboard",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skeleton variant: {0:?}")]
pub struct UnknownVariant(pub String);

impl core::str::FromStr for SkeletonVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkeletonVariant::ALL
            .into_iter()
            .find(|v| v.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// A concrete skeleton presentation, the output of the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkeletonKind {
    RequestList,
    ContractList,
    ProjectDetails,
    ContractDetails,
    Help,
    Card,
    Table,
    Dashboard,
    Page,
}

impl core::fmt::Display for SkeletonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SkeletonKind::RequestList => "request-list",
            SkeletonKind::ContractList => "contract-list",
            SkeletonKind::ProjectDetails => "project-details",
            SkeletonKind::ContractDetails => "contract-details",
            SkeletonKind::Help => "help",
            SkeletonKind::Card => "card",
            SkeletonKind::Table => "table",
            SkeletonKind::Dashboard => "dashboard",
            SkeletonKind::Page => "page",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_parse_case_insensitively() {
        assert_eq!("auto".parse::<SkeletonVariant>(), Ok(SkeletonVariant::Auto));
        assert_eq!(" Table ".parse::<SkeletonVariant>(), Ok(SkeletonVariant::Table));
        assert_eq!(
            "DASHBOARD".parse::<SkeletonVariant>(),
            Ok(SkeletonVariant::Dashboard)
        );
        assert!("spinner".parse::<SkeletonVariant>().is_err());
    }

    #[test]
    fn unknown_variant_names_the_input() {
        let err = "spinner".parse::<SkeletonVariant>().unwrap_err();
        assert_eq!(err, UnknownVariant("spinner".to_owned()));
        assert_eq!(err.to_string(), "unknown skeleton variant: \"spinner\"");
    }

    #[test]
    fn only_auto_is_unpinned() {
        for v in SkeletonVariant::ALL {
            assert_eq!(v.pinned_kind().is_none(), v == SkeletonVariant::Auto);
        }
    }

    #[test]
    fn variant_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&SkeletonVariant::Card).unwrap();
        assert_eq!(json, "\"card\"");
        let v: SkeletonVariant = serde_json::from_str("\"page\"").unwrap();
        assert_eq!(v, SkeletonVariant::Page);
    }
}
