use super::variant::{SkeletonKind, SkeletonVariant};

/// A predicate over the path component of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMatcher {
    Exact(&'static str),
    Prefix(&'static str),
    Contains(&'static str),
    /// Matches when any of the inner matchers does
    AnyOf(&'static [PathMatcher]),
}

impl PathMatcher {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatcher::Exact(p) => path == *p,
            PathMatcher::Prefix(p) => path.starts_with(p),
            PathMatcher::Contains(p) => path.contains(p),
            PathMatcher::AnyOf(matchers) => matchers.iter().any(|m| m.matches(path)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub matcher: PathMatcher,
    pub kind: SkeletonKind,
}

const fn rule(matcher: PathMatcher, kind: SkeletonKind) -> RouteRule {
    RouteRule { matcher, kind }
}

/// Ordered rules used in [`SkeletonVariant::Auto`] mode. First match wins.
///
/// The order is load-bearing: the generic "contains" rules at the bottom would
/// swallow the exact and prefix rules above them.
pub static ROUTE_RULES: &[RouteRule] = &[
    rule(PathMatcher::Exact("/requests"), SkeletonKind::RequestList),
    rule(PathMatcher::Exact("/contract"), SkeletonKind::ContractList),
    rule(
        PathMatcher::Prefix("/project-details/"),
        SkeletonKind::ProjectDetails,
    ),
    rule(
        PathMatcher::Prefix("/contract-details/"),
        SkeletonKind::ContractDetails,
    ),
    // Request details share the project details layout
    rule(
        PathMatcher::Prefix("/request-details/"),
        SkeletonKind::ProjectDetails,
    ),
    rule(PathMatcher::Exact("/help"), SkeletonKind::Help),
    rule(
        PathMatcher::AnyOf(&[
            PathMatcher::Exact("/edit-profile"),
            PathMatcher::Contains("/edit-"),
            PathMatcher::Contains("/create-"),
            PathMatcher::Contains("/add-"),
        ]),
        SkeletonKind::Card,
    ),
    rule(
        PathMatcher::AnyOf(&[
            PathMatcher::Contains("/project-dashboard"),
            PathMatcher::Contains("/contract-project-list"),
            PathMatcher::Contains("/select-contract"),
        ]),
        SkeletonKind::Table,
    ),
    rule(
        PathMatcher::AnyOf(&[
            PathMatcher::Contains("/dashboard"),
            PathMatcher::Exact("/"),
            PathMatcher::Exact("/project-home"),
        ]),
        SkeletonKind::Dashboard,
    ),
];

const FALLBACK: SkeletonKind = SkeletonKind::Page;

/// Strips the query string and the fragment, leaving what a browser would
/// expose as `location.pathname`
pub fn path_component(route: &str) -> &str {
    route
        .split(&['?', '#'][..])
        .next()
        .unwrap_or_default()
}

/// Evaluates `rules` in order against the path component of `route`
pub fn resolve_with(rules: &[RouteRule], route: &str) -> SkeletonKind {
    let path = path_component(route);
    rules
        .iter()
        .find(|r| r.matcher.matches(path))
        .map(|r| r.kind)
        .unwrap_or(FALLBACK)
}

/// Selects the skeleton to display for `route`.
///
/// An explicit variant always wins, the route only matters in
/// [`SkeletonVariant::Auto`] mode.
pub fn resolve(route: &str, variant: SkeletonVariant) -> SkeletonKind {
    match variant.pinned_kind() {
        Some(kind) => kind,
        None => resolve_with(ROUTE_RULES, route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PATHS: &[&str] = &[
        "/",
        "/requests",
        "/contract",
        "/help",
        "/edit-profile",
        "/project-home",
        "/project-details/12",
        "/contract-details/7",
        "/request-details/3",
        "/create-project",
        "/edit-project/4",
        "/add-contract/4",
        "/project-dashboard",
        "/contract-project-list/9",
        "/select-contract/9",
        "/dashboard",
        "/admin/dashboard",
        "/some-unmapped-path",
        "",
    ];

    #[test]
    fn explicit_variant_ignores_the_route() {
        for path in SAMPLE_PATHS {
            assert_eq!(resolve(path, SkeletonVariant::Page), SkeletonKind::Page);
            assert_eq!(resolve(path, SkeletonVariant::Card), SkeletonKind::Card);
            assert_eq!(resolve(path, SkeletonVariant::Table), SkeletonKind::Table);
            assert_eq!(
                resolve(path, SkeletonVariant::Dashboard),
                SkeletonKind::Dashboard
            );
        }
    }

    #[test]
    fn auto_mode_follows_the_rule_table() {
        let expected = [
            ("/requests", SkeletonKind::RequestList),
            ("/contract", SkeletonKind::ContractList),
            ("/project-details/12", SkeletonKind::ProjectDetails),
            ("/contract-details/7", SkeletonKind::ContractDetails),
            ("/request-details/3", SkeletonKind::ProjectDetails),
            ("/help", SkeletonKind::Help),
            ("/edit-profile", SkeletonKind::Card),
            ("/create-project", SkeletonKind::Card),
            ("/edit-project/4", SkeletonKind::Card),
            ("/add-contract/4", SkeletonKind::Card),
            ("/project-dashboard", SkeletonKind::Table),
            ("/contract-project-list/9", SkeletonKind::Table),
            ("/select-contract/9", SkeletonKind::Table),
            ("/dashboard", SkeletonKind::Dashboard),
            ("/admin/dashboard", SkeletonKind::Dashboard),
            ("/", SkeletonKind::Dashboard),
            ("/project-home", SkeletonKind::Dashboard),
            ("/some-unmapped-path", SkeletonKind::Page),
            ("", SkeletonKind::Page),
        ];
        for (path, kind) in expected {
            assert_eq!(resolve(path, SkeletonVariant::Auto), kind, "path {path:?}");
        }
    }

    #[test]
    fn exact_rules_do_not_match_longer_paths() {
        assert_eq!(
            resolve("/requests/archive", SkeletonVariant::Auto),
            SkeletonKind::Page
        );
        assert_eq!(resolve("/contracts", SkeletonVariant::Auto), SkeletonKind::Page);
        assert_eq!(resolve("/help/faq", SkeletonVariant::Auto), SkeletonKind::Page);
    }

    #[test]
    fn earlier_rules_take_priority() {
        // Contains "/edit-" but the details prefix is evaluated first
        assert_eq!(
            resolve("/project-details/edit-3", SkeletonVariant::Auto),
            SkeletonKind::ProjectDetails
        );
        // Card rule beats the table rule
        assert_eq!(
            resolve("/create-request/select-contract", SkeletonVariant::Auto),
            SkeletonKind::Card
        );
        // Table rule beats the generic dashboard rule
        assert_eq!(
            resolve("/project-dashboard/dashboard", SkeletonVariant::Auto),
            SkeletonKind::Table
        );
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(
            resolve("/requests?page=2&status=approved", SkeletonVariant::Auto),
            SkeletonKind::RequestList
        );
        assert_eq!(resolve("/help#contact", SkeletonVariant::Auto), SkeletonKind::Help);
        assert_eq!(resolve("/?tab=stats", SkeletonVariant::Auto), SkeletonKind::Dashboard);
    }

    #[test]
    fn resolution_is_idempotent() {
        for path in SAMPLE_PATHS {
            for variant in SkeletonVariant::ALL {
                assert_eq!(resolve(path, variant), resolve(path, variant));
            }
        }
    }

    #[test]
    fn custom_tables_fall_back_to_page() {
        let rules = [rule(PathMatcher::Prefix("/x"), SkeletonKind::Help)];
        assert_eq!(resolve_with(&rules, "/xyz"), SkeletonKind::Help);
        assert_eq!(resolve_with(&rules, "/y"), SkeletonKind::Page);
        assert_eq!(resolve_with(&[], "/requests"), SkeletonKind::Page);
    }
}
