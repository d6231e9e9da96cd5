//! Skeleton placeholders shown by the loading overlay.
//!
//! Every skeleton is the same template, [`SkeletonShape`], with different block
//! counts. [`SkeletonShape::for_kind`] gives the shape mimicking each page and
//! [`SkeletonOptions`] lets a caller tweak it.

mod blocks;
mod view;

pub use view::SkeletonView;

use serde::{Deserialize, Serialize};

use super::variant::SkeletonKind;

/// Width of the progress-steps sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarWidth {
    Narrow,
    Wide,
    #[serde(skip)]
    Custom(#[serde(skip)] &'static str),
}
impl SidebarWidth {
    pub fn class(self) -> &'static str {
        match self {
            SidebarWidth::Narrow => "w-56",
            SidebarWidth::Wide => "w-72",
            SidebarWidth::Custom(c) => c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepsSidebar {
    pub steps: usize,
    pub width: SidebarWidth,
}

/// Layout description of a skeleton page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonShape {
    pub title: bool,
    pub action_buttons: usize,
    pub stat_cards: usize,
    pub filter_bar: bool,
    pub table_rows: usize,
    pub table_columns: usize,
    pub sidebar: Option<StepsSidebar>,
    pub detail_fields: usize,
    pub form_cards: usize,
    pub extra_cards: bool,
}

impl Default for SkeletonShape {
    fn default() -> Self {
        Self {
            title: true,
            action_buttons: 0,
            stat_cards: 0,
            filter_bar: false,
            table_rows: 0,
            table_columns: 5,
            sidebar: None,
            detail_fields: 0,
            form_cards: 0,
            extra_cards: false,
        }
    }
}

impl SkeletonShape {
    pub fn for_kind(kind: SkeletonKind) -> Self {
        let base = Self::default();
        match kind {
            SkeletonKind::RequestList => Self {
                action_buttons: 1,
                stat_cards: 4,
                filter_bar: true,
                table_rows: 8,
                table_columns: 6,
                ..base
            },
            SkeletonKind::ContractList => Self {
                action_buttons: 1,
                filter_bar: true,
                table_rows: 8,
                ..base
            },
            SkeletonKind::ProjectDetails => Self {
                action_buttons: 2,
                table_rows: 5,
                sidebar: Some(StepsSidebar {
                    steps: 5,
                    width: SidebarWidth::Wide,
                }),
                detail_fields: 6,
                ..base
            },
            SkeletonKind::ContractDetails => Self {
                action_buttons: 1,
                stat_cards: 3,
                table_rows: 4,
                table_columns: 4,
                detail_fields: 8,
                ..base
            },
            SkeletonKind::Help => Self {
                sidebar: Some(StepsSidebar {
                    steps: 4,
                    width: SidebarWidth::Narrow,
                }),
                form_cards: 3,
                ..base
            },
            SkeletonKind::Card => Self {
                form_cards: 1,
                ..base
            },
            SkeletonKind::Table => Self {
                filter_bar: true,
                table_rows: 8,
                ..base
            },
            SkeletonKind::Dashboard => Self {
                stat_cards: 4,
                table_rows: 5,
                ..base
            },
            SkeletonKind::Page => Self {
                form_cards: 2,
                ..base
            },
        }
    }

    pub fn with_options(mut self, options: SkeletonOptions) -> Self {
        if let Some(steps) = options.steps {
            let width = options
                .sidebar_width
                .or(self.sidebar.map(|s| s.width))
                .unwrap_or(SidebarWidth::Narrow);
            self.sidebar = (steps > 0).then_some(StepsSidebar { steps, width });
        } else if let (Some(width), Some(sidebar)) = (options.sidebar_width, self.sidebar.as_mut())
        {
            sidebar.width = width;
        }
        if let Some(extra) = options.show_extra_cards {
            self.extra_cards = extra;
        }
        self
    }

    /// Number of shimmer blocks the shape renders, header included
    pub fn block_count(&self) -> usize {
        let title = if self.title { 2 } else { 0 };
        let filter = if self.filter_bar { 3 } else { 0 };
        let table = if self.table_rows > 0 {
            (self.table_rows + 1) * self.table_columns
        } else {
            0
        };
        let sidebar = self.sidebar.map_or(0, |s| s.steps * 2);
        let extra = if self.extra_cards { 2 * 3 } else { 0 };
        title
            + self.action_buttons
            + self.stat_cards * 3
            + filter
            + table
            + sidebar
            + self.detail_fields * 2
            + self.form_cards * FORM_CARD_BLOCKS
            + extra
    }
}

/// Blocks in one form card: a heading, four label/input pairs and a button
pub(super) const FORM_CARD_BLOCKS: usize = 1 + 4 * 2 + 1;

/// Caller overrides applied on top of the shape of a [`SkeletonKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonOptions {
    /// Number of progress steps, `Some(0)` removes the sidebar
    pub steps: Option<usize>,
    pub sidebar_width: Option<SidebarWidth>,
    pub show_extra_cards: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_shapes_have_a_filterable_table() {
        for kind in [
            SkeletonKind::RequestList,
            SkeletonKind::ContractList,
            SkeletonKind::Table,
        ] {
            let shape = SkeletonShape::for_kind(kind);
            assert!(shape.filter_bar, "{kind}");
            assert_eq!(shape.table_rows, 8, "{kind}");
        }
    }

    #[test]
    fn dashboard_shows_four_stat_cards() {
        let shape = SkeletonShape::for_kind(SkeletonKind::Dashboard);
        assert_eq!(shape.stat_cards, 4);
        assert!(shape.sidebar.is_none());
    }

    #[test]
    fn details_shapes() {
        let project = SkeletonShape::for_kind(SkeletonKind::ProjectDetails);
        assert_eq!(
            project.sidebar,
            Some(StepsSidebar {
                steps: 5,
                width: SidebarWidth::Wide
            })
        );
        assert_eq!(project.detail_fields, 6);

        let contract = SkeletonShape::for_kind(SkeletonKind::ContractDetails);
        assert_eq!(contract.stat_cards, 3);
        assert_eq!(contract.detail_fields, 8);
        assert!(contract.sidebar.is_none());
    }

    #[test]
    fn every_shape_renders_something() {
        for kind in [
            SkeletonKind::RequestList,
            SkeletonKind::ContractList,
            SkeletonKind::ProjectDetails,
            SkeletonKind::ContractDetails,
            SkeletonKind::Help,
            SkeletonKind::Card,
            SkeletonKind::Table,
            SkeletonKind::Dashboard,
            SkeletonKind::Page,
        ] {
            let shape = SkeletonShape::for_kind(kind);
            assert!(shape.title);
            assert!(shape.block_count() > 2, "{kind}");
        }
    }

    #[test]
    fn options_override_steps_and_width() {
        let shape = SkeletonShape::for_kind(SkeletonKind::Card).with_options(SkeletonOptions {
            steps: Some(3),
            ..Default::default()
        });
        assert_eq!(
            shape.sidebar,
            Some(StepsSidebar {
                steps: 3,
                width: SidebarWidth::Narrow
            })
        );

        let shape =
            SkeletonShape::for_kind(SkeletonKind::ProjectDetails).with_options(SkeletonOptions {
                sidebar_width: Some(SidebarWidth::Custom("w-96")),
                ..Default::default()
            });
        assert_eq!(shape.sidebar.map(|s| s.steps), Some(5));
        assert_eq!(shape.sidebar.map(|s| s.width.class()), Some("w-96"));

        let shape = SkeletonShape::for_kind(SkeletonKind::Help).with_options(SkeletonOptions {
            steps: Some(0),
            ..Default::default()
        });
        assert!(shape.sidebar.is_none());
    }

    #[test]
    fn extra_cards_add_blocks() {
        let plain = SkeletonShape::for_kind(SkeletonKind::Page);
        let extra = plain.with_options(SkeletonOptions {
            show_extra_cards: Some(true),
            ..Default::default()
        });
        assert!(extra.extra_cards);
        assert_eq!(extra.block_count(), plain.block_count() + 6);
    }

    #[test]
    fn default_options_change_nothing() {
        let shape = SkeletonShape::for_kind(SkeletonKind::RequestList);
        assert_eq!(shape.with_options(SkeletonOptions::default()), shape);
    }
}
