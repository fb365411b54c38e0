//! Render model derived from [`DirectoryState`]; the UI draws exactly this.

use super::state::DirectoryState;
use crate::domain::a001_platform::{DetailField, Platform, TagKind};

pub const EMPTY_PLACEHOLDER: &str = "No platforms found";
pub const INDICATOR_COLLAPSED: &str = "▶";
pub const INDICATOR_EXPANDED: &str = "▼";

/// Marker shown next to the sort control.
pub fn sort_indicator(order: Option<bool>) -> &'static str {
    match order {
        None => " ⇅",
        Some(true) => " ▲",
        Some(false) => " ▼",
    }
}

pub fn count_label(count: usize) -> String {
    format!("{} platforms", count)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub text: String,
    pub kind: TagKind,
    pub class: String,
}

impl TagChip {
    pub fn new(text: &str) -> Self {
        let kind = TagKind::classify(text);
        Self {
            text: text.to_string(),
            kind,
            class: kind.chip_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
    pub is_link: bool,
}

/// Summary row plus its details row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRowView {
    pub index: usize,
    pub name: String,
    pub website: String,
    pub category: String,
    pub tags: Vec<TagChip>,
    pub details: Vec<DetailLine>,
    pub expanded: bool,
}

impl PlatformRowView {
    pub fn from_platform(index: usize, platform: &Platform, expanded: bool) -> Self {
        Self {
            index,
            name: platform.name.clone(),
            website: platform.website.clone(),
            category: platform.category.clone(),
            tags: platform.tags.iter().map(|t| TagChip::new(t)).collect(),
            details: detail_lines(platform),
            expanded,
        }
    }

    pub fn row_id(&self) -> String {
        format!("platform-{}", self.index)
    }

    pub fn details_id(&self) -> String {
        format!("details-{}", self.index)
    }

    pub fn indicator(&self) -> &'static str {
        if self.expanded {
            INDICATOR_EXPANDED
        } else {
            INDICATOR_COLLAPSED
        }
    }
}

/// Present fields only, in fixed label order.
pub fn detail_lines(platform: &Platform) -> Vec<DetailLine> {
    DetailField::ALL
        .iter()
        .filter_map(|field| {
            platform.detail(*field).map(|value| DetailLine {
                label: field.label(),
                value: value.to_string(),
                is_link: field.is_link(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    /// A single placeholder row.
    Empty,
    Rows(Vec<PlatformRowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub count_label: String,
    pub sort_indicator: &'static str,
    pub body: TableBody,
}

impl DirectoryState {
    pub fn view(&self) -> DirectoryView {
        let visible = self.visible_records();
        let body = if !self.is_loaded() {
            TableBody::Loading
        } else if visible.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(
                visible
                    .iter()
                    .enumerate()
                    .map(|(i, p)| PlatformRowView::from_platform(i, p, self.is_expanded(i)))
                    .collect(),
            )
        };

        DirectoryView {
            count_label: count_label(visible.len()),
            sort_indicator: sort_indicator(self.sort_order()),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_platform::fallback_platforms;
    use crate::shared::directory::DirectoryCommand;
    use crate::shared::list_utils::DefaultCollator;

    #[test]
    fn test_fallback_view() {
        let state = DirectoryState::with_platforms(fallback_platforms());
        let view = state.view();
        assert_eq!(view.count_label, "6 platforms");
        assert_eq!(view.sort_indicator, " ⇅");
        match view.body {
            TableBody::Rows(rows) => {
                assert_eq!(rows.len(), 6);
                assert!(rows.iter().all(|r| !r.expanded));
                assert_eq!(rows[1].row_id(), "platform-1");
                assert_eq!(rows[1].details_id(), "details-1");
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_empty_view_is_placeholder() {
        let mut state = DirectoryState::with_platforms(fallback_platforms());
        state.filter("zzz-no-match");
        let view = state.view();
        assert_eq!(view.count_label, "0 platforms");
        assert_eq!(view.body, TableBody::Empty);
    }

    #[test]
    fn test_not_loaded_view() {
        assert_eq!(DirectoryState::new().view().body, TableBody::Loading);
    }

    #[test]
    fn test_details_skip_sentinel_fields() {
        let platforms = fallback_platforms();
        let proton = &platforms[0];
        let labels: Vec<&str> = detail_lines(proton).iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Free Tier", "Phishing", "Contributor"]);

        let github = &platforms[1];
        let labels: Vec<&str> = detail_lines(github).iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec!["Free Tier", "Developer Account", "Dev Tier", "SSO", "Download", "C&C", "Contributor"]
        );
    }

    #[test]
    fn test_empty_free_tier_keeps_its_line() {
        let lines = detail_lines(&Platform::new("A", "w", "c", ""));
        let labels: Vec<&str> = lines.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Free Tier"]);
        assert_eq!(lines[0].value, "");
    }

    #[test]
    fn test_pricing_is_a_link() {
        let mut p = Platform::new("A", "w", "c", "f");
        p.pricing_url = Some("https://a.io/pricing".into());
        p.last_updated = Some("2024-05-01".into());
        let lines = detail_lines(&p);
        assert_eq!(lines[1].label, "Pricing");
        assert!(lines[1].is_link);
        assert_eq!(lines[2].label, "Last Updated");
        assert!(!lines[2].is_link);
    }

    #[test]
    fn test_tag_chips_keep_order_and_class() {
        let platforms = fallback_platforms();
        let row = PlatformRowView::from_platform(0, &platforms[1], false);
        let classes: Vec<&str> = row.tags.iter().map(|c| c.class.as_str()).collect();
        assert_eq!(
            classes,
            vec!["tag free-tier", "tag developer", "tag download", "tag cc", "tag sso"]
        );
    }

    #[test]
    fn test_expanded_row_indicator() {
        let mut state = DirectoryState::with_platforms(fallback_platforms());
        state.apply(DirectoryCommand::ExpandRow(3), &DefaultCollator);
        let TableBody::Rows(rows) = state.view().body else {
            panic!("expected rows");
        };
        assert_eq!(rows[3].indicator(), INDICATOR_EXPANDED);
        assert_eq!(rows[2].indicator(), INDICATOR_COLLAPSED);
    }
}
