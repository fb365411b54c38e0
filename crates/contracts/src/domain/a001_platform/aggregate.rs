use serde::{Deserialize, Serialize};

/// Sentinel used by the data document for "not offered".
pub const NOT_AVAILABLE: &str = "N/A";

// ============================================================================
// Aggregate
// ============================================================================

/// One entry of the directory: a third-party service with its risk/utility tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub website: String,
    pub category: String,
    pub free_tier: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_account: Option<String>,

    /// Display order is document order; duplicates are kept.
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_tier_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phishing_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exfiltration_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor: Option<String>,
}

impl Platform {
    /// Minimal record with the required fields set and everything else absent.
    pub fn new(
        name: impl Into<String>,
        website: impl Into<String>,
        category: impl Into<String>,
        free_tier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            website: website.into(),
            category: category.into(),
            free_tier: free_tier.into(),
            trial: None,
            developer_account: None,
            tags: Vec::new(),
            dev_tier_description: None,
            sso_description: None,
            phishing_description: None,
            download_description: None,
            exfiltration_description: None,
            cc_description: None,
            pricing_url: None,
            last_updated: None,
            contributor: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Value of a detail field, or `None` when it should not be shown.
    ///
    /// Free Tier is required, so only the sentinel hides it; an empty value
    /// still gets its label.
    pub fn detail(&self, field: DetailField) -> Option<&str> {
        let raw = match field {
            DetailField::FreeTier => {
                return (self.free_tier != NOT_AVAILABLE).then_some(self.free_tier.as_str());
            }
            DetailField::Trial => self.trial.as_deref(),
            DetailField::DeveloperAccount => self.developer_account.as_deref(),
            DetailField::DevTier => self.dev_tier_description.as_deref(),
            DetailField::Sso => self.sso_description.as_deref(),
            DetailField::Phishing => self.phishing_description.as_deref(),
            DetailField::Download => self.download_description.as_deref(),
            DetailField::Exfiltration => self.exfiltration_description.as_deref(),
            DetailField::CommandAndControl => self.cc_description.as_deref(),
            DetailField::Pricing => self.pricing_url.as_deref(),
            DetailField::LastUpdated => self.last_updated.as_deref(),
            DetailField::Contributor => self.contributor.as_deref(),
        };
        raw.filter(|v| is_present(v))
    }
}

/// Empty strings and the `"N/A"` sentinel count as absent.
pub fn is_present(value: &str) -> bool {
    !value.is_empty() && value != NOT_AVAILABLE
}

// ============================================================================
// Detail fields
// ============================================================================

/// Labeled lines of the details row, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailField {
    FreeTier,
    Trial,
    DeveloperAccount,
    DevTier,
    Sso,
    Phishing,
    Download,
    Exfiltration,
    CommandAndControl,
    Pricing,
    LastUpdated,
    Contributor,
}

impl DetailField {
    pub const ALL: [DetailField; 12] = [
        DetailField::FreeTier,
        DetailField::Trial,
        DetailField::DeveloperAccount,
        DetailField::DevTier,
        DetailField::Sso,
        DetailField::Phishing,
        DetailField::Download,
        DetailField::Exfiltration,
        DetailField::CommandAndControl,
        DetailField::Pricing,
        DetailField::LastUpdated,
        DetailField::Contributor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailField::FreeTier => "Free Tier",
            DetailField::Trial => "Trial",
            DetailField::DeveloperAccount => "Developer Account",
            DetailField::DevTier => "Dev Tier",
            DetailField::Sso => "SSO",
            DetailField::Phishing => "Phishing",
            DetailField::Download => "Download",
            DetailField::Exfiltration => "Exfiltration",
            DetailField::CommandAndControl => "C&C",
            DetailField::Pricing => "Pricing",
            DetailField::LastUpdated => "Last Updated",
            DetailField::Contributor => "Contributor",
        }
    }

    /// Rendered as a link instead of plain text.
    pub fn is_link(&self) -> bool {
        matches!(self, DetailField::Pricing)
    }
}

// ============================================================================
// Tag classification
// ============================================================================

/// Visual class of a tag chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    FreeTier,
    Trial,
    DevTier,
    Sso,
    Phishing,
    Download,
    Exfiltration,
    CommandAndControl,
    Other,
}

impl TagKind {
    /// Precedence order for substring matching; first match wins.
    const PRECEDENCE: [(&'static str, TagKind); 8] = [
        ("Free Tier", TagKind::FreeTier),
        ("Trial", TagKind::Trial),
        ("Dev Tier", TagKind::DevTier),
        ("SSO", TagKind::Sso),
        ("Phishing", TagKind::Phishing),
        ("Download", TagKind::Download),
        ("Exfiltration", TagKind::Exfiltration),
        ("C&C", TagKind::CommandAndControl),
    ];

    /// Case-sensitive, like the stylesheet's class names expect.
    pub fn classify(tag: &str) -> Self {
        Self::PRECEDENCE
            .iter()
            .find(|(needle, _)| tag.contains(needle))
            .map(|(_, kind)| *kind)
            .unwrap_or(TagKind::Other)
    }

    pub fn modifier_class(&self) -> Option<&'static str> {
        match self {
            TagKind::FreeTier => Some("free-tier"),
            TagKind::Trial => Some("trial"),
            TagKind::DevTier => Some("developer"),
            TagKind::Sso => Some("sso"),
            TagKind::Phishing => Some("phishing"),
            TagKind::Download => Some("download"),
            TagKind::Exfiltration => Some("exfiltration"),
            TagKind::CommandAndControl => Some("cc"),
            TagKind::Other => None,
        }
    }

    /// Full class attribute for a chip, e.g. `"tag free-tier"`.
    pub fn chip_class(&self) -> String {
        match self.modifier_class() {
            Some(modifier) => format!("tag {}", modifier),
            None => "tag".to_string(),
        }
    }
}
