//! Chart annotation tags (`data-tags="Lệch phải:orange, n=1.06M"`)

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTag {
    pub label: String,
    pub color: String,
}

impl ChartTag {
    /// Badge class list for the tag
    pub fn class_name(&self) -> String {
        format!("badge badge-{}", self.color)
    }
}

/// Split a comma-separated `label:color` list. Empty entries are dropped and
/// a missing or empty color becomes `default_color`.
pub fn parse_tags(raw: &str, default_color: &str) -> Vec<ChartTag> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|tag| {
            let mut parts = tag.split(':');
            let label = parts.next().unwrap_or_default().to_string();
            let color = parts
                .next()
                .filter(|c| !c.is_empty())
                .unwrap_or(default_color)
                .to_string();
            ChartTag { label, color }
        })
        .collect()
}
