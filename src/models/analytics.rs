use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
}

/// Chart-ready series: `labels[i]` has `data[i]` entries.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub title: String,
    pub labels: Vec<String>,
    pub data: Vec<i64>,
}

impl Chart {
    pub fn from_counts(title: &str, counts: Vec<LabelCount>) -> Self {
        let (labels, data) = counts.into_iter().map(|c| (c.label, c.count)).unzip();

        Self {
            title: title.to_string(),
            labels,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyticsOverview {
    pub useby: Chart,
    pub expiry: Chart,
    pub status: Chart,
}
