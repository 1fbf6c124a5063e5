use crate::metrics::compute_engagement_rate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

/// One submitted row of metrics plus its derived engagement rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub note_count: u64,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub ad_cost: f64,
    pub engagement_rate: f64,
}

impl DailyRecord {
    pub fn from_submission(submission: &Submission, today: NaiveDate) -> Self {
        Self {
            date: submission.date.unwrap_or(today),
            note_count: submission.note_count,
            views: submission.views,
            likes: submission.likes,
            comments: submission.comments,
            ad_cost: submission.ad_cost,
            engagement_rate: compute_engagement_rate(
                submission.views,
                submission.likes,
                submission.comments,
            ),
        }
    }
}

/// Input payload shared by the HTML form and the JSON API.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Submission {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub note_count: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub ad_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub record_count: usize,
    pub total_note_count: u64,
    pub total_views: u64,
    pub average_engagement_rate: f64,
    pub average_engagement_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub engagement_rate: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub records: Vec<DailyRecord>,
    pub chart: Vec<ChartPoint>,
    pub summary: Summary,
}
