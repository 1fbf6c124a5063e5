use crate::metrics::{format_percent, mean};
use crate::models::{ChartPoint, DailyRecord, Summary};

/// Append-only, insertion-ordered record table owned by one session.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<DailyRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: DailyRecord) {
        self.records.push(record);
    }

    pub fn all(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn aggregate(&self) -> Summary {
        let (total_note_count, total_views) =
            self.records.iter().fold((0u64, 0u64), |(notes, views), record| {
                (
                    notes.saturating_add(record.note_count),
                    views.saturating_add(record.views),
                )
            });
        let average = mean(self.records.iter().map(|record| record.engagement_rate));

        Summary {
            record_count: self.records.len(),
            total_note_count,
            total_views,
            average_engagement_rate: average,
            average_engagement_display: format_percent(average),
        }
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.records
            .iter()
            .map(|record| ChartPoint {
                date: record.date,
                engagement_rate: record.engagement_rate,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Submission;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn record(note_count: u64, views: u64, likes: u64, comments: u64) -> DailyRecord {
        let submission = Submission {
            note_count,
            views,
            likes,
            comments,
            ..Submission::default()
        };
        DailyRecord::from_submission(&submission, today())
    }

    #[test]
    fn append_preserves_order_and_duplicates() {
        let mut store = RecordStore::new();
        for notes in [3, 5, 3, 1] {
            store.append(record(notes, 10, 1, 0));
        }

        assert_eq!(store.len(), 4);
        let notes: Vec<u64> = store.all().iter().map(|r| r.note_count).collect();
        assert_eq!(notes, vec![3, 5, 3, 1]);
    }

    #[test]
    fn note_counts_are_summed() {
        let mut store = RecordStore::new();
        for notes in [3, 5, 2] {
            store.append(record(notes, 0, 0, 0));
        }
        assert_eq!(store.aggregate().total_note_count, 10);
    }

    #[test]
    fn empty_store_has_neutral_summary() {
        let store = RecordStore::new();
        let summary = store.aggregate();

        assert!(store.is_empty());
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.total_note_count, 0);
        assert_eq!(summary.total_views, 0);
        assert_eq!(summary.average_engagement_rate, 0.0);
        assert_eq!(summary.average_engagement_display, "0.00%");
        assert!(store.chart_points().is_empty());
    }

    #[test]
    fn two_submissions_produce_expected_aggregates() {
        let mut store = RecordStore::new();
        store.append(record(2, 100, 10, 5));
        store.append(record(1, 0, 0, 0));

        let rates: Vec<f64> = store.all().iter().map(|r| r.engagement_rate).collect();
        assert_eq!(rates, vec![15.0, 0.0]);

        let summary = store.aggregate();
        assert_eq!(summary.total_note_count, 3);
        assert_eq!(summary.total_views, 100);
        assert_eq!(summary.average_engagement_rate, 7.5);
        assert_eq!(summary.average_engagement_display, "7.50%");
    }

    #[test]
    fn view_totals_saturate() {
        let mut store = RecordStore::new();
        store.append(record(0, u64::MAX, 0, 0));
        store.append(record(0, 5, 0, 0));
        assert_eq!(store.aggregate().total_views, u64::MAX);
    }

    #[test]
    fn chart_follows_insertion_order() {
        let mut store = RecordStore::new();
        store.append(record(1, 4, 1, 0));
        store.append(record(1, 2, 1, 0));

        let points = store.chart_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].engagement_rate, 25.0);
        assert_eq!(points[1].engagement_rate, 50.0);
        assert!(points.iter().all(|p| p.date == today()));
    }
}
