//! Sentiment aggregation service tests.
//!
//! These run against an in-memory `SentimentStore` so the full contract
//! (preconditions, skipping, replacement semantics, determinism) is
//! exercised without a live database.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use pulse::{
    db::SentimentStore,
    models::Feedback,
    services::SentimentService,
    Error, Result,
};
use pulse_sentiment::{FeedbackSummary, Sentiment};

#[derive(Default)]
struct InMemoryStore {
    products: Vec<i64>,
    feedback: Mutex<Vec<Feedback>>,
    summaries: Mutex<HashMap<i64, FeedbackSummary>>,
    upserts: AtomicUsize,
}

impl InMemoryStore {
    fn with_product(product_id: i64) -> Self {
        Self {
            products: vec![product_id],
            ..Self::default()
        }
    }

    fn add_feedback(&self, product_id: i64, text: &str, rating: Option<i32>) {
        let mut feedback = self.feedback.lock().unwrap();
        let id = feedback.len() as i64 + 1;
        feedback.push(Feedback {
            id,
            product_id,
            user_name: "tester".to_string(),
            feedback_text: text.to_string(),
            rating,
            created_at: Utc::now(),
        });
    }

    fn stored_summary(&self, product_id: i64) -> Option<FeedbackSummary> {
        self.summaries.lock().unwrap().get(&product_id).cloned()
    }
}

#[async_trait]
impl SentimentStore for InMemoryStore {
    async fn product_exists(&self, product_id: i64) -> Result<bool> {
        Ok(self.products.contains(&product_id))
    }

    async fn feedback_for_product(&self, product_id: i64) -> Result<Vec<Feedback>> {
        Ok(self
            .feedback
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn upsert_summary(&self, summary: &FeedbackSummary) -> Result<()> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        self.summaries
            .lock()
            .unwrap()
            .insert(summary.product_id, summary.clone());
        Ok(())
    }
}

fn service(store: Arc<InMemoryStore>) -> SentimentService {
    SentimentService::new(store)
}

#[tokio::test]
async fn missing_product_fails_without_writing() {
    let store = Arc::new(InMemoryStore::default());
    let result = service(store.clone()).analyze(1).await;

    assert!(matches!(result, Err(Error::InvalidRequest(_))));
    assert_eq!(store.upserts.load(Ordering::SeqCst), 0);
    assert!(store.stored_summary(1).is_none());
}

#[tokio::test]
async fn product_without_feedback_fails_without_writing() {
    let store = Arc::new(InMemoryStore::with_product(1));
    let result = service(store.clone()).analyze(1).await;

    assert!(matches!(result, Err(Error::NotFound(_))));
    assert_eq!(store.upserts.load(Ordering::SeqCst), 0);
    assert!(store.stored_summary(1).is_none());
}

#[tokio::test]
async fn mixed_ratings_produce_expected_summary() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::with_product(1));
    store.add_feedback(1, "excellent", Some(5));
    store.add_feedback(1, "love it", Some(5));
    store.add_feedback(1, "broke on day one", Some(1));

    let analysis = service(store.clone()).analyze(1).await?;

    assert_eq!(analysis.analyzed.len(), 3);
    assert_eq!(analysis.summary.total_feedbacks, 3);
    assert_eq!(analysis.summary.average_polarity, 0.333);
    assert_eq!(analysis.summary.average_sentiment, Sentiment::Positive);
    assert_eq!(
        analysis
            .summary
            .most_positive_feedback
            .as_ref()
            .unwrap()
            .polarity,
        1.0
    );
    assert_eq!(
        analysis
            .summary
            .most_negative_feedback
            .as_ref()
            .unwrap()
            .polarity,
        -1.0
    );

    // The persisted row is exactly what the call returned.
    assert_eq!(store.stored_summary(1), Some(analysis.summary));
    Ok(())
}

#[tokio::test]
async fn analyze_is_idempotent() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::with_product(1));
    store.add_feedback(1, "fine", Some(3));

    let svc = service(store.clone());
    let first = svc.analyze(1).await?;
    let second = svc.analyze(1).await?;

    assert_eq!(first.summary, second.summary);
    assert_eq!(store.upserts.load(Ordering::SeqCst), 2);
    assert_eq!(store.stored_summary(1), Some(second.summary));
    Ok(())
}

#[tokio::test]
async fn reanalysis_replaces_the_previous_summary() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::with_product(1));
    store.add_feedback(1, "good", Some(4));
    store.add_feedback(1, "good", Some(4));
    store.add_feedback(1, "good", Some(4));

    let svc = service(store.clone());
    let first = svc.analyze(1).await?;
    assert_eq!(first.summary.total_feedbacks, 3);

    store.add_feedback(1, "awful", Some(1));
    let second = svc.analyze(1).await?;

    // The stored row reflects only the new set, with nothing merged in.
    let stored = store.stored_summary(1).unwrap();
    assert_eq!(stored.total_feedbacks, 4);
    assert_eq!(stored, second.summary);
    assert_eq!(
        stored.most_negative_feedback.as_ref().unwrap().polarity,
        -1.0
    );
    Ok(())
}

#[tokio::test]
async fn unrated_records_are_skipped() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::with_product(1));
    store.add_feedback(1, "excellent", Some(5));
    store.add_feedback(1, "no rating given", None);

    let analysis = service(store.clone()).analyze(1).await?;

    assert_eq!(analysis.analyzed.len(), 1);
    assert_eq!(analysis.summary.total_feedbacks, 1);
    assert_eq!(analysis.summary.average_polarity, 1.0);
    Ok(())
}

#[tokio::test]
async fn all_unrated_records_yield_an_empty_summary() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::with_product(1));
    store.add_feedback(1, "no rating", None);

    let analysis = service(store.clone()).analyze(1).await?;

    // Records exist, so preconditions pass; the summary is written with
    // zero counted feedbacks and no extrema.
    assert_eq!(analysis.summary.total_feedbacks, 0);
    assert_eq!(analysis.summary.average_polarity, 0.0);
    assert_eq!(analysis.summary.average_sentiment, Sentiment::Neutral);
    assert!(analysis.summary.most_positive_feedback.is_none());
    assert!(analysis.summary.most_negative_feedback.is_none());
    assert_eq!(store.upserts.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn extrema_ties_keep_the_first_inserted_record() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::with_product(1));
    store.add_feedback(1, "first five", Some(5));
    store.add_feedback(1, "second five", Some(5));
    store.add_feedback(1, "first one", Some(1));
    store.add_feedback(1, "second one", Some(1));

    let analysis = service(store.clone()).analyze(1).await?;

    assert_eq!(
        analysis.summary.most_positive_feedback.unwrap().text,
        "first five"
    );
    assert_eq!(
        analysis.summary.most_negative_feedback.unwrap().text,
        "first one"
    );
    Ok(())
}

#[tokio::test]
async fn single_neutral_record_is_both_extrema() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::with_product(9));
    store.add_feedback(9, "it is okay", Some(3));

    let analysis = service(store.clone()).analyze(9).await?;

    assert_eq!(analysis.summary.average_polarity, 0.0);
    assert_eq!(analysis.summary.average_sentiment, Sentiment::Neutral);
    assert_eq!(
        analysis.summary.most_positive_feedback,
        analysis.summary.most_negative_feedback
    );
    Ok(())
}
