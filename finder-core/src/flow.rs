//! Input → Result navigation flow.
//!
//! The interactive frontend owns a [`Session`] and drives it through the
//! same cycle every time: submit a city on the input view, activate the
//! result view (at most one fetch), render the outcome, optionally reset
//! back to the input view.

use crate::model::{CityQuery, InputError, WeatherSnapshot};
use crate::provider::WeatherProvider;

/// Logical navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Input,
    Result,
}

/// Shared navigation state between the two views.
///
/// The city query is the single piece of state handed from the input view
/// to the result view. The generation counter marks which activation is
/// current, so a fetch outcome that straddles a navigation is discarded
/// instead of being applied to a view that no longer exists.
#[derive(Debug, Default)]
pub struct Session {
    city: Option<CityQuery>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(&self) -> Option<&CityQuery> {
        self.city.as_ref()
    }

    /// Input-view submit: validate, store the query, navigate to the result
    /// view. Invalid input leaves the session untouched and the caller on
    /// the input view.
    pub fn submit(&mut self, input: &str) -> Result<Route, InputError> {
        let city = CityQuery::parse(input)?;
        self.city = Some(city);
        self.generation += 1;
        Ok(Route::Result)
    }

    /// "Search Again": drop the query and navigate back to the input view.
    pub fn reset(&mut self) -> Route {
        self.city = None;
        self.generation += 1;
        Route::Input
    }

    /// Apply a fetch outcome, or discard it if navigation has moved on
    /// since the activation that produced it.
    pub fn accept(&self, outcome: FetchOutcome) -> Option<ResultState> {
        if outcome.generation == self.generation {
            Some(outcome.state)
        } else {
            tracing::debug!(
                outcome_generation = outcome.generation,
                current_generation = self.generation,
                "discarding stale fetch outcome"
            );
            None
        }
    }
}

/// What the result view ends up rendering after one activation.
#[derive(Debug)]
pub enum ResultState {
    /// No city query was set; go back to the input view without fetching.
    Redirect,
    /// The fetch failed; render the generic unavailable message.
    Unavailable,
    /// The fetch succeeded.
    Loaded(WeatherSnapshot),
}

/// A [`ResultState`] tagged with the activation it belongs to.
#[derive(Debug)]
pub struct FetchOutcome {
    generation: u64,
    state: ResultState,
}

/// Activate the result view: issue at most one fetch, and only when a city
/// query is present.
///
/// Every failure category (network error, non-success status, malformed
/// body) collapses into [`ResultState::Unavailable`]; the distinction is
/// preserved only in the diagnostic log.
pub async fn activate_result(session: &Session, provider: &dyn WeatherProvider) -> FetchOutcome {
    let generation = session.generation;

    let Some(city) = session.city() else {
        return FetchOutcome {
            generation,
            state: ResultState::Redirect,
        };
    };

    let state = match provider.current_weather(city).await {
        Ok(snapshot) => ResultState::Loaded(snapshot),
        Err(err) => {
            tracing::error!(city = %city, error = %format!("{err:#}"), "failed to fetch weather");
            ResultState::Unavailable
        }
    };

    FetchOutcome { generation, state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct MockProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockProvider {
        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for MockProvider {
        async fn current_weather(&self, _city: &CityQuery) -> anyhow::Result<WeatherSnapshot> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if self.fail {
                anyhow::bail!("simulated provider failure");
            }

            Ok(WeatherSnapshot {
                temperature_c: 20.0,
                humidity_pct: 50,
                wind_speed_mps: 3.0,
                condition: "clear sky".to_string(),
                observation_time: Utc::now(),
            })
        }
    }

    #[test]
    fn empty_submit_reports_error_and_does_not_navigate() {
        let mut session = Session::new();

        let err = session.submit("   ").unwrap_err();
        assert_eq!(err.to_string(), "City name cannot be empty");
        assert!(session.city().is_none());
    }

    #[test]
    fn submit_trims_and_navigates_to_result() {
        let mut session = Session::new();

        let route = session.submit("Paris ").expect("valid city must submit");
        assert_eq!(route, Route::Result);
        assert_eq!(session.city().map(CityQuery::as_str), Some("Paris"));
    }

    #[tokio::test]
    async fn activation_without_city_redirects_and_issues_no_request() {
        let session = Session::new();
        let provider = MockProvider::default();

        let outcome = activate_result(&session, &provider).await;
        let state = session.accept(outcome).expect("outcome is current");

        assert!(matches!(state, ResultState::Redirect));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn successful_activation_loads_a_snapshot() {
        let mut session = Session::new();
        session.submit("Paris").expect("valid city must submit");

        let provider = MockProvider::default();
        let outcome = activate_result(&session, &provider).await;
        let state = session.accept(outcome).expect("outcome is current");

        match state {
            ResultState::Loaded(snapshot) => {
                assert_eq!(snapshot.condition, "clear sky");
                assert_eq!(format!("{:.2}", snapshot.temperature_f()), "68.00");
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn failed_activation_becomes_unavailable() {
        let mut session = Session::new();
        session.submit("Paris").expect("valid city must submit");

        let provider = MockProvider::failing();
        let outcome = activate_result(&session, &provider).await;
        let state = session.accept(outcome).expect("outcome is current");

        assert!(matches!(state, ResultState::Unavailable));
    }

    #[tokio::test]
    async fn each_submission_issues_a_fresh_request() {
        let mut session = Session::new();
        let provider = MockProvider::default();

        session.submit("Tokyo").expect("valid city must submit");
        let first = activate_result(&session, &provider).await;
        assert!(session.accept(first).is_some());

        session.reset();

        session.submit("Tokyo").expect("valid city must submit");
        let second = activate_result(&session, &provider).await;
        assert!(session.accept(second).is_some());

        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn outcome_from_a_superseded_activation_is_discarded() {
        let mut session = Session::new();
        let provider = MockProvider::default();

        session.submit("Tokyo").expect("valid city must submit");
        let outcome = activate_result(&session, &provider).await;

        // The user navigated away before the response was applied.
        session.reset();

        assert!(session.accept(outcome).is_none());
    }
}
