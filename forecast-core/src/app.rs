use tracing::{debug, error, info};

use crate::{Coordinates, provider::ForecastProvider, render::render, surface::Surface};

/// What a single trigger ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A cycle was already in flight; nothing happened.
    Ignored,
    /// Input was rejected before any request.
    Invalid,
    /// Forecast fetched and rendered.
    Rendered { days: usize },
    /// The request or its response failed.
    Failed,
}

/// Ties a forecast provider to a display surface.
#[derive(Debug)]
pub struct ForecastApp<P, S> {
    provider: P,
    surface: S,
}

impl<P: ForecastProvider, S: Surface> ForecastApp<P, S> {
    pub fn new(provider: P, surface: S) -> Self {
        Self { provider, surface }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run one fetch-and-render cycle for the raw user input.
    ///
    /// While a cycle is in flight the activation control is disabled and
    /// further triggers are ignored. The control is re-enabled once the
    /// request settles, whatever the result.
    pub async fn trigger(&self, latitude: &str, longitude: &str) -> TriggerOutcome {
        if !self.surface.control_enabled() {
            debug!("trigger ignored, request already in flight");
            return TriggerOutcome::Ignored;
        }

        let coords = match Coordinates::parse(latitude, longitude) {
            Ok(coords) => coords,
            Err(err) => {
                self.surface.show_error(&err.to_string());
                return TriggerOutcome::Invalid;
            }
        };

        self.surface.hide_error();
        self.surface.clear_cards();
        self.surface.show_loading();
        self.surface.set_control_enabled(false);

        let outcome = match self.provider.daily_forecast(&coords).await {
            Ok(forecast) => {
                let cards = render(&forecast);
                for card in &cards {
                    self.surface.push_card(card);
                }
                info!(
                    latitude = %coords.latitude,
                    longitude = %coords.longitude,
                    days = cards.len(),
                    "forecast rendered"
                );
                TriggerOutcome::Rendered { days: cards.len() }
            }
            Err(err) => {
                error!(
                    latitude = %coords.latitude,
                    longitude = %coords.longitude,
                    error = %err,
                    "failed to fetch forecast"
                );
                self.surface.show_error(err.user_message());
                TriggerOutcome::Failed
            }
        };

        self.surface.hide_loading();
        self.surface.set_control_enabled(true);

        outcome
    }
}
