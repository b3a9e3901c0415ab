// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Reading & writing the events and the user profile
//!

use crate::{KeyValueStore, StoreError};
use log::{debug, info};
use yearwheel_core::{AppState, CalendarEvent, UserProfile};

/// The key the events are stored under (a JSON array)
pub const EVENTS_KEY: &str = "yearwheel_events";

/// The key the logged in user's profile is stored under
pub const PROFILE_KEY: &str = "yearwheel_profile";

/// The built in events for the academic year 2025
const SEED_EVENTS_JSON: &str = include_str!("../seed/events.json");

/// The built in events, used until any events have been saved
pub fn seed_events() -> Result<Vec<CalendarEvent>, StoreError> {
    Ok(serde_json::from_str(SEED_EVENTS_JSON)?)
}

/// Typed access to the values held in a [`KeyValueStore`]
pub struct Repository {
    store: Box<dyn KeyValueStore>,
}

impl Repository {
    pub fn new<S: KeyValueStore + 'static>(store: S) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Load the saved events, or the seed events if none have been saved
    pub async fn load_events(&self) -> Result<Vec<CalendarEvent>, StoreError> {
        match self.store.get(EVENTS_KEY).await? {
            Some(json) => {
                let events: Vec<CalendarEvent> =
                    serde_json::from_str(&json).map_err(|source| {
                        StoreError::InvalidStoredValue {
                            key: EVENTS_KEY.to_string(),
                            source,
                        }
                    })?;
                debug!("Loaded {} stored events", events.len());
                Ok(events)
            }
            None => {
                info!("No stored events, using the built in events");
                seed_events()
            }
        }
    }

    /// Save the whole collection
    pub async fn save_events(&self, events: &[CalendarEvent]) -> Result<(), StoreError> {
        let json = serde_json::to_string(events)?;
        self.store.set(EVENTS_KEY, &json).await?;
        debug!("Saved {} events", events.len());
        Ok(())
    }

    /// Forget the saved events (so the seed events are used again)
    pub async fn reset_events(&self) -> Result<bool, StoreError> {
        info!("Resetting events to the built in events");
        self.store.remove(EVENTS_KEY).await
    }

    /// The application state with the stored (or seed) events and no filters
    pub async fn load_state(&self) -> Result<AppState, StoreError> {
        Ok(AppState::new(self.load_events().await?))
    }

    pub async fn save_state(&self, state: &AppState) -> Result<(), StoreError> {
        self.save_events(state.events()).await
    }

    /// The logged in user (if any)
    pub async fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        match self.store.get(PROFILE_KEY).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|source| StoreError::InvalidStoredValue {
                    key: PROFILE_KEY.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    pub async fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        info!("Logging in {} ({})", profile.name, profile.role);
        let json = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, &json).await
    }

    /// Log out, returning whether anyone was logged in
    pub async fn clear_profile(&self) -> Result<bool, StoreError> {
        self.store.remove(PROFILE_KEY).await
    }
}
