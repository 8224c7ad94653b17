use crate::{KeyValueStore, StoreError};
use flip7_core::DeckProfile;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, warn};

pub const LAST_DECK_PROFILE_KEY: &str = "last_deck_profile";
pub const LAST_PLAYER_ROSTER_KEY: &str = "last_player_roster";

/// Load/save access to one persisted value.
///
/// `load` never fails: a missing or unreadable value is `None`.
pub trait Repository<T> {
    fn load(&self) -> Option<T>;
    fn save(&mut self, value: &T) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub struct JsonRepository<S, T> {
    store: S,
    key: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<S: KeyValueStore, T> JsonRepository<S, T> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self {
            store,
            key,
            _value: PhantomData,
        }
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(self.key)
    }
}

impl<S, T> Repository<T> for JsonRepository<S, T>
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Option<T> {
        let raw = match self.store.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key = self.key, error = %err, "failed to read stored value");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = self.key, error = %err, "discarding malformed stored value");
                None
            }
        }
    }

    fn save(&mut self, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(self.key, raw)?;
        debug!(key = self.key, "saved value");
        Ok(())
    }
}

pub type DeckProfileRepository<S> = JsonRepository<S, DeckProfile>;
pub type RosterRepository<S> = JsonRepository<S, Vec<String>>;

pub fn deck_profile_repository<S: KeyValueStore>(store: S) -> DeckProfileRepository<S> {
    JsonRepository::new(store, LAST_DECK_PROFILE_KEY)
}

pub fn roster_repository<S: KeyValueStore>(store: S) -> RosterRepository<S> {
    JsonRepository::new(store, LAST_PLAYER_ROSTER_KEY)
}

impl<S: KeyValueStore> JsonRepository<S, DeckProfile> {
    pub fn load_or_standard(&self) -> DeckProfile {
        match self.load() {
            Some(profile) if profile.is_valid() => profile,
            Some(_) => {
                warn!(key = self.key, "stored deck profile has negative counts");
                DeckProfile::standard()
            }
            None => DeckProfile::standard(),
        }
    }
}
