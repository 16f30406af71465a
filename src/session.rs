//! Estimator session: owns the state, its storage, and the current address.

mod throttle;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use url::Url;

pub use self::throttle::Throttle;
use crate::{
    core::{
        comparison::Comparison,
        parameters::{FuelParameters, GeneratorParameters},
    },
    prelude::*,
    share,
    state::{Mode, Query, State, Theme},
    storage::Storage,
};

/// Key of the persisted state record.
pub const STORAGE_KEY: &str = "fuelwyse:v1";

/// Key of the persisted address record.
pub const ADDRESS_KEY: &str = "fuelwyse:v1:address";

/// Minimal interval between the address rewrites.
pub const URL_REWRITE_INTERVAL: Duration = Duration::from_millis(300);

/// Opened link and what the address became after the rewrites.
///
/// Opening the same link again resumes from the rewritten address, like reloading the page.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct AddressRecord {
    opened: Option<Url>,
    current: Option<Url>,
}

#[must_use]
pub struct Session<S> {
    storage: S,
    state: State,

    /// Share link base, the query gets replaced.
    base_url: Url,

    /// Link the session has been opened with.
    opened: Option<Url>,

    /// Current address which mirrors the state.
    address: Option<Url>,

    /// Whether the state has changed since the last address rewrite.
    is_address_stale: bool,

    throttle: Throttle,
}

#[bon::bon]
impl<S: Storage> Session<S> {
    /// Restore the state from the storage and the opened link, the latter taking precedence.
    #[builder(finish_fn = boot)]
    pub fn new(storage: S, base_url: Url, link: Option<Url>) -> Self {
        let blob = storage.get(STORAGE_KEY).unwrap_or_else(|error| {
            error!(error = format!("{error:#}"), "Failed to read the saved state");
            None
        });
        let address = match read_address(&storage) {
            Some(record) if record.opened == link => {
                debug!("Resuming from the rewritten address");
                record.current
            }
            _ => link.clone(),
        };
        let query = address.as_ref().map(Query::from).unwrap_or_default();
        let mut state = State::decode(blob.as_deref(), &query);

        // A preset rate may have been tuned since the state was saved.
        state.generator.derive_rate();

        info!(mode = ?state.mode, "Booted");
        Self {
            storage,
            state,
            base_url,
            opened: link,
            address,
            is_address_stale: false,
            throttle: Throttle::new(URL_REWRITE_INTERVAL),
        }
    }

    pub const fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub const fn address(&self) -> Option<&Url> {
        self.address.as_ref()
    }

    pub const fn fuel_mut(&mut self) -> &mut FuelParameters {
        self.is_address_stale = true;
        &mut self.state.fuel
    }

    pub const fn generator_mut(&mut self) -> &mut GeneratorParameters {
        self.is_address_stale = true;
        &mut self.state.generator
    }

    pub const fn set_mode(&mut self, mode: Mode) {
        self.is_address_stale = true;
        self.state.mode = mode;
    }

    pub const fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
    }

    pub fn set_baseline(&mut self, mode: Mode) {
        self.state.set_baseline(mode);
    }

    pub fn clear_baseline(&mut self, mode: Mode) {
        self.state.clear_baseline(mode);
    }

    #[must_use]
    pub fn comparison(&self, mode: Mode) -> Option<Comparison> {
        self.state.compare(mode)
    }

    /// Start over with the defaults, and drop the query from the address.
    pub fn reset(&mut self) {
        info!("Resetting");
        self.state = State::default();
        let mut address = self.base_url.clone();
        address.set_query(None);
        self.address = Some(address);
        self.is_address_stale = false;
    }

    #[must_use]
    pub fn share_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(Some(&self.state.encode()));
        url
    }

    /// Share text of the active mode.
    #[must_use]
    pub fn share_text(&self) -> String {
        let link = self.share_url();
        match self.state.mode {
            Mode::Fuel => share::fuel_text(&self.state.fuel, link.as_str()),
            Mode::Generator => share::generator_text(&self.state.generator, link.as_str()),
        }
    }

    /// Save the state, and rewrite the address unless it was rewritten too recently.
    ///
    /// Storage failures are logged, the session keeps going with the in-memory state.
    #[instrument(skip_all)]
    pub fn commit(&mut self, now: Instant) {
        if self.is_address_stale && self.throttle.try_acquire(now) {
            let address = self.share_url();
            debug!(%address, "Rewrote the address");
            self.address = Some(address);
            self.is_address_stale = false;
        }
        let record = AddressRecord { opened: self.opened.clone(), current: self.address.clone() };
        for (key, value) in
            [(STORAGE_KEY, self.state.persist()), (ADDRESS_KEY, to_json(&record))]
        {
            if let Err(error) = value.and_then(|value| self.storage.set(key, value)) {
                error!(key, error = format!("{error:#}"), "Failed to save");
            }
        }
    }
}

fn to_json(record: &AddressRecord) -> Result<String> {
    serde_json::to_string(record).context("failed to serialize the address")
}

fn read_address(storage: &impl Storage) -> Option<AddressRecord> {
    let record = storage.get(ADDRESS_KEY).and_then(|record| {
        record.map(|record| serde_json::from_str(&record)).transpose().map_err(Error::from)
    });
    record.unwrap_or_else(|error| {
        warn!(error = format!("{error:#}"), "Ignoring the unreadable address");
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            generator::{GeneratorPreset, LoadLevel},
            pattern::UsagePattern,
        },
        quantity::{distance::Kilometers, volume::LitersPerHour},
        storage::MemoryStorage,
    };

    const BASE_URL: &str = "https://fuelwyse.app/";

    fn boot(storage: MemoryStorage, link: Option<&str>) -> Result<Session<MemoryStorage>> {
        Ok(Session::builder()
            .storage(storage)
            .base_url(Url::parse(BASE_URL)?)
            .maybe_link(link.map(Url::parse).transpose()?)
            .boot())
    }

    #[test]
    fn test_fresh_session() -> Result {
        let session = boot(MemoryStorage::default(), None)?;
        assert_eq!(session.state(), &State::default());
        assert_eq!(session.address(), None);
        Ok(())
    }

    #[test]
    fn test_commit_persists() -> Result {
        let mut session = boot(MemoryStorage::default(), None)?;
        session.fuel_mut().set_distance(Kilometers(45.0));
        session.commit(Instant::now());
        let query = session.address().and_then(Url::query).unwrap_or_default();
        assert!(query.contains("fd=45"));

        let session = boot(session.storage, None)?;
        assert_eq!(session.state().fuel.distance, Kilometers(45.0));
        Ok(())
    }

    #[test]
    fn test_link_takes_precedence() -> Result {
        let mut storage = MemoryStorage::default();
        let mut state = State::default();
        state.fuel.distance = Kilometers(50.0);
        storage.set(STORAGE_KEY, state.persist()?)?;
        let session = boot(storage, Some("https://fuelwyse.app/?fd=20"))?;
        assert_eq!(session.state().fuel.distance, Kilometers(20.0));
        Ok(())
    }

    #[test]
    fn test_reopened_link_resumes_from_rewritten_address() -> Result {
        let link = "https://fuelwyse.app/?fd=20";
        let mut session = boot(MemoryStorage::default(), Some(link))?;
        session.fuel_mut().set_distance(Kilometers(12.0));
        session.commit(Instant::now());

        let session = boot(session.storage, Some(link))?;
        assert_eq!(session.state().fuel.distance, Kilometers(12.0));

        let session = boot(session.storage, Some("https://fuelwyse.app/?fd=7"))?;
        assert_eq!(session.state().fuel.distance, Kilometers(7.0));
        Ok(())
    }

    #[test]
    fn test_share_url_keeps_fragment_after_query() -> Result {
        let session = Session::builder()
            .storage(MemoryStorage::default())
            .base_url(Url::parse("https://fuelwyse.app/#calc")?)
            .boot();
        let link = session.share_url();
        assert_eq!(link.fragment(), Some("calc"));
        assert_eq!(Query::from(&link).fuel_distance.as_deref(), Some("30"));
        assert!(link.as_str().starts_with("https://fuelwyse.app/?mode=fuel&"));
        Ok(())
    }

    #[test]
    fn test_boot_rederives_preset_rate() -> Result {
        let mut storage = MemoryStorage::default();
        let blob = r#"{"gen": {"preset": "1.6", "load": "high", "litresPerHour": 3}}"#;
        storage.set(STORAGE_KEY, blob.to_owned())?;
        let session = boot(storage, None)?;
        assert_eq!(session.state().generator.rate, LitersPerHour(0.75));
        Ok(())
    }

    #[test]
    fn test_boot_keeps_custom_rate() -> Result {
        let session =
            boot(MemoryStorage::default(), Some("https://fuelwyse.app/?gpr=custom&glph=2.2&gl=high"))?;
        assert_eq!(session.state().generator.preset, GeneratorPreset::Custom);
        assert_eq!(session.state().generator.load, LoadLevel::High);
        assert_eq!(session.state().generator.rate, LitersPerHour(2.2));
        Ok(())
    }

    #[test]
    fn test_address_rewrite_is_throttled() -> Result {
        let mut session = boot(MemoryStorage::default(), None)?;
        let mode = |session: &Session<MemoryStorage>| {
            session.address().map(|address| Query::from(address).mode).unwrap_or_default()
        };
        let start = Instant::now();
        session.set_mode(Mode::Generator);
        session.commit(start);
        assert_eq!(mode(&session).as_deref(), Some("gen"));

        session.set_mode(Mode::Fuel);
        session.commit(start + Duration::from_millis(100));
        assert_eq!(mode(&session).as_deref(), Some("gen"));

        session.commit(start + Duration::from_millis(400));
        assert_eq!(mode(&session).as_deref(), Some("fuel"));
        Ok(())
    }

    #[test]
    fn test_reset() -> Result {
        let link = "https://fuelwyse.app/?fd=99&mode=gen";
        let mut session = boot(MemoryStorage::default(), Some(link))?;
        session.set_baseline(Mode::Fuel);
        session.reset();
        session.commit(Instant::now());
        assert_eq!(session.state(), &State::default());
        assert_eq!(session.address().map(Url::as_str), Some(BASE_URL));

        let session = boot(session.storage, Some(link))?;
        assert_eq!(session.state(), &State::default());
        Ok(())
    }

    #[test]
    fn test_unreadable_address_is_ignored() -> Result {
        let mut storage = MemoryStorage::default();
        storage.set(ADDRESS_KEY, "{".to_owned())?;
        let session = boot(storage, Some("https://fuelwyse.app/?fd=20"))?;
        assert_eq!(session.state().fuel.distance, Kilometers(20.0));
        Ok(())
    }

    #[test]
    fn test_comparison() -> Result {
        let mut session = boot(MemoryStorage::default(), None)?;
        assert_eq!(session.comparison(Mode::Generator), None);
        session.set_baseline(Mode::Generator);
        session.generator_mut().set_pattern(UsagePattern::Business);
        let comparison = session.comparison(Mode::Generator).unwrap();
        assert!(comparison.is_increase());
        Ok(())
    }

    #[test]
    fn test_share_text_follows_mode() -> Result {
        let mut session = boot(MemoryStorage::default(), None)?;
        assert!(session.share_text().starts_with("FuelWyse (Estimate): Fuel Cost"));
        session.set_mode(Mode::Generator);
        assert!(session.share_text().starts_with("FuelWyse (Estimate): Generator Cost"));
        Ok(())
    }
}
