//! Sessions for every enabled venue in a config file
//!
//! Each venue gets its own session and therefore its own order cache, so
//! order ids from different venues can never collide.

use log::info;
use std::collections::HashMap;
use std::sync::Arc;
use venue_ports::{OpenOrdersSource, OrderPlacement};

use crate::config::{GatewayConfigFile, VenueConfig};
use crate::error::{GatewayError, Result};
use crate::session::VenueSession;

pub struct VenueManager<V> {
    sessions: HashMap<String, VenueSession<V>>,
}

impl<V> VenueManager<V>
where
    V: OpenOrdersSource + OrderPlacement,
{
    /// Build a session for each enabled venue
    ///
    /// `connect` creates the adapter for one venue config; the first failure
    /// aborts the whole build.
    pub fn from_config<F>(config: &GatewayConfigFile, mut connect: F) -> Result<Self>
    where
        F: FnMut(&VenueConfig) -> Result<Arc<V>>,
    {
        let mut sessions = HashMap::new();
        for venue_config in config.enabled_venues() {
            let venue = connect(venue_config)?;
            info!("Session ready for venue {}", venue_config.id);
            sessions.insert(
                venue_config.id.clone(),
                VenueSession::new(venue_config.clone(), venue),
            );
        }
        Ok(Self { sessions })
    }

    pub fn session(&self, id: &str) -> Result<&VenueSession<V>> {
        self.sessions
            .get(id)
            .ok_or_else(|| GatewayError::UnknownVenue(id.to_string()))
    }

    /// Ids of all venues with a session, sorted
    pub fn venue_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sessions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
