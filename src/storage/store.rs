//! The record-store seam between the statistics engine and storage.
//!
//! The engine only ever needs create/find/save/destroy by name, so that is
//! the whole trait. `CricketDatabase` is the durable implementation; the
//! `MemoryStore` below backs engine tests without touching SQLite.

use super::{models::Cricketer, schema::CricketDatabase};
use crate::error::{CricketError, Result};
use std::collections::HashMap;

/// Minimal record store the statistics engine operates against.
pub trait PlayerStore {
    /// Insert a record, replacing any existing record with the same name.
    fn create(&mut self, player: &Cricketer) -> Result<()>;

    /// Exact-name lookup. Absence is `Ok(None)`, not an error.
    fn find_by_name(&self, name: &str) -> Result<Option<Cricketer>>;

    /// Write back an existing record. Fails with `PlayerNotFound` if the
    /// record has gone missing since it was fetched.
    fn save(&mut self, player: &Cricketer) -> Result<()>;

    /// Delete a record by name. Returns whether anything was removed.
    fn destroy(&mut self, name: &str) -> Result<bool>;
}

impl PlayerStore for CricketDatabase {
    fn create(&mut self, player: &Cricketer) -> Result<()> {
        self.upsert_cricketer(player)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Cricketer>> {
        self.find_cricketer(name)
    }

    fn save(&mut self, player: &Cricketer) -> Result<()> {
        self.save_cricketer(player)
    }

    fn destroy(&mut self, name: &str) -> Result<bool> {
        self.destroy_cricketer(name)
    }
}

/// HashMap-backed store with the same semantics as the SQLite one.
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: HashMap<String, Cricketer>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PlayerStore for MemoryStore {
    fn create(&mut self, player: &Cricketer) -> Result<()> {
        self.players.insert(player.name.clone(), player.clone());
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Cricketer>> {
        Ok(self.players.get(name).cloned())
    }

    fn save(&mut self, player: &Cricketer) -> Result<()> {
        if !self.players.contains_key(&player.name) {
            return Err(CricketError::PlayerNotFound {
                name: player.name.clone(),
            });
        }
        self.players.insert(player.name.clone(), player.clone());
        Ok(())
    }

    fn destroy(&mut self, name: &str) -> Result<bool> {
        Ok(self.players.remove(name).is_some())
    }
}
