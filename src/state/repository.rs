use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::cost::{MEALS_BACKUP_KEY, MEALS_KEY};
use crate::error::{ChefError, Result};
use crate::models::Meal;
use crate::state::persistence::KeyValueStore;

/// Raw stored records, plus the original text if it was not a JSON array.
struct Records {
    entries: Vec<Value>,
    unreadable: Option<String>,
}

/// The persisted meal collection.
///
/// Every mutation reads the full collection, computes the new list, and
/// writes the full list back. There is no cross-process coordination.
/// Writes carry stored records forward as-is, including ones that do not
/// read as a `Meal`.
pub struct MealRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> MealRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All readable meals in insertion order.
    ///
    /// A missing or unparsable collection reads as empty; individual
    /// records that do not parse are skipped.
    pub fn list(&self) -> Result<Vec<Meal>> {
        let records = self.read_records()?;
        Ok(to_meals(&records.entries))
    }

    /// Look up a meal by identifier.
    pub fn get(&self, id: &str) -> Result<Option<Meal>> {
        Ok(self.list()?.into_iter().find(|m| m.id == id))
    }

    /// Append a meal and persist. Returns the new collection.
    pub fn add(&mut self, meal: Meal) -> Result<Vec<Meal>> {
        let mut entries = self.records_for_write()?;
        info!("Adding meal '{}' ({})", meal.name, meal.id);
        entries.push(serde_json::to_value(&meal)?);
        self.write_all(&entries)?;
        Ok(to_meals(&entries))
    }

    /// Remove the one meal with `id` and persist. Returns the new collection.
    pub fn remove(&mut self, id: &str) -> Result<Vec<Meal>> {
        let records = self.read_records()?;
        let Some(pos) = records.entries.iter().position(|r| record_id(r) == Some(id)) else {
            return Err(ChefError::MealNotFound(id.to_string()));
        };

        let mut entries = records.entries;
        entries.remove(pos);
        info!("Removed meal {}", id);
        self.write_all(&entries)?;
        Ok(to_meals(&entries))
    }

    /// A fresh millisecond-timestamp id not used by any stored record.
    pub fn next_meal_id(&self) -> Result<String> {
        let records = self.read_records()?;
        let mut candidate = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        while records
            .entries
            .iter()
            .any(|r| record_id(r) == Some(candidate.to_string().as_str()))
        {
            candidate += 1;
        }
        Ok(candidate.to_string())
    }

    fn read_records(&self) -> Result<Records> {
        let Some(raw) = self.store.get(MEALS_KEY)? else {
            debug!("No stored meal collection; starting empty");
            return Ok(Records {
                entries: Vec::new(),
                unreadable: None,
            });
        };

        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => {
                debug!("Loaded {} stored records", entries.len());
                Ok(Records {
                    entries,
                    unreadable: None,
                })
            }
            Err(e) => {
                warn!("Ignoring malformed meal collection: {}", e);
                Ok(Records {
                    entries: Vec::new(),
                    unreadable: Some(raw),
                })
            }
        }
    }

    /// Records to build a write on. An unreadable collection is copied to
    /// the backup key first so replacing it loses nothing.
    fn records_for_write(&mut self) -> Result<Vec<Value>> {
        let records = self.read_records()?;
        if let Some(raw) = records.unreadable {
            warn!("Backing up unreadable meal collection to '{}'", MEALS_BACKUP_KEY);
            self.store.set(MEALS_BACKUP_KEY, &raw)?;
        }
        Ok(records.entries)
    }

    fn write_all(&mut self, entries: &[Value]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        self.store.set(MEALS_KEY, &json)?;
        debug!("Wrote {} records", entries.len());
        Ok(())
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn to_meals(entries: &[Value]) -> Vec<Meal> {
    entries
        .iter()
        .filter_map(|r| match Meal::deserialize(r) {
            Ok(meal) => Some(meal),
            Err(e) => {
                warn!("Skipping unreadable meal record {:?}: {}", record_id(r), e);
                None
            }
        })
        .collect()
}
