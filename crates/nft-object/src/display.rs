//! # Display Templates
//!
//! A `Display<T>` tells off-ledger viewers how to render objects of type
//! `T`: an ordered map from presentation key to a template string whose
//! `{field}` placeholders name fields of `T`.
//!
//! ## Lifecycle
//!
//! ```text
//! new / new_with_fields ──▶ version 0 (inactive)
//!          │
//!          ▼  update_version
//!     version 1 (active) ──add/edit/remove──▶ update_version ──▶ version 2 ...
//! ```
//!
//! Viewers ignore a display until its version has been bumped at least once.
//! Each bump emits `VersionUpdated` carrying the full field set, which is
//! what indexers consume.
//!
//! Creation requires `&Publisher<T::Module>`, checked against the store:
//! only the holder of the declaring module's capability can describe how
//! its types render.
//! Nothing here prevents creating several displays for one type.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use nft_core::ObjectId;

use crate::context::TxContext;
use crate::error::ExecutionError;
use crate::event::EventType;
use crate::object::{Declared, Object};
use crate::publisher::Publisher;

// ─── Display ─────────────────────────────────────────────────────────

/// Presentation template for objects of type `T`.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Display<T: Declared> {
    id: ObjectId,
    fields: Vec<(String, String)>,
    version: u16,
    #[serde(skip)]
    _type: PhantomData<fn() -> T>,
}

impl<T: Declared> Display<T> {
    /// Create an empty, inactive display. Emits `DisplayCreated`.
    ///
    /// `publisher` must be stored and owned by the sender.
    pub fn new(
        publisher: &Publisher<T::Module>,
        ctx: &mut TxContext,
    ) -> Result<Self, ExecutionError> {
        publisher.verify(ctx)?;
        let id = ctx.fresh_id()?;
        ctx.emit(DisplayCreated {
            id,
            object_type: T::type_tag(),
        })?;
        info!(display = %id, object_type = %T::type_tag(), module = publisher.module_name(), "display created");
        Ok(Self {
            id,
            fields: Vec::new(),
            version: 0,
            _type: PhantomData,
        })
    }

    /// Create an inactive display pre-populated with `fields`, in order.
    pub fn new_with_fields<K, V>(
        publisher: &Publisher<T::Module>,
        fields: impl IntoIterator<Item = (K, V)>,
        ctx: &mut TxContext,
    ) -> Result<Self, ExecutionError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut display = Self::new(publisher, ctx)?;
        display.add_multiple(fields)?;
        Ok(display)
    }

    /// Add a new field.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), ExecutionError> {
        let key = key.into();
        if self.get(&key).is_some() {
            return Err(ExecutionError::DuplicateField { key });
        }
        self.fields.push((key, value.into()));
        Ok(())
    }

    /// Add several fields, stopping at the first duplicate.
    pub fn add_multiple<K, V>(&mut self, fields: impl IntoIterator<Item = (K, V)>) -> Result<(), ExecutionError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in fields {
            self.add(key, value)?;
        }
        Ok(())
    }

    /// Replace the template of an existing field.
    pub fn edit(&mut self, key: &str, value: impl Into<String>) -> Result<(), ExecutionError> {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => {
                *v = value.into();
                Ok(())
            }
            None => Err(ExecutionError::FieldNotFound { key: key.to_string() }),
        }
    }

    /// Remove a field, returning its template.
    pub fn remove(&mut self, key: &str) -> Result<String, ExecutionError> {
        let pos = self
            .fields
            .iter()
            .position(|(k, _)| k == key)
            .ok_or_else(|| ExecutionError::FieldNotFound { key: key.to_string() })?;
        Ok(self.fields.remove(pos).1)
    }

    /// Activate the current field set: bump the version and emit
    /// `VersionUpdated`.
    pub fn update_version(&mut self, ctx: &mut TxContext) -> Result<(), ExecutionError> {
        self.version = self
            .version
            .checked_add(1)
            .ok_or(ExecutionError::VersionOverflow { id: self.id })?;
        ctx.emit(VersionUpdated {
            id: self.id,
            object_type: T::type_tag(),
            version: self.version,
            fields: self.fields.clone(),
        })?;
        debug!(display = %self.id, version = self.version, "display version updated");
        Ok(())
    }

    /// Template for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All fields in insertion order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Current version; 0 means never activated.
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Whether the display has been activated at least once.
    pub fn is_active(&self) -> bool {
        self.version > 0
    }
}

impl<T: Declared> Object for Display<T> {
    fn type_tag() -> String {
        format!("display::Display<{}>", T::type_tag())
    }

    fn id(&self) -> &ObjectId {
        &self.id
    }
}

impl<T: Declared> std::fmt::Debug for Display<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Display")
            .field("id", &self.id)
            .field("object_type", &T::type_tag())
            .field("fields", &self.fields)
            .field("version", &self.version)
            .finish()
    }
}

// ─── Events ──────────────────────────────────────────────────────────

/// Emitted when a display is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCreated {
    /// The new display's id.
    pub id: ObjectId,
    /// Type tag of the described type.
    pub object_type: String,
}

impl DisplayCreated {
    /// Type tag under which this event is recorded.
    pub const TYPE_TAG: &'static str = "display::DisplayCreated";
}

impl EventType for DisplayCreated {
    fn type_tag(&self) -> String {
        Self::TYPE_TAG.to_string()
    }
}

/// Emitted on every version bump with the activated field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionUpdated {
    /// The display's id.
    pub id: ObjectId,
    /// Type tag of the described type.
    pub object_type: String,
    /// Version after the bump.
    pub version: u16,
    /// Activated fields, in order.
    pub fields: Vec<(String, String)>,
}

impl VersionUpdated {
    /// Type tag under which this event is recorded.
    pub const TYPE_TAG: &'static str = "display::VersionUpdated";
}

impl EventType for VersionUpdated {
    fn type_tag(&self) -> String {
        Self::TYPE_TAG.to_string()
    }
}
