//! Data access for catalogued garments.
//!
//! The `GarmentStore` trait is the read-only boundary to whatever persists a
//! user's wardrobe. [`MemoryWardrobe`] is an in-memory implementation that
//! can be loaded from JSON, and [`resolve_outfit`] hydrates the identifiers
//! held by an [`Outfit`] back into full garment records for display.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Garment, GarmentId, Outfit};

/// Read-only access to a user's garments.
///
/// # Examples
///
/// ```rust
/// use wardrobe_core::{Category, Garment, GarmentId, GarmentStore};
///
/// struct SingleGarment(Garment);
///
/// impl GarmentStore for SingleGarment {
///     fn garments(&self) -> Box<dyn Iterator<Item = &Garment> + Send + '_> {
///         Box::new(std::iter::once(&self.0))
///     }
///
///     fn garment(&self, id: &GarmentId) -> Option<&Garment> {
///         (self.0.id == *id).then_some(&self.0)
///     }
/// }
///
/// let store = SingleGarment(Garment::new("g1", Category::Top));
/// assert_eq!(store.garments().count(), 1);
/// assert!(store.garment(&GarmentId::new("g1")).is_some());
/// ```
pub trait GarmentStore {
    /// Iterate over every garment in the store.
    fn garments(&self) -> Box<dyn Iterator<Item = &Garment> + Send + '_>;

    /// Look up a garment by identifier.
    fn garment(&self, id: &GarmentId) -> Option<&Garment>;
}

/// Errors raised while building a [`MemoryWardrobe`].
#[derive(Debug, Error)]
pub enum WardrobeError {
    /// Two garments shared an identifier.
    #[error("garment id {id} appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: GarmentId,
    },
    /// The JSON payload could not be decoded.
    #[cfg(feature = "serde")]
    #[error("failed to parse wardrobe JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// In-memory garment store with an identifier index.
///
/// Garments keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryWardrobe {
    garments: Vec<Garment>,
    index: HashMap<GarmentId, usize>,
}

impl MemoryWardrobe {
    /// Build a wardrobe from a collection of garments.
    ///
    /// # Errors
    /// Returns [`WardrobeError::DuplicateId`] when two garments share an id.
    pub fn with_garments<I>(garments: I) -> Result<Self, WardrobeError>
    where
        I: IntoIterator<Item = Garment>,
    {
        let garments: Vec<Garment> = garments.into_iter().collect();
        let mut index = HashMap::with_capacity(garments.len());
        for (position, garment) in garments.iter().enumerate() {
            if index.insert(garment.id.clone(), position).is_some() {
                return Err(WardrobeError::DuplicateId {
                    id: garment.id.clone(),
                });
            }
        }
        Ok(Self { garments, index })
    }

    /// Decode a JSON array of garments.
    ///
    /// # Errors
    /// Returns [`WardrobeError::Parse`] for malformed JSON, including records
    /// missing their category, and [`WardrobeError::DuplicateId`] for
    /// repeated identifiers.
    ///
    /// # Examples
    /// ```
    /// use wardrobe_core::{GarmentStore, MemoryWardrobe};
    ///
    /// # fn main() -> Result<(), wardrobe_core::WardrobeError> {
    /// let json = r#"[{"id":"t1","category":"top","color":"black"},
    ///                {"id":"b1","category":"bottom"}]"#;
    /// let wardrobe = MemoryWardrobe::from_json_reader(json.as_bytes())?;
    /// assert_eq!(wardrobe.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, WardrobeError> {
        let garments: Vec<Garment> =
            serde_json::from_reader(reader).map_err(WardrobeError::Parse)?;
        Self::with_garments(garments)
    }

    /// Borrow the garments as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Garment] {
        &self.garments
    }

    /// Number of garments held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.garments.len()
    }

    /// Report whether the wardrobe is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }
}

impl GarmentStore for MemoryWardrobe {
    fn garments(&self) -> Box<dyn Iterator<Item = &Garment> + Send + '_> {
        Box::new(self.garments.iter())
    }

    fn garment(&self, id: &GarmentId) -> Option<&Garment> {
        self.index
            .get(id)
            .and_then(|position| self.garments.get(*position))
    }
}

/// Errors returned by [`resolve_outfit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The outfit referenced a garment missing from the store.
    #[error("outfit references unknown garment {id}")]
    UnknownGarment {
        /// Identifier that could not be resolved.
        id: GarmentId,
    },
}

/// Hydrate the members of an outfit into full garment records.
///
/// Records are returned in member order.
///
/// # Errors
/// Returns [`ResolveError::UnknownGarment`] for the first dangling id.
pub fn resolve_outfit<'s, S>(store: &'s S, outfit: &Outfit) -> Result<Vec<&'s Garment>, ResolveError>
where
    S: GarmentStore + ?Sized,
{
    outfit
        .ids()
        .map(|id| {
            store
                .garment(id)
                .ok_or_else(|| ResolveError::UnknownGarment { id: id.clone() })
        })
        .collect()
}
