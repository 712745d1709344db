//! Frequency contexts
//!
//! A modifier that carries derived state. Generality follows the frequency
//! type through a fixed table. Relationship type and count are coupled in
//! both directions; each setter only derives when its value actually
//! changes, which keeps the two rules from feeding back into each other.
//!
//! Setters never fail. Inputs outside the rules degrade to the nearest
//! defined state.

use crate::context::ModifierContext;
use crate::lexicon::DictionaryItem;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Increment used by reinforcement logic when strengthening a connection.
/// Not consumed inside this crate.
pub const STRENGTH_STEP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrequencyType {
    #[default]
    Unspecified,
    Always,
    AlmostAlways,
    MostTimes,
    Frequently,
    Sometimes,
    Rarely,
    Sporadically,
    Randomly,
}

impl FrequencyType {
    pub const ALL: [FrequencyType; 9] = [
        FrequencyType::Unspecified,
        FrequencyType::Always,
        FrequencyType::AlmostAlways,
        FrequencyType::MostTimes,
        FrequencyType::Frequently,
        FrequencyType::Sometimes,
        FrequencyType::Rarely,
        FrequencyType::Sporadically,
        FrequencyType::Randomly,
    ];

    /// Probability-like generality for this frequency.
    pub fn generality(self) -> Option<f64> {
        match self {
            FrequencyType::Unspecified => None,
            FrequencyType::Always => Some(1.0),
            FrequencyType::AlmostAlways => Some(0.9),
            FrequencyType::MostTimes => Some(0.8),
            FrequencyType::Frequently => Some(0.6),
            FrequencyType::Sometimes => Some(0.3),
            FrequencyType::Rarely => Some(0.01),
            FrequencyType::Sporadically => Some(0.000001),
            FrequencyType::Randomly => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RelationshipType {
    #[default]
    Unspecified,
    None,
    One,
    OneSpecific,
    OneNonSpecific,
    Many,
    All,
}

impl RelationshipType {
    pub fn is_one(self) -> bool {
        matches!(
            self,
            RelationshipType::One | RelationshipType::OneSpecific | RelationshipType::OneNonSpecific
        )
    }

    pub fn is_many(self) -> bool {
        matches!(self, RelationshipType::Many | RelationshipType::All)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyContext {
    modifier: ModifierContext,
    frequency_type: FrequencyType,
    generality: Option<f64>,
    relationship: RelationshipType,
    count: Option<f64>,
    strength: f64,
}

impl FrequencyContext {
    pub fn new(modifier: DictionaryItem) -> Self {
        Self {
            modifier: ModifierContext::new(modifier),
            frequency_type: FrequencyType::Unspecified,
            generality: None,
            relationship: RelationshipType::Unspecified,
            count: None,
            strength: 0.0,
        }
    }

    pub fn with_frequency_type(mut self, frequency_type: FrequencyType) -> Self {
        self.set_frequency_type(frequency_type);
        self
    }

    pub fn with_relationship_type(mut self, relationship: RelationshipType) -> Self {
        self.set_relationship_type(relationship);
        self
    }

    pub fn as_modifier(&self) -> &ModifierContext {
        &self.modifier
    }

    pub(crate) fn as_modifier_mut(&mut self) -> &mut ModifierContext {
        &mut self.modifier
    }

    pub fn frequency_type(&self) -> FrequencyType {
        self.frequency_type
    }

    pub fn generality(&self) -> Option<f64> {
        self.generality
    }

    pub fn relationship_type(&self) -> RelationshipType {
        self.relationship
    }

    pub fn count(&self) -> Option<f64> {
        self.count
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn set_frequency_type(&mut self, frequency_type: FrequencyType) {
        if frequency_type == self.frequency_type {
            return;
        }
        self.frequency_type = frequency_type;
        self.generality = frequency_type.generality();
        trace!(?frequency_type, generality = ?self.generality, "Frequency type changed");
    }

    pub fn set_relationship_type(&mut self, relationship: RelationshipType) {
        if relationship == self.relationship {
            return;
        }
        self.relationship = relationship;
        self.count = match relationship {
            RelationshipType::Unspecified => None,
            RelationshipType::None => Some(0.0),
            RelationshipType::One
            | RelationshipType::OneSpecific
            | RelationshipType::OneNonSpecific => Some(1.0),
            // 0 and 1 are not valid counts for "many"
            RelationshipType::Many | RelationshipType::All => match self.count {
                Some(count) if count == 0.0 || count == 1.0 => None,
                count => count,
            },
        };
        trace!(?relationship, count = ?self.count, "Relationship type changed");
    }

    pub fn set_count(&mut self, count: Option<f64>) {
        let count = count.filter(|c| c.is_finite());
        if count == self.count {
            return;
        }
        self.count = count;
        match count {
            None => self.relationship = RelationshipType::Unspecified,
            Some(c) if c == 0.0 => self.relationship = RelationshipType::None,
            Some(c) if c == 1.0 || c == -1.0 => {
                if !self.relationship.is_one() {
                    self.relationship = RelationshipType::One;
                }
            }
            Some(_) => {
                if !self.relationship.is_many() {
                    self.relationship = RelationshipType::Many;
                }
            }
        }
        trace!(count = ?self.count, relationship = ?self.relationship, "Count changed");
    }

    /// Stored as given; callers keep it within [0, 1].
    pub fn set_strength(&mut self, strength: f64) {
        self.strength = strength;
    }
}
