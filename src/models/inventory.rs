use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const CRITICAL_RATIO: f64 = 0.2;
pub const LOW_RATIO: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryStatus {
    Critical,
    Low,
    Sufficient,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub current: u32,
    pub capacity: u32,
    pub unit: String,
}

impl InventoryItem {
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.current as f64 / self.capacity as f64
    }

    pub fn status(&self) -> InventoryStatus {
        let ratio = self.fill_ratio();
        if ratio <= CRITICAL_RATIO {
            InventoryStatus::Critical
        } else if ratio <= LOW_RATIO {
            InventoryStatus::Low
        } else {
            InventoryStatus::Sufficient
        }
    }
}

/// Input of the "create item" form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub name: String,
    pub category: String,
    pub current: u32,
    pub capacity: u32,
    pub unit: String,
}

impl NewInventoryItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if self.capacity == 0 {
            return Err(ValidationError::InvalidCapacity);
        }
        if self.current > self.capacity {
            return Err(ValidationError::ExceedsCapacity {
                current: self.current,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    pub fn into_item(self, id: impl Into<String>) -> Result<InventoryItem, ValidationError> {
        self.validate()?;
        Ok(InventoryItem {
            id: id.into(),
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            current: self.current,
            capacity: self.capacity,
            unit: self.unit,
        })
    }
}
