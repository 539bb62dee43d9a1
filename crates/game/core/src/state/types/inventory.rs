use super::Resource;

/// Removal of a resource that is not present.
///
/// Distinct from gameplay no-ops: asking to remove an absent resource
/// indicates caller-side misuse, not expected friction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("resource {0:?} is not present in the inventory")]
    NotFound(Resource),
}

/// Ordered resource collection. Insertion order is preserved and duplicates
/// are allowed.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<Resource>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a resource at the end of the collection.
    pub fn add(&mut self, resource: Resource) {
        self.items.push(resource);
    }

    /// Removes the first entry equal to `resource` by value.
    pub fn remove(&mut self, resource: &Resource) -> Result<Resource, InventoryError> {
        match self.items.iter().position(|item| item == resource) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(InventoryError::NotFound(*resource)),
        }
    }

    pub fn items(&self) -> &[Resource] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
