//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for all domain crates:
//! - `TestMongo`: MongoDB container with automatic cleanup
//! - `TestDataBuilder`: Deterministic test data generation
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestMongo, TestDataBuilder};
//!
//! # async fn example() {
//! let mongo = TestMongo::new().await;
//! let db = mongo.database("lostfound_test");
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let item_name = builder.name("item", "main");
//! # }
//! ```

use uuid::Uuid;

mod mongodb;

pub use mongodb::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a deterministic UUID for this builder's seed
    pub fn item_id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("item", "main");
    /// // Returns: "test-item-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_test_name_gives_same_data() {
        let a = TestDataBuilder::from_test_name("stable");
        let b = TestDataBuilder::from_test_name("stable");
        assert_eq!(a.item_id(), b.item_id());
        assert_eq!(a.name("item", "x"), b.name("item", "x"));
    }

    #[test]
    fn different_test_names_give_different_data() {
        let a = TestDataBuilder::from_test_name("one");
        let b = TestDataBuilder::from_test_name("two");
        assert_ne!(a.item_id(), b.item_id());
    }
}
