//! Containers shared by the grid algorithms.

pub use self::hashmap::HashMap;

pub mod hashmap;
