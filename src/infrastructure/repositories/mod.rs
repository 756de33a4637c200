pub mod key_value_fs_repository;
pub mod key_value_memory_repository;

pub use key_value_fs_repository::JsonFileKeyValueStore;
pub use key_value_memory_repository::InMemoryKeyValueStore;
