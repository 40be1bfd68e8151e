pub mod memory;
pub mod redis;

pub use memory::InMemoryMessageStore;
pub use self::redis::RedisMessageStore;
