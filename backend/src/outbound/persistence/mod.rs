//! Persistence adapters implementing the domain repository ports.

mod memory;

pub use memory::InMemoryBooksRepository;
