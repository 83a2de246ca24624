mod fake_command_runner;
mod memory_unit_store;

pub use fake_command_runner::FakeCommandRunner;
pub use memory_unit_store::MemoryUnitStore;
