mod process_command;
mod template;
mod unit_filesystem;

pub use process_command::ProcessCommandRunner;
pub use template::MinijinjaRenderer;
pub use unit_filesystem::FilesystemUnitStore;
