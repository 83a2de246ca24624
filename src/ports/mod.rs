mod command_runner;
mod template_renderer;
mod unit_store;

pub use command_runner::{CommandOutput, CommandRunner};
pub use template_renderer::TemplateRenderer;
pub use unit_store::UnitStore;
