mod check;
mod config;
mod generate;
mod init;

pub use check::CheckArgs;
pub use check::handle_check;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use generate::GenerateArgs;
pub use generate::handle_generate;
pub use init::InitArgs;
pub use init::handle_init;
