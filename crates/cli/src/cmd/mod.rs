mod create;
mod info;
mod package;
mod version;

pub use create::cmd_create;
pub use info::cmd_info;
pub use package::cmd_package;
pub use version::cmd_version;
