mod config_io;
mod escape;
mod relative_path;
mod walk;
mod workspace_root;

pub use config_io::{get_buildcheck_dir, load_config, write_config};
pub use escape::escape_separators;
pub use relative_path::get_relative_path;
pub use walk::visit_files;
pub use workspace_root::find_workspace_root;
