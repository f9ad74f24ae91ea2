mod check;
mod fix;
mod init;
mod wrapper;

pub use check::CheckArgs;
pub use check::handle_check;
pub use fix::FixArgs;
pub use fix::handle_fix;
pub use init::InitArgs;
pub use init::handle_init;
pub use wrapper::WrapperArgs;
pub use wrapper::handle_wrapper;
