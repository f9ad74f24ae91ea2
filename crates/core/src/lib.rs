pub mod checker;
pub mod config;
pub mod fix;
pub mod lazy;
pub mod problem;
pub mod separator;
pub mod settings;

// Re-export the common surface for convenience
pub use checker::Checker;
pub use config::Config;
pub use fix::QuickFix;
pub use lazy::Lazy;
pub use problem::Problem;
pub use separator::LineSeparator;
pub use settings::InstallationSettings;
