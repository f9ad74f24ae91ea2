mod checker;
mod fix;
mod locator;
mod policy;
mod properties;
mod version;

pub use checker::WrapperCheck;
pub use fix::CreateWrapperPropertiesFix;
pub use locator::locate_wrapper_properties;
pub use policy::{
    EnvInstallationLocator, FsWrapperProbe, InstallationHomeLocator, InstallationPreferencePolicy,
    WrapperProbe,
};
pub use properties::parse_properties;
pub use version::{wrapper_version, wrapper_version_in};
