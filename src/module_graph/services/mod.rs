mod descriptor_locator;
mod forest_builder;
mod gav_resolver;
mod inheritance_filter;
mod install_guard;
mod position_finder;

pub use descriptor_locator::DescriptorLocator;
pub use forest_builder::ForestBuilder;
pub use gav_resolver::{GavCache, GavResolver};
pub use inheritance_filter::InheritanceFilter;
pub use install_guard::InstallGuard;
pub use position_finder::PositionFinder;
