mod instance;
mod result;

pub use self::instance::{
    ApiVersion, ExtensionProperties, InstanceQuery, LayerProperties, Loader,
};
pub use self::result::result_label;
