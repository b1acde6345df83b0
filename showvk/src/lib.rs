pub mod consts;
pub mod dispatch;
pub mod error;
pub mod options;
pub mod table;
pub mod vulkan;

pub use self::dispatch::execute;
pub use self::error::{Error, Result};
pub use self::options::{InstanceOption, OptionKind, ParsedOptions};
pub use self::table::{Renderable, Style, Table};
