pub const KEY_VALUE_DELIMITER: char = '=';
pub const VALUES_DELIMITER: char = ',';

/// Spaces written after every padded, non-final column.
pub const COLUMN_GAP: usize = 5;
pub const INDENT: &str = "\t";

pub const VERSION_PREFIX: &str = "Vulkan Instance Version: ";

pub const EXTENSIONS_TITLE: &str = "Instance extensions:";
pub const EXTENSIONS_HEADER: &[&str] = &["Name", "Spec Version"];

pub const LAYERS_TITLE: &str = "Instance layers:";
pub const LAYERS_HEADER: &[&str] = &[
    "Name",
    "Spec Version",
    "Implementation Version",
    "Description",
];

pub const EXTENSIONS_SUPPORT_TITLE: &str = "Instance extensions supported:";
pub const LAYERS_SUPPORT_TITLE: &str = "Instance layers supported:";
pub const SUPPORT_HEADER: &[&str] = &["Name", "Supported"];

pub const SUPPORTED: &str = "YES";
pub const NOT_SUPPORTED: &str = "NO";
