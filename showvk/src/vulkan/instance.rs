use std::ffi::CStr;
use std::fmt;
use std::os::raw::c_char;

use ash::version::EntryV1_0;
use ash::vk;

use crate::error::{Error, Result};

const ENUMERATE_VERSION: &str = "vkEnumerateInstanceVersion()";
const ENUMERATE_EXTENSIONS: &str = "vkEnumerateInstanceExtensionProperties()";
const ENUMERATE_LAYERS: &str = "vkEnumerateInstanceLayerProperties()";

/// Instance-level API version, unpacked from the `u32` the loader reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersion {
    pub variant: u32,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ApiVersion {
    pub fn from_raw(version: u32) -> Self {
        Self {
            variant: version >> 29,
            major: (version >> 22) & 0x7f,
            minor: (version >> 12) & 0x3ff,
            patch: version & 0xfff,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.variant, self.major, self.minor, self.patch
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionProperties {
    pub name: String,
    pub spec_version: u32,
}

impl From<&vk::ExtensionProperties> for ExtensionProperties {
    fn from(property: &vk::ExtensionProperties) -> Self {
        Self {
            name: c_chars_to_string(&property.extension_name),
            spec_version: property.spec_version,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerProperties {
    pub name: String,
    pub spec_version: u32,
    pub implementation_version: u32,
    pub description: String,
}

impl From<&vk::LayerProperties> for LayerProperties {
    fn from(property: &vk::LayerProperties) -> Self {
        Self {
            name: c_chars_to_string(&property.layer_name),
            spec_version: property.spec_version,
            implementation_version: property.implementation_version,
            description: c_chars_to_string(&property.description),
        }
    }
}

/// The instance-level capability queries the tool prints.
pub trait InstanceQuery {
    fn instance_version(&self) -> Result<ApiVersion>;
    fn instance_extensions(&self) -> Result<Vec<ExtensionProperties>>;
    fn instance_layers(&self) -> Result<Vec<LayerProperties>>;
}

/// Queries the system Vulkan loader.
pub struct Loader {
    entry: ash::Entry,
}

impl Loader {
    pub fn new() -> Result<Self> {
        let entry = ash::Entry::new().map_err(|err| Error::Load(format!("{:?}", err)))?;
        log::debug!("vulkan loader opened");

        Ok(Self { entry })
    }
}

impl InstanceQuery for Loader {
    fn instance_version(&self) -> Result<ApiVersion> {
        let version = self
            .entry
            .try_enumerate_instance_version()
            .map_err(|result| query_error(ENUMERATE_VERSION, result))?
            .unwrap_or_else(|| {
                // vkEnumerateInstanceVersion only exists since vulkan 1.1
                log::debug!("{} is not exported, assuming 1.0", ENUMERATE_VERSION);
                vk::make_version(1, 0, 0)
            });

        Ok(ApiVersion::from_raw(version))
    }

    fn instance_extensions(&self) -> Result<Vec<ExtensionProperties>> {
        let extensions = self
            .entry
            .enumerate_instance_extension_properties()
            .map_err(|result| query_error(ENUMERATE_EXTENSIONS, result))?
            .iter()
            .map(ExtensionProperties::from)
            .collect::<Vec<_>>();

        log::debug!("{} instance extensions available", extensions.len());
        Ok(extensions)
    }

    fn instance_layers(&self) -> Result<Vec<LayerProperties>> {
        let layers = self
            .entry
            .enumerate_instance_layer_properties()
            .map_err(|result| query_error(ENUMERATE_LAYERS, result))?
            .iter()
            .map(LayerProperties::from)
            .collect::<Vec<_>>();

        log::debug!("{} instance layers available", layers.len());
        Ok(layers)
    }
}

fn query_error(operation: &'static str, result: vk::Result) -> Error {
    log::error!("{} returned {:?}", operation, result);
    Error::Query {
        operation,
        code: result.as_raw(),
    }
}

fn c_chars_to_string(raw: &[c_char]) -> String {
    // The loader guarantees NUL termination within the fixed-size array
    unsafe { CStr::from_ptr(raw.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}
