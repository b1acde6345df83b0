use std::cell::RefCell;

use showvk::vulkan::{ApiVersion, ExtensionProperties, InstanceQuery, LayerProperties};
use showvk::{execute, Error, ParsedOptions, Result};

const EXTENSIONS_FAILURE: i32 = -1;
const LAYERS_FAILURE: i32 = -3;

/// Canned loader answers, recording which queries were made.
#[derive(Default)]
struct MockQuery {
    fail_version: bool,
    fail_extensions: bool,
    fail_layers: bool,
    calls: RefCell<Vec<&'static str>>,
}

impl InstanceQuery for MockQuery {
    fn instance_version(&self) -> Result<ApiVersion> {
        self.calls.borrow_mut().push("version");
        if self.fail_version {
            return Err(Error::Query {
                operation: "vkEnumerateInstanceVersion()",
                code: -1,
            });
        }
        Ok(ApiVersion::from_raw((1 << 22) | (3 << 12) | 250))
    }

    fn instance_extensions(&self) -> Result<Vec<ExtensionProperties>> {
        self.calls.borrow_mut().push("extensions");
        if self.fail_extensions {
            return Err(Error::Query {
                operation: "vkEnumerateInstanceExtensionProperties()",
                code: EXTENSIONS_FAILURE,
            });
        }
        Ok(vec![
            ExtensionProperties {
                name: "VK_KHR_surface".to_string(),
                spec_version: 25,
            },
            ExtensionProperties {
                name: "VK_EXT_debug_utils".to_string(),
                spec_version: 2,
            },
        ])
    }

    fn instance_layers(&self) -> Result<Vec<LayerProperties>> {
        self.calls.borrow_mut().push("layers");
        if self.fail_layers {
            return Err(Error::Query {
                operation: "vkEnumerateInstanceLayerProperties()",
                code: LAYERS_FAILURE,
            });
        }
        Ok(vec![LayerProperties {
            name: "VK_LAYER_KHRONOS_validation".to_string(),
            spec_version: 4206847,
            implementation_version: 1,
            description: "Khronos Validation Layer".to_string(),
        }])
    }
}

fn run(args: &[&str], query: &MockQuery) -> (Result<()>, String) {
    let options = ParsedOptions::parse(args);
    let mut out = Vec::new();
    let result = execute(&options, query, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn no_arguments_print_nothing() {
    let query = MockQuery::default();
    let (result, output) = run(&[], &query);
    assert!(result.is_ok());
    assert!(output.is_empty());
    assert!(query.calls.borrow().is_empty());
}

#[test]
fn unknown_arguments_are_ignored() {
    let query = MockQuery::default();
    let (result, output) = run(&["show-vk", "--help", "--instance-support-layers"], &query);
    assert!(result.is_ok());
    assert!(output.is_empty());
}

#[test]
fn version_line() {
    let query = MockQuery::default();
    let (result, output) = run(&["--instance-version"], &query);
    assert!(result.is_ok());
    assert_eq!(output, "Vulkan Instance Version: 0.1.3.250\n");
}

#[test]
fn all_prints_version_extensions_and_layers_in_order() {
    let query = MockQuery::default();
    let (result, output) = run(&["--instance-all"], &query);
    assert!(result.is_ok());
    assert_eq!(*query.calls.borrow(), vec!["version", "extensions", "layers"]);

    let version = output.find("Vulkan Instance Version:").unwrap();
    let extensions = output.find("Instance extensions:").unwrap();
    let layers = output.find("Instance layers:").unwrap();
    assert!(version < extensions && extensions < layers);
    assert!(output.contains("\tVK_KHR_surface"));
    assert!(output.contains("\tVK_LAYER_KHRONOS_validation"));
}

#[test]
fn all_suppresses_individual_flags() {
    let alone = MockQuery::default();
    let (_, expected) = run(&["--instance-all"], &alone);

    let combined = MockQuery::default();
    let (result, output) = run(
        &[
            "--instance-version",
            "--instance-all",
            "--instance-extensions",
            "--instance-layers",
        ],
        &combined,
    );
    assert!(result.is_ok());
    assert_eq!(output, expected);
    assert_eq!(*combined.calls.borrow(), *alone.calls.borrow());
}

#[test]
fn individual_flags_keep_fixed_order() {
    let query = MockQuery::default();
    let (result, _) = run(&["--instance-layers", "--instance-version"], &query);
    assert!(result.is_ok());
    assert_eq!(*query.calls.borrow(), vec!["version", "layers"]);
}

#[test]
fn extension_support_table() {
    let query = MockQuery::default();
    let (result, output) = run(
        &["--instance-support-extensions=VK_KHR_surface,VK_dummy,VK_KHR_surface"],
        &query,
    );
    assert!(result.is_ok());
    assert_eq!(
        output,
        "Instance extensions supported:\n\
         Name               Supported\n\
         VK_KHR_surface     YES\n\
         VK_dummy           NO\n\
         VK_KHR_surface     YES\n"
    );
}

#[test]
fn layer_support_runs_after_listings() {
    let query = MockQuery::default();
    let (result, output) = run(
        &[
            "--instance-support-layers=VK_LAYER_KHRONOS_validation",
            "--instance-extensions",
        ],
        &query,
    );
    assert!(result.is_ok());
    assert_eq!(*query.calls.borrow(), vec!["extensions", "layers"]);
    assert!(output.ends_with(
        "Instance layers supported:\n\
         Name                            Supported\n\
         VK_LAYER_KHRONOS_validation     YES\n"
    ));
}

#[test]
fn empty_support_value_still_prints_a_table() {
    let query = MockQuery::default();
    let (result, output) = run(&["--instance-support-extensions="], &query);
    assert!(result.is_ok());
    assert_eq!(
        output,
        "Instance extensions supported:\n\
         Name     Supported\n\
         \u{20}        NO\n"
    );
}

#[test]
fn query_failure_aborts_remaining_actions() {
    let query = MockQuery {
        fail_extensions: true,
        ..MockQuery::default()
    };
    let (result, output) = run(
        &[
            "--instance-version",
            "--instance-extensions",
            "--instance-layers",
            "--instance-support-layers=VK_LAYER_KHRONOS_validation",
        ],
        &query,
    );

    match result {
        Err(Error::Query { code, .. }) => assert_eq!(code, EXTENSIONS_FAILURE),
        _ => panic!("expected the extension query to fail"),
    }
    assert_eq!(output, "Vulkan Instance Version: 0.1.3.250\n");
    assert_eq!(*query.calls.borrow(), vec!["version", "extensions"]);
}

#[test]
fn failed_layer_support_keeps_earlier_output() {
    let query = MockQuery {
        fail_layers: true,
        ..MockQuery::default()
    };
    let (result, output) = run(
        &[
            "--instance-support-extensions=VK_KHR_surface",
            "--instance-support-layers=VK_LAYER_KHRONOS_validation",
        ],
        &query,
    );

    let error = result.unwrap_err();
    assert_eq!(
        error.to_string(),
        "vkEnumerateInstanceLayerProperties() failed: VK_ERROR_INITIALIZATION_FAILED (-3)"
    );
    assert!(output.starts_with("Instance extensions supported:\n"));
    assert!(!output.contains("Instance layers supported:"));
}

#[test]
fn version_failure_is_fatal() {
    let query = MockQuery {
        fail_version: true,
        ..MockQuery::default()
    };
    let (result, output) = run(&["--instance-all"], &query);
    assert!(result.is_err());
    assert!(output.is_empty());
    assert_eq!(*query.calls.borrow(), vec!["version"]);
}
