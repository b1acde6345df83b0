use std::collections::HashMap;

use crate::consts::{KEY_VALUE_DELIMITER, VALUES_DELIMITER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A bare switch, e.g. `--instance-version`.
    Info,
    /// A `--flag=a,b,c` list of names to check for.
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceOption {
    All,
    Version,
    ShowExtensions,
    ShowLayers,
    SupportExtensions,
    SupportLayers,
}

impl InstanceOption {
    pub const ALL: [InstanceOption; 6] = [
        InstanceOption::All,
        InstanceOption::Version,
        InstanceOption::ShowExtensions,
        InstanceOption::ShowLayers,
        InstanceOption::SupportExtensions,
        InstanceOption::SupportLayers,
    ];

    pub fn literal(self) -> &'static str {
        match self {
            InstanceOption::All => "--instance-all",
            InstanceOption::Version => "--instance-version",
            InstanceOption::ShowExtensions => "--instance-extensions",
            InstanceOption::ShowLayers => "--instance-layers",
            InstanceOption::SupportExtensions => "--instance-support-extensions",
            InstanceOption::SupportLayers => "--instance-support-layers",
        }
    }

    pub fn kind(self) -> OptionKind {
        match self {
            InstanceOption::All
            | InstanceOption::Version
            | InstanceOption::ShowExtensions
            | InstanceOption::ShowLayers => OptionKind::Info,
            InstanceOption::SupportExtensions | InstanceOption::SupportLayers => {
                OptionKind::Support
            }
        }
    }

    /// Returns the value list of `arg` if it is `<literal>=<values>`.
    ///
    /// The bare literal without `=` does not match.
    fn support_values<'a>(self, arg: &'a str) -> Option<&'a str> {
        let rest = arg.strip_prefix(self.literal())?;
        rest.strip_prefix(KEY_VALUE_DELIMITER)
    }
}

/// Result of parsing the command line.
///
/// Info options map to whether they were given, support options to every
/// requested name in order of appearance, repeated flags appending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    info: HashMap<InstanceOption, bool>,
    support: HashMap<InstanceOption, Vec<String>>,
}

impl ParsedOptions {
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        args.into_iter()
            .fold(Self::default(), |options, arg| options.apply(arg.as_ref()))
    }

    /// Folds a single token into the options. Unknown tokens are ignored.
    pub fn apply(mut self, arg: &str) -> Self {
        for option in InstanceOption::ALL.iter().copied() {
            match option.kind() {
                OptionKind::Info if arg == option.literal() => {
                    self.info.insert(option, true);
                    return self;
                }
                OptionKind::Support => {
                    if let Some(values) = option.support_values(arg) {
                        self.support
                            .entry(option)
                            .or_insert_with(Vec::new)
                            .extend(values.split(VALUES_DELIMITER).map(String::from));
                        return self;
                    }
                }
                _ => (),
            }
        }

        log::debug!("ignoring unrecognized argument {:?}", arg);
        self
    }

    pub fn info(&self, option: InstanceOption) -> bool {
        self.info.get(&option).copied().unwrap_or(false)
    }

    pub fn support(&self, option: InstanceOption) -> Option<&[String]> {
        self.support.get(&option).map(Vec::as_slice)
    }
}
