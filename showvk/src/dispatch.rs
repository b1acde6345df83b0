use std::collections::HashSet;
use std::io::Write;

use crate::consts::{
    EXTENSIONS_HEADER, EXTENSIONS_SUPPORT_TITLE, EXTENSIONS_TITLE, LAYERS_HEADER,
    LAYERS_SUPPORT_TITLE, LAYERS_TITLE, NOT_SUPPORTED, SUPPORTED, SUPPORT_HEADER, VERSION_PREFIX,
};
use crate::error::Result;
use crate::options::{InstanceOption, ParsedOptions};
use crate::table::Table;
use crate::vulkan::InstanceQuery;

/// Runs every requested action in a fixed order, stopping at the first error.
///
/// `--instance-all` replaces the individual version, extensions and layers
/// flags. Support checks run after them either way.
pub fn execute<Q: InstanceQuery, W: Write>(
    options: &ParsedOptions,
    query: &Q,
    out: &mut W,
) -> Result<()> {
    if options.info(InstanceOption::All) {
        print_version(query, out)?;
        print_extensions(query, out)?;
        print_layers(query, out)?;
    } else {
        if options.info(InstanceOption::Version) {
            print_version(query, out)?;
        }
        if options.info(InstanceOption::ShowExtensions) {
            print_extensions(query, out)?;
        }
        if options.info(InstanceOption::ShowLayers) {
            print_layers(query, out)?;
        }
    }

    if let Some(extensions) = options.support(InstanceOption::SupportExtensions) {
        print_extensions_support(query, extensions, out)?;
    }
    if let Some(layers) = options.support(InstanceOption::SupportLayers) {
        print_layers_support(query, layers, out)?;
    }

    Ok(())
}

pub fn print_version<Q: InstanceQuery, W: Write>(query: &Q, out: &mut W) -> Result<()> {
    log::info!("querying instance version");
    let version = query.instance_version()?;
    writeln!(out, "{}{}", VERSION_PREFIX, version)?;
    Ok(())
}

pub fn print_extensions<Q: InstanceQuery, W: Write>(query: &Q, out: &mut W) -> Result<()> {
    log::info!("listing instance extensions");
    let extensions = query.instance_extensions()?;
    let table = Table::new(EXTENSIONS_HEADER, &extensions)?;

    writeln!(out, "{}", EXTENSIONS_TITLE)?;
    table.write_to(out)
}

pub fn print_layers<Q: InstanceQuery, W: Write>(query: &Q, out: &mut W) -> Result<()> {
    log::info!("listing instance layers");
    let layers = query.instance_layers()?;
    let table = Table::new(LAYERS_HEADER, &layers)?;

    writeln!(out, "{}", LAYERS_TITLE)?;
    table.write_to(out)
}

pub fn print_extensions_support<Q: InstanceQuery, W: Write>(
    query: &Q,
    requested: &[String],
    out: &mut W,
) -> Result<()> {
    log::info!("checking support for {} instance extensions", requested.len());
    let available = query
        .instance_extensions()?
        .into_iter()
        .map(|extension| extension.name);
    let rows = support_rows(available, requested);
    let table = Table::new(SUPPORT_HEADER, &rows)?;

    writeln!(out, "{}", EXTENSIONS_SUPPORT_TITLE)?;
    table.write_to(out)
}

pub fn print_layers_support<Q: InstanceQuery, W: Write>(
    query: &Q,
    requested: &[String],
    out: &mut W,
) -> Result<()> {
    log::info!("checking support for {} instance layers", requested.len());
    let available = query
        .instance_layers()?
        .into_iter()
        .map(|layer| layer.name);
    let rows = support_rows(available, requested);
    let table = Table::new(SUPPORT_HEADER, &rows)?;

    writeln!(out, "{}", LAYERS_SUPPORT_TITLE)?;
    table.write_to(out)
}

/// One `[name, YES|NO]` row per requested name, in request order.
pub fn support_rows<I>(available: I, requested: &[String]) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = String>,
{
    let available = available.into_iter().collect::<HashSet<_>>();

    requested
        .iter()
        .map(|name| {
            let supported = if available.contains(name) {
                SUPPORTED
            } else {
                NOT_SUPPORTED
            };
            vec![name.clone(), supported.to_string()]
        })
        .collect()
}
