use std::env;
use std::io::{self, Write};

use anyhow::Context;

use showvk::vulkan::Loader;
use showvk::ParsedOptions;

const DEFAULT_LOG_FILTER: &str = "showvk=warn";

fn main() -> anyhow::Result<()> {
    let filters = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&filters)
        .init();

    let options = ParsedOptions::parse(env::args().skip(1));
    log::debug!("parsed options: {:?}", options);

    let loader = Loader::new().context("vulkan is not available")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = showvk::execute(&options, &loader, &mut out);
    out.flush()?;

    Ok(result?)
}
