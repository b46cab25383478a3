//! Plinth command line: build the documentation site and run the
//! accessibility gate.

use anyhow::{Error, anyhow};
use docsite::{Site, SiteConfig};
use log::{error, info, warn};
use std::env;
use std::path::PathBuf;
use tokio::runtime::Runtime;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map_or("audit", String::as_str);
    let runtime = Runtime::new()?;
    let config = SiteConfig::from_env();

    match command {
        "build" => build(&runtime, config, args.get(1)),
        "audit" => audit(&runtime, config, args.get(1)),
        "routes" => {
            list_routes();
            Ok(())
        }
        other => Err(anyhow!("Unknown command {other:?}; expected build, audit or routes")),
    }
}

fn build(runtime: &Runtime, config: SiteConfig, out_dir: Option<&String>) -> Result<(), Error> {
    let out = out_dir.map_or_else(|| PathBuf::from("site-out"), PathBuf::from);
    let mut site = Site::new(config);
    let written = runtime.block_on(site.build(&out))?;
    info!("built {written} page(s) into {}", out.display());
    Ok(())
}

fn audit(runtime: &Runtime, config: SiteConfig, route: Option<&String>) -> Result<(), Error> {
    let mut site = Site::new(config);
    let paths: Vec<&str> = match route {
        Some(route) => vec![route.as_str()],
        None => site.router().paths(),
    };

    let mut failures = 0;
    for path in paths {
        let report = runtime.block_on(a11y::audit_route(&mut site, path))?;
        if report.is_clean() {
            info!("{path}: ok");
        } else {
            failures += report.violations.len();
            warn!("{path}: {} violation(s)\n{}", report.violations.len(), report.summary());
        }
    }
    if failures > 0 {
        return Err(anyhow!("Accessibility audit failed with {failures} violation(s)"));
    }
    Ok(())
}

#[allow(clippy::print_stdout, reason = "route listing is the command's output")]
fn list_routes() {
    for path in docsite::Router::new().paths() {
        println!("{path}");
    }
}
