//! `realty inspect`: print the metadata resolved for a URL path.

use crate::cli::InspectArgs;
use crate::config::SiteConfig;
use crate::core::Route;
use crate::seo::DescriptorTable;
use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::io::Write;

/// Inspect output: the resolved route plus its descriptor.
#[derive(Debug, Serialize)]
struct InspectResult<'a> {
    path: &'a str,
    #[serde(flatten)]
    descriptor: JsonValue,
}

/// Execute the inspect command.
pub fn run_inspect(args: &InspectArgs, config: &SiteConfig) -> Result<()> {
    let output = inspect_json(args, config)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

/// JSON for the page at `args.path`.
fn inspect_json(args: &InspectArgs, config: &SiteConfig) -> Result<String> {
    let Some(route) = Route::resolve(&args.path) else {
        bail!("no page is served at `{}`", args.path);
    };
    let descriptor = DescriptorTable::new(config).get(route.page, route.lang);

    let value = if args.json_ld {
        serde_json::to_value(&descriptor.structured)?
    } else {
        serde_json::to_value(InspectResult {
            path: &route.path,
            descriptor: serde_json::to_value(&descriptor)?,
        })?
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;

    fn args(path: &str, json_ld: bool) -> InspectArgs {
        InspectArgs {
            path: path.to_owned(),
            json_ld,
            pretty: false,
        }
    }

    #[test]
    fn test_inspect_descriptor() {
        let config = test_site_config();
        let output = inspect_json(&args("/zh/blog", false), &config).unwrap();
        let value: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(value["path"], "/zh/blog");
        assert_eq!(value["page"], "blog");
        assert_eq!(value["lang"], "zh");
        assert_eq!(value["canonical"], "https://www.example-realty.com/zh/blog");
        assert_eq!(value["alternates"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_inspect_json_ld_only() {
        let config = test_site_config();
        let output = inspect_json(&args("/", true), &config).unwrap();
        let value: JsonValue = serde_json::from_str(&output).unwrap();
        let blocks = value.as_array().unwrap();
        assert_eq!(blocks[0]["@type"], "RealEstateAgent");
        assert!(blocks.iter().all(|b| b["@context"] == "https://schema.org"));
    }

    #[test]
    fn test_inspect_unknown_path() {
        let config = test_site_config();
        assert!(inspect_json(&args("/en/listings", false), &config).is_err());
    }
}
