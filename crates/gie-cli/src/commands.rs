use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use gie_catalog::{ApiFamily, Catalog, CatalogEntry};
use gie_client::{ClientSettings, GieRawClient};
use gie_frame::{FLOAT_COLUMNS, json_to_frame};
use serde_json::Value;

use crate::cli::{CatalogArgs, CatalogKind, Command, OutputArgs, ResolveArgs};

/// Listings and news carry no storage figures.
const NO_FLOAT_COLUMNS: &[&str] = &[];

pub fn run_catalog(args: &CatalogArgs) {
    println!("{}", catalog_table(args.family.into(), args.kind));
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    println!("{}", resolve_summary(args.family.into(), args.kind, &args.identifier)?);
    Ok(())
}

/// Runs a network query and returns its rendered output.
pub async fn run_query(settings: ClientSettings, command: &Command) -> Result<String> {
    let client = GieRawClient::with_settings(settings).context("create GIE client")?;
    let (payload, float_cols, output) = fetch(&client, command).await?;
    client.close();
    render_payload(&payload, float_cols, output)
}

async fn fetch<'c>(
    client: &GieRawClient,
    command: &'c Command,
) -> Result<(Value, &'static [&'static str], &'c OutputArgs)> {
    let result = match command {
        Command::Listing(args) => {
            let payload = client.query_eic_listing(args.family.into()).await;
            (payload, NO_FLOAT_COLUMNS, &args.output)
        }
        Command::News(args) => {
            let payload = client
                .query_news_listing(args.family.into(), args.item.as_deref())
                .await;
            (payload, NO_FLOAT_COLUMNS, &args.output)
        }
        Command::Storage(args) => {
            let payload = client
                .query_country_storage(
                    args.family.into(),
                    args.country.as_deref().map(Into::into),
                    args.window.to_window(),
                )
                .await;
            (payload, FLOAT_COLUMNS, &args.output)
        }
        Command::Unavailability(args) => {
            let payload = client
                .query_unavailability(
                    args.family.into(),
                    args.country.as_deref().map(Into::into),
                    args.window.to_window(),
                )
                .await;
            (payload, FLOAT_COLUMNS, &args.output)
        }
        Command::Company(args) => {
            let payload = client
                .query_company(
                    args.family.into(),
                    args.identifier.as_str(),
                    args.window.to_window(),
                )
                .await;
            (payload, FLOAT_COLUMNS, &args.output)
        }
        Command::Facility(args) => {
            let payload = client
                .query_facility_storage(
                    args.family.into(),
                    args.identifier.as_str(),
                    args.window.to_window(),
                )
                .await;
            (payload, FLOAT_COLUMNS, &args.output)
        }
        Command::Catalog(_) | Command::Resolve(_) => {
            anyhow::bail!("catalog commands do not query the API")
        }
    };
    let (payload, float_cols, output) = result;
    Ok((payload.context("query GIE API")?, float_cols, output))
}

/// Renders a payload as pretty JSON or as a DataFrame.
pub fn render_payload(
    payload: &Value,
    float_cols: &[&str],
    output: &OutputArgs,
) -> Result<String> {
    if output.json {
        return serde_json::to_string_pretty(payload).context("serialize payload");
    }
    let df = json_to_frame(payload, float_cols).context("tabulate payload")?;
    Ok(df.to_string())
}

/// Builds the listing table for one catalog.
pub fn catalog_table(family: ApiFamily, kind: CatalogKind) -> Table {
    let mut table = Table::new();
    match kind {
        CatalogKind::Countries => {
            table.set_header(header(&["Key", "Code", "Name"]));
            for country in family.countries() {
                table.add_row(vec![country.key, country.code, country.name]);
            }
        }
        CatalogKind::Companies => {
            table.set_header(header(&["Key", "Code", "Country"]));
            for company in family.companies() {
                table.add_row(vec![company.key, company.code, company.country]);
            }
        }
        CatalogKind::Facilities => {
            table.set_header(header(&["Key", "Code", "Country", "Company"]));
            for facility in family.facilities() {
                table.add_row(vec![
                    facility.key,
                    facility.code,
                    facility.country,
                    facility.company,
                ]);
            }
        }
    }
    apply_table_style(&mut table);
    table
}

/// Resolves an identifier and describes the entry and its query parameters.
pub fn resolve_summary(family: ApiFamily, kind: CatalogKind, identifier: &str) -> Result<String> {
    match kind {
        CatalogKind::Countries => describe(family.countries(), identifier),
        CatalogKind::Companies => describe(family.companies(), identifier),
        CatalogKind::Facilities => describe(family.facilities(), identifier),
    }
}

fn describe<T: CatalogEntry>(catalog: &Catalog<T>, identifier: &str) -> Result<String> {
    let entry = catalog
        .resolve(identifier)
        .with_context(|| format!("resolve '{identifier}'"))?;
    let params = entry
        .query_params()
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    Ok(format!(
        "{} {} {} ({})\n{params}",
        catalog.family(),
        T::KIND,
        entry.key(),
        entry.code()
    ))
}

fn header(names: &[&str]) -> Vec<Cell> {
    names
        .iter()
        .map(|name| Cell::new(name).add_attribute(Attribute::Bold))
        .collect()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
