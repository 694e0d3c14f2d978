use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info;

use scout_ingest::SourceCatalog;
use scout_match::SearchSession;
use scout_model::{Industry, MatchQuery};

use crate::cli::{SearchArgs, SourcesArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell, print_search_summary};

pub fn run_search(args: &SearchArgs, session: &mut SearchSession) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    let mut query = MatchQuery::new(args.industry.into());
    query.hs_code = args.hs_code.clone().unwrap_or_default();
    query.countries = args.countries.clone();
    query.require_email = args.require_email;
    query.source_weights = catalog.weights();

    let now = Local::now().naive_local();
    info!(
        industry = %query.industry,
        hs_code = %query.hs_code,
        countries = query.countries.len(),
        "starting buyer search"
    );
    let outcome = scout_match::run_search(
        &catalog,
        &args.data_dir,
        &query,
        args.max_results,
        now,
    );
    let outcome = session.store(outcome);

    if let Some(path) = &args.json {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &outcome.buyers)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), count = outcome.buyers.len(), "wrote JSON results");
    }

    print_search_summary(outcome);
    Ok(())
}

pub fn run_sources(args: &SourcesArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Weight"),
        header_cell("File"),
        header_cell("Resolved"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for resolved in catalog.resolve(&args.data_dir) {
        let location = match &resolved.path {
            Some(path) => Cell::new(path.display()),
            None => dim_cell("not found"),
        };
        table.add_row(vec![
            Cell::new(&resolved.spec.id),
            Cell::new(resolved.spec.weight),
            Cell::new(&resolved.spec.filename),
            location,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_industries() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Industry"), header_cell("Keywords")]);
    apply_table_style(&mut table);
    for industry in Industry::ALL {
        table.add_row(vec![
            Cell::new(industry.label()),
            Cell::new(industry.keywords().join(", ")),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<SourceCatalog> {
    match path {
        Some(path) => SourceCatalog::from_json_file(path)
            .with_context(|| format!("load catalog {}", path.display())),
        None => Ok(SourceCatalog::default()),
    }
}
