//! `lister`: the data page listing of a container page.

use studio_sdk::lister::{ListerOverview, PagerItem, RequestParams};

use crate::{output, Context, OutputFormat};

pub(crate) fn show_lister(ctx: &Context, page_id: u32, query: &str) -> anyhow::Result<()> {
    let params = RequestParams::from_query(query);
    let Some(overview) =
        ListerOverview::build(&ctx.settings.lister, &ctx.site, &ctx.site, page_id, &params)
    else {
        anyhow::bail!("page {page_id} is not a data container");
    };

    if ctx.format == OutputFormat::Json {
        return output::json(&overview);
    }

    output::header(format!("{} ({})", overview.parent_title, overview.parent_id));
    output::label("Templates", overview.child_templates.join(", "));
    output::label("Selector", &overview.selector);
    if let Some(active) = &overview.active {
        output::label("Search", format!("{} contains \"{}\"", active.by, active.q));
    }
    output::label(
        "Results",
        format!(
            "{} (page {} of {})",
            overview.total,
            overview.pagination.page,
            overview.pager.pages.max(1)
        ),
    );
    output::blank();

    if overview.rows.is_empty() {
        output::dim("  No pages found.");
        return Ok(());
    }

    let mut columns = vec!["id".to_string(), "title".to_string()];
    columns.extend(overview.fields.iter().cloned());
    let rows: Vec<Vec<String>> = overview
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.id.to_string(), row.title.clone()];
            cells.extend(row.cells.iter().cloned());
            cells
        })
        .collect();
    print_table(&columns, &rows);

    if !overview.pager.is_empty() {
        output::blank();
        let pages: Vec<(Option<usize>, bool)> = overview
            .pager
            .items
            .iter()
            .map(|item| match item {
                PagerItem::Page { number, current } => (Some(*number), *current),
                PagerItem::Gap => (None, false),
            })
            .collect();
        output::pager_line(&pages);
        if let Some(next) = overview.pager.next {
            output::dim(format!("  next: --query '{}'", overview.page_query(next)));
        }
    }
    Ok(())
}

fn print_table(columns: &[String], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    output::header(format!("  {}", line(columns)));
    for row in rows {
        output::plain(format!("  {}", line(row)));
    }
}
