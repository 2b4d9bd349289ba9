pub mod inspect;
pub mod plan;

use console::style;
use wireup::TypeCatalog;

/// Load every manifest in order, exiting on the first one that fails
pub fn load_catalogs(paths: &[String]) -> Vec<TypeCatalog> {
    paths
        .iter()
        .map(|path| match TypeCatalog::from_manifest_path(path) {
            Ok(catalog) => catalog,
            Err(e) => fail(&e.to_string()),
        })
        .collect()
}

/// Print an error and exit with status 1
pub fn fail(message: &str) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), message);
    std::process::exit(1);
}

/// Render rows as left-aligned columns
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<w$}", h, w = *w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", style(header.trim_end()).bold());

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}
