//! inspect command - List the types of a catalog manifest

use super::{fail, load_catalogs, print_table};
use console::style;

pub fn run(catalog: String, json: bool) {
    let catalogs = load_catalogs(std::slice::from_ref(&catalog));
    let Some(catalog) = catalogs.into_iter().next() else {
        fail("no catalog loaded");
    };

    if json {
        match serde_json::to_string_pretty(&catalog) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&e.to_string()),
        }
        return;
    }

    println!(
        "{} module {} ({} types)",
        style("->").cyan(),
        style(catalog.module()).bold(),
        catalog.len()
    );
    println!();

    let rows: Vec<Vec<String>> = catalog
        .iter()
        .map(|ty| {
            vec![
                ty.qualified_name().to_string(),
                ty.kind().to_string(),
                ty.lifetime()
                    .map(|lifetime| lifetime.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                ty.assignable_to().join(", "),
            ]
        })
        .collect();
    print_table(&["TYPE", "KIND", "MARKER", "ASSIGNABLE TO"], &rows);
}
