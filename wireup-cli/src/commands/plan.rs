//! plan command - Resolve catalogs into a registration plan

use super::{fail, load_catalogs, print_table};
use clap::Args;
use console::style;
use wireup::{
    DuplicationPolicy, Registrator, RegistrationConfig, ServiceCollection, ServiceRegistry,
};

#[derive(Args)]
pub struct PlanArgs {
    /// Catalog manifest (JSON), repeat for several catalogs
    #[arg(long = "catalog", short = 'c', required = true)]
    catalogs: Vec<String>,

    /// Duplicate handling: throw, ignore or take-first (default: WIREUP_DUPLICATION)
    #[arg(long, short = 'p')]
    policy: Option<DuplicationPolicy>,

    /// Contract name prefix (default: WIREUP_CONTRACT_PREFIX or "I")
    #[arg(long)]
    prefix: Option<String>,

    /// Register classes assignable to this qualified type name
    #[arg(long)]
    base_type: Option<String>,

    /// Register classes carrying a lifetime marker
    #[arg(long)]
    markers: bool,

    /// Do not resolve contracts
    #[arg(long)]
    skip_contracts: bool,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) {
    let catalogs = load_catalogs(&args.catalogs);

    let mut config = RegistrationConfig::from_env();
    if let Some(policy) = args.policy {
        config.duplication = policy;
    }
    if let Some(prefix) = args.prefix {
        config.contract_prefix = prefix;
    }

    let mut services = ServiceCollection::new();

    if args.markers {
        for catalog in &catalogs {
            services.register_by_marker(catalog);
        }
    }

    if let Some(base_name) = &args.base_type {
        let Some(base) = catalogs
            .iter()
            .find_map(|catalog| catalog.find(base_name))
            .cloned()
        else {
            fail(&format!("base type '{}' is not declared in any catalog", base_name));
        };
        for catalog in &catalogs {
            services.register_by_base_type(catalog, &base);
        }
    }

    if !args.skip_contracts {
        if let Err(e) = services.register_contracts_configured(&config, &catalogs) {
            eprintln!(
                "{}",
                style(format!("{} binding(s) were registered before the failure", services.len())).dim()
            );
            fail(&e.to_string());
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&services) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&e.to_string()),
        }
        return;
    }

    if services.is_empty() {
        println!("{} No bindings to register", style("Info:").yellow().bold());
        return;
    }

    let rows: Vec<Vec<String>> = services
        .iter()
        .map(|binding| {
            vec![
                binding.service().qualified_name().to_string(),
                binding.implementation().qualified_name().to_string(),
                binding.lifetime().to_string(),
            ]
        })
        .collect();
    print_table(&["SERVICE", "IMPLEMENTATION", "LIFETIME"], &rows);

    let policy = if args.skip_contracts {
        "-".to_string()
    } else {
        config.duplication.to_string()
    };
    println!();
    println!(
        "{} {} binding(s) from {} catalog(s) (policy: {})",
        style("->").cyan(),
        services.len(),
        catalogs.len(),
        policy
    );
}
