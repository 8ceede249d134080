use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use mailgate_core::proxy::ROUTES;

use crate::cli::ConfigArgs;

pub fn handle_routes(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ROUTES)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Method", "Path", "Description"]);
    for route in ROUTES {
        table.add_row(vec![route.method.to_string(), route.display_path(), route.description.to_string()]);
    }

    println!("{}", table);
    Ok(())
}

pub fn handle_check(args: &ConfigArgs) -> Result<()> {
    match args.to_gateway_config() {
        Ok(config) => {
            println!("{}", "Configuration OK".green().bold());
            println!("  Upstream:          {}", config.upstream_base_url);
            println!("  Credential policy: {}", config.credential_policy);
            println!("  Timeout:           {}s", config.request_timeout_secs);
            println!("  Listen:            {}", config.socket_addr());
            println!("  Index:             {}", config.index_mode);
            Ok(())
        },
        Err(e) => {
            println!("{} {}", "Configuration invalid:".red().bold(), e);
            Err(e.into())
        },
    }
}
