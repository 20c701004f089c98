use anyhow::Result;
use colored::Colorize;

use crate::utils::load_project_config;

pub fn cmd_middleware() -> Result<()> {
    let config = load_project_config()?;
    let stack = config.middleware();

    println!("{}", "Middleware stack:".bright_cyan().bold());
    for (index, name) in stack.names().into_iter().enumerate() {
        println!("  {} {}", format!("{:>2}.", index + 1).bright_black(), name.bright_green());
    }

    if let Some(csp) = stack.content_security_policy() {
        println!();
        println!("{}", "Content-Security-Policy:".bright_cyan().bold());
        println!("  {}", csp.header_value().bright_white());
    }
    Ok(())
}
