// File: src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Arbeitsweg v{} - Pendlerkosten-Rechner (Auto vs. ÖV)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} [--home <Adresse>] [--work <Adresse>] [options]",
        binary_name
    );
    println!("    {} --query \"home1=...&work1=...\"", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    --home <Adresse>      Home address (default from config).");
    println!("    --work <Adresse>      Employer address (default from config).");
    println!("    --start <HH:MM>       Work start time.");
    println!("    --end <HH:MM>         Work end time.");
    println!("    --from <YYYY-MM-DD>   Start of the employment date range.");
    println!("    --to <YYYY-MM-DD>     End of the employment date range.");
    println!("    --query <string>      home{{N}}/work{{N}} pairs; each N becomes its own panel.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("EXAMPLES:");
    println!(
        "    {} --home \"Musterweg 3, Baden\" --work \"Rehaklinik Bellikon AG\" \\",
        binary_name
    );
    println!("        --start 08:00 --end 17:00 --from 2025-01-01 --to 2025-12-31");
    println!(
        "    {} --query \"home1=Musterweg+3&work1=Bellikon&home2=Zugerstrasse+5\"",
        binary_name
    );
    println!();
    println!("CONFIG:");
    println!("    Provider endpoint, API key and default addresses are read from");
    println!("    config.toml (created with defaults on first run).");
}
