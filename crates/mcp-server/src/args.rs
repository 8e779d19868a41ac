use std::env;

fn print_help(bin: &str) {
    println!("{bin} - MCP server over stdio");
    println!();
    println!("Usage: {bin} [--print-tools|--version|--help]");
    println!();
    println!("Flags:");
    println!("  --print-tools  Print tool inventory as JSON and exit");
    println!("  --version      Print version and exit");
    println!("  --help         Print this help and exit");
}

/// Handle the informational flags. Returns the exit code when the process should stop instead
/// of serving.
pub fn handle_cli_args(bin: &str, tool_inventory: impl FnOnce() -> String) -> Option<i32> {
    let args: Vec<String> = env::args().skip(1).collect();
    handle_args(bin, &args, tool_inventory)
}

fn handle_args(bin: &str, args: &[String], tool_inventory: impl FnOnce() -> String) -> Option<i32> {
    if args.is_empty() {
        return None;
    }

    if args.len() == 1 {
        match args[0].as_str() {
            "--print-tools" => {
                println!("{}", tool_inventory());
                return Some(0);
            }
            "--version" | "-V" => {
                println!("{bin} {}", env!("CARGO_PKG_VERSION"));
                return Some(0);
            }
            "--help" | "-h" => {
                print_help(bin);
                return Some(0);
            }
            _ => {}
        }
    }

    eprintln!("Unknown arguments: {}", args.join(" "));
    print_help(bin);
    Some(2)
}
