//! esh command-line tool
//!
//! Parses esh code and shows what the parser made of it.

use esh_diagnostic::emitter::{ColorMode, TerminalEmitter};
use eshc::commands::{
    check_files, dump, quote_args, take_color_mode, CliError, DumpKind, Input,
};

fn main() {
    eshc::init_tracing();

    let mut args: Vec<String> = std::env::args().collect();
    let color = match take_color_mode(&mut args) {
        Ok(mode) => mode,
        Err(e) => fail(&e),
    };

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].clone();
    match command.as_str() {
        "parse" | "tree" => {
            let Some(input) = Input::from_args(&args[2..]) else {
                eprintln!("Usage: esh {command} <file.esh> | -c <code>");
                std::process::exit(1);
            };
            let src = match input.load() {
                Ok(src) => src,
                Err(e) => fail(&e),
            };
            let kind = if command == "parse" {
                DumpKind::Ast
            } else {
                DumpKind::ParseTree
            };
            let (text, errors) = dump(src, kind);
            print!("{text}");
            if let Some(errors) = errors {
                let mut emitter = TerminalEmitter::stderr(color);
                emitter.emit_all(&errors);
                emitter.flush();
                std::process::exit(1);
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: esh check <file.esh>...");
                std::process::exit(1);
            }
            let mut emitter = TerminalEmitter::stderr(color);
            let failed = check_files(&args[2..], &mut emitter);
            emitter.emit_summary();
            emitter.flush();
            if failed > 0 {
                std::process::exit(1);
            }
            let count = args.len() - 2;
            println!("OK: {count} file{}", if count == 1 { "" } else { "s" });
        }
        "quote" => {
            println!("{}", quote_args(&args[2..]));
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("esh {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(e: &CliError) -> ! {
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto);
    emitter.emit_message(&e.to_string());
    emitter.flush();
    std::process::exit(1);
}

fn print_usage() {
    println!("esh parser tools");
    println!();
    println!("Usage: esh <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <file> | -c <code>   Print the syntax tree");
    println!("  tree <file> | -c <code>    Print the parse tree with spans");
    println!("  check <files...>           Parse files and report errors");
    println!("  quote <words...>           Quote words as esh source");
    println!("  help                       Show this help message");
    println!("  version                    Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>             auto, always or never (default: auto)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=esh_parse=trace) to trace the parser.");
}
