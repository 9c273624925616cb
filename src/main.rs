// arithtty: arithmetic expression parser with a terminal tree inspector

use std::io;

use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use arithtty::interpreter::{checked_evaluate, evaluate, lispify};
use arithtty::parser::lexer::Lexer;
use arithtty::parser::parse::Parser;
use arithtty::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [expression]", program_name);
    eprintln!();
    eprintln!("With an expression, print its prefix form and value and exit.");
    eprintln!("Without one, start the interactive inspector.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {} \"1 + (2+3) * 4\"     # prints (+ 1 (* (+ 2 3) 4)) and 21",
        program_name
    );
    eprintln!("  {}                      # interactive mode", program_name);
}

/// Evaluate one expression and print the result to stdout.
fn run_once(source: &str) -> i32 {
    eprintln!("Tokenizing...");
    let tokens = match Lexer::new(source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Lexer error: {}", e);
            return 1;
        }
    };

    eprintln!("Parsing {} tokens...", tokens.len());
    let expr = match Parser::new(&tokens).parse() {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            return 1;
        }
    };

    eprintln!(
        "Parsed successfully. Tree has {} nodes, depth {}.",
        expr.node_count(),
        expr.depth()
    );

    if let Err(e) = checked_evaluate(&expr) {
        eprintln!("Warning: {}; result wraps modulo 2^64", e);
    }

    println!("{}", lispify(&expr));
    println!("{}", evaluate(&expr));
    0
}

fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("arithtty");

    match args.get(1).map(|s| s.as_str()) {
        Some("-h") | Some("--help") => {
            print_usage(program_name);
            Ok(())
        }
        Some(source) => {
            if args.len() > 2 {
                eprintln!("Error: expected a single expression argument (quote it)");
                eprintln!();
                print_usage(program_name);
                std::process::exit(2);
            }
            std::process::exit(run_once(source));
        }
        None => run_tui(),
    }
}
