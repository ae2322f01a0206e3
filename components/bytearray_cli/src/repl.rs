//! REPL (Read-Eval-Print Loop) implementation

use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;

/// Run the interactive REPL
///
/// # Arguments
/// * `runtime` - The Runtime instance to use for execution
///
/// # Returns
/// `Ok(())` when the REPL exits normally
///
/// # Errors
/// Returns the error of a fatal command (allocation failure), which ends
/// the session
pub fn run_repl(runtime: &mut Runtime) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::ReplError(format!("Failed to initialize editor: {}", e)))?;

    println!("bytearray shell v{}", env!("CARGO_PKG_VERSION"));
    println!("Type commands, .help for help, or 'exit' to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && (trimmed == "exit" || trimmed == ".exit" || trimmed == "quit") {
                    println!("Goodbye!");
                    break;
                }

                if !in_multiline && trimmed.starts_with('.') {
                    handle_repl_command(trimmed, runtime);
                    continue;
                }

                // A text literal may span lines
                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !is_input_complete(&line_buffer) {
                    in_multiline = true;
                    continue;
                }
                in_multiline = false;

                let _ = editor.add_history_entry(&line_buffer);

                match runtime.run_script(&line_buffer, &mut io::stdout().lock()) {
                    Ok(()) => {}
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e) => eprintln!("Error: {}", e),
                }

                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::ReplError(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Handle special REPL commands
fn handle_repl_command(command: &str, runtime: &Runtime) {
    match command {
        ".help" => {
            println!("Commands:");
            println!("  new                      - Start over with an empty byte array");
            println!("  append <value>           - Append \"text\", blob <hex>, or another value");
            println!("  append_bytearray self    - Append a copy of the array itself");
            println!("  concat <value>           - Same as append, through the .. operator");
            println!("  get <index|name>         - Read a byte or look up a method");
            println!("  set <index> <byte>       - Overwrite a byte");
            println!("  len | show | hex | stats - Inspect the array");
            println!("  methods                  - List method names");
            println!("  release                  - Free the array");
            println!();
            println!("REPL Commands:");
            println!("  .help     - Show this help message");
            println!("  .clear    - Clear the screen");
            println!("  .options  - Show byte array options");
            println!("  .exit     - Exit the REPL");
            println!("  exit      - Exit the REPL");
            println!("  quit      - Exit the REPL");
        }
        ".clear" => {
            print!("\x1B[2J\x1B[1;1H");
        }
        ".options" => {
            let options = runtime.options();
            println!("initial capacity: {}", options.initial_capacity);
            println!("minimum growth:   {}", options.min_growth);
            match options.max_length {
                Some(max) => println!("maximum length:   {}", max),
                None => println!("maximum length:   unbounded"),
            }
        }
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}

/// Check whether every text literal in the input is closed.
///
/// Quotes inside comments do not count.
fn is_input_complete(input: &str) -> bool {
    let mut in_string = false;
    let mut in_comment = false;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }
        if in_comment {
            in_comment = c != '\n';
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '#' if !in_string => in_comment = true,
            _ => {}
        }
    }

    !in_string
}
