use clap::Parser;
use clap::error::ErrorKind;
use genesis_codegen::{GenerateOptions, Template, compile_to_file, embed_with};
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "genesis2cpp")]
#[command(about = "Embed a genesis.json file as a C++ string-literal table")]
struct Cli {
    /// The genesis.json file to convert to C++ source code
    #[arg(long)]
    genesis_json: Option<PathBuf>,

    /// The file to generate
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Read the genesis text from stdin; print the generated code to stdout
    /// unless --output-file is given
    #[arg(long)]
    stdin: bool,

    /// Print the generation result as JSON (stdin mode)
    #[arg(long)]
    json: bool,

    /// Namespace wrapping the generated code
    #[arg(long, default_value = "genesis")]
    namespace: String,

    /// Name of the generated literal table
    #[arg(long, default_value = "genesis_json_lines")]
    table_name: String,

    /// Name of the generated accessor function
    #[arg(long, default_value = "get_builtin_genesis_json_as_string")]
    accessor_name: String,
}

fn main() {
    // --help must exit 0 but a malformed invocation must exit 1, so the
    // clap error cannot be left to `Error::exit` (which uses 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let template = Template {
        namespace: cli.namespace,
        table_name: cli.table_name,
        accessor_name: cli.accessor_name,
        ..Template::default()
    };

    if cli.stdin {
        generate_stdin(cli.output_file.as_deref(), template, cli.json);
    } else {
        let Some(input) = cli.genesis_json else {
            eprintln!("Missing argument --genesis-json");
            std::process::exit(1);
        };
        let Some(output) = cli.output_file else {
            eprintln!("Missing argument --output-file");
            std::process::exit(1);
        };

        let options = GenerateOptions {
            source_name: None,
            template,
        };

        let start = Instant::now();
        match compile_to_file(&input, &output, &options) {
            Ok(result) => {
                print_generated(&output.display().to_string());
                print_summary(result.line_count, start.elapsed());
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn generate_stdin(output_file: Option<&std::path::Path>, template: Template, json_output: bool) {
    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("Error: cannot read stdin: {e}");
        std::process::exit(1);
    }

    let options = GenerateOptions {
        source_name: None,
        template,
    };
    let result = match embed_with(&source, &options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Some(path) = output_file {
        if let Err(e) = std::fs::write(path, &result.code) {
            eprintln!("Error: cannot write {}: {e}", path.display());
            std::process::exit(1);
        }
        print_generated(&path.display().to_string());
    } else if json_output {
        println!("{}", serde_json::to_string(&result).expect("result serializes"));
    } else {
        print!("{}", result.code);
        let _ = io::stdout().flush();
    }
}

fn print_generated(path: &str) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("  \x1b[32m✓\x1b[0m {}", path);
    } else {
        eprintln!("  ✓ {}", path);
    }
}

fn print_summary(count: usize, elapsed: std::time::Duration) {
    let lines_word = if count == 1 { "line" } else { "lines" };
    eprintln!("Embedded {} {} in {}", count, lines_word, format_duration(elapsed));
}

fn format_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
