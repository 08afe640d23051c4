use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use duckyscript::{
    CompileOptions, CompiledStream, Compiler, Diagnostic, codegen::compiler::DEFAULT_MAX_DELAY_MS,
};
use log::info;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

const EXAMPLE_PAYLOAD: &str = r#"DELAY 2000
GUI r
DELAY 400
STRING powershell -NoP -Exec Bypass -C "Start-Process cmd"
ENTER
DELAY 1500
STRING whoami
ENTER
DELAY 800
STRING notepad
ENTER
DELAY 600
STRING Hallo vom Pico W BadUSB!
ENTER
"#;

#[derive(Parser)]
#[command(name = "duckyc", version, about = "DuckyScript to HID keyboard report compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a script into a payload
    Compile {
        /// the script to compile
        #[arg(short, long)]
        source: PathBuf,
        /// where to write the payload, `-` for stdout; defaults to the source with a `.dd` or `.hex` extension
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Raw)]
        format: OutputFormat,
        /// fail lines with unknown keys instead of skipping them
        #[arg(long)]
        strict: bool,
        /// longest DELAY in milliseconds
        #[arg(long, default_value_t = DEFAULT_MAX_DELAY_MS)]
        max_delay_ms: u32,
    },
    /// Compile without writing anything, failing if any line has an error
    Check {
        /// the script to check
        #[arg(short, long)]
        source: PathBuf,
        /// fail lines with unknown keys instead of skipping them
        #[arg(long)]
        strict: bool,
        /// longest DELAY in milliseconds
        #[arg(long, default_value_t = DEFAULT_MAX_DELAY_MS)]
        max_delay_ms: u32,
    },
    /// Print an example script
    Example,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Raw 8-byte reports, as read by the device
    Raw,
    /// One report per line as hex digits
    Hex,
}

impl OutputFormat {
    const fn extension(self) -> &'static str {
        match self {
            OutputFormat::Raw => "dd",
            OutputFormat::Hex => "hex",
        }
    }

    fn encode(self, stream: CompiledStream) -> Vec<u8> {
        match self {
            OutputFormat::Raw => stream.into_bytes(),
            OutputFormat::Hex => stream.to_hex_lines().into_bytes(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    match args.command {
        Commands::Compile {
            source,
            output,
            format,
            strict,
            max_delay_ms,
        } => {
            let options = CompileOptions::new()
                .strict(strict)
                .max_delay_ms(max_delay_ms);
            let (stream, diagnostics) = compile_file(&source, options)?;
            print_diagnostics(&diagnostics);

            let output = output.unwrap_or_else(|| source.with_extension(format.extension()));
            let (len, report_count) = (stream.len(), stream.report_count());
            let encoded = format.encode(stream);
            if output == Path::new("-") {
                io::stdout()
                    .lock()
                    .write_all(&encoded)
                    .context("couldn't write payload to stdout")?;
            } else {
                fs::write(&output, &encoded)
                    .with_context(|| format!("couldn't write {}", output.display()))?;
                println!(
                    "→ Wrote {len} bytes ({report_count} reports) to {}",
                    output.display()
                );
            }
        }
        Commands::Check {
            source,
            strict,
            max_delay_ms,
        } => {
            let options = CompileOptions::new()
                .strict(strict)
                .max_delay_ms(max_delay_ms);
            let (stream, diagnostics) = compile_file(&source, options)?;
            print_diagnostics(&diagnostics);
            if !diagnostics.is_empty() {
                bail!("{} line(s) failed to compile", diagnostics.len());
            }
            println!(
                "→ {} compiles to {} bytes ({} reports)",
                source.display(),
                stream.len(),
                stream.report_count()
            );
        }
        Commands::Example => print!("{EXAMPLE_PAYLOAD}"),
    }
    Ok(())
}

fn compile_file(
    source: &Path,
    options: CompileOptions,
) -> anyhow::Result<(CompiledStream, Vec<Diagnostic>)> {
    let script = fs::read_to_string(source)
        .with_context(|| format!("couldn't read {}", source.display()))?;
    if script.trim().is_empty() {
        bail!("nothing to compile: {} is empty", source.display());
    }

    info!("compiling {} with {options:?}", source.display());
    let compiler = Compiler::with_options(options);
    Ok(compiler.compile(&script))
}

fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("warning: {diagnostic}");
    }
}
