use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pkg_types::secret::SecretManifest;
use pkg_types::validate::validate_name;
use std::io::Read;
use tracing::info;

#[derive(Parser)]
#[command(name = "envsealctl", about = "CLI tool for env-to-Secret conversion")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an env file into a Secret manifest
    Convert {
        /// Env file to read, or '-' for stdin
        #[arg(long, short)]
        file: String,

        /// Secret name for the manifest metadata
        #[arg(long, default_value = "")]
        name: String,

        /// Namespace for the manifest metadata
        #[arg(long, default_value = "")]
        namespace: String,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Write the manifest to this path instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Parse an env file and report diagnostics without emitting a manifest
    Check {
        /// Env file to read, or '-' for stdin
        #[arg(long, short)]
        file: String,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            file,
            name,
            namespace,
            format,
            output,
        } => {
            let text = read_input(&file)?;
            let parsed = pkg_envfile::parse(&text);

            for d in &parsed.diagnostics {
                eprintln!("warning: line {}: {}", d.line, d.message);
            }

            let key_count = parsed.entries.len();
            let manifest = SecretManifest::build(parsed.entries, &name, &namespace);
            if let Err(e) = validate_name(&manifest.metadata.name) {
                eprintln!("warning: {e}");
            }

            let rendered = match format {
                Format::Json => manifest.to_pretty_json()?,
                Format::Yaml => manifest.to_yaml()?,
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, &rendered)
                        .with_context(|| format!("writing {path}"))?;
                    info!(
                        "Wrote secret {}/{} ({} keys) to {}",
                        manifest.metadata.namespace, manifest.metadata.name, key_count, path
                    );
                }
                None => println!("{rendered}"),
            }
        }
        Commands::Check { file } => {
            let text = read_input(&file)?;
            let parsed = pkg_envfile::parse(&text);

            for d in &parsed.diagnostics {
                println!("line {}: {}", d.line, d.message);
            }
            println!(
                "{} keys accepted, {} lines rejected",
                parsed.entries.len(),
                parsed.diagnostics.len()
            );

            if !parsed.diagnostics.is_empty() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
