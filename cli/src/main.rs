//! ddldom CLI - document tree conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use ddldom::dom::meta::preload_all;
use ddldom::{
    collect_resources, DdlDom, DdlOptions, JsonFormat, LineEnding, Meta, NodeKind, TreeStats,
};

#[derive(Parser)]
#[command(name = "ddldom")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert JSON document trees to DDL and inspect node types", long_about = None)]
struct Cli {
    /// Input JSON file (converted to DDL on stdout)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Skip invalid properties and elements instead of failing
    #[arg(long, global = true)]
    lenient: bool,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON tree to DDL
    Ddl {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Spaces per nesting level
        #[arg(long, default_value = "2")]
        indent: usize,

        /// Comment written before the document
        #[arg(long, env = "DDLDOM_HEADER")]
        header: Option<String>,

        /// Write empty collection blocks
        #[arg(long)]
        empty_collections: bool,

        /// Use CRLF line endings
        #[arg(long)]
        crlf: bool,
    },

    /// Normalize a JSON tree (import, then export)
    Json {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the property descriptors of a node type (all types if omitted)
    Meta {
        /// Type name or key (e.g. "Paragraph", "embedded_file")
        #[arg(value_name = "TYPE")]
        name: Option<String>,

        /// Output descriptors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show tree statistics and referenced resources
    Stats {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let lenient = cli.lenient;
    let result = match cli.command {
        Some(Commands::Ddl {
            input,
            output,
            indent,
            header,
            empty_collections,
            crlf,
        }) => {
            let mut options = DdlOptions::new()
                .with_indent(indent)
                .with_empty_collections(empty_collections);
            if let Some(header) = header {
                options = options.with_header(header);
            }
            if crlf {
                options = options.with_line_ending(LineEnding::CrLf);
            }
            cmd_ddl(&input, output.as_deref(), options, lenient)
        }
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact, lenient),
        Some(Commands::Meta { name, json }) => cmd_meta(name.as_deref(), json),
        Some(Commands::Stats { input }) => cmd_stats(&input, lenient),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_ddl(&input, None, DdlOptions::default(), lenient)
            } else {
                println!("{}", "Usage: ddldom <FILE.json>".yellow());
                println!("       ddldom --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn loader(lenient: bool) -> DdlDom {
    if lenient {
        DdlDom::new().lenient()
    } else {
        DdlDom::new()
    }
}

fn cmd_ddl(
    input: &Path,
    output: Option<&Path>,
    options: DdlOptions,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = loader(lenient).load(input)?;

    if let Some(path) = output {
        ddldom::write_ddl_file(&tree.root, path, &options)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", ddldom::to_ddl(&tree.root, &options)?);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = loader(lenient).load(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = tree.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_meta(name: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let metas = match name {
        Some(name) => {
            let kind =
                NodeKind::from_name(name).ok_or_else(|| format!("Unknown node type: {}", name))?;
            vec![Meta::for_kind(kind)?]
        }
        None => preload_all()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&metas)?);
        return Ok(());
    }

    for (i, meta) in metas.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_meta(meta);
    }

    Ok(())
}

fn print_meta(meta: &Meta) {
    println!(
        "{} {}",
        meta.type_name().cyan().bold(),
        format!("\\{}", meta.keyword()).dimmed()
    );
    println!("{}", "─".repeat(40).dimmed());

    if meta.is_collection() {
        let kinds: Vec<&str> = meta.element_kinds().iter().map(|k| k.name()).collect();
        println!("{}: {}", "Elements".bold(), kinds.join(", "));
    }

    if meta.properties().is_empty() {
        println!("{}", "(no properties)".dimmed());
    }

    for property in meta.properties() {
        let value_type = match property.child_kind {
            Some(kind) => kind.name().to_string(),
            None => property.value_type.name().to_string(),
        };
        let mut flags = Vec::new();
        if property.serializable {
            flags.push("attribute");
        }
        if property.can_add {
            flags.push("add");
        }
        if property.can_remove {
            flags.push("remove");
        }
        println!(
            "  {:<14} {:<20} {:<16} {}",
            property.name.bold(),
            property.keyword,
            value_type,
            flags.join(",").dimmed()
        );
    }
}

fn cmd_stats(input: &Path, lenient: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tree = loader(lenient).load(input)?;
    let stats: TreeStats = tree.stats();

    println!("{}", "Tree Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Root".bold(), tree.root.type_name());
    println!("{}: {}", "Nodes".bold(), stats.node_count);
    println!("{}: {}", "Max depth".bold(), stats.max_depth);
    println!("{}: {}", "Set properties".bold(), stats.set_property_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    for (name, count) in &stats.counts {
        println!("  {} {}: {}", "├─".dimmed(), name, count);
    }

    let resources = collect_resources(&tree.root);
    if !resources.is_empty() {
        println!();
        println!("{}", "Resources".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for resource in &resources {
            println!(
                "  {:<10} {} {}",
                resource.kind.to_string().dimmed(),
                resource.name,
                format!("({})", resource.path).dimmed()
            );
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "ddldom".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document tree to DDL conversion tool");
    println!();
    println!("License: MIT");
}
