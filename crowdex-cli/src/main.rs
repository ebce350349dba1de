use clap::{Parser, Subcommand};
use crowdex::{QuoteStyle, forward_convert, locales, reverse_convert};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a vendor translation export into the generated Dart catalog.
    Forward {
        /// The vendor zip export to read
        #[arg(short, long, default_value = "translations.zip")]
        archive: String,

        /// The generated Dart file to write
        #[arg(short, long, default_value = "../lib/languages/crowdin.dart")]
        output: String,

        /// String literal style: `single` or `double`
        #[arg(short, long, default_value = "single")]
        style: String,
    },

    /// Split the generated Dart catalog back into per-locale JSON files and zip them.
    Reverse {
        /// The generated Dart file to read
        #[arg(short, long, default_value = "../lib/languages/crowdin.dart")]
        input: String,

        /// Directory for the uncompressed locale tree
        #[arg(short, long, default_value = "saturn")]
        output_dir: String,

        /// Path of the zip written from the locale tree
        #[arg(short, long, default_value = "saturn.zip")]
        zip: String,

        /// Keep the uncompressed locale tree next to the zip
        #[arg(long)]
        keep_tree: bool,
    },

    /// Print the vendor → app locale mapping table.
    Locales,
}

fn main() {
    let args = Args::parse();

    match args.commands {
        Commands::Forward {
            archive,
            output,
            style,
        } => {
            let style: QuoteStyle = match style.parse() {
                Ok(style) => style,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            match forward_convert(&archive, &output, style) {
                Ok(catalog) => {
                    println!("Wrote {} locales to {}", catalog.len(), output);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Reverse {
            input,
            output_dir,
            zip,
            keep_tree,
        } => match reverse_convert(&input, &output_dir, &zip, keep_tree) {
            Ok(catalog) => {
                println!("Wrote {} locales to {}", catalog.len(), zip);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Locales => {
            for (vendor, app) in locales::vendor_locales() {
                println!("{} -> {}", vendor, app);
            }
        }
    }
}
