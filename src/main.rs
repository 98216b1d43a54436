use clap::Parser;
use ftag::application::{find_tagged, FindOptions, TagStore};
use ftag::cli::{format_find_report, format_tag_list, Cli, Commands};
use ftag::domain::{parse_tags, tag_names};
use ftag::error::FtagError;
use ftag::infrastructure::BackendKind;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), FtagError> {
    let backend = BackendKind::from_str(&cli.backend)?.resolve()?;
    let store = TagStore::new(backend);

    match cli.command {
        Commands::List { path } => {
            let tags = store.get_tags(&path)?;
            print!("{}", ensure_newline(format_tag_list(&tags)));
            Ok(())
        }
        Commands::Set { path, tags } => {
            let tags = parse_tags(tags)?;
            store.set_tags(&path, &tags)?;
            println!(
                "Set tags on {}: {}",
                path.display(),
                tag_names(&tags).join(", ")
            );
            Ok(())
        }
        Commands::Add { path, tags } => {
            let tags = parse_tags(tags)?;
            store.add_tags(&path, &tags)?;
            println!(
                "Added tags to {}: {}",
                path.display(),
                tag_names(&tags).join(", ")
            );
            Ok(())
        }
        Commands::Remove { path, tags } => {
            let tags = parse_tags(tags)?;
            store.remove_tags(&path, &tags)?;
            println!(
                "Removed tags from {}: {}",
                path.display(),
                tag_names(&tags).join(", ")
            );
            Ok(())
        }
        Commands::Clear { path } => {
            store.clear_tags(&path)?;
            println!("Cleared tags on {}", path.display());
            Ok(())
        }
        Commands::Find {
            tags,
            path,
            recursive,
        } => {
            let options = FindOptions {
                tags: parse_tags(tags)?,
                recursive,
            };
            let report = find_tagged(&store, &path, &options)?;
            print!("{}", ensure_newline(format_find_report(&report)));
            Ok(())
        }
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
