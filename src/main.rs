use clap::Parser;
use indicatif::ProgressBar;
use inspect_photo_rust::{cli, config, error, grouper, locator, stats};
use cli::{Cli, Commands};
use config::Config;
use error::{InspectPhotoError, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { folder, pattern, names_only } => {
            let pattern = pattern.unwrap_or_else(|| config.pattern.clone());
            let files = locator::scan(&folder, &pattern)?;

            if names_only {
                for name in locator::strip_directory(&files) {
                    println!("{}", name);
                }
            } else {
                for path in &files {
                    println!("{}", path.display());
                }
            }
            println!("✔ {} files matched {}", files.len(), pattern);
        }

        Commands::Copy { folder, destination, pattern } => {
            println!("📸 inspect-photo - copy\n");
            let pattern = pattern.unwrap_or_else(|| config.pattern.clone());

            // the copy itself expects the destination to exist
            std::fs::create_dir_all(&destination)?;

            let pb = ProgressBar::new_spinner();
            pb.set_message("Copying...");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            let copied = locator::copy_all(&folder, &pattern, &destination)?;
            pb.finish_and_clear();

            println!("✔ {} files copied to {}", copied, destination.display());
        }

        Commands::Group { folder, pattern, output, rule } => {
            println!("📋 inspect-photo - rename plan\n");
            let pattern = pattern.unwrap_or_else(|| config.pattern.clone());

            // 1. Scan
            println!("[1/2] Scanning export folder...");
            let files = locator::scan(&folder, &pattern)?;
            println!("✔ {} files found\n", files.len());

            if files.is_empty() {
                return Err(InspectPhotoError::NoImagesFound(
                    folder.display().to_string(),
                ));
            }

            // 2. Group
            println!("[2/2] Grouping by inspection...");
            let rule = match rule {
                Some(s) => s.parse().map_err(InspectPhotoError::InvalidRule)?,
                None => config.designator_rule.clone(),
            };
            let names = locator::strip_directory(&files);
            let plan = grouper::sort_by_inspection(grouper::group(&names, &rule));
            println!("✔ {} inspections\n", plan.len());

            if cli.verbose {
                for (inspection, records) in &plan {
                    println!("inspection {}:", inspection);
                    for record in records {
                        println!(
                            "  {} -> {}",
                            record.original_filename,
                            record.rename_target()
                        );
                    }
                }
                println!();
            }

            let json = serde_json::to_string_pretty(&plan)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ Plan saved: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Stats { folder, pattern } => {
            let pattern = pattern.unwrap_or_else(|| config.pattern.clone());
            let files = locator::scan(&folder, &pattern)?;
            let stats = stats::stats(&files)?;

            println!("Statistics:");
            println!("  Files:       {}", stats.file_count);
            println!("  Inspections: {}", stats.inspection_count);
            println!("  Folder:      {}", stats.folder_path);
        }

        Commands::Config { set_pattern, set_rule, show } => {
            let mut config = config;

            if let Some(pattern) = set_pattern {
                config.set_pattern(pattern)?;
                println!("✔ Pattern updated");
            }

            if let Some(rule) = set_rule {
                let rule = rule.parse().map_err(InspectPhotoError::InvalidRule)?;
                config.set_rule(rule)?;
                println!("✔ Designator rule updated");
            }

            if show {
                println!("Configuration:");
                println!("  Pattern: {}", config.pattern);
                let letters: String = config
                    .designator_rule
                    .entries()
                    .iter()
                    .map(|d| d.letter())
                    .collect();
                println!("  Designator rule: {}", letters);
            }
        }
    }

    Ok(())
}
