use clap::Parser;
use shuffile::cli::{
    execute_distribute, execute_flatten, execute_preview, execute_scan, execute_shuffle, Cli,
    Commands, ScanOptions, ShuffleOptions,
};
use shuffile::core::ShuffleError;
use shuffile::logging::init_logging;
use shuffile::DistributionConfig;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = init_logging(cli.verbose) {
        eprintln!("⚠️  {error}");
    }

    if let Err(error) = run(cli.command) {
        eprintln!("❌ エラー: {error:#}");
        if let Some(suggestion) = error
            .downcast_ref::<ShuffleError>()
            .and_then(|e| e.context().suggestion)
        {
            eprintln!("💡 {suggestion}");
        }
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Scan {
            target_directory,
            recursive,
            include_hidden,
            json,
        } => {
            execute_scan(ScanOptions {
                target_directory,
                recursive,
                include_hidden,
                json,
            })?;
        }
        Commands::Preview {
            target_directory,
            naming,
            recursive,
            include_hidden,
        } => {
            execute_preview(&target_directory, &naming, recursive, include_hidden)?;
        }
        Commands::Shuffle {
            target_directory,
            naming,
            recursive,
            per_folder,
            files_per_dir,
            dir_prefix,
            delete_old_dirs,
            seed,
            config,
            report,
            include_hidden,
            quiet,
        } => {
            execute_shuffle(ShuffleOptions {
                target_directory,
                naming,
                recursive,
                per_folder,
                files_per_dir,
                dir_prefix,
                delete_old_dirs,
                seed,
                config,
                report,
                include_hidden,
                quiet,
            })?;
        }
        Commands::Flatten {
            target_directory,
            delete_old_dirs,
            include_hidden,
            quiet,
        } => {
            execute_flatten(&target_directory, delete_old_dirs, include_hidden, quiet)?;
        }
        Commands::Distribute {
            target_directory,
            files_per_dir,
            dir_prefix,
            include_hidden,
            quiet,
        } => {
            let distribution = DistributionConfig::new(files_per_dir, dir_prefix);
            execute_distribute(&target_directory, &distribution, include_hidden, quiet)?;
        }
    }
    Ok(())
}
