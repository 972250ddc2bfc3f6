use anyhow::Result;
use clap::{Parser, Subcommand};

use allot::cli::{
    handle_categories_command, handle_log_command, handle_simulate_command, SimulateArgs,
};
use allot::config::{AllotPaths, Settings};

#[derive(Parser)]
#[command(
    name = "allot",
    version,
    about = "Divide a budget between categories with linked sliders",
    long_about = "allot-cli opens a popup with one slider per category. Pushing a \
                  slider past the remaining budget takes the difference from the \
                  other categories in proportion to their current share."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Run a scripted allotment session
    Simulate(SimulateArgs),

    /// List the configured categories
    Categories,

    /// Show recent activity
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Write the default configuration
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AllotPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            allot::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Simulate(args)) => {
            handle_simulate_command(&settings, &paths, args)?;
        }
        Some(Commands::Categories) => {
            handle_categories_command(&settings)?;
        }
        Some(Commands::Log { count }) => {
            handle_log_command(&settings, &paths, count)?;
        }
        Some(Commands::Init) => {
            println!("Initializing allot-cli at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Run 'allot categories' to see the configured categories.");
        }
        Some(Commands::Config) => {
            println!("allot-cli Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Activity log:     {}", paths.activity_log().display());
            println!();
            println!("Settings:");
            println!(
                "  Default total budget: {}",
                settings
                    .default_total_budget
                    .format_with_label(&settings.currency_label)
            );
            println!("  Categories:           {}", settings.categories.len());
            println!("  Slider step:          {}", settings.effective_slider_step());
            println!("  Activity log enabled: {}", settings.activity_log_enabled);
        }
    }

    Ok(())
}
