//! `rcpd` - CLI for recipedeck
//!
//! This binary provides the command-line interface for browsing and growing
//! a session's in-memory recipe collection.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{bail, Context};
use clap::Parser;

use recipedeck::cli::{
    AddCommand, Cli, Command, ConfigCommand, ListCommand, OutputFormat, ShowCommand, StatusCommand,
};
use recipedeck::{init_logging, Config, DetailView, Recipe, RecipeDraft, RecipeStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("could not load configuration")?;

    // Each invocation is one session: seed the store, run the command,
    // discard the store.
    let store = RecipeStore::from_config(&config);

    match cli.command {
        Command::List(list_cmd) => handle_list(&store, &config, &list_cmd),
        Command::Show(show_cmd) => handle_show(&store, &show_cmd),
        Command::Add(add_cmd) => handle_add(&store, &add_cmd),
        Command::Status(status_cmd) => handle_status(&store, &config, &status_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_list(store: &RecipeStore, config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let snapshot = store.snapshot();

    // A command-line limit overrides the configured one; 0 means unlimited.
    let limit = match cmd.limit {
        Some(0) => None,
        Some(n) => Some(n),
        None => config.list_limit(),
    };
    let shown: Vec<&Recipe> = match limit {
        Some(n) => snapshot.iter().take(n).collect(),
        None => snapshot.iter().collect(),
    };

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&shown)?),
        OutputFormat::Plain => {
            if shown.is_empty() {
                println!("No recipes.");
            }
            for recipe in &shown {
                println!("{}", recipe.summary());
            }
            if shown.len() < snapshot.len() {
                println!("({} of {} shown)", shown.len(), snapshot.len());
            }
        }
    }
    Ok(())
}

fn handle_show(store: &RecipeStore, cmd: &ShowCommand) -> anyhow::Result<()> {
    // A missing id is a display state, not an error.
    match DetailView::resolve(&store.snapshot(), cmd.id) {
        DetailView::Found(recipe) => match cmd.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recipe)?),
            OutputFormat::Plain => print_recipe(&recipe),
        },
        DetailView::NotFound(id) => match cmd.format {
            OutputFormat::Json => {
                let body = serde_json::json!({ "found": false, "id": id });
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            OutputFormat::Plain => println!("Recipe {id} not found."),
        },
    }
    Ok(())
}

fn handle_add(store: &RecipeStore, cmd: &AddCommand) -> anyhow::Result<()> {
    let draft = RecipeDraft::new(&cmd.title, &cmd.ingredients, &cmd.steps);
    if let Err(err) = draft.validate() {
        bail!("invalid recipe: {err}");
    }

    let recipe = store.add(&cmd.title, &cmd.ingredients, &cmd.steps);

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recipe)?),
        OutputFormat::Plain => {
            println!("Added recipe #{}:", recipe.id);
            print_recipe(&recipe);
        }
    }
    Ok(())
}

fn handle_status(store: &RecipeStore, config: &Config, cmd: &StatusCommand) -> anyhow::Result<()> {
    let stats = store.stats();

    if cmd.json {
        let status = serde_json::json!({
            "total_recipes": stats.total_recipes,
            "next_id": stats.next_id,
            "builtin_seeds": config.seed.builtin,
            "extra_seeds": config.seed.extra.len(),
            "config_path": Config::default_config_path(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("rcpd status");
        println!("-----------");
        println!("Recipes:       {}", stats.total_recipes);
        println!("Next id:       {}", stats.next_id);
        println!("Builtin seeds: {}", config.seed.builtin);
        println!("Extra seeds:   {}", config.seed.extra.len());
        println!("Config:        {}", Config::default_config_path().display());
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Seed]");
                println!("  Builtin recipes:  {}", config.seed.builtin);
                println!("  Extra recipes:    {}", config.seed.extra.len());
                for extra in &config.seed.extra {
                    println!("    - {}", extra.title);
                }
                println!();
                println!("[Output]");
                println!("  Default limit:    {}", config.output.default_limit);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!();
    println!("Ingredients: {}", recipe.ingredients);
    println!("Steps:       {}", recipe.steps);
}
