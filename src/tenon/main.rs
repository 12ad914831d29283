mod args;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use std::process::exit;
use tenon::api::{CmdResult, ConfigAction, NewComponent};
use tenon::commands::ComponentUpdate;
use tenon::error::{Result, TenonError};
use tenon::grid::{ComponentFilter, Expansion};
use tenon::init::{initialize, TenonContext};
use tenon::model::ComponentStatus;
use tenon::view::ViewState;

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            exit(1);
        }
    };

    let mut ctx = initialize(&cwd);

    if let Err(e) = run(cli, &mut ctx) {
        eprintln!("{} {}", "Error:".red(), e);
        exit(1);
    }
}

fn run(cli: Cli, ctx: &mut TenonContext) -> Result<()> {
    let unit = cli.unit.as_deref();
    let data_dir = ctx.api.paths().data_dir();

    // No subcommand defaults to the grid listing.
    let command = cli.command.unwrap_or(Commands::List {
        status: None,
        complexity: None,
        material: None,
        search: None,
        sort: None,
        direction: None,
        expand_all: false,
    });

    match command {
        Commands::List {
            status,
            complexity,
            material,
            search,
            sort,
            direction,
            expand_all,
        } => {
            let filter = ComponentFilter {
                status,
                complexity,
                material,
                search,
            };

            let mut order = ctx.config.sort_order();
            if let Some(key) = sort {
                order.key = key;
            }
            if let Some(dir) = direction {
                order.direction = dir;
            }

            let expansion = if expand_all {
                Expansion::all(&ctx.api.components(unit)?)
            } else {
                ViewState::load(&data_dir)?.expansion()
            };

            let result = ctx.api.grid(unit, &filter, &order, &expansion)?;
            print::print_messages(&result.messages);
            print::print_grid(&result.grid_rows, &expansion, ctx.config.indent);
        }

        Commands::Expand { selectors } => {
            let expansion = toggle_view(ctx, unit, &selectors, true)?;
            let result = ctx
                .api
                .grid(unit, &ComponentFilter::default(), &ctx.config.sort_order(), &expansion)?;
            print::print_grid(&result.grid_rows, &expansion, ctx.config.indent);
        }

        Commands::Collapse { selectors } => {
            let expansion = toggle_view(ctx, unit, &selectors, false)?;
            let result = ctx
                .api
                .grid(unit, &ComponentFilter::default(), &ctx.config.sort_order(), &expansion)?;
            print::print_grid(&result.grid_rows, &expansion, ctx.config.indent);
        }

        Commands::Show { selectors } => {
            let result = ctx.api.show(unit, &selectors)?;
            print::print_messages(&result.messages);
            print::print_component_details(&result.detailed_components);
        }

        Commands::Status => {
            let result = ctx.api.counts(unit)?;
            print::print_messages(&result.messages);
            if let Some(counts) = &result.counts {
                print::print_counts(counts);
            }
        }

        Commands::Units => {
            let result = ctx.api.units()?;
            print::print_messages(&result.messages);
            print::print_units(&result.units);
        }

        Commands::Approve { selectors, note } => {
            let result =
                ctx.api
                    .review(unit, &selectors, ComponentStatus::Approved, note.as_deref())?;
            print::print_messages(&result.messages);
        }

        Commands::Discard { selectors, note } => {
            let result =
                ctx.api
                    .review(unit, &selectors, ComponentStatus::Discarded, note.as_deref())?;
            print::print_messages(&result.messages);
        }

        Commands::Unclear { selectors, note } => {
            let result =
                ctx.api
                    .review(unit, &selectors, ComponentStatus::Unclear, note.as_deref())?;
            print::print_messages(&result.messages);
        }

        Commands::Reopen { selectors } => {
            let result = ctx
                .api
                .review(unit, &selectors, ComponentStatus::ToReview, None)?;
            print::print_messages(&result.messages);
        }

        Commands::Update {
            selector,
            name,
            material,
            complexity,
            time,
            quantity,
            notes,
        } => {
            let update = ComponentUpdate {
                name,
                material,
                complexity,
                estimated_time: time,
                quantity,
                notes,
            };
            let result = ctx.api.update(unit, &selector, &update)?;
            print::print_messages(&result.messages);
        }

        Commands::Add {
            name,
            kind,
            material,
            complexity,
            time,
            quantity,
            parent,
        } => {
            let unit_id = unit
                .map(str::to_string)
                .ok_or_else(|| TenonError::Api("add requires --unit".to_string()))?;
            let result = ctx.api.add(NewComponent {
                unit_id,
                name,
                kind,
                material,
                complexity,
                estimated_time: time,
                quantity,
                parent,
            })?;
            print::print_messages(&result.messages);
        }

        Commands::Import { paths } => {
            let result = ctx.api.import(paths)?;
            print::print_messages(&result.messages);
        }

        Commands::Export => {
            let result = ctx.api.export(unit)?;
            print::print_messages(&result.messages);
        }

        Commands::Purge { selectors, yes } => {
            let result = ctx.api.purge(unit, &selectors, yes)?;
            print::print_messages(&result.messages);
        }

        Commands::Doctor => {
            let result = ctx.api.doctor()?;
            print::print_messages(&result.messages);
        }

        Commands::Config { key, value } => {
            let action = match (key, value) {
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
                (Some(k), None) => ConfigAction::ShowKey(k),
                (None, _) => ConfigAction::ShowAll,
            };
            let result = ctx.api.config(action)?;
            print::print_messages(&result.messages);
            if let Some(config) = &result.config {
                print::print_config(config);
            }
        }

        Commands::Init => {
            let result = ctx.api.init()?;
            print::print_messages(&result.messages);
        }
    }

    Ok(())
}

/// Resolve selectors to components and persist the new expansion state.
fn toggle_view(
    ctx: &TenonContext,
    unit: Option<&str>,
    selectors: &[String],
    expand: bool,
) -> Result<Expansion> {
    let resolved: CmdResult = ctx.api.show(unit, selectors)?;

    let data_dir = ctx.api.paths().data_dir();
    let mut expansion = ViewState::load(&data_dir)?.expansion();
    for component in &resolved.detailed_components {
        expansion = if expand {
            expansion.with_expanded(&component.id)
        } else {
            expansion.with_collapsed(&component.id)
        };
    }
    ViewState::from_expansion(&expansion).save(&data_dir)?;
    Ok(expansion)
}
