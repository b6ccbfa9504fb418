use std::io::Read;
use std::str::FromStr;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use planboard::board::Board;
use planboard::cli::{BumpDirection, Cli, Command, SubAction};
use planboard::config::Config;
use planboard::domain::Group;
use planboard::drag::DropTarget;
use planboard::engine::{Direction, ItemPatch};
use planboard::stats;
use planboard::store::Flag;
use planstore::FileStore;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{} [y/N] ", prompt);
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let store_path = cli.store.unwrap_or(config.store_path);

    info!("planboard starting");

    let backend = FileStore::open(&store_path)?;
    let mut board = Board::open(&backend);

    match cli.command {
        Command::Show => {
            print_board(&mut board);
        }
        Command::Add { group, text } => {
            let id = board.add_item(group);
            if let Some(text) = text {
                board.update_item(
                    group,
                    &id,
                    ItemPatch {
                        text: Some(text),
                        ..Default::default()
                    },
                );
            }
            println!("{} Added item {} to {}", "✓".green(), id.cyan(), group.label());
        }
        Command::Edit {
            group,
            item_id,
            text,
            epic,
            clear_epic,
            domain,
            clear_domain,
            required,
            clear_required,
            optional,
            clear_optional,
        } => {
            let patch = ItemPatch {
                text,
                epic: optional_field(epic, clear_epic),
                domain: optional_field(domain, clear_domain),
                required_points: optional_field(required, clear_required),
                optional_points: optional_field(optional, clear_optional),
            };
            board.update_item(group, &item_id, patch);
            println!("{} Updated item {}", "✓".green(), item_id.cyan());
        }
        Command::Rm { group, item_id, yes } => {
            if yes || confirm(&format!("Delete item {}?", item_id))? {
                board.delete_item(group, &item_id);
                println!("{} Deleted item {}", "✓".green(), item_id);
            }
        }
        Command::Dup { group, item_id } => {
            board.duplicate_item(group, &item_id);
            println!("{} Duplicated item {}", "✓".green(), item_id.cyan());
        }
        Command::Bump {
            group,
            item_id,
            direction,
        } => {
            let direction = match direction {
                BumpDirection::Up => Direction::Up,
                BumpDirection::Down => Direction::Down,
            };
            board.reorder_item(group, &item_id, direction);
            println!("{} Reordered item {}", "✓".green(), item_id.cyan());
        }
        Command::Move { item_id, to } => {
            board.move_item(&item_id, to);
            println!("{} Moved item {} to {}", "✓".green(), item_id.cyan(), to.label());
        }
        Command::Sub { group, item_id, action } => match action {
            SubAction::Add { text } => {
                board.add_sub_item(group, &item_id, &text);
                println!("{} Added sub-item", "✓".green());
            }
            SubAction::Edit { sub_id, text } => {
                board.update_sub_item(group, &item_id, &sub_id, &text);
                println!("{} Updated sub-item {}", "✓".green(), sub_id.cyan());
            }
            SubAction::Rm { sub_id } => {
                board.remove_sub_item(group, &item_id, &sub_id);
                println!("{} Removed sub-item {}", "✓".green(), sub_id);
            }
        },
        Command::Velocity { value } => {
            board.set_velocity(value);
            println!("{} Velocity set to {}", "✓".green(), value);
        }
        Command::Sprint {
            sprint_id,
            multiplier,
            name,
        } => {
            if let Some(multiplier) = multiplier {
                board.set_sprint_multiplier(&sprint_id, multiplier);
            }
            if let Some(name) = name {
                board.rename_sprint(&sprint_id, &name);
            }
            println!("{} Updated sprint {}", "✓".green(), sprint_id.cyan());
        }
        Command::Stats => {
            print_stats(&mut board);
        }
        Command::Export => {
            println!("{}", board.export());
        }
        Command::Import { file, yes } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .context(format!("Failed to read import file: {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            if yes || confirm("Replace the current board with the imported document?")? {
                match board.import(&text) {
                    Ok(()) => println!("{} Imported document", "✓".green()),
                    Err(e) => {
                        eprintln!("{} {}", "✗".red(), e);
                        std::process::exit(1);
                    }
                }
            }
        }
        Command::Drag { from, onto } => {
            board.drag_start(&from);
            let target = match onto.as_deref() {
                None => DropTarget::Outside,
                Some(raw) => match Group::from_str(raw) {
                    Ok(group) => DropTarget::Group(group),
                    Err(_) => DropTarget::Item(raw.to_string()),
                },
            };
            if board.drag_end(target) {
                println!("{} Drop applied", "✓".green());
            } else {
                println!("Drop resolved to a no-op");
            }
        }
        Command::Flag { name, set } => match name {
            None => {
                for flag in [Flag::VelocityCollapsed, Flag::ShortcutsCollapsed, Flag::DarkMode] {
                    println!("{}: {}", flag.key(), board.flag(flag));
                }
            }
            Some(name) => {
                let flag = parse_flag(&name)?;
                if let Some(value) = set {
                    board.set_flag(flag, value);
                }
                println!("{}: {}", flag.key(), board.flag(flag));
            }
        },
    }

    Ok(())
}

/// Map set/clear CLI pairs onto patch field semantics
fn optional_field<T>(set: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        set.map(Some)
    }
}

fn parse_flag(name: &str) -> Result<Flag> {
    match name {
        "velocity-collapsed" => Ok(Flag::VelocityCollapsed),
        "shortcuts-collapsed" => Ok(Flag::ShortcutsCollapsed),
        "dark-mode" => Ok(Flag::DarkMode),
        _ => Err(eyre::eyre!("Unknown flag: {}", name)),
    }
}

fn print_board(board: &mut Board) {
    let doc = board.document().clone();
    for group in Group::ALL {
        let group_stats = stats::group_stats(&doc, group);
        println!(
            "{} ({} required / {} optional)",
            group.label().bold(),
            group_stats.required,
            group_stats.optional
        );
        for item in doc.group(group) {
            let mut line = format!("  [{}] {}", &item.id, item.text);
            if let Some(epic) = &item.epic {
                line.push_str(&format!(" {}", epic.dimmed()));
            }
            if let Some(points) = item.required_points {
                line.push_str(&format!(" {}", format!("{}p", points).yellow()));
            }
            if let Some(points) = item.optional_points {
                line.push_str(&format!(" {}", format!("(+{}p)", points).dimmed()));
            }
            if let Some(domain) = item.domain.clone() {
                let color = board.color_of(&domain);
                line.push_str(&format!(" {} {}", domain.cyan(), color.dimmed()));
            }
            println!("{}", line);
            for sub in &item.sub_items {
                println!("      - {}", sub.text);
            }
        }
        if doc.group(group).is_empty() {
            println!("  {}", "(empty)".dimmed());
        }
    }
}

fn print_stats(board: &mut Board) {
    let doc = board.document().clone();
    let capacity = stats::total_capacity(&doc.sprints, doc.velocity);
    let committed = stats::group_stats(&doc, Group::Committed);

    println!("{}", "Sprint schedule".bold());
    for sprint in &doc.sprints {
        println!("  {} {} ({}%)", sprint.id.dimmed(), sprint.name, sprint.multiplier);
    }
    println!("Velocity: {}", doc.velocity);
    println!("Total capacity: {}", capacity);
    println!(
        "Committed: {} required / {} optional ({}% of capacity, {} remaining)",
        committed.required,
        committed.optional,
        stats::committed_percent(&doc),
        stats::committed_remaining(&doc)
    );

    let breakdown = stats::domain_breakdown(&doc);
    if !breakdown.is_empty() {
        println!("{}", "Domain breakdown".bold());
        for share in breakdown {
            let color = board.color_of(&share.name);
            println!(
                "  {} {} {}p ({}%)",
                share.name.cyan(),
                color.dimmed(),
                share.points,
                share.percent
            );
        }
    }
}
