mod init;
pub use init::cmd_init;

use std::io::IsTerminal;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::catalog_io;
use crate::io::progress_io;
use crate::model::questlog::Questlog;
use crate::ops::aggregate;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    match cli.command {
        // No subcommand → TUI, handled in main.rs
        None => Ok(()),
        // Init is handled in main.rs before directory discovery
        Some(Commands::Init(args)) => cmd_init(args),
        Some(cmd) => {
            let log = load_questlog(cli.dir.as_deref())?;
            match cmd {
                Commands::Init(_) => Ok(()),

                // Read commands
                Commands::List(args) => cmd_list(&log, args, json),
                Commands::Show(args) => cmd_show(&log, args, json),
                Commands::Stats(args) => cmd_stats(&log, args, json),
                Commands::Next => cmd_next(&log, json),

                // Write commands
                Commands::Check(args) => cmd_set_step(log, args, true),
                Commands::Uncheck(args) => cmd_set_step(log, args, false),
                Commands::Reset(args) => cmd_reset(log, args),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_questlog(dir: Option<&str>) -> Result<Questlog, Box<dyn std::error::Error>> {
    let start = match dir {
        Some(d) => std::fs::canonicalize(d)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", d, e))?,
        None => std::env::current_dir()?,
    };
    let root = catalog_io::discover_dir(&start)?;
    Ok(catalog_io::load_questlog(&root)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(log: &Questlog, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let quests: Vec<_> = match args.tab {
        Some(tab) => aggregate::visible_quests(&log.catalog, tab),
        None => log.catalog.iter().collect(),
    };

    if json {
        let out = QuestListJson {
            quests: quests
                .iter()
                .map(|q| QuestJson::new(q, aggregate::quest_progress(q, &log.progress)))
                .collect(),
        };
        return print_json(&out);
    }

    for quest in quests {
        let p = aggregate::quest_progress(quest, &log.progress);
        let mark = if p.is_done() { "*" } else { " " };
        println!(
            "{} {:<12} {} {}/{}  {} — {}",
            mark,
            quest.id,
            text_bar(p.completed, p.total, 8),
            p.completed,
            p.total,
            quest.npc,
            quest.location,
        );
    }
    Ok(())
}

fn cmd_show(log: &Questlog, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let quest = log
        .find_quest(&args.quest)
        .ok_or_else(|| format!("quest not found: {}", args.quest))?;
    let p = aggregate::quest_progress(quest, &log.progress);

    if json {
        let out = QuestDetailJson {
            quest: QuestJson::new(quest, p),
            steps: quest
                .steps
                .iter()
                .map(|s| StepJson::new(s, log.progress.is_complete(&s.id)))
                .collect(),
        };
        return print_json(&out);
    }

    println!("{} — {} ({})", quest.npc, quest.location, quest.category.label());
    println!("{}", quest.description);
    println!("{} {}/{} steps", text_bar(p.completed, p.total, 16), p.completed, p.total);
    println!();
    for step in &quest.steps {
        let mark = if log.progress.is_complete(&step.id) { "x" } else { " " };
        println!("  [{}] {}  {}", mark, step.id, step.title);
        if !step.description.is_empty() {
            println!("        {}", step.description);
        }
        if let Some(ref note) = step.note {
            println!("        note: {}", note);
        }
    }
    Ok(())
}

fn cmd_stats(log: &Questlog, args: StatsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let quests: Vec<_> = match args.tab {
        Some(tab) => aggregate::visible_quests(&log.catalog, tab),
        None => log.catalog.iter().collect(),
    };
    let stats = aggregate::aggregate_stats(&quests, &log.progress);

    if json {
        return print_json(&StatsJson::from(stats));
    }

    println!(
        "{}% overall  {}/{} quests  {}/{} steps",
        stats.percent,
        stats.completed_quests,
        stats.total_quests,
        stats.completed_steps,
        stats.total_steps,
    );
    Ok(())
}

fn cmd_next(log: &Questlog, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match aggregate::next_incomplete_step(&log.catalog, &log.progress) {
        Some(next) => {
            if json {
                print_json(&NextStepJson::new(&next))
            } else {
                println!("{}  {} — {}", next.step.id, next.step.title, next.quest.npc);
                Ok(())
            }
        }
        None => {
            if json {
                print_json(&serde_json::Value::Null)
            } else {
                println!("all DLC steps complete");
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_set_step(
    mut log: Questlog,
    args: StepArgs,
    value: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Stale ids are legal map keys, but flag the likely typo
    if log.find_step(&args.step).is_none() {
        eprintln!("warning: step '{}' is not in the catalog", args.step);
    }

    log.progress.set(&args.step, value);
    progress_io::save_progress(&log.root, &log.progress)?;

    match log.find_step(&args.step) {
        Some((quest, step)) => {
            let p = aggregate::quest_progress(quest, &log.progress);
            let mark = if value { "x" } else { " " };
            println!("[{}] {}  {} ({}/{})", mark, step.id, step.title, p.completed, p.total);
        }
        None => {
            println!("[{}] {}", if value { "x" } else { " " }, args.step);
        }
    }
    Ok(())
}

fn cmd_reset(mut log: Questlog, args: ResetArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes {
        if !std::io::stdin().is_terminal() {
            return Err("refusing to reset without --yes in a non-interactive session".into());
        }
        eprint!("clear all saved progress? [y/N] ");
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("aborted");
            return Ok(());
        }
    }

    log.progress.clear();
    progress_io::save_progress(&log.root, &log.progress)?;
    println!("progress cleared");
    Ok(())
}
