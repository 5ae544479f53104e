use crate::api::client::ApiClient;
use crate::cli::commands::{AddArgs, Cli, Commands, ListArgs, UpdateArgs};
use crate::cli::output;
use crate::io::config_io;
use crate::model::task::{CompletedFilter, TaskDraft, TaskQuery};
use crate::ops::query;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let client = build_client(cli.url.as_deref())?;

    // The bare invocation (no subcommand) launches the TUI from main
    let Some(command) = cli.command else {
        return Ok(());
    };

    match command {
        Commands::List(args) => cmd_list(&client, args, json),
        Commands::Show(args) => cmd_show(&client, args.id, json),
        Commands::Add(args) => cmd_add(&client, args, json),
        Commands::Update(args) => cmd_update(&client, args, json),
        Commands::Done(args) => cmd_set_completed(&client, args.id, true, json),
        Commands::Undone(args) => cmd_set_completed(&client, args.id, false, json),
        Commands::Rm(args) => cmd_rm(&client, args.id, json),
    }
}

/// Build the API client, resolving the base URL from flag, environment
/// and config file (in that order).
pub fn build_client(url_flag: Option<&str>) -> Result<ApiClient, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(&cwd)?;
    let base_url = config_io::resolve_base_url(
        url_flag,
        std::env::var("TASKBOARD_URL").ok(),
        &config,
    );
    Ok(ApiClient::new(base_url))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(
    client: &ApiClient,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = client.list()?;
    let q = TaskQuery {
        title: args.title.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        completed: CompletedFilter::from_flag(args.completed),
    };
    let matches = query::filter_tasks(&tasks, &q);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::tasks_to_json(&matches))?
        );
    } else if matches.is_empty() {
        println!("no tasks");
    } else {
        for task in &matches {
            println!("{}", output::task_line(task));
        }
    }
    Ok(())
}

fn cmd_show(client: &ApiClient, id: u64, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let task = client.get(id)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::task_to_json(&task))?
        );
    } else {
        println!("{}", output::task_line(&task));
    }
    Ok(())
}

fn cmd_add(
    client: &ApiClient,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let draft = TaskDraft {
        title: args.title,
        description: args.description,
        completed: args.completed,
    };
    let task = client.create(&draft)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::task_to_json(&task))?
        );
    } else {
        println!("created #{}", task.id);
    }
    Ok(())
}

/// Update merges the given flags over the task's current fields, then
/// PUTs the full draft (the backend replaces all three fields).
fn cmd_update(
    client: &ApiClient,
    args: UpdateArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = client.get(args.id)?;
    let draft = TaskDraft {
        title: args.title.unwrap_or(current.title),
        description: args.description.unwrap_or(current.description),
        completed: args.completed.unwrap_or(current.completed),
    };
    client.update(args.id, &draft)?;

    if json {
        let updated = crate::model::task::Task {
            id: args.id,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output::task_to_json(&updated))?
        );
    } else {
        println!("updated #{}", args.id);
    }
    Ok(())
}

fn cmd_set_completed(
    client: &ApiClient,
    id: u64,
    completed: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = client.get(id)?;
    let draft = TaskDraft {
        title: current.title,
        description: current.description,
        completed,
    };
    client.update(id, &draft)?;

    if json {
        let updated = crate::model::task::Task {
            id,
            title: draft.title,
            description: draft.description,
            completed,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output::task_to_json(&updated))?
        );
    } else {
        println!(
            "#{} {}",
            id,
            if completed { "done" } else { "reopened" }
        );
    }
    Ok(())
}

fn cmd_rm(client: &ApiClient, id: u64, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    client.delete(id)?;
    if json {
        println!("{}", serde_json::json!({ "deleted": id }));
    } else {
        println!("deleted #{id}");
    }
    Ok(())
}
