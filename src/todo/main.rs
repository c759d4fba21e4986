use clap::Parser;
use colored::*;
use directories::UserDirs;
use std::io::{self, Write};
use std::path::Path;
use todo::api::{
    CmdMessage, EraseTarget, MessageLevel, Selection, StatusFilter, TodoApi, TodoFilter,
};
use todo::error::{Result, TodoError};
use todo::model::{Priority, Todo, TodoId};
use todo::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = TodoApi::new(init_store()?);

    match cli.command {
        Commands::Add {
            description,
            priority,
            file,
        } => handle_add(&mut api, &description, &priority, file),
        Commands::List {
            completed,
            pending,
            file,
        } => handle_list(&api, completed, pending, file),
        Commands::Complete { ids, all } => {
            let result = api.complete(&selection(ids, all))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Pending { ids, all } => {
            let result = api.pending(&selection(ids, all))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Modify { ids, all, priority } => {
            let result = api.modify(&selection(ids, all), &priority)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Erase {
            ids,
            all,
            completed,
            pending,
            force,
        } => handle_erase(&mut api, ids, all, completed, pending, force),
        Commands::Show { id } => handle_show(&api, id),
    }
}

/// Resolve the store document location. `TODO_HOME` redirects the store to
/// an arbitrary directory (used by the integration tests); real runs use
/// the user's home directory.
fn init_store() -> Result<FileStore> {
    if let Ok(home) = std::env::var("TODO_HOME") {
        return Ok(FileStore::in_home(Path::new(&home)));
    }
    let user_dirs = UserDirs::new()
        .ok_or_else(|| TodoError::Store("Could not determine home directory".to_string()))?;
    Ok(FileStore::in_home(user_dirs.home_dir()))
}

fn selection(ids: Vec<TodoId>, all: bool) -> Selection {
    if all {
        Selection::All
    } else {
        Selection::Ids(ids)
    }
}

fn handle_add(
    api: &mut TodoApi<FileStore>,
    description: &str,
    priority: &str,
    file: Option<String>,
) -> Result<()> {
    let result = api.add(description, priority, file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    api: &TodoApi<FileStore>,
    completed: bool,
    pending: bool,
    file: Option<String>,
) -> Result<()> {
    let status = if completed {
        StatusFilter::Completed
    } else if pending {
        StatusFilter::Pending
    } else {
        StatusFilter::All
    };
    let result = api.list(&TodoFilter {
        status,
        file_pattern: file,
    })?;
    print_todos(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &TodoApi<FileStore>, id: TodoId) -> Result<()> {
    let result = api.show(id)?;
    print_todo_detail(&result.listed[0]);
    Ok(())
}

fn handle_erase(
    api: &mut TodoApi<FileStore>,
    ids: Vec<TodoId>,
    all: bool,
    completed: bool,
    pending: bool,
    force: bool,
) -> Result<()> {
    let target = if all {
        EraseTarget::All
    } else if completed {
        EraseTarget::Completed
    } else if pending {
        EraseTarget::Pending
    } else if !ids.is_empty() {
        EraseTarget::Ids(ids)
    } else {
        println!(
            "{}",
            "Specify todo IDs or one of --all, --completed, --pending.".yellow()
        );
        return Ok(());
    };

    let result = api.erase(&target, force)?;
    if result.needs_confirmation {
        println!("This will erase the following todo(s):");
        for todo in &result.affected {
            println!("  #{} {}", todo.id, todo.description);
        }
        print!("Proceed? [y/N] ");
        io::stdout().flush().map_err(TodoError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(TodoError::Io)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Operation cancelled.".yellow());
            return Ok(());
        }

        let confirmed = api.erase(&target, true)?;
        print_messages(&confirmed.messages);
        return Ok(());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const FILE_WIDTH: usize = 20;

fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("No todos found.");
        return;
    }

    println!("Found {} todo(s):", todos.len());
    for todo in todos {
        let mark = if todo.completed {
            "✓".green().to_string()
        } else {
            " ".to_string()
        };
        let id_str = format!("{:>3}.", todo.id);
        let priority_plain = format!("{:<6}", todo.priority.as_str());

        let file_plain = truncate_to_width(todo.file.as_deref().unwrap_or(""), FILE_WIDTH);
        let file_padding = FILE_WIDTH.saturating_sub(file_plain.width());

        let fixed = 2 + id_str.width() + 2 + priority_plain.width() + 2 + FILE_WIDTH + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let desc = truncate_to_width(&todo.description, available);
        let desc_padding = available.saturating_sub(desc.width());

        let priority_colored = match todo.priority {
            Priority::High => priority_plain.red(),
            Priority::Medium => priority_plain.yellow(),
            Priority::Low => priority_plain.green(),
        };
        let desc_colored = if todo.completed {
            desc.dimmed().strikethrough()
        } else {
            desc.normal()
        };

        println!(
            "{} {} {}{}  {}  {}{}  {}",
            mark,
            id_str.bold(),
            desc_colored,
            " ".repeat(desc_padding),
            priority_colored,
            file_plain.dimmed(),
            " ".repeat(file_padding),
            format_time_ago(todo.created_at).dimmed()
        );
    }
    println!("Use {} for full details of one todo.", "todo show <id>".bold());
}

fn print_todo_detail(todo: &Todo) {
    println!(
        "{} {}",
        format!("#{}", todo.id).blue().bold(),
        todo.description.bold()
    );
    println!("--------------------------------");

    let status = if todo.completed {
        "completed".green()
    } else {
        "pending".yellow()
    };
    println!("Status:    {}", status);

    let priority = match todo.priority {
        Priority::High => todo.priority.as_str().red(),
        Priority::Medium => todo.priority.as_str().yellow(),
        Priority::Low => todo.priority.as_str().green(),
    };
    println!("Priority:  {}", priority);

    if let Some(file) = &todo.file {
        println!("File:      {}", file.blue().underline());
    }

    println!(
        "Created:   {}",
        todo.created_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(completed_at) = todo.completed_at {
        println!(
            "Completed: {}",
            completed_at.format("%Y-%m-%d %H:%M").to_string().green()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let time_str = timeago::Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
