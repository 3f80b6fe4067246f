//! `taskboard` — replay one drag gesture on the sample board.
//!
//! Seeds the sample board, feeds a single drag start / drag end pair
//! through the engine and prints the resulting lists. Configuration via
//! CLI flags, environment variables, or config file
//! (`~/.config/taskboard/config.toml`).
//!
//! ```bash
//! # Move "Review code" to the end of "Done"
//! cargo run --bin taskboard -- --task task-2 --onto-list list-3 --dx 300
//!
//! # Drop "Submit report" onto the free-position list
//! cargo run --bin taskboard -- --task task-4 --onto-list list-1 \
//!     --dx -560 --dy 10 --element-box 640,60,160,40
//! ```

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use taskboard::config::{BoardConfig, CliArgs, OutputFormat};
use taskboard::engine::BoardController;
use taskboard::{render, seed};
use taskboard_model::{Delta, DropTarget, ListId, TaskId};

fn main() -> ExitCode {
    let cli = CliArgs::parse();

    let config = match BoardConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = init_logging(&config.log_level, config.log_file.as_deref());

    let board = match seed::sample_board(&config) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(error = %e, "failed to build sample board");
            eprintln!("Error building board: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut controller = BoardController::new(board);
    let task_id = TaskId::from(cli.task.as_str());
    if controller.on_drag_start(&task_id, cli.element_box).is_none() {
        eprintln!("Unknown task: {task_id}");
        return ExitCode::FAILURE;
    }

    let drop_target = match (cli.onto_list, cli.onto_task) {
        (Some(list), _) => Some(DropTarget::List(ListId::from(list))),
        (None, Some(task)) => Some(DropTarget::Task(TaskId::from(task))),
        (None, None) => None,
    };
    tracing::info!(
        task = %task_id,
        drop = ?drop_target,
        dx = cli.dx,
        dy = cli.dy,
        "replaying drag"
    );

    controller.on_drag_end(
        Some(Delta::new(cli.dx, cli.dy)),
        drop_target,
        cli.container_box,
    );
    if let Some(skip) = controller.last_skip() {
        tracing::info!(reason = %skip, "board unchanged");
    }

    match config.output {
        OutputFormat::Text => {
            if let Some(skip) = controller.last_skip() {
                println!("(no change: {skip})\n");
            }
            print!("{}", render::board_to_text(controller.board()));
        }
        OutputFormat::Json => match serde_json::to_string_pretty(controller.board()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error encoding board: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

/// Initialize logging.
///
/// With a log file, entries go through a non-blocking file writer and the
/// returned [`WorkerGuard`] must be held until shutdown so buffered entries
/// are flushed. Without one, logs go to stderr so stdout stays clean for
/// the rendered board.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let Some(log_path) = file_path else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .init();
        return None;
    };

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}
