mod commands;
mod view;

use anyhow::Result;
use commands::Command;
use doc_analysis_client::{ClientConfig, SelectedFile, WorkflowController};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use view::TerminalNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = ClientConfig::from_env()?;
    log::info!("Using document service at {}", config.api_url());

    let controller = Arc::new(WorkflowController::new(config, Arc::new(TerminalNotifier)));

    println!("{}", view::render(&controller.snapshot().await));
    println!("Type `help` for a list of commands.");

    run(controller, BufReader::new(tokio::io::stdin())).await
}

async fn run<R>(controller: Arc<WorkflowController>, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut in_flight = JoinSet::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match commands::parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if !dispatch(&controller, &mut in_flight, command).await {
            break;
        }

        // Reap finished actions
        while in_flight.try_join_next().is_some() {}
    }

    // Started actions run to completion
    if !in_flight.is_empty() {
        println!("Waiting for {} running action(s)...", in_flight.len());
    }
    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            log::error!("Action task failed: {}", e);
        }
    }

    Ok(())
}

// Network actions go into `in_flight` so they overlap. Returns false on quit.
async fn dispatch(
    controller: &Arc<WorkflowController>,
    in_flight: &mut JoinSet<()>,
    command: Command,
) -> bool {
    match command {
        Command::Select { paths } => {
            let files = paths.into_iter().map(SelectedFile::new).collect();
            controller.select_files(files).await;
            print!("{}", view::render_upload(&controller.snapshot().await));
        }
        Command::Upload => {
            let controller = controller.clone();
            in_flight.spawn(async move {
                controller.upload().await;
                print!("\n{}", view::render_upload(&controller.snapshot().await));
            });
        }
        Command::Process => {
            let controller = controller.clone();
            in_flight.spawn(async move {
                controller.process_documents().await;
                print!("\n{}", view::render_process(&controller.snapshot().await));
            });
        }
        Command::Type { text } => {
            controller.set_query_text(&text.join(" ")).await;
        }
        Command::Ask { text } => {
            if !text.is_empty() {
                controller.set_query_text(&text.join(" ")).await;
            }
            let controller = controller.clone();
            in_flight.spawn(async move {
                controller.submit_query().await;
                print!("\n{}", view::render_query(&controller.snapshot().await));
            });
        }
        Command::Status => {
            println!("{}", view::render(&controller.snapshot().await));
        }
        Command::Quit => return false,
    }
    true
}
