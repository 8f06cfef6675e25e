//! Workflow execution command handler.

use super::{GenerateArgs, load_config};
use reelsmith::{ReelsmithResult, Services, WorkflowOutcome, WorkflowResult, credential_store};
use std::sync::Arc;
use tracing::{info, warn};

/// Run the workflow, print a summary, and write the bundle.
///
/// A failed run still writes whatever was produced, then returns the stage
/// error so the process exits non-zero.
pub async fn run_generate(args: GenerateArgs) -> ReelsmithResult<()> {
    let config = load_config(args.config.as_deref())?;
    let credentials = Arc::new(credential_store(args.keys.as_deref())?);
    let services = Services::from_config(&config, credentials)?;

    let length = args.length.unwrap_or(config.workflow.length);
    info!(length = %length, output = %args.output.display(), "Starting generation");

    let outcome = services.workflow.run(&args.prompt, length).await;
    print_summary(outcome.result());

    if outcome.result().is_empty() {
        warn!("Nothing was generated; no bundle written");
    } else {
        services
            .exporter
            .export_to_file(outcome.result(), &args.output)
            .await?;
        println!("Bundle written to {}", args.output.display());
    }

    match outcome {
        WorkflowOutcome::Complete(_) => {
            println!("Status: complete");
            Ok(())
        }
        WorkflowOutcome::Failed(failure) => {
            eprintln!("Status: failed during {}: {}", failure.stage, failure.error);
            Err(failure.error)
        }
    }
}

fn print_summary(result: &WorkflowResult) {
    let script = match &result.script {
        Some(script) => format!("{} words", script.split_whitespace().count()),
        None => "missing".to_string(),
    };
    println!("Script: {}", script);
    println!("Scenes: {}", result.scene_prompts.len());
    for (i, scene) in result.scene_prompts.iter().enumerate() {
        let image = if result.image_refs.get(i).is_some() {
            "image"
        } else {
            "no image"
        };
        println!("  {}. {} ({})", i + 1, scene.title(), image);
    }
    println!(
        "Audio: {}",
        if result.audio_ref.is_some() {
            "present"
        } else {
            "missing"
        }
    );
}
