//! Scripted assistant command.

use owo_colors::OwoColorize;

use adlens_core::Assistant;

use crate::cli::{AssistantArgs, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(args: AssistantArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let (store, _session) = util::load_data(global).await?;
    let campaigns = store.campaigns_snapshot();

    let question = args.question.join(" ");
    let reply = Assistant::new().reply(&question, &campaigns);

    if matches!(global.output, OutputFormat::Json | OutputFormat::JsonCompact) {
        let payload = serde_json::json!({
            "question": question,
            "reply": reply.text,
            "suggestions": reply.suggestions,
        });
        let out = output::render_single(&global.output, &payload, |_| String::new(), |_| {
            String::new()
        });
        output::print_output(&out, global.quiet);
        return Ok(());
    }

    if global.quiet {
        return Ok(());
    }

    println!("{}", reply.text);
    if !reply.suggestions.is_empty() {
        println!();
        let color = output::should_color(&global.color);
        let label = "You could also ask:";
        if color {
            println!("{}", label.dimmed());
        } else {
            println!("{label}");
        }
        for suggestion in &reply.suggestions {
            println!("  - {suggestion}");
        }
    }
    Ok(())
}
