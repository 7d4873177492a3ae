//! ---
//! ffl_section: "02-messaging-data-model"
//! ffl_subsection: "module"
//! ffl_type: "source"
//! ffl_scope: "code"
//! ffl_description: "Service bus request catalog and envelope types."
//! ffl_version: "v0.0.0-prealpha"
//! ffl_owner: "tbd"
//! ---
use ffl_msg::MessageCatalog;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    // The aggregator creates and starts a task.
    let aggregator = MessageCatalog::new("aggregator", Some("aggregator.replies"));
    let create = aggregator.task_create("mnist", "STAR", json!({"quorum": 2}));
    let start = aggregator.task_start("mnist", Some(json!({"round": 0})));

    // A participant joins with its own catalog and correlation sequence.
    let participant = MessageCatalog::new("participant-1", Some("participant-1.replies"));
    let join = participant.task_join("mnist");
    let update = participant.task_assignment_update("mnist", Some("COMPLETE"), None);

    for document in [&create, &start, &join, &update] {
        println!(
            "id={} reply_to={:?} {}",
            document.correlation_id(),
            document.reply_to(),
            document.to_json()?
        );
    }
    Ok(())
}
