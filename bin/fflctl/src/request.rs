//! ---
//! ffl_section: "05-external-interfaces"
//! ffl_subsection: "binary"
//! ffl_type: "source"
//! ffl_scope: "code"
//! ffl_description: "CLI printing service bus request documents."
//! ffl_version: "v0.0.0-prealpha"
//! ffl_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use ffl_msg::{MessageCatalog, RequestDocument};
use serde_json::Value as JsonValue;

/// One subcommand per catalog request.
#[derive(Debug, Subcommand)]
pub enum RequestCommand {
    /// Request an upload slot from the binary service.
    Upload {
        /// Object to upload; sent as null when omitted.
        object: Option<String>,
    },
    /// Request an object from the binary service.
    Download { object: String },
    /// Register a user.
    UserCreate {
        username: String,
        password: String,
        organisation: String,
    },
    /// List the tasks the user is assigned to.
    UserAssignments,
    /// List all tasks.
    TaskListing,
    /// Create a task.
    TaskCreate(TaskDefinition),
    /// Update a task.
    TaskUpdate {
        #[command(flatten)]
        definition: TaskDefinition,
        status: String,
    },
    /// Fetch task details.
    TaskInfo(TaskName),
    /// List a task's participants.
    TaskAssignments(TaskName),
    /// Join a task.
    TaskJoin(TaskName),
    /// Leave a task.
    TaskQuit(TaskName),
    /// Start a task (no reply expected).
    TaskStart {
        task: String,
        /// Initial model as JSON.
        #[arg(long, value_name = "JSON")]
        model: Option<String>,
    },
    /// Stop a task.
    TaskStop(TaskName),
    /// Push a participant status or model update (no reply expected).
    TaskAssignmentUpdate {
        task: String,
        #[arg(long)]
        status: Option<String>,
        /// Model update as JSON.
        #[arg(long, value_name = "JSON")]
        model: Option<String>,
    },
    /// Fetch the participant's assignment.
    TaskAssignmentInfo(TaskName),
}

#[derive(Debug, Args)]
pub struct TaskName {
    pub task: String,
}

#[derive(Debug, Args)]
pub struct TaskDefinition {
    pub task: String,
    pub topology: String,
    /// Task definition as JSON.
    #[arg(value_name = "JSON")]
    pub definition: String,
}

fn parse_json(field: &str, raw: &str) -> Result<JsonValue> {
    serde_json::from_str(raw).with_context(|| format!("{field} is not valid JSON: {raw}"))
}

fn parse_optional_json(field: &str, raw: Option<&str>) -> Result<Option<JsonValue>> {
    raw.map(|r| parse_json(field, r)).transpose()
}

impl RequestCommand {
    /// Build the request document for this command.
    pub fn build(&self, catalog: &MessageCatalog) -> Result<RequestDocument> {
        let document = match self {
            RequestCommand::Upload { object } => catalog.bin_uploader(object.as_deref()),
            RequestCommand::Download { object } => catalog.bin_downloader(object),
            RequestCommand::UserCreate {
                username,
                password,
                organisation,
            } => catalog.user_create(username, password, organisation),
            RequestCommand::UserAssignments => catalog.user_assignments(),
            RequestCommand::TaskListing => catalog.task_listing(),
            RequestCommand::TaskCreate(def) => catalog.task_create(
                &def.task,
                &def.topology,
                parse_json("definition", &def.definition)?,
            ),
            RequestCommand::TaskUpdate { definition, status } => catalog.task_update(
                &definition.task,
                &definition.topology,
                parse_json("definition", &definition.definition)?,
                status,
            ),
            RequestCommand::TaskInfo(t) => catalog.task_info(&t.task),
            RequestCommand::TaskAssignments(t) => catalog.task_assignments(&t.task),
            RequestCommand::TaskJoin(t) => catalog.task_join(&t.task),
            RequestCommand::TaskQuit(t) => catalog.task_quit(&t.task),
            RequestCommand::TaskStart { task, model } => {
                catalog.task_start(task, parse_optional_json("model", model.as_deref())?)
            }
            RequestCommand::TaskStop(t) => catalog.task_stop(&t.task),
            RequestCommand::TaskAssignmentUpdate {
                task,
                status,
                model,
            } => catalog.task_assignment_update(
                task,
                status.as_deref(),
                parse_optional_json("model", model.as_deref())?,
            ),
            RequestCommand::TaskAssignmentInfo(t) => catalog.task_assignment_info(&t.task),
        };
        Ok(document)
    }
}
