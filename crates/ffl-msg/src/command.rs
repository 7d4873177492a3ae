//! ---
//! ffl_section: "02-messaging-data-model"
//! ffl_subsection: "module"
//! ffl_type: "source"
//! ffl_scope: "code"
//! ffl_description: "Service bus request catalog and envelope types."
//! ffl_version: "v0.0.0-prealpha"
//! ffl_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Remote service addressed by a request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
pub enum ServiceName {
    /// Task and user management.
    AccessManager,
    /// Binary object storage.
    BinService,
}

/// Whether the remote service should answer a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyPolicy {
    /// The caller waits for a correlated reply; `replyTo` is attached when configured.
    ExpectReply,
    /// The caller does not wait for a reply; `replyTo` is never attached.
    FireAndForget,
}

impl ReplyPolicy {
    /// Returns `true` when the remote side is asked to reply.
    pub fn wants_reply(self) -> bool {
        matches!(self, ReplyPolicy::ExpectReply)
    }
}

/// Every command understood by the remote services.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// Request an upload slot for a binary object.
    Uploader,
    /// Request a download of a binary object.
    Downloader,
    /// Register a new user.
    UserCreate,
    /// List the tasks the user is assigned to.
    UserAssignments,
    /// List all tasks.
    TaskListing,
    /// Create a task.
    TaskCreate,
    /// Update a task definition and status.
    TaskUpdate,
    /// Fetch task details.
    TaskInfo,
    /// List the participants of a task.
    TaskAssignments,
    /// Join a task as a participant.
    TaskJoin,
    /// Leave a task.
    TaskQuit,
    /// Start a task, optionally distributing an initial model.
    TaskStart,
    /// Stop a task.
    TaskStop,
    /// Push a participant's status or model update.
    TaskAssignmentUpdate,
    /// Fetch the participant's assignment details.
    TaskAssignmentInfo,
}

impl Command {
    /// Wire name carried in the `cmd` field.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Service that handles this command.
    pub fn service(self) -> ServiceName {
        match self {
            Command::Uploader | Command::Downloader => ServiceName::BinService,
            _ => ServiceName::AccessManager,
        }
    }

    /// Reply policy the command is issued with.
    pub fn reply_policy(self) -> ReplyPolicy {
        match self {
            Command::TaskStart | Command::TaskAssignmentUpdate => ReplyPolicy::FireAndForget,
            _ => ReplyPolicy::ExpectReply,
        }
    }
}
