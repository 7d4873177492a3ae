//! ---
//! ffl_section: "02-messaging-data-model"
//! ffl_subsection: "module"
//! ffl_type: "source"
//! ffl_scope: "code"
//! ffl_description: "Service bus request catalog and envelope types."
//! ffl_version: "v0.0.0-prealpha"
//! ffl_owner: "tbd"
//! ---
use serde_json::Value as JsonValue;

use crate::command::{Command, ReplyPolicy};
use crate::correlation::{CorrelationCounter, CorrelationId};
use crate::logging::log_request;
use crate::types::{CommandRecord, RequestDocument, Requestor, Service, ServiceRequest};

/// Builds request documents on behalf of one client.
///
/// Every document takes the next correlation identifier, including the
/// fire-and-forget commands. Inputs are not validated; the remote service
/// owns that.
#[derive(Debug)]
pub struct MessageCatalog {
    user_name: String,
    reply_to: Option<String>,
    correlation: CorrelationCounter,
}

impl MessageCatalog {
    /// Create a catalog for `user_name`. An empty `reply_to` counts as absent.
    pub fn new(user_name: impl Into<String>, reply_to: Option<&str>) -> Self {
        Self {
            user_name: user_name.into(),
            reply_to: reply_to.filter(|r| !r.is_empty()).map(str::to_owned),
            correlation: CorrelationCounter::new(),
        }
    }

    /// User the catalog issues requests for.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Configured reply address.
    pub fn reply_to(&self) -> Option<&str> {
        self.reply_to.as_deref()
    }

    /// Identifier of the last document built, `0` if none was built yet.
    pub fn last_correlation_id(&self) -> CorrelationId {
        self.correlation.last()
    }

    fn requestor(&self, policy: ReplyPolicy) -> Requestor {
        let reply_to = if policy.wants_reply() {
            self.reply_to.clone()
        } else {
            None
        };
        Requestor {
            reply_to,
            correlation_id: self.correlation.next(),
        }
    }

    fn template(&self, command: Command, params: Option<Vec<JsonValue>>) -> RequestDocument {
        let document = RequestDocument {
            service_request: ServiceRequest {
                requestor: self.requestor(command.reply_policy()),
                service: Service {
                    name: command.service(),
                    args: vec![CommandRecord {
                        cmd: command,
                        params,
                    }],
                },
            },
        };
        log_request(&document);
        document
    }

    fn user(&self) -> JsonValue {
        JsonValue::from(self.user_name.as_str())
    }

    fn task_and_user(&self, command: Command, task_name: &str) -> RequestDocument {
        self.template(command, Some(vec![task_name.into(), self.user()]))
    }

    /// Ask the binary service for an upload slot.
    pub fn bin_uploader(&self, object_name: Option<&str>) -> RequestDocument {
        self.template(Command::Uploader, Some(vec![self.user(), object_name.into()]))
    }

    /// Ask the binary service for an object.
    pub fn bin_downloader(&self, object_name: &str) -> RequestDocument {
        self.template(Command::Downloader, Some(vec![self.user(), object_name.into()]))
    }

    /// Register a user. The catalog's own user name is not involved.
    pub fn user_create(
        &self,
        username: &str,
        password: &str,
        organisation: &str,
    ) -> RequestDocument {
        self.template(
            Command::UserCreate,
            Some(vec![username.into(), password.into(), organisation.into()]),
        )
    }

    /// List the tasks this user takes part in.
    pub fn user_assignments(&self) -> RequestDocument {
        self.template(Command::UserAssignments, Some(vec![self.user()]))
    }

    /// List every task; the only command without parameters.
    pub fn task_listing(&self) -> RequestDocument {
        self.template(Command::TaskListing, None)
    }

    /// Create a task owned by this user.
    pub fn task_create(
        &self,
        task_name: &str,
        topology: &str,
        definition: JsonValue,
    ) -> RequestDocument {
        self.template(
            Command::TaskCreate,
            Some(vec![task_name.into(), self.user(), topology.into(), definition]),
        )
    }

    /// Replace a task's topology, definition and status.
    pub fn task_update(
        &self,
        task_name: &str,
        topology: &str,
        definition: JsonValue,
        status: &str,
    ) -> RequestDocument {
        self.template(
            Command::TaskUpdate,
            Some(vec![
                task_name.into(),
                self.user(),
                topology.into(),
                definition,
                status.into(),
            ]),
        )
    }

    /// Fetch task details.
    pub fn task_info(&self, task_name: &str) -> RequestDocument {
        self.task_and_user(Command::TaskInfo, task_name)
    }

    /// List a task's participants.
    pub fn task_assignments(&self, task_name: &str) -> RequestDocument {
        self.task_and_user(Command::TaskAssignments, task_name)
    }

    /// Join a task.
    pub fn task_join(&self, task_name: &str) -> RequestDocument {
        self.task_and_user(Command::TaskJoin, task_name)
    }

    /// Leave a task.
    pub fn task_quit(&self, task_name: &str) -> RequestDocument {
        self.task_and_user(Command::TaskQuit, task_name)
    }

    /// Start a task. Fire-and-forget; a missing model is sent as `null`.
    pub fn task_start(&self, task_name: &str, model: Option<JsonValue>) -> RequestDocument {
        self.template(
            Command::TaskStart,
            Some(vec![task_name.into(), self.user(), model.unwrap_or_default()]),
        )
    }

    /// Stop a task.
    pub fn task_stop(&self, task_name: &str) -> RequestDocument {
        self.task_and_user(Command::TaskStop, task_name)
    }

    /// Push a participant update. Fire-and-forget; missing values are sent as `null`.
    pub fn task_assignment_update(
        &self,
        task_name: &str,
        status: Option<&str>,
        model: Option<JsonValue>,
    ) -> RequestDocument {
        self.template(
            Command::TaskAssignmentUpdate,
            Some(vec![
                task_name.into(),
                self.user(),
                status.into(),
                model.unwrap_or_default(),
            ]),
        )
    }

    /// Fetch this participant's assignment.
    pub fn task_assignment_info(&self, task_name: &str) -> RequestDocument {
        self.task_and_user(Command::TaskAssignmentInfo, task_name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::command::ServiceName;

    fn alice() -> MessageCatalog {
        MessageCatalog::new("alice", Some("alice.replies"))
    }

    #[test]
    fn empty_reply_address_is_treated_as_absent() {
        let catalog = MessageCatalog::new("alice", Some(""));
        assert!(catalog.reply_to().is_none());
        assert!(catalog.task_info("T1").reply_to().is_none());
    }

    #[test]
    fn fire_and_forget_commands_drop_reply_address_but_keep_correlation() {
        let catalog = alice();
        let started = catalog.task_start("T1", None);
        assert!(started.reply_to().is_none());
        assert_eq!(started.correlation_id(), 1);

        let updated = catalog.task_assignment_update("T1", Some("ready"), None);
        assert!(updated.reply_to().is_none());
        assert_eq!(updated.correlation_id(), 2);

        let info = catalog.task_assignment_info("T1");
        assert_eq!(info.reply_to(), Some("alice.replies"));
        assert_eq!(info.correlation_id(), 3);
    }

    #[test]
    fn earlier_documents_are_not_touched_by_later_calls() {
        let catalog = alice();
        let first = catalog.task_join("T1");
        let snapshot = first.clone();
        let _ = catalog.task_quit("T1");
        let _ = catalog.task_start("T1", None);
        assert_eq!(first, snapshot);
        assert_eq!(first.correlation_id(), 1);
    }

    #[test]
    fn missing_optionals_become_null() {
        let catalog = alice();
        assert_eq!(
            catalog.task_start("T1", None).params(),
            Some(&[json!("T1"), json!("alice"), JsonValue::Null][..])
        );
        let update = catalog.task_assignment_update("T1", None, Some(json!({"w": [1, 2]})));
        assert_eq!(
            update.params(),
            Some(&[json!("T1"), json!("alice"), JsonValue::Null, json!({"w": [1, 2]})][..])
        );
        assert_eq!(
            catalog.bin_uploader(None).params(),
            Some(&[json!("alice"), JsonValue::Null][..])
        );
    }

    #[test]
    fn user_create_uses_supplied_identity() {
        let doc = alice().user_create("bob", "secret", "acme");
        assert_eq!(doc.service_name(), ServiceName::AccessManager);
        assert_eq!(doc.command(), Some(Command::UserCreate));
        assert_eq!(
            doc.params(),
            Some(&[json!("bob"), json!("secret"), json!("acme")][..])
        );
    }

    #[test]
    fn last_correlation_id_tracks_issued_documents() {
        let catalog = alice();
        assert_eq!(catalog.last_correlation_id(), 0);
        let doc = catalog.user_assignments();
        assert_eq!(catalog.last_correlation_id(), doc.correlation_id());
        assert_eq!(catalog.user_name(), "alice");
    }
}
