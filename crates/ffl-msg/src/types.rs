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
use serde_json::Value as JsonValue;

use crate::command::{Command, ServiceName};
use crate::correlation::CorrelationId;

/// Top level request handed to the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDocument {
    /// The only key of the wire document.
    #[serde(rename = "serviceRequest")]
    pub service_request: ServiceRequest,
}

/// Requestor and service blocks of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Who is asking and where to answer.
    pub requestor: Requestor,
    /// What is being asked.
    pub service: Service,
}

/// Identity block used by the remote side to route replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requestor {
    /// Reply address, present only for requests that expect an answer.
    #[serde(rename = "replyTo", default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// Identifier the transport matches replies against.
    #[serde(rename = "correlationID")]
    pub correlation_id: CorrelationId,
}

/// Service block naming the target service and its single command record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Target service.
    pub name: ServiceName,
    /// Command records; catalog documents carry exactly one.
    pub args: Vec<CommandRecord>,
}

/// A command and its positional parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Command name.
    pub cmd: Command,
    /// Positional parameters, omitted for commands that take none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<JsonValue>>,
}

impl RequestDocument {
    /// Correlation identifier of the request.
    pub fn correlation_id(&self) -> CorrelationId {
        self.service_request.requestor.correlation_id
    }

    /// Reply address attached to the request, if any.
    pub fn reply_to(&self) -> Option<&str> {
        self.service_request.requestor.reply_to.as_deref()
    }

    /// Service the request is addressed to.
    pub fn service_name(&self) -> ServiceName {
        self.service_request.service.name
    }

    /// Command carried in the first argument record.
    pub fn command(&self) -> Option<Command> {
        self.service_request.service.args.first().map(|r| r.cmd)
    }

    /// Parameters of the first argument record, if it has any.
    pub fn params(&self) -> Option<&[JsonValue]> {
        self.service_request
            .service
            .args
            .first()
            .and_then(|r| r.params.as_deref())
    }

    /// Convert into a generic JSON value for transports that work on maps.
    pub fn to_value(&self) -> crate::Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encode as compact JSON text.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON text.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
