//! Data models for SyncFlow entities (projects, sessions, participants,
//! devices, tokens).
//!
//! All types here are immutable value objects. The SyncFlow wire format uses
//! camelCase field names; internally everything is snake_case, with the
//! translation applied at the serde boundary via `rename_all`. Optional
//! outbound fields are omitted from the payload entirely; optional inbound
//! fields parse as `None` when absent.

use crate::format::{to_json, to_text_table, Formattable, FormattingError, OutputFormat, TextRecordProducer};
use serde::{Deserialize, Serialize};

fn display_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Outbound request payloads
// ---------------------------------------------------------------------------

/// Payload for `POST /projects/{id}/create-session`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Seconds an empty room is kept alive before the server closes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_recording: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_groups: Option<Vec<String>>,
}

/// Payload for `POST /projects/{id}/devices/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceRequest {
    /// The name of the device
    pub name: String,
    /// The group of the device
    pub group: String,
    /// Comments about the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// LiveKit-style grant flags attached to a session token request. All flags
/// are optional; absent flags are left to the server's defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrants {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_publish: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_subscribe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_publish_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_publish_sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_update_own_metadata: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_create: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_join: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_record: Option<bool>,
}

/// Payload for `POST /projects/{id}/sessions/{sid}/token`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub identity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_grants: Option<VideoGrants>,
}

// ---------------------------------------------------------------------------
// Inbound response payloads (read-only views of server state)
// ---------------------------------------------------------------------------

/// A session as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSessionResponse {
    pub id: String,
    pub name: String,
    pub started_at: i64,
    #[serde(default)]
    pub comments: Option<String>,
    pub empty_timeout: i64,
    pub max_participants: i64,
    pub livekit_room_name: String,
    pub project_id: String,
    pub status: String,
    pub num_participants: i64,
    pub num_recordings: i64,
    pub duration: i64,
}

/// A media track owned by a session participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantTrackResponse {
    pub id: String,
    pub sid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub participant_id: String,
}

/// A participant record nested inside a session document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionParticipantResponse {
    pub id: String,
    pub identity: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub joined_at: Option<i64>,
    #[serde(default)]
    pub left_at: Option<i64>,
    pub session_id: String,
    #[serde(default)]
    pub tracks: Vec<ParticipantTrackResponse>,
}

/// A recording/export job attached to a session track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEgressResponse {
    pub id: String,
    pub track_id: String,
    pub egress_id: String,
    pub started_at: i64,
    pub egress_type: String,
    pub status: String,
    #[serde(default)]
    pub destination: Option<String>,
    pub room_name: String,
    pub session_id: String,
}

/// Project metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub livekit_server_url: String,
    pub storage_type: String,
    pub bucket_name: String,
    pub endpoint: String,
    #[serde(default)]
    pub last_updated: Option<i64>,
}

/// Aggregated project counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub num_sessions: i64,
    pub num_active_sessions: i64,
    pub num_devices: i64,
    pub num_recordings: i64,
}

/// A device registered with the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub id: String,
    pub name: String,
    pub group: String,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub registered_at: Option<i64>,
    pub project_id: String,
}

/// A per-session participant access token minted by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub identity: String,
    pub livekit_server_url: String,
}

/// A live participant as reported by the media backend. The upstream schema
/// for permissions and track blobs is not normalized; those stay opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInfo {
    pub sid: String,
    pub identity: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub joined_at: Option<i64>,
    #[serde(default)]
    pub is_publisher: Option<bool>,
    #[serde(default)]
    pub permission: Option<serde_json::Value>,
    #[serde(default)]
    pub tracks: Vec<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Text-table output
// ---------------------------------------------------------------------------

impl TextRecordProducer for ProjectSessionResponse {
    fn text_header() -> Vec<&'static str> {
        vec![
            "ID",
            "NAME",
            "STATUS",
            "ROOM",
            "PARTICIPANTS",
            "RECORDINGS",
            "DURATION",
        ]
    }

    fn as_text_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            self.name.clone(),
            self.status.clone(),
            self.livekit_room_name.clone(),
            self.num_participants.to_string(),
            self.num_recordings.to_string(),
            self.duration.to_string(),
        ]]
    }
}

impl TextRecordProducer for SessionParticipantResponse {
    fn text_header() -> Vec<&'static str> {
        vec!["ID", "IDENTITY", "NAME", "JOINED", "LEFT", "TRACKS"]
    }

    fn as_text_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            self.identity.clone(),
            display_opt(&self.name),
            self.joined_at.map(|t| t.to_string()).unwrap_or_default(),
            self.left_at.map(|t| t.to_string()).unwrap_or_default(),
            self.tracks.len().to_string(),
        ]]
    }
}

impl TextRecordProducer for ParticipantTrackResponse {
    fn text_header() -> Vec<&'static str> {
        vec!["ID", "SID", "KIND", "SOURCE"]
    }

    fn as_text_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            self.sid.clone(),
            display_opt(&self.kind),
            display_opt(&self.source),
        ]]
    }
}

impl TextRecordProducer for SessionEgressResponse {
    fn text_header() -> Vec<&'static str> {
        vec!["ID", "EGRESS", "TYPE", "STATUS", "ROOM"]
    }

    fn as_text_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            self.egress_id.clone(),
            self.egress_type.clone(),
            self.status.clone(),
            self.room_name.clone(),
        ]]
    }
}

impl TextRecordProducer for ProjectInfo {
    fn text_header() -> Vec<&'static str> {
        vec!["ID", "NAME", "LIVEKIT", "STORAGE", "BUCKET"]
    }

    fn as_text_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            self.name.clone(),
            self.livekit_server_url.clone(),
            self.storage_type.clone(),
            self.bucket_name.clone(),
        ]]
    }
}

impl TextRecordProducer for ProjectSummary {
    fn text_header() -> Vec<&'static str> {
        vec!["SESSIONS", "ACTIVE", "DEVICES", "RECORDINGS"]
    }

    fn as_text_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.num_sessions.to_string(),
            self.num_active_sessions.to_string(),
            self.num_devices.to_string(),
            self.num_recordings.to_string(),
        ]]
    }
}

impl TextRecordProducer for DeviceResponse {
    fn text_header() -> Vec<&'static str> {
        vec!["ID", "NAME", "GROUP", "COMMENTS"]
    }

    fn as_text_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            self.name.clone(),
            self.group.clone(),
            display_opt(&self.comments),
        ]]
    }
}

impl TextRecordProducer for TokenResponse {
    fn text_header() -> Vec<&'static str> {
        vec!["IDENTITY", "LIVEKIT", "TOKEN"]
    }

    fn as_text_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.identity.clone(),
            self.livekit_server_url.clone(),
            self.token.clone(),
        ]]
    }
}

impl TextRecordProducer for ParticipantInfo {
    fn text_header() -> Vec<&'static str> {
        vec!["SID", "IDENTITY", "NAME", "STATE", "TRACKS"]
    }

    fn as_text_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.sid.clone(),
            self.identity.clone(),
            display_opt(&self.name),
            display_opt(&self.state),
            self.tracks.len().to_string(),
        ]]
    }
}

macro_rules! impl_formattable {
    ($($model:ty),+ $(,)?) => {
        $(
            impl Formattable for $model {
                fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
                    match f {
                        OutputFormat::Json(options) => to_json(self, options),
                        OutputFormat::Text => Ok(to_text_table(
                            &<$model as TextRecordProducer>::text_header(),
                            &self.as_text_records(),
                        )),
                    }
                }
            }
        )+
    };
}

impl_formattable!(
    ProjectSessionResponse,
    SessionParticipantResponse,
    ParticipantTrackResponse,
    SessionEgressResponse,
    ProjectInfo,
    ProjectSummary,
    DeviceResponse,
    TokenResponse,
    ParticipantInfo,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_response_round_trip() {
        let raw = json!({
            "id": "s1",
            "name": "Demo",
            "startedAt": 0,
            "comments": "",
            "emptyTimeout": 300,
            "maxParticipants": 10,
            "livekitRoomName": "r1",
            "projectId": "p1",
            "status": "active",
            "numParticipants": 0,
            "numRecordings": 0,
            "duration": 0
        });

        let parsed: ProjectSessionResponse = serde_json::from_value(raw).unwrap();
        let expected = ProjectSessionResponse {
            id: "s1".to_string(),
            name: "Demo".to_string(),
            started_at: 0,
            comments: Some(String::new()),
            empty_timeout: 300,
            max_participants: 10,
            livekit_room_name: "r1".to_string(),
            project_id: "p1".to_string(),
            status: "active".to_string(),
            num_participants: 0,
            num_recordings: 0,
            duration: 0,
        };
        assert_eq!(parsed, expected);
    }

    #[test]
    fn device_response_missing_comments_parses_as_none() {
        let raw = json!({
            "id": "d1",
            "name": "camera-1",
            "group": "lab",
            "projectId": "p1"
        });

        let parsed: DeviceResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.comments, None);
        assert_eq!(parsed.registered_at, None);
        assert_eq!(parsed.group, "lab");
    }

    #[test]
    fn register_device_request_serializes_camel_case() {
        let request = RegisterDeviceRequest {
            name: "camera-1".to_string(),
            group: "lab".to_string(),
            comments: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"name": "camera-1", "group": "lab"}));
    }

    #[test]
    fn create_session_request_omits_absent_fields() {
        let request = CreateSessionRequest {
            name: Some("Demo".to_string()),
            max_participants: Some(10),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"name": "Demo", "maxParticipants": 10}));
    }

    #[test]
    fn token_request_nests_camel_case_grants() {
        let request = TokenRequest {
            identity: "alice".to_string(),
            name: None,
            video_grants: Some(VideoGrants {
                can_publish: Some(true),
                room_join: Some(true),
                ..Default::default()
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "identity": "alice",
                "videoGrants": {"canPublish": true, "roomJoin": true}
            })
        );
    }

    #[test]
    fn participant_info_keeps_opaque_blobs() {
        let raw = json!({
            "sid": "PA_1",
            "identity": "alice",
            "permission": {"canSubscribe": true, "custom": [1, 2]},
            "tracks": [{"sid": "TR_1", "muted": false}]
        });

        let parsed: ParticipantInfo = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(parsed.permission, Some(raw["permission"].clone()));
        assert_eq!(parsed.tracks, vec![raw["tracks"][0].clone()]);
        assert_eq!(parsed.state, None);
    }

    #[test]
    fn participant_response_parses_nested_tracks() {
        let raw = json!({
            "id": "part-1",
            "identity": "alice",
            "sessionId": "s1",
            "joinedAt": 1700000000,
            "tracks": [{
                "id": "t1",
                "sid": "TR_1",
                "kind": "audio",
                "participantId": "part-1"
            }]
        });

        let parsed: SessionParticipantResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.tracks.len(), 1);
        assert_eq!(parsed.tracks[0].kind.as_deref(), Some("audio"));
        assert_eq!(parsed.left_at, None);
    }

    #[test]
    fn summary_formats_as_text_table() {
        let summary = ProjectSummary {
            num_sessions: 12,
            num_active_sessions: 2,
            num_devices: 5,
            num_recordings: 7,
        };

        let text = summary.format(&OutputFormat::Text).unwrap();
        assert!(text.starts_with("SESSIONS"));
        assert!(text.contains("12"));
    }
}
