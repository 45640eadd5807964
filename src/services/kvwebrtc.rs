//! Kinesis Video WebRTC Storage operations.
//!
//! Both operations mutate session state and return no result payload, so
//! they run through the confirmation gate and emit nothing by default.

use crate::op::OpSpec;

const SERVICE: &str = "kinesisvideowebrtcstorage";
const TARGET: &str = "KinesisVideoWebRTCStorage";

pub static JOIN_STORAGE_SESSION: OpSpec = OpSpec {
    service: SERVICE,
    name: "JoinStorageSession",
    target_prefix: TARGET,
    action: "Join a WebRTC storage session as the video producer",
    required: &["ChannelArn"],
    fields: &[("ChannelArn", "channelArn")],
    token_param: None,
    token_field: None,
    primary: None,
    response_fields: &[],
    mutating: true,
};

pub static JOIN_STORAGE_SESSION_AS_VIEWER: OpSpec = OpSpec {
    service: SERVICE,
    name: "JoinStorageSessionAsViewer",
    target_prefix: TARGET,
    action: "Join a WebRTC storage session as a viewer",
    required: &["ChannelArn", "ClientId"],
    fields: &[("ChannelArn", "channelArn"), ("ClientId", "clientId")],
    token_param: None,
    token_field: None,
    primary: None,
    response_fields: &[],
    mutating: true,
};

/// Every Kinesis Video WebRTC Storage operation in the catalog.
pub static OPERATIONS: &[&OpSpec] = &[&JOIN_STORAGE_SESSION, &JOIN_STORAGE_SESSION_AS_VIEWER];
