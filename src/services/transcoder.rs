//! Elastic Transcoder operations.
//!
//! List operations paginate with `PageToken` / `NextPageToken`. Job and
//! pipeline creation carry nested parameter groups (`Input`, `Output`,
//! `Notifications`); each group is built only when one of its members is
//! bound.

use crate::op::OpSpec;

const SERVICE: &str = "elastictranscoder";
const TARGET: &str = "EtsCustomerService";

pub static LIST_JOBS_BY_PIPELINE: OpSpec = OpSpec {
    service: SERVICE,
    name: "ListJobsByPipeline",
    target_prefix: TARGET,
    action: "List transcoding jobs in a pipeline",
    required: &["PipelineId"],
    fields: &[
        ("PipelineId", "PipelineId"),
        ("Ascending", "Ascending"),
        ("PageToken", "PageToken"),
    ],
    token_param: Some("PageToken"),
    token_field: Some("NextPageToken"),
    primary: Some("Jobs"),
    response_fields: &["Jobs", "NextPageToken"],
    mutating: false,
};

pub static LIST_JOBS_BY_STATUS: OpSpec = OpSpec {
    service: SERVICE,
    name: "ListJobsByStatus",
    target_prefix: TARGET,
    action: "List transcoding jobs by status",
    required: &["Status"],
    fields: &[
        ("Status", "Status"),
        ("Ascending", "Ascending"),
        ("PageToken", "PageToken"),
    ],
    token_param: Some("PageToken"),
    token_field: Some("NextPageToken"),
    primary: Some("Jobs"),
    response_fields: &["Jobs", "NextPageToken"],
    mutating: false,
};

pub static LIST_PIPELINES: OpSpec = OpSpec {
    service: SERVICE,
    name: "ListPipelines",
    target_prefix: TARGET,
    action: "List transcoding pipelines",
    required: &[],
    fields: &[("Ascending", "Ascending"), ("PageToken", "PageToken")],
    token_param: Some("PageToken"),
    token_field: Some("NextPageToken"),
    primary: Some("Pipelines"),
    response_fields: &["Pipelines", "NextPageToken"],
    mutating: false,
};

pub static LIST_PRESETS: OpSpec = OpSpec {
    service: SERVICE,
    name: "ListPresets",
    target_prefix: TARGET,
    action: "List transcoding presets",
    required: &[],
    fields: &[("Ascending", "Ascending"), ("PageToken", "PageToken")],
    token_param: Some("PageToken"),
    token_field: Some("NextPageToken"),
    primary: Some("Presets"),
    response_fields: &["Presets", "NextPageToken"],
    mutating: false,
};

pub static READ_JOB: OpSpec = OpSpec {
    service: SERVICE,
    name: "ReadJob",
    target_prefix: TARGET,
    action: "Read one transcoding job",
    required: &["Id"],
    fields: &[("Id", "Id")],
    token_param: None,
    token_field: None,
    primary: Some("Job"),
    response_fields: &["Job"],
    mutating: false,
};

pub static READ_PIPELINE: OpSpec = OpSpec {
    service: SERVICE,
    name: "ReadPipeline",
    target_prefix: TARGET,
    action: "Read one transcoding pipeline",
    required: &["Id"],
    fields: &[("Id", "Id")],
    token_param: None,
    token_field: None,
    primary: Some("Pipeline"),
    response_fields: &["Pipeline", "Warnings"],
    mutating: false,
};

pub static CREATE_JOB: OpSpec = OpSpec {
    service: SERVICE,
    name: "CreateJob",
    target_prefix: TARGET,
    action: "Create an Elastic Transcoder job",
    required: &["PipelineId"],
    fields: &[
        ("PipelineId", "PipelineId"),
        ("OutputKeyPrefix", "OutputKeyPrefix"),
        ("InputKey", "Input.Key"),
        ("InputFrameRate", "Input.FrameRate"),
        ("InputResolution", "Input.Resolution"),
        ("InputAspectRatio", "Input.AspectRatio"),
        ("InputInterlaced", "Input.Interlaced"),
        ("InputContainer", "Input.Container"),
        ("OutputKey", "Output.Key"),
        ("OutputPresetId", "Output.PresetId"),
        ("OutputRotate", "Output.Rotate"),
        ("OutputSegmentDuration", "Output.SegmentDuration"),
        ("OutputThumbnailPattern", "Output.ThumbnailPattern"),
        ("Outputs", "Outputs"),
        ("Playlists", "Playlists"),
        ("UserMetadata", "UserMetadata"),
    ],
    token_param: None,
    token_field: None,
    primary: Some("Job"),
    response_fields: &["Job"],
    mutating: true,
};

pub static CREATE_PIPELINE: OpSpec = OpSpec {
    service: SERVICE,
    name: "CreatePipeline",
    target_prefix: TARGET,
    action: "Create an Elastic Transcoder pipeline",
    required: &["Name", "InputBucket", "Role"],
    fields: &[
        ("Name", "Name"),
        ("InputBucket", "InputBucket"),
        ("OutputBucket", "OutputBucket"),
        ("Role", "Role"),
        ("AwsKmsKeyArn", "AwsKmsKeyArn"),
        ("NotificationsCompleted", "Notifications.Completed"),
        ("NotificationsError", "Notifications.Error"),
        ("NotificationsProgressing", "Notifications.Progressing"),
        ("NotificationsWarning", "Notifications.Warning"),
        ("ContentConfig", "ContentConfig"),
        ("ThumbnailConfig", "ThumbnailConfig"),
    ],
    token_param: None,
    token_field: None,
    primary: Some("Pipeline"),
    response_fields: &["Pipeline", "Warnings"],
    mutating: true,
};

pub static UPDATE_PIPELINE_STATUS: OpSpec = OpSpec {
    service: SERVICE,
    name: "UpdatePipelineStatus",
    target_prefix: TARGET,
    action: "Pause or reactivate an Elastic Transcoder pipeline",
    required: &["Id", "Status"],
    fields: &[("Id", "Id"), ("Status", "Status")],
    token_param: None,
    token_field: None,
    primary: Some("Pipeline"),
    response_fields: &["Pipeline"],
    mutating: true,
};

/// Every Elastic Transcoder operation in the catalog.
pub static OPERATIONS: &[&OpSpec] = &[
    &LIST_JOBS_BY_PIPELINE,
    &LIST_JOBS_BY_STATUS,
    &LIST_PIPELINES,
    &LIST_PRESETS,
    &READ_JOB,
    &READ_PIPELINE,
    &CREATE_JOB,
    &CREATE_PIPELINE,
    &UPDATE_PIPELINE_STATUS,
];
