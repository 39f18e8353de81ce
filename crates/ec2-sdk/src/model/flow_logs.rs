//! VPC flow logs: `CreateFlowLogs`.

use super::common::*;
use crate::shape::{ec2_enum, ec2_shape};

ec2_enum! {
    pub enum FlowLogsResourceType {
        Vpc => "VPC",
        Subnet => "Subnet",
        NetworkInterface => "NetworkInterface",
    }
}

ec2_enum! {
    pub enum TrafficType {
        Accept => "ACCEPT",
        Reject => "REJECT",
        All => "ALL",
    }
}

ec2_enum! {
    pub enum LogDestinationType {
        CloudWatchLogs => "cloud-watch-logs",
        S3 => "s3",
    }
}

ec2_shape! {
    /// Parameters of `CreateFlowLogs`.
    ///
    /// Either `log_group_name` with `deliver_logs_permission_arn`
    /// (CloudWatch Logs) or `log_destination` (an S3 bucket ARN) must be
    /// given.
    pub struct CreateFlowLogsRequest {
        dry_run / with_dry_run: bool => ("DryRun", "DryRun"),
        client_token / with_client_token: String => ("ClientToken", "ClientToken"),
        deliver_logs_permission_arn / with_deliver_logs_permission_arn: String => ("DeliverLogsPermissionArn", "DeliverLogsPermissionArn"),
        log_group_name / with_log_group_name: String => ("LogGroupName", "LogGroupName"),
        resource_ids / with_resource_ids: Vec<String> => ("ResourceId", "ResourceId"),
        resource_type / with_resource_type: FlowLogsResourceType => ("ResourceType", "ResourceType"),
        traffic_type / with_traffic_type: TrafficType => ("TrafficType", "TrafficType"),
        log_destination_type / with_log_destination_type: LogDestinationType => ("LogDestinationType", "LogDestinationType"),
        log_destination / with_log_destination: String => ("LogDestination", "LogDestination"),
        /// Space-separated `${field}` list.
        log_format / with_log_format: String => ("LogFormat", "LogFormat"),
        tag_specifications / with_tag_specifications: Vec<TagSpecification> => ("TagSpecification", "TagSpecification"),
        /// 60 or 600 seconds.
        max_aggregation_interval / with_max_aggregation_interval: i32 => ("MaxAggregationInterval", "MaxAggregationInterval"),
    }
}

ec2_shape! {
    pub struct CreateFlowLogsResult {
        client_token / with_client_token: String => ("ClientToken", "clientToken"),
        flow_log_ids / with_flow_log_ids: Vec<String> => ("FlowLogIds", "flowLogIdSet"),
        unsuccessful / with_unsuccessful: Vec<UnsuccessfulItem> => ("Unsuccessful", "unsuccessful"),
    }
}
