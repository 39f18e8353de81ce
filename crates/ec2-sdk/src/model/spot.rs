//! Spot Instance requests, Spot Fleets and EC2 Fleets.

use super::common::*;
use super::instance_types::InstanceType;
use super::instances::{InstanceNetworkInterfaceSpecification, RunInstancesMonitoringEnabled};
use crate::shape::{ec2_enum, ec2_shape};
use chrono::{DateTime, Utc};

ec2_enum! {
    pub enum SpotInstanceState {
        Open => "open",
        Active => "active",
        Closed => "closed",
        Cancelled => "cancelled",
        Failed => "failed",
    }
}

ec2_enum! {
    pub enum AllocationStrategy {
        LowestPrice => "lowestPrice",
        Diversified => "diversified",
        CapacityOptimized => "capacityOptimized",
    }
}

ec2_enum! {
    pub enum OnDemandAllocationStrategy {
        LowestPrice => "lowestPrice",
        Prioritized => "prioritized",
    }
}

ec2_enum! {
    pub enum ExcessCapacityTerminationPolicy {
        NoTermination => "noTermination",
        Default => "default",
    }
}

ec2_enum! {
    /// Request type shared by Spot Fleet and EC2 Fleet.
    pub enum FleetType {
        Request => "request",
        Maintain => "maintain",
        Instant => "instant",
    }
}

ec2_enum! {
    pub enum ActivityStatus {
        Error => "error",
        PendingFulfillment => "pending_fulfillment",
        PendingTermination => "pending_termination",
        Fulfilled => "fulfilled",
    }
}

ec2_enum! {
    pub enum BatchState {
        Submitted => "submitted",
        Active => "active",
        Cancelled => "cancelled",
        Failed => "failed",
        CancelledRunning => "cancelled_running",
        CancelledTerminating => "cancelled_terminating",
        Modifying => "modifying",
    }
}

ec2_enum! {
    pub enum FleetActivityStatus {
        Error => "error",
        PendingFulfillment => "pending_fulfillment",
        PendingTermination => "pending_termination",
        Fulfilled => "fulfilled",
    }
}

ec2_enum! {
    pub enum FleetStateCode {
        Submitted => "submitted",
        Active => "active",
        Deleted => "deleted",
        Failed => "failed",
        DeletedRunning => "deleted_running",
        DeletedTerminating => "deleted_terminating",
        Modifying => "modifying",
    }
}

ec2_enum! {
    pub enum FleetExcessCapacityTerminationPolicy {
        NoTermination => "no-termination",
        Termination => "termination",
    }
}

ec2_enum! {
    pub enum DefaultTargetCapacityType {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

ec2_enum! {
    pub enum SpotAllocationStrategy {
        LowestPrice => "lowest-price",
        Diversified => "diversified",
        CapacityOptimized => "capacity-optimized",
    }
}

ec2_enum! {
    pub enum FleetOnDemandAllocationStrategy {
        LowestPrice => "lowest-price",
        Prioritized => "prioritized",
    }
}

ec2_enum! {
    pub enum FleetCapacityReservationUsageStrategy {
        UseCapacityReservationsFirst => "use-capacity-reservations-first",
    }
}

ec2_enum! {
    pub enum InstanceLifecycle {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

// Spot Instance requests

ec2_shape! {
    pub struct SpotInstanceStateFault {
        code / with_code: String => ("Code", "code"),
        message / with_message: String => ("Message", "message"),
    }
}

ec2_shape! {
    /// Status code and message of a Spot request, e.g. `fulfilled`.
    pub struct SpotInstanceStatus {
        code / with_code: String => ("Code", "code"),
        message / with_message: String => ("Message", "message"),
        update_time / with_update_time: DateTime<Utc> => ("UpdateTime", "updateTime"),
    }
}

ec2_shape! {
    pub struct SpotPlacement {
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "availabilityZone"),
        group_name / with_group_name: String => ("GroupName", "groupName"),
        tenancy / with_tenancy: Tenancy => ("Tenancy", "tenancy"),
    }
}

ec2_shape! {
    /// Launch parameters of a Spot Instance request.
    pub struct LaunchSpecification {
        user_data / with_user_data: String => ("UserData", "userData"),
        security_groups / with_security_groups: Vec<GroupIdentifier> => ("SecurityGroups", "groupSet"),
        addressing_type / with_addressing_type: String => ("AddressingType", "addressingType"),
        block_device_mappings / with_block_device_mappings: Vec<BlockDeviceMapping> => ("BlockDeviceMappings", "blockDeviceMapping"),
        ebs_optimized / with_ebs_optimized: bool => ("EbsOptimized", "ebsOptimized"),
        iam_instance_profile / with_iam_instance_profile: IamInstanceProfileSpecification => ("IamInstanceProfile", "iamInstanceProfile"),
        image_id / with_image_id: String => ("ImageId", "imageId"),
        instance_type / with_instance_type: InstanceType => ("InstanceType", "instanceType"),
        kernel_id / with_kernel_id: String => ("KernelId", "kernelId"),
        key_name / with_key_name: String => ("KeyName", "keyName"),
        network_interfaces / with_network_interfaces: Vec<InstanceNetworkInterfaceSpecification> => ("NetworkInterfaces", "networkInterfaceSet"),
        placement / with_placement: SpotPlacement => ("Placement", "placement"),
        ramdisk_id / with_ramdisk_id: String => ("RamdiskId", "ramdiskId"),
        subnet_id / with_subnet_id: String => ("SubnetId", "subnetId"),
        monitoring / with_monitoring: RunInstancesMonitoringEnabled => ("Monitoring", "monitoring"),
    }
}

ec2_shape! {
    /// A Spot Instance request.
    pub struct SpotInstanceRequest {
        actual_block_hourly_price / with_actual_block_hourly_price: String => ("ActualBlockHourlyPrice", "actualBlockHourlyPrice"),
        availability_zone_group / with_availability_zone_group: String => ("AvailabilityZoneGroup", "availabilityZoneGroup"),
        block_duration_minutes / with_block_duration_minutes: i32 => ("BlockDurationMinutes", "blockDurationMinutes"),
        create_time / with_create_time: DateTime<Utc> => ("CreateTime", "createTime"),
        fault / with_fault: SpotInstanceStateFault => ("Fault", "fault"),
        instance_id / with_instance_id: String => ("InstanceId", "instanceId"),
        launch_group / with_launch_group: String => ("LaunchGroup", "launchGroup"),
        launch_specification / with_launch_specification: LaunchSpecification => ("LaunchSpecification", "launchSpecification"),
        launched_availability_zone / with_launched_availability_zone: String => ("LaunchedAvailabilityZone", "launchedAvailabilityZone"),
        product_description / with_product_description: RIProductDescription => ("ProductDescription", "productDescription"),
        spot_instance_request_id / with_spot_instance_request_id: String => ("SpotInstanceRequestId", "spotInstanceRequestId"),
        /// Maximum hourly price as a decimal string.
        spot_price / with_spot_price: String => ("SpotPrice", "spotPrice"),
        state / with_state: SpotInstanceState => ("State", "state"),
        status / with_status: SpotInstanceStatus => ("Status", "status"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
        request_type / with_request_type: SpotInstanceType => ("Type", "type"),
        valid_from / with_valid_from: DateTime<Utc> => ("ValidFrom", "validFrom"),
        valid_until / with_valid_until: DateTime<Utc> => ("ValidUntil", "validUntil"),
        instance_interruption_behavior / with_instance_interruption_behavior: InstanceInterruptionBehavior => ("InstanceInterruptionBehavior", "instanceInterruptionBehavior"),
    }
}

ec2_shape! {
    pub struct DescribeSpotInstanceRequestsRequest {
        filters / with_filters: Vec<Filter> => ("Filter", "Filter"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        spot_instance_request_ids / with_spot_instance_request_ids: Vec<String> => ("SpotInstanceRequestId", "SpotInstanceRequestId"),
        next_token / with_next_token: String => ("NextToken", "NextToken"),
        max_results / with_max_results: i32 => ("MaxResults", "MaxResults"),
    }
}

ec2_shape! {
    pub struct DescribeSpotInstanceRequestsResult {
        spot_instance_requests / with_spot_instance_requests: Vec<SpotInstanceRequest> => ("SpotInstanceRequests", "spotInstanceRequestSet"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
    }
}

// Spot Fleet

ec2_shape! {
    pub struct SpotFleetMonitoring {
        enabled / with_enabled: bool => ("Enabled", "enabled"),
    }
}

ec2_shape! {
    pub struct SpotFleetTagSpecification {
        resource_type / with_resource_type: ResourceType => ("ResourceType", "resourceType"),
        tags / with_tags: Vec<Tag> => ("Tag", "tag"),
    }
}

ec2_shape! {
    /// Launch parameters of one Spot Fleet pool.
    pub struct SpotFleetLaunchSpecification {
        security_groups / with_security_groups: Vec<GroupIdentifier> => ("GroupSet", "groupSet"),
        addressing_type / with_addressing_type: String => ("AddressingType", "addressingType"),
        block_device_mappings / with_block_device_mappings: Vec<BlockDeviceMapping> => ("BlockDeviceMapping", "blockDeviceMapping"),
        ebs_optimized / with_ebs_optimized: bool => ("EbsOptimized", "ebsOptimized"),
        iam_instance_profile / with_iam_instance_profile: IamInstanceProfileSpecification => ("IamInstanceProfile", "iamInstanceProfile"),
        image_id / with_image_id: String => ("ImageId", "imageId"),
        instance_type / with_instance_type: InstanceType => ("InstanceType", "instanceType"),
        kernel_id / with_kernel_id: String => ("KernelId", "kernelId"),
        key_name / with_key_name: String => ("KeyName", "keyName"),
        monitoring / with_monitoring: SpotFleetMonitoring => ("Monitoring", "monitoring"),
        network_interfaces / with_network_interfaces: Vec<InstanceNetworkInterfaceSpecification> => ("NetworkInterfaceSet", "networkInterfaceSet"),
        placement / with_placement: SpotPlacement => ("Placement", "placement"),
        ramdisk_id / with_ramdisk_id: String => ("RamdiskId", "ramdiskId"),
        spot_price / with_spot_price: String => ("SpotPrice", "spotPrice"),
        subnet_id / with_subnet_id: String => ("SubnetId", "subnetId"),
        user_data / with_user_data: String => ("UserData", "userData"),
        weighted_capacity / with_weighted_capacity: f64 => ("WeightedCapacity", "weightedCapacity"),
        tag_specifications / with_tag_specifications: Vec<SpotFleetTagSpecification> => ("TagSpecificationSet", "tagSpecificationSet"),
    }
}

ec2_shape! {
    pub struct FleetLaunchTemplateSpecification {
        launch_template_id / with_launch_template_id: String => ("LaunchTemplateId", "launchTemplateId"),
        launch_template_name / with_launch_template_name: String => ("LaunchTemplateName", "launchTemplateName"),
        version / with_version: String => ("Version", "version"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateOverrides {
        instance_type / with_instance_type: InstanceType => ("InstanceType", "instanceType"),
        spot_price / with_spot_price: String => ("SpotPrice", "spotPrice"),
        subnet_id / with_subnet_id: String => ("SubnetId", "subnetId"),
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "availabilityZone"),
        weighted_capacity / with_weighted_capacity: f64 => ("WeightedCapacity", "weightedCapacity"),
        /// Lower is launched first with the `prioritized` strategy.
        priority / with_priority: f64 => ("Priority", "priority"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateConfig {
        launch_template_specification / with_launch_template_specification: FleetLaunchTemplateSpecification => ("LaunchTemplateSpecification", "launchTemplateSpecification"),
        overrides / with_overrides: Vec<LaunchTemplateOverrides> => ("Overrides", "overrides"),
    }
}

ec2_shape! {
    pub struct ClassicLoadBalancer {
        name / with_name: String => ("Name", "name"),
    }
}

ec2_shape! {
    pub struct ClassicLoadBalancersConfig {
        classic_load_balancers / with_classic_load_balancers: Vec<ClassicLoadBalancer> => ("ClassicLoadBalancers", "classicLoadBalancers"),
    }
}

ec2_shape! {
    pub struct TargetGroup {
        arn / with_arn: String => ("Arn", "arn"),
    }
}

ec2_shape! {
    pub struct TargetGroupsConfig {
        target_groups / with_target_groups: Vec<TargetGroup> => ("TargetGroups", "targetGroups"),
    }
}

ec2_shape! {
    pub struct LoadBalancersConfig {
        classic_load_balancers_config / with_classic_load_balancers_config: ClassicLoadBalancersConfig => ("ClassicLoadBalancersConfig", "classicLoadBalancersConfig"),
        target_groups_config / with_target_groups_config: TargetGroupsConfig => ("TargetGroupsConfig", "targetGroupsConfig"),
    }
}

ec2_shape! {
    /// Configuration of a Spot Fleet request.
    pub struct SpotFleetRequestConfigData {
        allocation_strategy / with_allocation_strategy: AllocationStrategy => ("AllocationStrategy", "allocationStrategy"),
        on_demand_allocation_strategy / with_on_demand_allocation_strategy: OnDemandAllocationStrategy => ("OnDemandAllocationStrategy", "onDemandAllocationStrategy"),
        client_token / with_client_token: String => ("ClientToken", "clientToken"),
        excess_capacity_termination_policy / with_excess_capacity_termination_policy: ExcessCapacityTerminationPolicy => ("ExcessCapacityTerminationPolicy", "excessCapacityTerminationPolicy"),
        fulfilled_capacity / with_fulfilled_capacity: f64 => ("FulfilledCapacity", "fulfilledCapacity"),
        on_demand_fulfilled_capacity / with_on_demand_fulfilled_capacity: f64 => ("OnDemandFulfilledCapacity", "onDemandFulfilledCapacity"),
        /// IAM role that lets Spot Fleet launch and terminate instances.
        iam_fleet_role / with_iam_fleet_role: String => ("IamFleetRole", "iamFleetRole"),
        launch_specifications / with_launch_specifications: Vec<SpotFleetLaunchSpecification> => ("LaunchSpecifications", "launchSpecifications"),
        launch_template_configs / with_launch_template_configs: Vec<LaunchTemplateConfig> => ("LaunchTemplateConfigs", "launchTemplateConfigs"),
        spot_price / with_spot_price: String => ("SpotPrice", "spotPrice"),
        target_capacity / with_target_capacity: i32 => ("TargetCapacity", "targetCapacity"),
        on_demand_target_capacity / with_on_demand_target_capacity: i32 => ("OnDemandTargetCapacity", "onDemandTargetCapacity"),
        on_demand_max_total_price / with_on_demand_max_total_price: String => ("OnDemandMaxTotalPrice", "onDemandMaxTotalPrice"),
        spot_max_total_price / with_spot_max_total_price: String => ("SpotMaxTotalPrice", "spotMaxTotalPrice"),
        terminate_instances_with_expiration / with_terminate_instances_with_expiration: bool => ("TerminateInstancesWithExpiration", "terminateInstancesWithExpiration"),
        fleet_type / with_fleet_type: FleetType => ("Type", "type"),
        valid_from / with_valid_from: DateTime<Utc> => ("ValidFrom", "validFrom"),
        valid_until / with_valid_until: DateTime<Utc> => ("ValidUntil", "validUntil"),
        replace_unhealthy_instances / with_replace_unhealthy_instances: bool => ("ReplaceUnhealthyInstances", "replaceUnhealthyInstances"),
        instance_interruption_behavior / with_instance_interruption_behavior: InstanceInterruptionBehavior => ("InstanceInterruptionBehavior", "instanceInterruptionBehavior"),
        load_balancers_config / with_load_balancers_config: LoadBalancersConfig => ("LoadBalancersConfig", "loadBalancersConfig"),
        instance_pools_to_use_count / with_instance_pools_to_use_count: i32 => ("InstancePoolsToUseCount", "instancePoolsToUseCount"),
        tag_specifications / with_tag_specifications: Vec<TagSpecification> => ("TagSpecification", "TagSpecification"),
    }
}

ec2_shape! {
    pub struct SpotFleetRequestConfig {
        activity_status / with_activity_status: ActivityStatus => ("ActivityStatus", "activityStatus"),
        create_time / with_create_time: DateTime<Utc> => ("CreateTime", "createTime"),
        spot_fleet_request_config / with_spot_fleet_request_config: SpotFleetRequestConfigData => ("SpotFleetRequestConfig", "spotFleetRequestConfig"),
        spot_fleet_request_id / with_spot_fleet_request_id: String => ("SpotFleetRequestId", "spotFleetRequestId"),
        spot_fleet_request_state / with_spot_fleet_request_state: BatchState => ("SpotFleetRequestState", "spotFleetRequestState"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
    }
}

ec2_shape! {
    pub struct DescribeSpotFleetRequestsRequest {
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        max_results / with_max_results: i32 => ("MaxResults", "maxResults"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
        spot_fleet_request_ids / with_spot_fleet_request_ids: Vec<String> => ("SpotFleetRequestId", "spotFleetRequestId"),
    }
}

ec2_shape! {
    pub struct DescribeSpotFleetRequestsResult {
        next_token / with_next_token: String => ("NextToken", "nextToken"),
        spot_fleet_request_configs / with_spot_fleet_request_configs: Vec<SpotFleetRequestConfig> => ("SpotFleetRequestConfigs", "spotFleetRequestConfigSet"),
    }
}

// EC2 Fleet

ec2_shape! {
    pub struct PlacementResponse {
        group_name / with_group_name: String => ("GroupName", "groupName"),
    }
}

ec2_shape! {
    pub struct FleetLaunchTemplateOverrides {
        instance_type / with_instance_type: InstanceType => ("InstanceType", "instanceType"),
        max_price / with_max_price: String => ("MaxPrice", "maxPrice"),
        subnet_id / with_subnet_id: String => ("SubnetId", "subnetId"),
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "availabilityZone"),
        weighted_capacity / with_weighted_capacity: f64 => ("WeightedCapacity", "weightedCapacity"),
        priority / with_priority: f64 => ("Priority", "priority"),
        placement / with_placement: PlacementResponse => ("Placement", "placement"),
    }
}

ec2_shape! {
    pub struct FleetLaunchTemplateConfig {
        launch_template_specification / with_launch_template_specification: FleetLaunchTemplateSpecification => ("LaunchTemplateSpecification", "launchTemplateSpecification"),
        overrides / with_overrides: Vec<FleetLaunchTemplateOverrides> => ("Overrides", "overrides"),
    }
}

ec2_shape! {
    pub struct TargetCapacitySpecification {
        total_target_capacity / with_total_target_capacity: i32 => ("TotalTargetCapacity", "totalTargetCapacity"),
        on_demand_target_capacity / with_on_demand_target_capacity: i32 => ("OnDemandTargetCapacity", "onDemandTargetCapacity"),
        spot_target_capacity / with_spot_target_capacity: i32 => ("SpotTargetCapacity", "spotTargetCapacity"),
        default_target_capacity_type / with_default_target_capacity_type: DefaultTargetCapacityType => ("DefaultTargetCapacityType", "defaultTargetCapacityType"),
    }
}

ec2_shape! {
    pub struct SpotOptions {
        allocation_strategy / with_allocation_strategy: SpotAllocationStrategy => ("AllocationStrategy", "allocationStrategy"),
        instance_interruption_behavior / with_instance_interruption_behavior: InstanceInterruptionBehavior => ("InstanceInterruptionBehavior", "instanceInterruptionBehavior"),
        instance_pools_to_use_count / with_instance_pools_to_use_count: i32 => ("InstancePoolsToUseCount", "instancePoolsToUseCount"),
        single_instance_type / with_single_instance_type: bool => ("SingleInstanceType", "singleInstanceType"),
        single_availability_zone / with_single_availability_zone: bool => ("SingleAvailabilityZone", "singleAvailabilityZone"),
        min_target_capacity / with_min_target_capacity: i32 => ("MinTargetCapacity", "minTargetCapacity"),
        max_total_price / with_max_total_price: String => ("MaxTotalPrice", "maxTotalPrice"),
    }
}

ec2_shape! {
    pub struct CapacityReservationOptions {
        usage_strategy / with_usage_strategy: FleetCapacityReservationUsageStrategy => ("UsageStrategy", "usageStrategy"),
    }
}

ec2_shape! {
    pub struct OnDemandOptions {
        allocation_strategy / with_allocation_strategy: FleetOnDemandAllocationStrategy => ("AllocationStrategy", "allocationStrategy"),
        capacity_reservation_options / with_capacity_reservation_options: CapacityReservationOptions => ("CapacityReservationOptions", "capacityReservationOptions"),
        single_instance_type / with_single_instance_type: bool => ("SingleInstanceType", "singleInstanceType"),
        single_availability_zone / with_single_availability_zone: bool => ("SingleAvailabilityZone", "singleAvailabilityZone"),
        min_target_capacity / with_min_target_capacity: i32 => ("MinTargetCapacity", "minTargetCapacity"),
        max_total_price / with_max_total_price: String => ("MaxTotalPrice", "maxTotalPrice"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateAndOverridesResponse {
        launch_template_specification / with_launch_template_specification: FleetLaunchTemplateSpecification => ("LaunchTemplateSpecification", "launchTemplateSpecification"),
        overrides / with_overrides: FleetLaunchTemplateOverrides => ("Overrides", "overrides"),
    }
}

ec2_shape! {
    /// A launch failure of an `instant` fleet.
    pub struct DescribeFleetError {
        launch_template_and_overrides / with_launch_template_and_overrides: LaunchTemplateAndOverridesResponse => ("LaunchTemplateAndOverrides", "launchTemplateAndOverrides"),
        lifecycle / with_lifecycle: InstanceLifecycle => ("Lifecycle", "lifecycle"),
        error_code / with_error_code: String => ("ErrorCode", "errorCode"),
        error_message / with_error_message: String => ("ErrorMessage", "errorMessage"),
    }
}

ec2_shape! {
    pub struct DescribeFleetsInstances {
        launch_template_and_overrides / with_launch_template_and_overrides: LaunchTemplateAndOverridesResponse => ("LaunchTemplateAndOverrides", "launchTemplateAndOverrides"),
        lifecycle / with_lifecycle: InstanceLifecycle => ("Lifecycle", "lifecycle"),
        instance_ids / with_instance_ids: Vec<String> => ("InstanceIds", "instanceIds"),
        instance_type / with_instance_type: InstanceType => ("InstanceType", "instanceType"),
        platform / with_platform: PlatformValues => ("Platform", "platform"),
    }
}

ec2_shape! {
    /// An EC2 Fleet.
    pub struct FleetData {
        activity_status / with_activity_status: FleetActivityStatus => ("ActivityStatus", "activityStatus"),
        create_time / with_create_time: DateTime<Utc> => ("CreateTime", "createTime"),
        fleet_id / with_fleet_id: String => ("FleetId", "fleetId"),
        fleet_state / with_fleet_state: FleetStateCode => ("FleetState", "fleetState"),
        client_token / with_client_token: String => ("ClientToken", "clientToken"),
        excess_capacity_termination_policy / with_excess_capacity_termination_policy: FleetExcessCapacityTerminationPolicy => ("ExcessCapacityTerminationPolicy", "excessCapacityTerminationPolicy"),
        fulfilled_capacity / with_fulfilled_capacity: f64 => ("FulfilledCapacity", "fulfilledCapacity"),
        fulfilled_on_demand_capacity / with_fulfilled_on_demand_capacity: f64 => ("FulfilledOnDemandCapacity", "fulfilledOnDemandCapacity"),
        launch_template_configs / with_launch_template_configs: Vec<FleetLaunchTemplateConfig> => ("LaunchTemplateConfigs", "launchTemplateConfigs"),
        target_capacity_specification / with_target_capacity_specification: TargetCapacitySpecification => ("TargetCapacitySpecification", "targetCapacitySpecification"),
        terminate_instances_with_expiration / with_terminate_instances_with_expiration: bool => ("TerminateInstancesWithExpiration", "terminateInstancesWithExpiration"),
        fleet_type / with_fleet_type: FleetType => ("Type", "type"),
        valid_from / with_valid_from: DateTime<Utc> => ("ValidFrom", "validFrom"),
        valid_until / with_valid_until: DateTime<Utc> => ("ValidUntil", "validUntil"),
        replace_unhealthy_instances / with_replace_unhealthy_instances: bool => ("ReplaceUnhealthyInstances", "replaceUnhealthyInstances"),
        spot_options / with_spot_options: SpotOptions => ("SpotOptions", "spotOptions"),
        on_demand_options / with_on_demand_options: OnDemandOptions => ("OnDemandOptions", "onDemandOptions"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
        errors / with_errors: Vec<DescribeFleetError> => ("Errors", "errorSet"),
        instances / with_instances: Vec<DescribeFleetsInstances> => ("Instances", "fleetInstanceSet"),
    }
}

ec2_shape! {
    pub struct DescribeFleetsRequest {
        dry_run / with_dry_run: bool => ("DryRun", "DryRun"),
        max_results / with_max_results: i32 => ("MaxResults", "MaxResults"),
        next_token / with_next_token: String => ("NextToken", "NextToken"),
        fleet_ids / with_fleet_ids: Vec<String> => ("FleetId", "FleetId"),
        filters / with_filters: Vec<Filter> => ("Filter", "Filter"),
    }
}

ec2_shape! {
    pub struct DescribeFleetsResult {
        next_token / with_next_token: String => ("NextToken", "nextToken"),
        fleets / with_fleets: Vec<FleetData> => ("Fleets", "fleetSet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::query::{QueryParams, QueryValue};
    use crate::protocol::xml::{XmlNode, XmlValue, XmlWriter};
    use chrono::TimeZone;

    #[test]
    fn spot_fleet_config_query_names() {
        let config = SpotFleetRequestConfigData::new()
            .with_iam_fleet_role("arn:aws:iam::123456789012:role/spot-fleet")
            .with_target_capacity(4)
            .with_allocation_strategy(AllocationStrategy::CapacityOptimized)
            .with_launch_specifications(vec![SpotFleetLaunchSpecification::new()
                .with_image_id("ami-1")
                .with_instance_type(InstanceType::C5Xlarge)
                .with_weighted_capacity(2.0)
                .with_security_groups(vec![GroupIdentifier::new().with_group_id("sg-1")])]);
        let mut params = QueryParams::new();
        config.write_query("SpotFleetRequestConfig", &mut params);
        assert_eq!(params.get("SpotFleetRequestConfig.TargetCapacity"), Some("4"));
        assert_eq!(
            params.get("SpotFleetRequestConfig.AllocationStrategy"),
            Some("capacityOptimized")
        );
        assert_eq!(
            params.get("SpotFleetRequestConfig.LaunchSpecifications.1.InstanceType"),
            Some("c5.xlarge")
        );
        assert_eq!(
            params.get("SpotFleetRequestConfig.LaunchSpecifications.1.WeightedCapacity"),
            Some("2")
        );
        assert_eq!(
            params.get("SpotFleetRequestConfig.LaunchSpecifications.1.GroupSet.1.GroupId"),
            Some("sg-1")
        );
        assert_eq!(
            SpotFleetRequestConfigData::read_query("SpotFleetRequestConfig", &params).unwrap(),
            Some(config)
        );
    }

    #[test]
    fn parse_spot_fleet_request_tag_specifications() {
        let xml = r#"<DescribeSpotFleetRequestsResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/">
            <requestId>4d68a6cc-8f2e-4be1-b425-example</requestId>
            <spotFleetRequestConfigSet>
                <item>
                    <spotFleetRequestId>sfr-123f8fc2-11aa-22bb-33cc-example12710</spotFleetRequestId>
                    <spotFleetRequestState>active</spotFleetRequestState>
                    <activityStatus>fulfilled</activityStatus>
                    <spotFleetRequestConfig>
                        <targetCapacity>2</targetCapacity>
                        <iamFleetRole>arn:aws:iam::123456789012:role/spot-fleet</iamFleetRole>
                        <TagSpecification>
                            <item>
                                <resourceType>spot-fleet-request</resourceType>
                                <Tag>
                                    <item><key>team</key><value>infra</value></item>
                                    <item><key>env</key><value>prod</value></item>
                                </Tag>
                            </item>
                        </TagSpecification>
                    </spotFleetRequestConfig>
                </item>
            </spotFleetRequestConfigSet>
        </DescribeSpotFleetRequestsResponse>"#;
        let result =
            DescribeSpotFleetRequestsResult::read_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        let fleet = &result.spot_fleet_request_configs.unwrap()[0];
        assert_eq!(fleet.spot_fleet_request_state, Some(BatchState::Active));
        assert_eq!(fleet.activity_status, Some(ActivityStatus::Fulfilled));
        let config = fleet.spot_fleet_request_config.as_ref().unwrap();
        assert_eq!(config.target_capacity, Some(2));
        let specs = config.tag_specifications.as_ref().unwrap();
        assert_eq!(specs[0].resource_type, Some(ResourceType::SpotFleetRequest));
        assert_eq!(
            specs[0].tags,
            Some(vec![Tag::pair("team", "infra"), Tag::pair("env", "prod")])
        );
    }

    #[test]
    fn parse_spot_instance_requests() {
        let xml = r#"<DescribeSpotInstanceRequestsResponse>
            <spotInstanceRequestSet>
                <item>
                    <spotInstanceRequestId>sir-1a2b3c4d</spotInstanceRequestId>
                    <spotPrice>0.09</spotPrice>
                    <type>one-time</type>
                    <state>active</state>
                    <status><code>fulfilled</code><updateTime>2019-11-01T12:00:00.000Z</updateTime><message>Your Spot request is fulfilled.</message></status>
                    <launchSpecification>
                        <imageId>ami-1a2b3c4d</imageId>
                        <keyName>my-key-pair</keyName>
                        <groupSet><item><groupId>sg-1a2b3c4d</groupId><groupName>websrv</groupName></item></groupSet>
                        <instanceType>m3.medium</instanceType>
                        <placement><availabilityZone>us-west-2a</availabilityZone></placement>
                        <monitoring><enabled>false</enabled></monitoring>
                    </launchSpecification>
                    <instanceId>i-1234567890abcdef0</instanceId>
                    <createTime>2019-11-01T11:58:00.000Z</createTime>
                    <productDescription>Linux/UNIX</productDescription>
                    <launchedAvailabilityZone>us-west-2a</launchedAvailabilityZone>
                    <instanceInterruptionBehavior>terminate</instanceInterruptionBehavior>
                </item>
            </spotInstanceRequestSet>
        </DescribeSpotInstanceRequestsResponse>"#;
        let result =
            DescribeSpotInstanceRequestsResult::read_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        let request = &result.spot_instance_requests.unwrap()[0];
        assert_eq!(request.state, Some(SpotInstanceState::Active));
        assert_eq!(request.request_type, Some(SpotInstanceType::OneTime));
        assert_eq!(
            request.status.as_ref().and_then(|s| s.code.as_deref()),
            Some("fulfilled")
        );
        let launch_spec = request.launch_specification.as_ref().unwrap();
        assert_eq!(launch_spec.instance_type, Some(InstanceType::M3Medium));
        assert_eq!(
            launch_spec.monitoring.as_ref().and_then(|m| m.enabled),
            Some(false)
        );
    }

    #[test]
    fn fleet_data_xml_round_trip() {
        let fleet = FleetData::new()
            .with_fleet_id("fleet-73fdd2ce-a8b5-4e71-bd47-f1fd0EXAMPLE")
            .with_fleet_state(FleetStateCode::Active)
            .with_fleet_type(FleetType::Maintain)
            .with_create_time(Utc.with_ymd_and_hms(2020, 2, 3, 4, 5, 6).unwrap())
            .with_fulfilled_capacity(2.5)
            .with_target_capacity_specification(
                TargetCapacitySpecification::new()
                    .with_total_target_capacity(4)
                    .with_default_target_capacity_type(DefaultTargetCapacityType::Spot),
            )
            .with_launch_template_configs(vec![FleetLaunchTemplateConfig::new()
                .with_launch_template_specification(
                    FleetLaunchTemplateSpecification::new()
                        .with_launch_template_id("lt-1")
                        .with_version("$Latest"),
                )
                .with_overrides(vec![FleetLaunchTemplateOverrides::new()
                    .with_instance_type(InstanceType::C5Large)
                    .with_priority(1.0)])])
            .with_spot_options(SpotOptions::new().with_allocation_strategy(SpotAllocationStrategy::LowestPrice))
            .with_instances(vec![DescribeFleetsInstances::new()
                .with_lifecycle(InstanceLifecycle::Spot)
                .with_instance_ids(vec!["i-1".to_string(), "i-2".to_string()])])
            .with_tags(vec![Tag::pair("env", "test")]);

        let mut writer = XmlWriter::new();
        fleet.write_xml("item", &mut writer).unwrap();
        let xml = writer.finish().unwrap();
        assert!(xml.contains("<fleetInstanceSet><item><lifecycle>spot</lifecycle>"));
        let parsed = FleetData::read_xml(&XmlNode::parse(&xml).unwrap()).unwrap();
        assert_eq!(parsed, fleet);
    }
}
