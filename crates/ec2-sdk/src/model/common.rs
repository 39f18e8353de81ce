//! Shapes and enums shared by many operations.

use crate::shape::{ec2_enum, ec2_shape};
use chrono::{DateTime, Utc};

ec2_enum! {
    /// Resource types accepted in tag specifications.
    pub enum ResourceType {
        ClientVpnEndpoint => "client-vpn-endpoint",
        CustomerGateway => "customer-gateway",
        DedicatedHost => "dedicated-host",
        DhcpOptions => "dhcp-options",
        ElasticIp => "elastic-ip",
        Fleet => "fleet",
        FpgaImage => "fpga-image",
        HostReservation => "host-reservation",
        Image => "image",
        Instance => "instance",
        InternetGateway => "internet-gateway",
        KeyPair => "key-pair",
        LaunchTemplate => "launch-template",
        Natgateway => "natgateway",
        NetworkAcl => "network-acl",
        NetworkInterface => "network-interface",
        PlacementGroup => "placement-group",
        ReservedInstances => "reserved-instances",
        RouteTable => "route-table",
        SecurityGroup => "security-group",
        Snapshot => "snapshot",
        SpotFleetRequest => "spot-fleet-request",
        SpotInstancesRequest => "spot-instances-request",
        Subnet => "subnet",
        TrafficMirrorFilter => "traffic-mirror-filter",
        TrafficMirrorSession => "traffic-mirror-session",
        TrafficMirrorTarget => "traffic-mirror-target",
        TransitGateway => "transit-gateway",
        TransitGatewayAttachment => "transit-gateway-attachment",
        TransitGatewayMulticastDomain => "transit-gateway-multicast-domain",
        TransitGatewayRouteTable => "transit-gateway-route-table",
        Volume => "volume",
        Vpc => "vpc",
        VpcPeeringConnection => "vpc-peering-connection",
        VpnConnection => "vpn-connection",
        VpnGateway => "vpn-gateway",
        VpcFlowLog => "vpc-flow-log",
        CapacityReservation => "capacity-reservation",
    }
}

ec2_enum! {
    pub enum ArchitectureValues {
        I386 => "i386",
        X86_64 => "x86_64",
        Arm64 => "arm64",
    }
}

ec2_enum! {
    pub enum VirtualizationType {
        Hvm => "hvm",
        Paravirtual => "paravirtual",
    }
}

ec2_enum! {
    pub enum HypervisorType {
        Ovm => "ovm",
        Xen => "xen",
    }
}

ec2_enum! {
    /// Root device type of an image or instance.
    pub enum DeviceType {
        Ebs => "ebs",
        InstanceStore => "instance-store",
    }
}

ec2_enum! {
    pub enum PlatformValues {
        Windows => "Windows",
    }
}

ec2_enum! {
    pub enum Tenancy {
        Default => "default",
        Dedicated => "dedicated",
        Host => "host",
    }
}

ec2_enum! {
    pub enum VolumeType {
        Standard => "standard",
        Io1 => "io1",
        Gp2 => "gp2",
        Sc1 => "sc1",
        St1 => "st1",
    }
}

ec2_enum! {
    pub enum ShutdownBehavior {
        Stop => "stop",
        Terminate => "terminate",
    }
}

ec2_enum! {
    pub enum MarketType {
        Spot => "spot",
    }
}

ec2_enum! {
    pub enum SpotInstanceType {
        OneTime => "one-time",
        Persistent => "persistent",
    }
}

ec2_enum! {
    /// What happens to a Spot Instance when it is interrupted.
    pub enum InstanceInterruptionBehavior {
        Hibernate => "hibernate",
        Stop => "stop",
        Terminate => "terminate",
    }
}

ec2_enum! {
    pub enum HttpTokensState {
        Optional => "optional",
        Required => "required",
    }
}

ec2_enum! {
    pub enum InstanceMetadataEndpointState {
        Disabled => "disabled",
        Enabled => "enabled",
    }
}

ec2_enum! {
    pub enum InstanceMetadataOptionsState {
        Pending => "pending",
        Applied => "applied",
    }
}

ec2_enum! {
    pub enum CapacityReservationPreference {
        Open => "open",
        None => "none",
    }
}

ec2_enum! {
    pub enum ProductCodeValues {
        Devpay => "devpay",
        Marketplace => "marketplace",
    }
}

ec2_enum! {
    pub enum AttachmentStatus {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
    }
}

ec2_enum! {
    /// Product descriptions used by Reserved Instances and Spot requests.
    pub enum RIProductDescription {
        LinuxUnix => "Linux/UNIX",
        LinuxUnixAmazonVpc => "Linux/UNIX (Amazon VPC)",
        Windows => "Windows",
        WindowsAmazonVpc => "Windows (Amazon VPC)",
    }
}

ec2_enum! {
    pub enum CurrencyCodeValues {
        Usd => "USD",
    }
}

ec2_shape! {
    /// A key/value tag.
    pub struct Tag {
        /// Up to 127 Unicode characters; may not begin with `aws:`.
        key / with_key: String => ("Key", "key"),
        /// Up to 255 Unicode characters.
        value / with_value: String => ("Value", "value"),
    }
}

impl Tag {
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }
}

ec2_shape! {
    /// A filter name and its accepted values. Filter names are case
    /// sensitive.
    pub struct Filter {
        name / with_name: String => ("Name", "name"),
        values / with_values: Vec<String> => ("Value", "valueSet"),
    }
}

impl Filter {
    pub fn named<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new()
            .with_name(name)
            .with_values(values.into_iter().map(Into::into).collect::<Vec<String>>())
    }
}

ec2_shape! {
    /// Tags to apply to a resource while it is being created.
    pub struct TagSpecification {
        resource_type / with_resource_type: ResourceType => ("ResourceType", "resourceType"),
        tags / with_tags: Vec<Tag> => ("Tag", "Tag"),
    }
}

ec2_shape! {
    /// A security group reference.
    pub struct GroupIdentifier {
        group_name / with_group_name: String => ("GroupName", "groupName"),
        group_id / with_group_id: String => ("GroupId", "groupId"),
    }
}

ec2_shape! {
    pub struct ProductCode {
        product_code_id / with_product_code_id: String => ("ProductCodeId", "productCode"),
        product_code_type / with_product_code_type: ProductCodeValues => ("ProductCodeType", "type"),
    }
}

ec2_shape! {
    /// Why a resource entered its current state, e.g.
    /// `Client.UserInitiatedShutdown`.
    pub struct StateReason {
        code / with_code: String => ("Code", "code"),
        message / with_message: String => ("Message", "message"),
    }
}

ec2_shape! {
    /// Where an instance is launched.
    pub struct Placement {
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "availabilityZone"),
        /// Affinity with a Dedicated Host (`default` or `host`).
        affinity / with_affinity: String => ("Affinity", "affinity"),
        group_name / with_group_name: String => ("GroupName", "groupName"),
        partition_number / with_partition_number: i32 => ("PartitionNumber", "partitionNumber"),
        host_id / with_host_id: String => ("HostId", "hostId"),
        tenancy / with_tenancy: Tenancy => ("Tenancy", "tenancy"),
        spread_domain / with_spread_domain: String => ("SpreadDomain", "spreadDomain"),
        host_resource_group_arn / with_host_resource_group_arn: String => ("HostResourceGroupArn", "hostResourceGroupArn"),
    }
}

ec2_shape! {
    pub struct IamInstanceProfileSpecification {
        arn / with_arn: String => ("Arn", "arn"),
        name / with_name: String => ("Name", "name"),
    }
}

ec2_shape! {
    pub struct IamInstanceProfile {
        arn / with_arn: String => ("Arn", "arn"),
        id / with_id: String => ("Id", "id"),
    }
}

ec2_shape! {
    /// EBS parameters of a block device mapping.
    pub struct EbsBlockDevice {
        delete_on_termination / with_delete_on_termination: bool => ("DeleteOnTermination", "deleteOnTermination"),
        /// Provisioned IOPS. Required for `io1`, ignored otherwise.
        iops / with_iops: i32 => ("Iops", "iops"),
        snapshot_id / with_snapshot_id: String => ("SnapshotId", "snapshotId"),
        /// Size in GiB.
        volume_size / with_volume_size: i32 => ("VolumeSize", "volumeSize"),
        volume_type / with_volume_type: VolumeType => ("VolumeType", "volumeType"),
        kms_key_id / with_kms_key_id: String => ("KmsKeyId", "kmsKeyId"),
        encrypted / with_encrypted: bool => ("Encrypted", "encrypted"),
    }
}

ec2_shape! {
    /// A block device mapping used when launching instances or
    /// registering images.
    pub struct BlockDeviceMapping {
        /// Device name, e.g. `/dev/sdh` or `xvdh`.
        device_name / with_device_name: String => ("DeviceName", "deviceName"),
        /// Instance store volume name, `ephemeral0` to `ephemeral23`.
        virtual_name / with_virtual_name: String => ("VirtualName", "virtualName"),
        ebs / with_ebs: EbsBlockDevice => ("Ebs", "ebs"),
        /// Suppresses the device included in the image's mapping.
        no_device / with_no_device: String => ("NoDevice", "noDevice"),
    }
}

ec2_shape! {
    pub struct CpuOptionsRequest {
        core_count / with_core_count: i32 => ("CoreCount", "coreCount"),
        threads_per_core / with_threads_per_core: i32 => ("ThreadsPerCore", "threadsPerCore"),
    }
}

ec2_shape! {
    pub struct CpuOptions {
        core_count / with_core_count: i32 => ("CoreCount", "coreCount"),
        threads_per_core / with_threads_per_core: i32 => ("ThreadsPerCore", "threadsPerCore"),
    }
}

ec2_shape! {
    /// Credit option for burstable instances: `standard` or `unlimited`.
    pub struct CreditSpecificationRequest {
        cpu_credits / with_cpu_credits: String => ("CpuCredits", "cpuCredits"),
    }
}

ec2_shape! {
    pub struct CreditSpecification {
        cpu_credits / with_cpu_credits: String => ("CpuCredits", "cpuCredits"),
    }
}

ec2_shape! {
    pub struct CapacityReservationTarget {
        capacity_reservation_id / with_capacity_reservation_id: String => ("CapacityReservationId", "capacityReservationId"),
    }
}

ec2_shape! {
    pub struct CapacityReservationTargetResponse {
        capacity_reservation_id / with_capacity_reservation_id: String => ("CapacityReservationId", "capacityReservationId"),
    }
}

ec2_shape! {
    pub struct CapacityReservationSpecification {
        capacity_reservation_preference / with_capacity_reservation_preference: CapacityReservationPreference => ("CapacityReservationPreference", "capacityReservationPreference"),
        capacity_reservation_target / with_capacity_reservation_target: CapacityReservationTarget => ("CapacityReservationTarget", "capacityReservationTarget"),
    }
}

ec2_shape! {
    pub struct CapacityReservationSpecificationResponse {
        capacity_reservation_preference / with_capacity_reservation_preference: CapacityReservationPreference => ("CapacityReservationPreference", "capacityReservationPreference"),
        capacity_reservation_target / with_capacity_reservation_target: CapacityReservationTargetResponse => ("CapacityReservationTarget", "capacityReservationTarget"),
    }
}

ec2_shape! {
    pub struct HibernationOptionsRequest {
        configured / with_configured: bool => ("Configured", "configured"),
    }
}

ec2_shape! {
    pub struct HibernationOptions {
        configured / with_configured: bool => ("Configured", "configured"),
    }
}

ec2_shape! {
    pub struct LicenseConfigurationRequest {
        license_configuration_arn / with_license_configuration_arn: String => ("LicenseConfigurationArn", "licenseConfigurationArn"),
    }
}

ec2_shape! {
    pub struct LicenseConfiguration {
        license_configuration_arn / with_license_configuration_arn: String => ("LicenseConfigurationArn", "licenseConfigurationArn"),
    }
}

ec2_shape! {
    /// Instance metadata service options requested at launch.
    pub struct InstanceMetadataOptionsRequest {
        http_tokens / with_http_tokens: HttpTokensState => ("HttpTokens", "httpTokens"),
        /// 1 to 64; default 1.
        http_put_response_hop_limit / with_http_put_response_hop_limit: i32 => ("HttpPutResponseHopLimit", "httpPutResponseHopLimit"),
        http_endpoint / with_http_endpoint: InstanceMetadataEndpointState => ("HttpEndpoint", "httpEndpoint"),
    }
}

ec2_shape! {
    pub struct InstanceMetadataOptionsResponse {
        state / with_state: InstanceMetadataOptionsState => ("State", "state"),
        http_tokens / with_http_tokens: HttpTokensState => ("HttpTokens", "httpTokens"),
        http_put_response_hop_limit / with_http_put_response_hop_limit: i32 => ("HttpPutResponseHopLimit", "httpPutResponseHopLimit"),
        http_endpoint / with_http_endpoint: InstanceMetadataEndpointState => ("HttpEndpoint", "httpEndpoint"),
    }
}

ec2_shape! {
    pub struct ElasticGpuSpecification {
        /// Elastic Graphics accelerator type, e.g. `eg1.medium`.
        gpu_type / with_gpu_type: String => ("Type", "type"),
    }
}

ec2_shape! {
    pub struct ElasticInferenceAccelerator {
        accelerator_type / with_accelerator_type: String => ("Type", "type"),
        count / with_count: i32 => ("Count", "count"),
    }
}

ec2_shape! {
    pub struct SpotMarketOptions {
        max_price / with_max_price: String => ("MaxPrice", "maxPrice"),
        spot_instance_type / with_spot_instance_type: SpotInstanceType => ("SpotInstanceType", "spotInstanceType"),
        block_duration_minutes / with_block_duration_minutes: i32 => ("BlockDurationMinutes", "blockDurationMinutes"),
        valid_until / with_valid_until: DateTime<Utc> => ("ValidUntil", "validUntil"),
        instance_interruption_behavior / with_instance_interruption_behavior: InstanceInterruptionBehavior => ("InstanceInterruptionBehavior", "instanceInterruptionBehavior"),
    }
}

ec2_shape! {
    pub struct InstanceMarketOptionsRequest {
        market_type / with_market_type: MarketType => ("MarketType", "marketType"),
        spot_options / with_spot_options: SpotMarketOptions => ("SpotOptions", "spotOptions"),
    }
}

ec2_shape! {
    pub struct UnsuccessfulItemError {
        code / with_code: String => ("Code", "code"),
        message / with_message: String => ("Message", "message"),
    }
}

ec2_shape! {
    /// A resource an operation could not process.
    pub struct UnsuccessfulItem {
        error / with_error: UnsuccessfulItemError => ("Error", "error"),
        resource_id / with_resource_id: String => ("ResourceId", "resourceId"),
    }
}
