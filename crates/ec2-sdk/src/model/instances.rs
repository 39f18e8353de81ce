//! Instances: describe, launch, start, stop, terminate.

use super::common::*;
use super::instance_types::InstanceType;
use crate::shape::{ec2_enum, ec2_shape};
use chrono::{DateTime, Utc};

ec2_enum! {
    pub enum InstanceStateName {
        Pending => "pending",
        Running => "running",
        ShuttingDown => "shutting-down",
        Terminated => "terminated",
        Stopping => "stopping",
        Stopped => "stopped",
    }
}

ec2_enum! {
    pub enum MonitoringState {
        Disabled => "disabled",
        Disabling => "disabling",
        Enabled => "enabled",
        Pending => "pending",
    }
}

ec2_enum! {
    pub enum InstanceLifecycleType {
        Spot => "spot",
        Scheduled => "scheduled",
    }
}

ec2_enum! {
    pub enum NetworkInterfaceStatus {
        Available => "available",
        Associated => "associated",
        Attaching => "attaching",
        InUse => "in-use",
        Detaching => "detaching",
    }
}

ec2_shape! {
    /// The state of an instance.
    ///
    /// The low byte of `code` is the state: 0 pending, 16 running,
    /// 32 shutting-down, 48 terminated, 64 stopping, 80 stopped. The high
    /// byte is used internally by the service and should be ignored.
    pub struct InstanceState {
        code / with_code: i32 => ("Code", "code"),
        name / with_name: InstanceStateName => ("Name", "name"),
    }
}

impl InstanceState {
    /// The state code with the internal high byte masked off.
    pub fn state_code(&self) -> Option<i32> {
        self.code.map(|c| c & 0xff)
    }
}

ec2_shape! {
    pub struct Monitoring {
        state / with_state: MonitoringState => ("State", "state"),
    }
}

ec2_shape! {
    pub struct RunInstancesMonitoringEnabled {
        enabled / with_enabled: bool => ("Enabled", "enabled"),
    }
}

ec2_shape! {
    pub struct EbsInstanceBlockDevice {
        attach_time / with_attach_time: DateTime<Utc> => ("AttachTime", "attachTime"),
        delete_on_termination / with_delete_on_termination: bool => ("DeleteOnTermination", "deleteOnTermination"),
        status / with_status: AttachmentStatus => ("Status", "status"),
        volume_id / with_volume_id: String => ("VolumeId", "volumeId"),
    }
}

ec2_shape! {
    pub struct InstanceBlockDeviceMapping {
        device_name / with_device_name: String => ("DeviceName", "deviceName"),
        ebs / with_ebs: EbsInstanceBlockDevice => ("Ebs", "ebs"),
    }
}

ec2_shape! {
    pub struct ElasticGpuAssociation {
        elastic_gpu_id / with_elastic_gpu_id: String => ("ElasticGpuId", "elasticGpuId"),
        elastic_gpu_association_id / with_elastic_gpu_association_id: String => ("ElasticGpuAssociationId", "elasticGpuAssociationId"),
        elastic_gpu_association_state / with_elastic_gpu_association_state: String => ("ElasticGpuAssociationState", "elasticGpuAssociationState"),
        elastic_gpu_association_time / with_elastic_gpu_association_time: String => ("ElasticGpuAssociationTime", "elasticGpuAssociationTime"),
    }
}

ec2_shape! {
    pub struct ElasticInferenceAcceleratorAssociation {
        elastic_inference_accelerator_arn / with_elastic_inference_accelerator_arn: String => ("ElasticInferenceAcceleratorArn", "elasticInferenceAcceleratorArn"),
        elastic_inference_accelerator_association_id / with_elastic_inference_accelerator_association_id: String => ("ElasticInferenceAcceleratorAssociationId", "elasticInferenceAcceleratorAssociationId"),
        elastic_inference_accelerator_association_state / with_elastic_inference_accelerator_association_state: String => ("ElasticInferenceAcceleratorAssociationState", "elasticInferenceAcceleratorAssociationState"),
        elastic_inference_accelerator_association_time / with_elastic_inference_accelerator_association_time: DateTime<Utc> => ("ElasticInferenceAcceleratorAssociationTime", "elasticInferenceAcceleratorAssociationTime"),
    }
}

ec2_shape! {
    pub struct InstanceNetworkInterfaceAssociation {
        ip_owner_id / with_ip_owner_id: String => ("IpOwnerId", "ipOwnerId"),
        public_dns_name / with_public_dns_name: String => ("PublicDnsName", "publicDnsName"),
        public_ip / with_public_ip: String => ("PublicIp", "publicIp"),
    }
}

ec2_shape! {
    pub struct InstanceNetworkInterfaceAttachment {
        attach_time / with_attach_time: DateTime<Utc> => ("AttachTime", "attachTime"),
        attachment_id / with_attachment_id: String => ("AttachmentId", "attachmentId"),
        delete_on_termination / with_delete_on_termination: bool => ("DeleteOnTermination", "deleteOnTermination"),
        device_index / with_device_index: i32 => ("DeviceIndex", "deviceIndex"),
        status / with_status: AttachmentStatus => ("Status", "status"),
    }
}

ec2_shape! {
    pub struct InstanceIpv6Address {
        ipv6_address / with_ipv6_address: String => ("Ipv6Address", "ipv6Address"),
    }
}

ec2_shape! {
    pub struct InstancePrivateIpAddress {
        association / with_association: InstanceNetworkInterfaceAssociation => ("Association", "association"),
        primary / with_primary: bool => ("Primary", "primary"),
        private_dns_name / with_private_dns_name: String => ("PrivateDnsName", "privateDnsName"),
        private_ip_address / with_private_ip_address: String => ("PrivateIpAddress", "privateIpAddress"),
    }
}

ec2_shape! {
    /// A network interface attached to an instance.
    pub struct InstanceNetworkInterface {
        association / with_association: InstanceNetworkInterfaceAssociation => ("Association", "association"),
        attachment / with_attachment: InstanceNetworkInterfaceAttachment => ("Attachment", "attachment"),
        description / with_description: String => ("Description", "description"),
        groups / with_groups: Vec<GroupIdentifier> => ("Groups", "groupSet"),
        ipv6_addresses / with_ipv6_addresses: Vec<InstanceIpv6Address> => ("Ipv6Addresses", "ipv6AddressesSet"),
        mac_address / with_mac_address: String => ("MacAddress", "macAddress"),
        network_interface_id / with_network_interface_id: String => ("NetworkInterfaceId", "networkInterfaceId"),
        owner_id / with_owner_id: String => ("OwnerId", "ownerId"),
        private_dns_name / with_private_dns_name: String => ("PrivateDnsName", "privateDnsName"),
        private_ip_address / with_private_ip_address: String => ("PrivateIpAddress", "privateIpAddress"),
        private_ip_addresses / with_private_ip_addresses: Vec<InstancePrivateIpAddress> => ("PrivateIpAddresses", "privateIpAddressesSet"),
        source_dest_check / with_source_dest_check: bool => ("SourceDestCheck", "sourceDestCheck"),
        status / with_status: NetworkInterfaceStatus => ("Status", "status"),
        subnet_id / with_subnet_id: String => ("SubnetId", "subnetId"),
        vpc_id / with_vpc_id: String => ("VpcId", "vpcId"),
        /// `interface` or `efa`.
        interface_type / with_interface_type: String => ("InterfaceType", "interfaceType"),
    }
}

ec2_shape! {
    pub struct PrivateIpAddressSpecification {
        primary / with_primary: bool => ("Primary", "primary"),
        private_ip_address / with_private_ip_address: String => ("PrivateIpAddress", "privateIpAddress"),
    }
}

ec2_shape! {
    /// A network interface to create or attach at launch.
    pub struct InstanceNetworkInterfaceSpecification {
        associate_public_ip_address / with_associate_public_ip_address: bool => ("AssociatePublicIpAddress", "associatePublicIpAddress"),
        delete_on_termination / with_delete_on_termination: bool => ("DeleteOnTermination", "deleteOnTermination"),
        description / with_description: String => ("Description", "description"),
        device_index / with_device_index: i32 => ("DeviceIndex", "deviceIndex"),
        groups / with_groups: Vec<String> => ("SecurityGroupId", "SecurityGroupId"),
        ipv6_address_count / with_ipv6_address_count: i32 => ("Ipv6AddressCount", "ipv6AddressCount"),
        ipv6_addresses / with_ipv6_addresses: Vec<InstanceIpv6Address> => ("Ipv6Addresses", "ipv6AddressesSet"),
        network_interface_id / with_network_interface_id: String => ("NetworkInterfaceId", "networkInterfaceId"),
        private_ip_address / with_private_ip_address: String => ("PrivateIpAddress", "privateIpAddress"),
        private_ip_addresses / with_private_ip_addresses: Vec<PrivateIpAddressSpecification> => ("PrivateIpAddresses", "privateIpAddressesSet"),
        secondary_private_ip_address_count / with_secondary_private_ip_address_count: i32 => ("SecondaryPrivateIpAddressCount", "secondaryPrivateIpAddressCount"),
        subnet_id / with_subnet_id: String => ("SubnetId", "subnetId"),
        interface_type / with_interface_type: String => ("InterfaceType", "interfaceType"),
    }
}

ec2_shape! {
    /// An EC2 instance.
    pub struct Instance {
        /// Position of this instance among those launched together.
        ami_launch_index / with_ami_launch_index: i32 => ("AmiLaunchIndex", "amiLaunchIndex"),
        image_id / with_image_id: String => ("ImageId", "imageId"),
        instance_id / with_instance_id: String => ("InstanceId", "instanceId"),
        instance_type / with_instance_type: InstanceType => ("InstanceType", "instanceType"),
        kernel_id / with_kernel_id: String => ("KernelId", "kernelId"),
        key_name / with_key_name: String => ("KeyName", "keyName"),
        launch_time / with_launch_time: DateTime<Utc> => ("LaunchTime", "launchTime"),
        monitoring / with_monitoring: Monitoring => ("Monitoring", "monitoring"),
        placement / with_placement: Placement => ("Placement", "placement"),
        platform / with_platform: PlatformValues => ("Platform", "platform"),
        private_dns_name / with_private_dns_name: String => ("PrivateDnsName", "privateDnsName"),
        private_ip_address / with_private_ip_address: String => ("PrivateIpAddress", "privateIpAddress"),
        product_codes / with_product_codes: Vec<ProductCode> => ("ProductCodes", "productCodes"),
        /// Empty until the instance reaches `running`.
        public_dns_name / with_public_dns_name: String => ("PublicDnsName", "dnsName"),
        public_ip_address / with_public_ip_address: String => ("PublicIpAddress", "ipAddress"),
        ramdisk_id / with_ramdisk_id: String => ("RamdiskId", "ramdiskId"),
        state / with_state: InstanceState => ("State", "instanceState"),
        state_transition_reason / with_state_transition_reason: String => ("StateTransitionReason", "reason"),
        subnet_id / with_subnet_id: String => ("SubnetId", "subnetId"),
        vpc_id / with_vpc_id: String => ("VpcId", "vpcId"),
        architecture / with_architecture: ArchitectureValues => ("Architecture", "architecture"),
        block_device_mappings / with_block_device_mappings: Vec<InstanceBlockDeviceMapping> => ("BlockDeviceMappings", "blockDeviceMapping"),
        client_token / with_client_token: String => ("ClientToken", "clientToken"),
        ebs_optimized / with_ebs_optimized: bool => ("EbsOptimized", "ebsOptimized"),
        ena_support / with_ena_support: bool => ("EnaSupport", "enaSupport"),
        hypervisor / with_hypervisor: HypervisorType => ("Hypervisor", "hypervisor"),
        iam_instance_profile / with_iam_instance_profile: IamInstanceProfile => ("IamInstanceProfile", "iamInstanceProfile"),
        instance_lifecycle / with_instance_lifecycle: InstanceLifecycleType => ("InstanceLifecycle", "instanceLifecycle"),
        elastic_gpu_associations / with_elastic_gpu_associations: Vec<ElasticGpuAssociation> => ("ElasticGpuAssociations", "elasticGpuAssociationSet"),
        elastic_inference_accelerator_associations / with_elastic_inference_accelerator_associations: Vec<ElasticInferenceAcceleratorAssociation> => ("ElasticInferenceAcceleratorAssociations", "elasticInferenceAcceleratorAssociationSet"),
        network_interfaces / with_network_interfaces: Vec<InstanceNetworkInterface> => ("NetworkInterfaces", "networkInterfaceSet"),
        outpost_arn / with_outpost_arn: String => ("OutpostArn", "outpostArn"),
        root_device_name / with_root_device_name: String => ("RootDeviceName", "rootDeviceName"),
        root_device_type / with_root_device_type: DeviceType => ("RootDeviceType", "rootDeviceType"),
        security_groups / with_security_groups: Vec<GroupIdentifier> => ("SecurityGroups", "groupSet"),
        source_dest_check / with_source_dest_check: bool => ("SourceDestCheck", "sourceDestCheck"),
        spot_instance_request_id / with_spot_instance_request_id: String => ("SpotInstanceRequestId", "spotInstanceRequestId"),
        sriov_net_support / with_sriov_net_support: String => ("SriovNetSupport", "sriovNetSupport"),
        state_reason / with_state_reason: StateReason => ("StateReason", "stateReason"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
        virtualization_type / with_virtualization_type: VirtualizationType => ("VirtualizationType", "virtualizationType"),
        cpu_options / with_cpu_options: CpuOptions => ("CpuOptions", "cpuOptions"),
        capacity_reservation_id / with_capacity_reservation_id: String => ("CapacityReservationId", "capacityReservationId"),
        capacity_reservation_specification / with_capacity_reservation_specification: CapacityReservationSpecificationResponse => ("CapacityReservationSpecification", "capacityReservationSpecification"),
        hibernation_options / with_hibernation_options: HibernationOptions => ("HibernationOptions", "hibernationOptions"),
        licenses / with_licenses: Vec<LicenseConfiguration> => ("Licenses", "licenseSet"),
        metadata_options / with_metadata_options: InstanceMetadataOptionsResponse => ("MetadataOptions", "metadataOptions"),
    }
}

impl Instance {
    /// Value of the tag `key`, if present.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .as_deref()?
            .iter()
            .find(|t| t.key.as_deref() == Some(key))
            .and_then(|t| t.value.as_deref())
    }
}

ec2_shape! {
    /// Instances launched by one request.
    pub struct Reservation {
        groups / with_groups: Vec<GroupIdentifier> => ("Groups", "groupSet"),
        instances / with_instances: Vec<Instance> => ("Instances", "instancesSet"),
        owner_id / with_owner_id: String => ("OwnerId", "ownerId"),
        /// Set when the instances were launched on your behalf, e.g. by
        /// Auto Scaling.
        requester_id / with_requester_id: String => ("RequesterId", "requesterId"),
        reservation_id / with_reservation_id: String => ("ReservationId", "reservationId"),
    }
}

ec2_shape! {
    pub struct DescribeInstancesRequest {
        filters / with_filters: Vec<Filter> => ("Filter", "filterSet"),
        instance_ids / with_instance_ids: Vec<String> => ("InstanceId", "instanceId"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        /// 5 to 1000. Cannot be combined with `instance_ids`.
        max_results / with_max_results: i32 => ("MaxResults", "maxResults"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
    }
}

ec2_shape! {
    pub struct DescribeInstancesResult {
        reservations / with_reservations: Vec<Reservation> => ("Reservations", "reservationSet"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
    }
}

impl DescribeInstancesResult {
    /// Every instance across all reservations.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> {
        self.reservations
            .iter()
            .flatten()
            .filter_map(|r| r.instances.as_ref())
            .flatten()
    }
}

ec2_shape! {
    /// Parameters of `RunInstances`.
    pub struct RunInstancesRequest {
        block_device_mappings / with_block_device_mappings: Vec<BlockDeviceMapping> => ("BlockDeviceMapping", "BlockDeviceMapping"),
        image_id / with_image_id: String => ("ImageId", "ImageId"),
        instance_type / with_instance_type: InstanceType => ("InstanceType", "InstanceType"),
        ipv6_address_count / with_ipv6_address_count: i32 => ("Ipv6AddressCount", "Ipv6AddressCount"),
        ipv6_addresses / with_ipv6_addresses: Vec<InstanceIpv6Address> => ("Ipv6Address", "Ipv6Address"),
        kernel_id / with_kernel_id: String => ("KernelId", "KernelId"),
        key_name / with_key_name: String => ("KeyName", "KeyName"),
        /// Launch fails unless at least this many can be launched...
        min_count / with_min_count: i32 => ("MinCount", "MinCount"),
        /// ...and no more than this many are launched.
        max_count / with_max_count: i32 => ("MaxCount", "MaxCount"),
        monitoring / with_monitoring: RunInstancesMonitoringEnabled => ("Monitoring", "Monitoring"),
        placement / with_placement: Placement => ("Placement", "Placement"),
        ramdisk_id / with_ramdisk_id: String => ("RamdiskId", "RamdiskId"),
        security_group_ids / with_security_group_ids: Vec<String> => ("SecurityGroupId", "SecurityGroupId"),
        security_groups / with_security_groups: Vec<String> => ("SecurityGroup", "SecurityGroup"),
        subnet_id / with_subnet_id: String => ("SubnetId", "SubnetId"),
        /// Base64-encoded user data.
        user_data / with_user_data: String => ("UserData", "UserData"),
        additional_info / with_additional_info: String => ("AdditionalInfo", "additionalInfo"),
        client_token / with_client_token: String => ("ClientToken", "clientToken"),
        disable_api_termination / with_disable_api_termination: bool => ("DisableApiTermination", "disableApiTermination"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        ebs_optimized / with_ebs_optimized: bool => ("EbsOptimized", "ebsOptimized"),
        iam_instance_profile / with_iam_instance_profile: IamInstanceProfileSpecification => ("IamInstanceProfile", "iamInstanceProfile"),
        instance_initiated_shutdown_behavior / with_instance_initiated_shutdown_behavior: ShutdownBehavior => ("InstanceInitiatedShutdownBehavior", "instanceInitiatedShutdownBehavior"),
        network_interfaces / with_network_interfaces: Vec<InstanceNetworkInterfaceSpecification> => ("NetworkInterface", "networkInterface"),
        private_ip_address / with_private_ip_address: String => ("PrivateIpAddress", "privateIpAddress"),
        elastic_gpu_specification / with_elastic_gpu_specification: Vec<ElasticGpuSpecification> => ("ElasticGpuSpecification", "ElasticGpuSpecification"),
        elastic_inference_accelerators / with_elastic_inference_accelerators: Vec<ElasticInferenceAccelerator> => ("ElasticInferenceAccelerator", "ElasticInferenceAccelerator"),
        tag_specifications / with_tag_specifications: Vec<TagSpecification> => ("TagSpecification", "TagSpecification"),
        launch_template / with_launch_template: LaunchTemplateSpecification => ("LaunchTemplate", "LaunchTemplate"),
        instance_market_options / with_instance_market_options: InstanceMarketOptionsRequest => ("InstanceMarketOptions", "InstanceMarketOptions"),
        credit_specification / with_credit_specification: CreditSpecificationRequest => ("CreditSpecification", "CreditSpecification"),
        cpu_options / with_cpu_options: CpuOptionsRequest => ("CpuOptions", "CpuOptions"),
        capacity_reservation_specification / with_capacity_reservation_specification: CapacityReservationSpecification => ("CapacityReservationSpecification", "CapacityReservationSpecification"),
        hibernation_options / with_hibernation_options: HibernationOptionsRequest => ("HibernationOptions", "HibernationOptions"),
        license_specifications / with_license_specifications: Vec<LicenseConfigurationRequest> => ("LicenseSpecification", "LicenseSpecification"),
        metadata_options / with_metadata_options: InstanceMetadataOptionsRequest => ("MetadataOptions", "MetadataOptions"),
    }
}

impl RunInstancesRequest {
    /// Launch exactly `count` instances of `image_id`.
    pub fn launch(image_id: impl Into<String>, count: i32) -> Self {
        Self::new()
            .with_image_id(image_id)
            .with_min_count(count)
            .with_max_count(count)
    }

    /// Set `user_data` from a plain script, base64-encoding it.
    pub fn with_user_script(self, script: &str) -> Self {
        self.with_user_data(encode_user_data(script))
    }
}

/// EC2 expects user data base64-encoded.
pub fn encode_user_data(script: &str) -> String {
    base64::Engine::encode(&base64::engine::general_purpose::STANDARD, script)
}

ec2_shape! {
    /// Launch template to use for `RunInstances`. Give either the ID or the
    /// name. `version` accepts a number, `$Latest` or `$Default`.
    pub struct LaunchTemplateSpecification {
        launch_template_id / with_launch_template_id: String => ("LaunchTemplateId", "launchTemplateId"),
        launch_template_name / with_launch_template_name: String => ("LaunchTemplateName", "launchTemplateName"),
        version / with_version: String => ("Version", "version"),
    }
}

/// `RunInstances` answers with the reservation it created.
pub type RunInstancesResult = Reservation;

ec2_shape! {
    pub struct StartInstancesRequest {
        instance_ids / with_instance_ids: Vec<String> => ("InstanceId", "InstanceId"),
        additional_info / with_additional_info: String => ("AdditionalInfo", "additionalInfo"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
    }
}

ec2_shape! {
    pub struct StopInstancesRequest {
        instance_ids / with_instance_ids: Vec<String> => ("InstanceId", "InstanceId"),
        hibernate / with_hibernate: bool => ("Hibernate", "Hibernate"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        /// Skips the graceful OS shutdown.
        force / with_force: bool => ("Force", "force"),
    }
}

ec2_shape! {
    pub struct TerminateInstancesRequest {
        instance_ids / with_instance_ids: Vec<String> => ("InstanceId", "InstanceId"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
    }
}

ec2_shape! {
    /// An instance state transition.
    pub struct InstanceStateChange {
        current_state / with_current_state: InstanceState => ("CurrentState", "currentState"),
        instance_id / with_instance_id: String => ("InstanceId", "instanceId"),
        previous_state / with_previous_state: InstanceState => ("PreviousState", "previousState"),
    }
}

ec2_shape! {
    pub struct StartInstancesResult {
        starting_instances / with_starting_instances: Vec<InstanceStateChange> => ("StartingInstances", "instancesSet"),
    }
}

ec2_shape! {
    pub struct StopInstancesResult {
        stopping_instances / with_stopping_instances: Vec<InstanceStateChange> => ("StoppingInstances", "instancesSet"),
    }
}

ec2_shape! {
    pub struct TerminateInstancesResult {
        terminating_instances / with_terminating_instances: Vec<InstanceStateChange> => ("TerminatingInstances", "instancesSet"),
    }
}
