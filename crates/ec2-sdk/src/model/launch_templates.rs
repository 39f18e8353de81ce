//! Launch templates: `CreateLaunchTemplate` and
//! `DescribeLaunchTemplateVersions`.
//!
//! Template data comes in two flavours. The `*Request` shapes are what a
//! caller sends; the plain ones are what the service answers with and use
//! `*Set` element names for lists.

use super::common::*;
use super::instance_types::InstanceType;
use crate::shape::ec2_shape;
use chrono::{DateTime, Utc};

ec2_shape! {
    pub struct LaunchTemplateEbsBlockDeviceRequest {
        encrypted / with_encrypted: bool => ("Encrypted", "Encrypted"),
        delete_on_termination / with_delete_on_termination: bool => ("DeleteOnTermination", "DeleteOnTermination"),
        iops / with_iops: i32 => ("Iops", "Iops"),
        kms_key_id / with_kms_key_id: String => ("KmsKeyId", "KmsKeyId"),
        snapshot_id / with_snapshot_id: String => ("SnapshotId", "SnapshotId"),
        volume_size / with_volume_size: i32 => ("VolumeSize", "VolumeSize"),
        volume_type / with_volume_type: VolumeType => ("VolumeType", "VolumeType"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateEbsBlockDevice {
        encrypted / with_encrypted: bool => ("Encrypted", "encrypted"),
        delete_on_termination / with_delete_on_termination: bool => ("DeleteOnTermination", "deleteOnTermination"),
        iops / with_iops: i32 => ("Iops", "iops"),
        kms_key_id / with_kms_key_id: String => ("KmsKeyId", "kmsKeyId"),
        snapshot_id / with_snapshot_id: String => ("SnapshotId", "snapshotId"),
        volume_size / with_volume_size: i32 => ("VolumeSize", "volumeSize"),
        volume_type / with_volume_type: VolumeType => ("VolumeType", "volumeType"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateBlockDeviceMappingRequest {
        device_name / with_device_name: String => ("DeviceName", "DeviceName"),
        virtual_name / with_virtual_name: String => ("VirtualName", "VirtualName"),
        ebs / with_ebs: LaunchTemplateEbsBlockDeviceRequest => ("Ebs", "Ebs"),
        no_device / with_no_device: String => ("NoDevice", "NoDevice"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateBlockDeviceMapping {
        device_name / with_device_name: String => ("DeviceName", "deviceName"),
        virtual_name / with_virtual_name: String => ("VirtualName", "virtualName"),
        ebs / with_ebs: LaunchTemplateEbsBlockDevice => ("Ebs", "ebs"),
        no_device / with_no_device: String => ("NoDevice", "noDevice"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateIamInstanceProfileSpecificationRequest {
        arn / with_arn: String => ("Arn", "Arn"),
        name / with_name: String => ("Name", "Name"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateIamInstanceProfileSpecification {
        arn / with_arn: String => ("Arn", "arn"),
        name / with_name: String => ("Name", "name"),
    }
}

ec2_shape! {
    pub struct InstanceIpv6AddressRequest {
        ipv6_address / with_ipv6_address: String => ("Ipv6Address", "Ipv6Address"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
        associate_public_ip_address / with_associate_public_ip_address: bool => ("AssociatePublicIpAddress", "AssociatePublicIpAddress"),
        delete_on_termination / with_delete_on_termination: bool => ("DeleteOnTermination", "DeleteOnTermination"),
        description / with_description: String => ("Description", "Description"),
        device_index / with_device_index: i32 => ("DeviceIndex", "DeviceIndex"),
        groups / with_groups: Vec<String> => ("SecurityGroupId", "SecurityGroupId"),
        interface_type / with_interface_type: String => ("InterfaceType", "InterfaceType"),
        ipv6_address_count / with_ipv6_address_count: i32 => ("Ipv6AddressCount", "Ipv6AddressCount"),
        ipv6_addresses / with_ipv6_addresses: Vec<InstanceIpv6AddressRequest> => ("Ipv6Addresses", "Ipv6Addresses"),
        network_interface_id / with_network_interface_id: String => ("NetworkInterfaceId", "NetworkInterfaceId"),
        private_ip_address / with_private_ip_address: String => ("PrivateIpAddress", "PrivateIpAddress"),
        private_ip_addresses / with_private_ip_addresses: Vec<super::instances::PrivateIpAddressSpecification> => ("PrivateIpAddresses", "PrivateIpAddresses"),
        secondary_private_ip_address_count / with_secondary_private_ip_address_count: i32 => ("SecondaryPrivateIpAddressCount", "SecondaryPrivateIpAddressCount"),
        subnet_id / with_subnet_id: String => ("SubnetId", "SubnetId"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateInstanceNetworkInterfaceSpecification {
        associate_public_ip_address / with_associate_public_ip_address: bool => ("AssociatePublicIpAddress", "associatePublicIpAddress"),
        delete_on_termination / with_delete_on_termination: bool => ("DeleteOnTermination", "deleteOnTermination"),
        description / with_description: String => ("Description", "description"),
        device_index / with_device_index: i32 => ("DeviceIndex", "deviceIndex"),
        groups / with_groups: Vec<String> => ("Groups", "groupSet"),
        interface_type / with_interface_type: String => ("InterfaceType", "interfaceType"),
        ipv6_address_count / with_ipv6_address_count: i32 => ("Ipv6AddressCount", "ipv6AddressCount"),
        ipv6_addresses / with_ipv6_addresses: Vec<super::instances::InstanceIpv6Address> => ("Ipv6Addresses", "ipv6AddressesSet"),
        network_interface_id / with_network_interface_id: String => ("NetworkInterfaceId", "networkInterfaceId"),
        private_ip_address / with_private_ip_address: String => ("PrivateIpAddress", "privateIpAddress"),
        private_ip_addresses / with_private_ip_addresses: Vec<super::instances::PrivateIpAddressSpecification> => ("PrivateIpAddresses", "privateIpAddressesSet"),
        secondary_private_ip_address_count / with_secondary_private_ip_address_count: i32 => ("SecondaryPrivateIpAddressCount", "secondaryPrivateIpAddressCount"),
        subnet_id / with_subnet_id: String => ("SubnetId", "subnetId"),
    }
}

ec2_shape! {
    pub struct LaunchTemplatesMonitoringRequest {
        enabled / with_enabled: bool => ("Enabled", "Enabled"),
    }
}

ec2_shape! {
    pub struct LaunchTemplatesMonitoring {
        enabled / with_enabled: bool => ("Enabled", "enabled"),
    }
}

ec2_shape! {
    pub struct LaunchTemplatePlacementRequest {
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "AvailabilityZone"),
        affinity / with_affinity: String => ("Affinity", "Affinity"),
        group_name / with_group_name: String => ("GroupName", "GroupName"),
        host_id / with_host_id: String => ("HostId", "HostId"),
        tenancy / with_tenancy: Tenancy => ("Tenancy", "Tenancy"),
        spread_domain / with_spread_domain: String => ("SpreadDomain", "SpreadDomain"),
        host_resource_group_arn / with_host_resource_group_arn: String => ("HostResourceGroupArn", "HostResourceGroupArn"),
        partition_number / with_partition_number: i32 => ("PartitionNumber", "PartitionNumber"),
    }
}

ec2_shape! {
    pub struct LaunchTemplatePlacement {
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "availabilityZone"),
        affinity / with_affinity: String => ("Affinity", "affinity"),
        group_name / with_group_name: String => ("GroupName", "groupName"),
        host_id / with_host_id: String => ("HostId", "hostId"),
        tenancy / with_tenancy: Tenancy => ("Tenancy", "tenancy"),
        spread_domain / with_spread_domain: String => ("SpreadDomain", "spreadDomain"),
        host_resource_group_arn / with_host_resource_group_arn: String => ("HostResourceGroupArn", "hostResourceGroupArn"),
        partition_number / with_partition_number: i32 => ("PartitionNumber", "partitionNumber"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateTagSpecificationRequest {
        resource_type / with_resource_type: ResourceType => ("ResourceType", "ResourceType"),
        tags / with_tags: Vec<Tag> => ("Tag", "Tag"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateTagSpecification {
        resource_type / with_resource_type: ResourceType => ("ResourceType", "resourceType"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
    }
}

ec2_shape! {
    pub struct ElasticGpuSpecificationResponse {
        gpu_type / with_gpu_type: String => ("Type", "type"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateElasticInferenceAccelerator {
        accelerator_type / with_accelerator_type: String => ("Type", "Type"),
        count / with_count: i32 => ("Count", "Count"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateElasticInferenceAcceleratorResponse {
        accelerator_type / with_accelerator_type: String => ("Type", "type"),
        count / with_count: i32 => ("Count", "count"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateSpotMarketOptionsRequest {
        max_price / with_max_price: String => ("MaxPrice", "MaxPrice"),
        spot_instance_type / with_spot_instance_type: SpotInstanceType => ("SpotInstanceType", "SpotInstanceType"),
        block_duration_minutes / with_block_duration_minutes: i32 => ("BlockDurationMinutes", "BlockDurationMinutes"),
        valid_until / with_valid_until: DateTime<Utc> => ("ValidUntil", "ValidUntil"),
        instance_interruption_behavior / with_instance_interruption_behavior: InstanceInterruptionBehavior => ("InstanceInterruptionBehavior", "InstanceInterruptionBehavior"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateSpotMarketOptions {
        max_price / with_max_price: String => ("MaxPrice", "maxPrice"),
        spot_instance_type / with_spot_instance_type: SpotInstanceType => ("SpotInstanceType", "spotInstanceType"),
        block_duration_minutes / with_block_duration_minutes: i32 => ("BlockDurationMinutes", "blockDurationMinutes"),
        valid_until / with_valid_until: DateTime<Utc> => ("ValidUntil", "validUntil"),
        instance_interruption_behavior / with_instance_interruption_behavior: InstanceInterruptionBehavior => ("InstanceInterruptionBehavior", "instanceInterruptionBehavior"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateInstanceMarketOptionsRequest {
        market_type / with_market_type: MarketType => ("MarketType", "MarketType"),
        spot_options / with_spot_options: LaunchTemplateSpotMarketOptionsRequest => ("SpotOptions", "SpotOptions"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateInstanceMarketOptions {
        market_type / with_market_type: MarketType => ("MarketType", "marketType"),
        spot_options / with_spot_options: LaunchTemplateSpotMarketOptions => ("SpotOptions", "spotOptions"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateCpuOptionsRequest {
        core_count / with_core_count: i32 => ("CoreCount", "CoreCount"),
        threads_per_core / with_threads_per_core: i32 => ("ThreadsPerCore", "ThreadsPerCore"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateCpuOptions {
        core_count / with_core_count: i32 => ("CoreCount", "coreCount"),
        threads_per_core / with_threads_per_core: i32 => ("ThreadsPerCore", "threadsPerCore"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateCapacityReservationSpecificationRequest {
        capacity_reservation_preference / with_capacity_reservation_preference: CapacityReservationPreference => ("CapacityReservationPreference", "CapacityReservationPreference"),
        capacity_reservation_target / with_capacity_reservation_target: CapacityReservationTarget => ("CapacityReservationTarget", "CapacityReservationTarget"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateCapacityReservationSpecificationResponse {
        capacity_reservation_preference / with_capacity_reservation_preference: CapacityReservationPreference => ("CapacityReservationPreference", "capacityReservationPreference"),
        capacity_reservation_target / with_capacity_reservation_target: CapacityReservationTargetResponse => ("CapacityReservationTarget", "capacityReservationTarget"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateLicenseConfigurationRequest {
        license_configuration_arn / with_license_configuration_arn: String => ("LicenseConfigurationArn", "LicenseConfigurationArn"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateLicenseConfiguration {
        license_configuration_arn / with_license_configuration_arn: String => ("LicenseConfigurationArn", "licenseConfigurationArn"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateHibernationOptionsRequest {
        configured / with_configured: bool => ("Configured", "Configured"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateHibernationOptions {
        configured / with_configured: bool => ("Configured", "configured"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateInstanceMetadataOptionsRequest {
        http_tokens / with_http_tokens: HttpTokensState => ("HttpTokens", "HttpTokens"),
        http_put_response_hop_limit / with_http_put_response_hop_limit: i32 => ("HttpPutResponseHopLimit", "HttpPutResponseHopLimit"),
        http_endpoint / with_http_endpoint: InstanceMetadataEndpointState => ("HttpEndpoint", "HttpEndpoint"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateInstanceMetadataOptions {
        state / with_state: InstanceMetadataOptionsState => ("State", "state"),
        http_tokens / with_http_tokens: HttpTokensState => ("HttpTokens", "httpTokens"),
        http_put_response_hop_limit / with_http_put_response_hop_limit: i32 => ("HttpPutResponseHopLimit", "httpPutResponseHopLimit"),
        http_endpoint / with_http_endpoint: InstanceMetadataEndpointState => ("HttpEndpoint", "httpEndpoint"),
    }
}

ec2_shape! {
    /// Launch parameters stored in a new template version.
    pub struct RequestLaunchTemplateData {
        kernel_id / with_kernel_id: String => ("KernelId", "KernelId"),
        ebs_optimized / with_ebs_optimized: bool => ("EbsOptimized", "EbsOptimized"),
        iam_instance_profile / with_iam_instance_profile: LaunchTemplateIamInstanceProfileSpecificationRequest => ("IamInstanceProfile", "IamInstanceProfile"),
        block_device_mappings / with_block_device_mappings: Vec<LaunchTemplateBlockDeviceMappingRequest> => ("BlockDeviceMapping", "BlockDeviceMapping"),
        network_interfaces / with_network_interfaces: Vec<LaunchTemplateInstanceNetworkInterfaceSpecificationRequest> => ("NetworkInterface", "NetworkInterface"),
        image_id / with_image_id: String => ("ImageId", "ImageId"),
        instance_type / with_instance_type: InstanceType => ("InstanceType", "InstanceType"),
        key_name / with_key_name: String => ("KeyName", "KeyName"),
        monitoring / with_monitoring: LaunchTemplatesMonitoringRequest => ("Monitoring", "Monitoring"),
        placement / with_placement: LaunchTemplatePlacementRequest => ("Placement", "Placement"),
        ram_disk_id / with_ram_disk_id: String => ("RamDiskId", "RamDiskId"),
        disable_api_termination / with_disable_api_termination: bool => ("DisableApiTermination", "DisableApiTermination"),
        instance_initiated_shutdown_behavior / with_instance_initiated_shutdown_behavior: ShutdownBehavior => ("InstanceInitiatedShutdownBehavior", "InstanceInitiatedShutdownBehavior"),
        /// Base64-encoded.
        user_data / with_user_data: String => ("UserData", "UserData"),
        tag_specifications / with_tag_specifications: Vec<LaunchTemplateTagSpecificationRequest> => ("TagSpecification", "TagSpecification"),
        elastic_gpu_specifications / with_elastic_gpu_specifications: Vec<ElasticGpuSpecification> => ("ElasticGpuSpecification", "ElasticGpuSpecification"),
        elastic_inference_accelerators / with_elastic_inference_accelerators: Vec<LaunchTemplateElasticInferenceAccelerator> => ("ElasticInferenceAccelerator", "ElasticInferenceAccelerator"),
        security_group_ids / with_security_group_ids: Vec<String> => ("SecurityGroupId", "SecurityGroupId"),
        security_groups / with_security_groups: Vec<String> => ("SecurityGroup", "SecurityGroup"),
        instance_market_options / with_instance_market_options: LaunchTemplateInstanceMarketOptionsRequest => ("InstanceMarketOptions", "InstanceMarketOptions"),
        credit_specification / with_credit_specification: CreditSpecificationRequest => ("CreditSpecification", "CreditSpecification"),
        cpu_options / with_cpu_options: LaunchTemplateCpuOptionsRequest => ("CpuOptions", "CpuOptions"),
        capacity_reservation_specification / with_capacity_reservation_specification: LaunchTemplateCapacityReservationSpecificationRequest => ("CapacityReservationSpecification", "CapacityReservationSpecification"),
        license_specifications / with_license_specifications: Vec<LaunchTemplateLicenseConfigurationRequest> => ("LicenseSpecification", "LicenseSpecification"),
        hibernation_options / with_hibernation_options: LaunchTemplateHibernationOptionsRequest => ("HibernationOptions", "HibernationOptions"),
        metadata_options / with_metadata_options: LaunchTemplateInstanceMetadataOptionsRequest => ("MetadataOptions", "MetadataOptions"),
    }
}

impl RequestLaunchTemplateData {
    /// Set `user_data` from a plain script, base64-encoding it.
    pub fn with_user_script(self, script: &str) -> Self {
        self.with_user_data(super::instances::encode_user_data(script))
    }
}

ec2_shape! {
    /// Launch parameters of a template version, as returned by the service.
    pub struct ResponseLaunchTemplateData {
        kernel_id / with_kernel_id: String => ("KernelId", "kernelId"),
        ebs_optimized / with_ebs_optimized: bool => ("EbsOptimized", "ebsOptimized"),
        iam_instance_profile / with_iam_instance_profile: LaunchTemplateIamInstanceProfileSpecification => ("IamInstanceProfile", "iamInstanceProfile"),
        block_device_mappings / with_block_device_mappings: Vec<LaunchTemplateBlockDeviceMapping> => ("BlockDeviceMappings", "blockDeviceMappingSet"),
        network_interfaces / with_network_interfaces: Vec<LaunchTemplateInstanceNetworkInterfaceSpecification> => ("NetworkInterfaces", "networkInterfaceSet"),
        image_id / with_image_id: String => ("ImageId", "imageId"),
        instance_type / with_instance_type: InstanceType => ("InstanceType", "instanceType"),
        key_name / with_key_name: String => ("KeyName", "keyName"),
        monitoring / with_monitoring: LaunchTemplatesMonitoring => ("Monitoring", "monitoring"),
        placement / with_placement: LaunchTemplatePlacement => ("Placement", "placement"),
        ram_disk_id / with_ram_disk_id: String => ("RamDiskId", "ramDiskId"),
        disable_api_termination / with_disable_api_termination: bool => ("DisableApiTermination", "disableApiTermination"),
        instance_initiated_shutdown_behavior / with_instance_initiated_shutdown_behavior: ShutdownBehavior => ("InstanceInitiatedShutdownBehavior", "instanceInitiatedShutdownBehavior"),
        user_data / with_user_data: String => ("UserData", "userData"),
        tag_specifications / with_tag_specifications: Vec<LaunchTemplateTagSpecification> => ("TagSpecifications", "tagSpecificationSet"),
        elastic_gpu_specifications / with_elastic_gpu_specifications: Vec<ElasticGpuSpecificationResponse> => ("ElasticGpuSpecifications", "elasticGpuSpecificationSet"),
        elastic_inference_accelerators / with_elastic_inference_accelerators: Vec<LaunchTemplateElasticInferenceAcceleratorResponse> => ("ElasticInferenceAccelerators", "elasticInferenceAcceleratorSet"),
        security_group_ids / with_security_group_ids: Vec<String> => ("SecurityGroupIds", "securityGroupIdSet"),
        security_groups / with_security_groups: Vec<String> => ("SecurityGroups", "securityGroupSet"),
        instance_market_options / with_instance_market_options: LaunchTemplateInstanceMarketOptions => ("InstanceMarketOptions", "instanceMarketOptions"),
        credit_specification / with_credit_specification: CreditSpecification => ("CreditSpecification", "creditSpecification"),
        cpu_options / with_cpu_options: LaunchTemplateCpuOptions => ("CpuOptions", "cpuOptions"),
        capacity_reservation_specification / with_capacity_reservation_specification: LaunchTemplateCapacityReservationSpecificationResponse => ("CapacityReservationSpecification", "capacityReservationSpecification"),
        license_specifications / with_license_specifications: Vec<LaunchTemplateLicenseConfiguration> => ("LicenseSpecifications", "licenseSet"),
        hibernation_options / with_hibernation_options: LaunchTemplateHibernationOptions => ("HibernationOptions", "hibernationOptions"),
        metadata_options / with_metadata_options: LaunchTemplateInstanceMetadataOptions => ("MetadataOptions", "metadataOptions"),
    }
}

ec2_shape! {
    pub struct CreateLaunchTemplateRequest {
        dry_run / with_dry_run: bool => ("DryRun", "DryRun"),
        /// Idempotency token; generated when left unset.
        client_token / with_client_token: String => ("ClientToken", "ClientToken"),
        launch_template_name / with_launch_template_name: String => ("LaunchTemplateName", "LaunchTemplateName"),
        version_description / with_version_description: String => ("VersionDescription", "VersionDescription"),
        launch_template_data / with_launch_template_data: RequestLaunchTemplateData => ("LaunchTemplateData", "LaunchTemplateData"),
        tag_specifications / with_tag_specifications: Vec<TagSpecification> => ("TagSpecification", "TagSpecification"),
    }
}

ec2_shape! {
    pub struct LaunchTemplate {
        launch_template_id / with_launch_template_id: String => ("LaunchTemplateId", "launchTemplateId"),
        launch_template_name / with_launch_template_name: String => ("LaunchTemplateName", "launchTemplateName"),
        create_time / with_create_time: DateTime<Utc> => ("CreateTime", "createTime"),
        created_by / with_created_by: String => ("CreatedBy", "createdBy"),
        default_version_number / with_default_version_number: i64 => ("DefaultVersionNumber", "defaultVersionNumber"),
        latest_version_number / with_latest_version_number: i64 => ("LatestVersionNumber", "latestVersionNumber"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
    }
}

ec2_shape! {
    pub struct ValidationError {
        code / with_code: String => ("Code", "code"),
        message / with_message: String => ("Message", "message"),
    }
}

ec2_shape! {
    /// Problems found in the template data that did not stop creation.
    pub struct ValidationWarning {
        errors / with_errors: Vec<ValidationError> => ("Errors", "errorSet"),
    }
}

ec2_shape! {
    pub struct CreateLaunchTemplateResult {
        launch_template / with_launch_template: LaunchTemplate => ("LaunchTemplate", "launchTemplate"),
        warning / with_warning: ValidationWarning => ("Warning", "warning"),
    }
}

ec2_shape! {
    pub struct DescribeLaunchTemplateVersionsRequest {
        dry_run / with_dry_run: bool => ("DryRun", "DryRun"),
        launch_template_id / with_launch_template_id: String => ("LaunchTemplateId", "LaunchTemplateId"),
        launch_template_name / with_launch_template_name: String => ("LaunchTemplateName", "LaunchTemplateName"),
        /// Version numbers, `$Latest` or `$Default`.
        versions / with_versions: Vec<String> => ("LaunchTemplateVersion", "LaunchTemplateVersion"),
        min_version / with_min_version: String => ("MinVersion", "MinVersion"),
        max_version / with_max_version: String => ("MaxVersion", "MaxVersion"),
        next_token / with_next_token: String => ("NextToken", "NextToken"),
        max_results / with_max_results: i32 => ("MaxResults", "MaxResults"),
        filters / with_filters: Vec<Filter> => ("Filter", "Filter"),
    }
}

ec2_shape! {
    pub struct LaunchTemplateVersion {
        launch_template_id / with_launch_template_id: String => ("LaunchTemplateId", "launchTemplateId"),
        launch_template_name / with_launch_template_name: String => ("LaunchTemplateName", "launchTemplateName"),
        version_number / with_version_number: i64 => ("VersionNumber", "versionNumber"),
        version_description / with_version_description: String => ("VersionDescription", "versionDescription"),
        create_time / with_create_time: DateTime<Utc> => ("CreateTime", "createTime"),
        created_by / with_created_by: String => ("CreatedBy", "createdBy"),
        default_version / with_default_version: bool => ("DefaultVersion", "defaultVersion"),
        launch_template_data / with_launch_template_data: ResponseLaunchTemplateData => ("LaunchTemplateData", "launchTemplateData"),
    }
}

ec2_shape! {
    pub struct DescribeLaunchTemplateVersionsResult {
        launch_template_versions / with_launch_template_versions: Vec<LaunchTemplateVersion> => ("LaunchTemplateVersions", "launchTemplateVersionSet"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
    }
}
