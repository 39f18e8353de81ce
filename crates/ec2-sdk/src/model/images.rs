//! Machine images: `DescribeImages`.

use super::common::*;
use crate::shape::{ec2_enum, ec2_shape};

ec2_enum! {
    pub enum ImageState {
        Pending => "pending",
        Available => "available",
        Invalid => "invalid",
        Deregistered => "deregistered",
        Transient => "transient",
        Failed => "failed",
        Error => "error",
    }
}

ec2_enum! {
    pub enum ImageTypeValues {
        Machine => "machine",
        Kernel => "kernel",
        Ramdisk => "ramdisk",
    }
}

ec2_shape! {
    /// An Amazon Machine Image.
    pub struct Image {
        architecture / with_architecture: ArchitectureValues => ("Architecture", "architecture"),
        /// Kept as sent by the service.
        creation_date / with_creation_date: String => ("CreationDate", "creationDate"),
        image_id / with_image_id: String => ("ImageId", "imageId"),
        image_location / with_image_location: String => ("ImageLocation", "imageLocation"),
        image_type / with_image_type: ImageTypeValues => ("ImageType", "imageType"),
        /// Whether the image has public launch permissions.
        public / with_public: bool => ("Public", "isPublic"),
        kernel_id / with_kernel_id: String => ("KernelId", "kernelId"),
        owner_id / with_owner_id: String => ("OwnerId", "imageOwnerId"),
        platform / with_platform: PlatformValues => ("Platform", "platform"),
        platform_details / with_platform_details: String => ("PlatformDetails", "platformDetails"),
        usage_operation / with_usage_operation: String => ("UsageOperation", "usageOperation"),
        product_codes / with_product_codes: Vec<ProductCode> => ("ProductCodes", "productCodes"),
        ramdisk_id / with_ramdisk_id: String => ("RamdiskId", "ramdiskId"),
        state / with_state: ImageState => ("State", "imageState"),
        block_device_mappings / with_block_device_mappings: Vec<BlockDeviceMapping> => ("BlockDeviceMappings", "blockDeviceMapping"),
        description / with_description: String => ("Description", "description"),
        ena_support / with_ena_support: bool => ("EnaSupport", "enaSupport"),
        hypervisor / with_hypervisor: HypervisorType => ("Hypervisor", "hypervisor"),
        /// `amazon`, `aws-marketplace` or the owner's alias.
        image_owner_alias / with_image_owner_alias: String => ("ImageOwnerAlias", "imageOwnerAlias"),
        name / with_name: String => ("Name", "name"),
        root_device_name / with_root_device_name: String => ("RootDeviceName", "rootDeviceName"),
        root_device_type / with_root_device_type: DeviceType => ("RootDeviceType", "rootDeviceType"),
        sriov_net_support / with_sriov_net_support: String => ("SriovNetSupport", "sriovNetSupport"),
        state_reason / with_state_reason: StateReason => ("StateReason", "stateReason"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
        virtualization_type / with_virtualization_type: VirtualizationType => ("VirtualizationType", "virtualizationType"),
    }
}

ec2_shape! {
    pub struct DescribeImagesRequest {
        /// Account IDs, `self` or `all`.
        executable_users / with_executable_users: Vec<String> => ("ExecutableBy", "ExecutableBy"),
        filters / with_filters: Vec<Filter> => ("Filter", "Filter"),
        image_ids / with_image_ids: Vec<String> => ("ImageId", "ImageId"),
        /// Account IDs, `self`, `amazon` or `aws-marketplace`.
        owners / with_owners: Vec<String> => ("Owner", "Owner"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
    }
}

ec2_shape! {
    pub struct DescribeImagesResult {
        images / with_images: Vec<Image> => ("Images", "imagesSet"),
    }
}
