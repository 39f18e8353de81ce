//! Instance type catalogue: `DescribeInstanceTypes`.

use super::common::*;
use crate::shape::{ec2_enum, ec2_shape};

ec2_enum! {
    /// Instance types known to the 2016-11-15 API model. Newer types parse
    /// as `Unknown` and are sent back unchanged.
    pub enum InstanceType {
        T1Micro => "t1.micro",
        T2Nano => "t2.nano",
        T2Micro => "t2.micro",
        T2Small => "t2.small",
        T2Medium => "t2.medium",
        T2Large => "t2.large",
        T2Xlarge => "t2.xlarge",
        T22xlarge => "t2.2xlarge",
        T3Nano => "t3.nano",
        T3Micro => "t3.micro",
        T3Small => "t3.small",
        T3Medium => "t3.medium",
        T3Large => "t3.large",
        T3Xlarge => "t3.xlarge",
        T32xlarge => "t3.2xlarge",
        T3aNano => "t3a.nano",
        T3aMicro => "t3a.micro",
        T3aSmall => "t3a.small",
        T3aMedium => "t3a.medium",
        T3aLarge => "t3a.large",
        T3aXlarge => "t3a.xlarge",
        T3a2xlarge => "t3a.2xlarge",
        M1Small => "m1.small",
        M1Medium => "m1.medium",
        M1Large => "m1.large",
        M1Xlarge => "m1.xlarge",
        M3Medium => "m3.medium",
        M3Large => "m3.large",
        M3Xlarge => "m3.xlarge",
        M32xlarge => "m3.2xlarge",
        M4Large => "m4.large",
        M4Xlarge => "m4.xlarge",
        M42xlarge => "m4.2xlarge",
        M44xlarge => "m4.4xlarge",
        M410xlarge => "m4.10xlarge",
        M416xlarge => "m4.16xlarge",
        M2Xlarge => "m2.xlarge",
        M22xlarge => "m2.2xlarge",
        M24xlarge => "m2.4xlarge",
        Cr18xlarge => "cr1.8xlarge",
        R3Large => "r3.large",
        R3Xlarge => "r3.xlarge",
        R32xlarge => "r3.2xlarge",
        R34xlarge => "r3.4xlarge",
        R38xlarge => "r3.8xlarge",
        R4Large => "r4.large",
        R4Xlarge => "r4.xlarge",
        R42xlarge => "r4.2xlarge",
        R44xlarge => "r4.4xlarge",
        R48xlarge => "r4.8xlarge",
        R416xlarge => "r4.16xlarge",
        R5Large => "r5.large",
        R5Xlarge => "r5.xlarge",
        R52xlarge => "r5.2xlarge",
        R54xlarge => "r5.4xlarge",
        R58xlarge => "r5.8xlarge",
        R512xlarge => "r5.12xlarge",
        R516xlarge => "r5.16xlarge",
        R524xlarge => "r5.24xlarge",
        R5Metal => "r5.metal",
        R5aLarge => "r5a.large",
        R5aXlarge => "r5a.xlarge",
        R5a2xlarge => "r5a.2xlarge",
        R5a4xlarge => "r5a.4xlarge",
        R5a8xlarge => "r5a.8xlarge",
        R5a12xlarge => "r5a.12xlarge",
        R5a16xlarge => "r5a.16xlarge",
        R5a24xlarge => "r5a.24xlarge",
        R5adLarge => "r5ad.large",
        R5adXlarge => "r5ad.xlarge",
        R5ad2xlarge => "r5ad.2xlarge",
        R5ad4xlarge => "r5ad.4xlarge",
        R5ad8xlarge => "r5ad.8xlarge",
        R5ad12xlarge => "r5ad.12xlarge",
        R5ad16xlarge => "r5ad.16xlarge",
        R5ad24xlarge => "r5ad.24xlarge",
        R5dLarge => "r5d.large",
        R5dXlarge => "r5d.xlarge",
        R5d2xlarge => "r5d.2xlarge",
        R5d4xlarge => "r5d.4xlarge",
        R5d8xlarge => "r5d.8xlarge",
        R5d12xlarge => "r5d.12xlarge",
        R5d16xlarge => "r5d.16xlarge",
        R5d24xlarge => "r5d.24xlarge",
        R5dMetal => "r5d.metal",
        R5dnLarge => "r5dn.large",
        R5dnXlarge => "r5dn.xlarge",
        R5dn2xlarge => "r5dn.2xlarge",
        R5dn4xlarge => "r5dn.4xlarge",
        R5dn8xlarge => "r5dn.8xlarge",
        R5dn12xlarge => "r5dn.12xlarge",
        R5dn16xlarge => "r5dn.16xlarge",
        R5dn24xlarge => "r5dn.24xlarge",
        R5nLarge => "r5n.large",
        R5nXlarge => "r5n.xlarge",
        R5n2xlarge => "r5n.2xlarge",
        R5n4xlarge => "r5n.4xlarge",
        R5n8xlarge => "r5n.8xlarge",
        R5n12xlarge => "r5n.12xlarge",
        R5n16xlarge => "r5n.16xlarge",
        R5n24xlarge => "r5n.24xlarge",
        R6gMetal => "r6g.metal",
        R6gMedium => "r6g.medium",
        R6gLarge => "r6g.large",
        R6gXlarge => "r6g.xlarge",
        R6g2xlarge => "r6g.2xlarge",
        R6g4xlarge => "r6g.4xlarge",
        R6g8xlarge => "r6g.8xlarge",
        R6g12xlarge => "r6g.12xlarge",
        R6g16xlarge => "r6g.16xlarge",
        X116xlarge => "x1.16xlarge",
        X132xlarge => "x1.32xlarge",
        X1eXlarge => "x1e.xlarge",
        X1e2xlarge => "x1e.2xlarge",
        X1e4xlarge => "x1e.4xlarge",
        X1e8xlarge => "x1e.8xlarge",
        X1e16xlarge => "x1e.16xlarge",
        X1e32xlarge => "x1e.32xlarge",
        I2Xlarge => "i2.xlarge",
        I22xlarge => "i2.2xlarge",
        I24xlarge => "i2.4xlarge",
        I28xlarge => "i2.8xlarge",
        I3Large => "i3.large",
        I3Xlarge => "i3.xlarge",
        I32xlarge => "i3.2xlarge",
        I34xlarge => "i3.4xlarge",
        I38xlarge => "i3.8xlarge",
        I316xlarge => "i3.16xlarge",
        I3Metal => "i3.metal",
        I3enLarge => "i3en.large",
        I3enXlarge => "i3en.xlarge",
        I3en2xlarge => "i3en.2xlarge",
        I3en3xlarge => "i3en.3xlarge",
        I3en6xlarge => "i3en.6xlarge",
        I3en12xlarge => "i3en.12xlarge",
        I3en24xlarge => "i3en.24xlarge",
        I3enMetal => "i3en.metal",
        Hi14xlarge => "hi1.4xlarge",
        Hs18xlarge => "hs1.8xlarge",
        C1Medium => "c1.medium",
        C1Xlarge => "c1.xlarge",
        C3Large => "c3.large",
        C3Xlarge => "c3.xlarge",
        C32xlarge => "c3.2xlarge",
        C34xlarge => "c3.4xlarge",
        C38xlarge => "c3.8xlarge",
        C4Large => "c4.large",
        C4Xlarge => "c4.xlarge",
        C42xlarge => "c4.2xlarge",
        C44xlarge => "c4.4xlarge",
        C48xlarge => "c4.8xlarge",
        C5Large => "c5.large",
        C5Xlarge => "c5.xlarge",
        C52xlarge => "c5.2xlarge",
        C54xlarge => "c5.4xlarge",
        C59xlarge => "c5.9xlarge",
        C512xlarge => "c5.12xlarge",
        C518xlarge => "c5.18xlarge",
        C524xlarge => "c5.24xlarge",
        C5Metal => "c5.metal",
        C5dLarge => "c5d.large",
        C5dXlarge => "c5d.xlarge",
        C5d2xlarge => "c5d.2xlarge",
        C5d4xlarge => "c5d.4xlarge",
        C5d9xlarge => "c5d.9xlarge",
        C5d12xlarge => "c5d.12xlarge",
        C5d18xlarge => "c5d.18xlarge",
        C5d24xlarge => "c5d.24xlarge",
        C5dMetal => "c5d.metal",
        C5nLarge => "c5n.large",
        C5nXlarge => "c5n.xlarge",
        C5n2xlarge => "c5n.2xlarge",
        C5n4xlarge => "c5n.4xlarge",
        C5n9xlarge => "c5n.9xlarge",
        C5n18xlarge => "c5n.18xlarge",
        C6gMetal => "c6g.metal",
        C6gMedium => "c6g.medium",
        C6gLarge => "c6g.large",
        C6gXlarge => "c6g.xlarge",
        C6g2xlarge => "c6g.2xlarge",
        C6g4xlarge => "c6g.4xlarge",
        C6g8xlarge => "c6g.8xlarge",
        C6g12xlarge => "c6g.12xlarge",
        C6g16xlarge => "c6g.16xlarge",
        Cc14xlarge => "cc1.4xlarge",
        Cc28xlarge => "cc2.8xlarge",
        G22xlarge => "g2.2xlarge",
        G28xlarge => "g2.8xlarge",
        G34xlarge => "g3.4xlarge",
        G38xlarge => "g3.8xlarge",
        G316xlarge => "g3.16xlarge",
        G3sXlarge => "g3s.xlarge",
        G4dnXlarge => "g4dn.xlarge",
        G4dn2xlarge => "g4dn.2xlarge",
        G4dn4xlarge => "g4dn.4xlarge",
        G4dn8xlarge => "g4dn.8xlarge",
        G4dn12xlarge => "g4dn.12xlarge",
        G4dn16xlarge => "g4dn.16xlarge",
        G4dnMetal => "g4dn.metal",
        Cg14xlarge => "cg1.4xlarge",
        P2Xlarge => "p2.xlarge",
        P28xlarge => "p2.8xlarge",
        P216xlarge => "p2.16xlarge",
        P32xlarge => "p3.2xlarge",
        P38xlarge => "p3.8xlarge",
        P316xlarge => "p3.16xlarge",
        P3dn24xlarge => "p3dn.24xlarge",
        D2Xlarge => "d2.xlarge",
        D22xlarge => "d2.2xlarge",
        D24xlarge => "d2.4xlarge",
        D28xlarge => "d2.8xlarge",
        F12xlarge => "f1.2xlarge",
        F14xlarge => "f1.4xlarge",
        F116xlarge => "f1.16xlarge",
        M5Large => "m5.large",
        M5Xlarge => "m5.xlarge",
        M52xlarge => "m5.2xlarge",
        M54xlarge => "m5.4xlarge",
        M58xlarge => "m5.8xlarge",
        M512xlarge => "m5.12xlarge",
        M516xlarge => "m5.16xlarge",
        M524xlarge => "m5.24xlarge",
        M5Metal => "m5.metal",
        M5aLarge => "m5a.large",
        M5aXlarge => "m5a.xlarge",
        M5a2xlarge => "m5a.2xlarge",
        M5a4xlarge => "m5a.4xlarge",
        M5a8xlarge => "m5a.8xlarge",
        M5a12xlarge => "m5a.12xlarge",
        M5a16xlarge => "m5a.16xlarge",
        M5a24xlarge => "m5a.24xlarge",
        M5dLarge => "m5d.large",
        M5dXlarge => "m5d.xlarge",
        M5d2xlarge => "m5d.2xlarge",
        M5d4xlarge => "m5d.4xlarge",
        M5d8xlarge => "m5d.8xlarge",
        M5d12xlarge => "m5d.12xlarge",
        M5d16xlarge => "m5d.16xlarge",
        M5d24xlarge => "m5d.24xlarge",
        M5dMetal => "m5d.metal",
        M5adLarge => "m5ad.large",
        M5adXlarge => "m5ad.xlarge",
        M5ad2xlarge => "m5ad.2xlarge",
        M5ad4xlarge => "m5ad.4xlarge",
        M5ad8xlarge => "m5ad.8xlarge",
        M5ad12xlarge => "m5ad.12xlarge",
        M5ad16xlarge => "m5ad.16xlarge",
        M5ad24xlarge => "m5ad.24xlarge",
        M5dnLarge => "m5dn.large",
        M5dnXlarge => "m5dn.xlarge",
        M5dn2xlarge => "m5dn.2xlarge",
        M5dn4xlarge => "m5dn.4xlarge",
        M5dn8xlarge => "m5dn.8xlarge",
        M5dn12xlarge => "m5dn.12xlarge",
        M5dn16xlarge => "m5dn.16xlarge",
        M5dn24xlarge => "m5dn.24xlarge",
        M5nLarge => "m5n.large",
        M5nXlarge => "m5n.xlarge",
        M5n2xlarge => "m5n.2xlarge",
        M5n4xlarge => "m5n.4xlarge",
        M5n8xlarge => "m5n.8xlarge",
        M5n12xlarge => "m5n.12xlarge",
        M5n16xlarge => "m5n.16xlarge",
        M5n24xlarge => "m5n.24xlarge",
        M6gMetal => "m6g.metal",
        M6gMedium => "m6g.medium",
        M6gLarge => "m6g.large",
        M6gXlarge => "m6g.xlarge",
        M6g2xlarge => "m6g.2xlarge",
        M6g4xlarge => "m6g.4xlarge",
        M6g8xlarge => "m6g.8xlarge",
        M6g12xlarge => "m6g.12xlarge",
        M6g16xlarge => "m6g.16xlarge",
        H12xlarge => "h1.2xlarge",
        H14xlarge => "h1.4xlarge",
        H18xlarge => "h1.8xlarge",
        H116xlarge => "h1.16xlarge",
        Z1dLarge => "z1d.large",
        Z1dXlarge => "z1d.xlarge",
        Z1d2xlarge => "z1d.2xlarge",
        Z1d3xlarge => "z1d.3xlarge",
        Z1d6xlarge => "z1d.6xlarge",
        Z1d12xlarge => "z1d.12xlarge",
        Z1dMetal => "z1d.metal",
        U6tb1Metal => "u-6tb1.metal",
        U9tb1Metal => "u-9tb1.metal",
        U12tb1Metal => "u-12tb1.metal",
        U18tb1Metal => "u-18tb1.metal",
        U24tb1Metal => "u-24tb1.metal",
        A1Medium => "a1.medium",
        A1Large => "a1.large",
        A1Xlarge => "a1.xlarge",
        A12xlarge => "a1.2xlarge",
        A14xlarge => "a1.4xlarge",
        A1Metal => "a1.metal",
        Inf1Xlarge => "inf1.xlarge",
        Inf12xlarge => "inf1.2xlarge",
        Inf16xlarge => "inf1.6xlarge",
        Inf124xlarge => "inf1.24xlarge",
    }
}

ec2_enum! {
    pub enum ArchitectureType {
        I386 => "i386",
        X86_64 => "x86_64",
        Arm64 => "arm64",
    }
}

ec2_enum! {
    pub enum UsageClassType {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

ec2_enum! {
    pub enum InstanceTypeHypervisor {
        Nitro => "nitro",
        Xen => "xen",
    }
}

ec2_enum! {
    pub enum DiskType {
        Hdd => "hdd",
        Ssd => "ssd",
    }
}

ec2_enum! {
    pub enum EbsOptimizedSupport {
        Unsupported => "unsupported",
        Supported => "supported",
        Default => "default",
    }
}

ec2_enum! {
    pub enum EbsEncryptionSupport {
        Unsupported => "unsupported",
        Supported => "supported",
    }
}

ec2_enum! {
    pub enum EnaSupport {
        Unsupported => "unsupported",
        Supported => "supported",
        Required => "required",
    }
}

ec2_enum! {
    pub enum PlacementGroupStrategy {
        Cluster => "cluster",
        Partition => "partition",
        Spread => "spread",
    }
}

ec2_shape! {
    pub struct ProcessorInfo {
        supported_architectures / with_supported_architectures: Vec<ArchitectureType> => ("SupportedArchitectures", "supportedArchitectures"),
        sustained_clock_speed_in_ghz / with_sustained_clock_speed_in_ghz: f64 => ("SustainedClockSpeedInGhz", "sustainedClockSpeedInGhz"),
    }
}

ec2_shape! {
    pub struct VCpuInfo {
        default_v_cpus / with_default_v_cpus: i32 => ("DefaultVCpus", "defaultVCpus"),
        default_cores / with_default_cores: i32 => ("DefaultCores", "defaultCores"),
        default_threads_per_core / with_default_threads_per_core: i32 => ("DefaultThreadsPerCore", "defaultThreadsPerCore"),
        valid_cores / with_valid_cores: Vec<i32> => ("ValidCores", "validCores"),
        valid_threads_per_core / with_valid_threads_per_core: Vec<i32> => ("ValidThreadsPerCore", "validThreadsPerCore"),
    }
}

ec2_shape! {
    pub struct MemoryInfo {
        size_in_mib / with_size_in_mib: i64 => ("SizeInMiB", "sizeInMiB"),
    }
}

ec2_shape! {
    pub struct DiskInfo {
        size_in_gb / with_size_in_gb: i64 => ("SizeInGB", "sizeInGB"),
        count / with_count: i32 => ("Count", "count"),
        disk_type / with_disk_type: DiskType => ("Type", "type"),
    }
}

ec2_shape! {
    pub struct InstanceStorageInfo {
        total_size_in_gb / with_total_size_in_gb: i64 => ("TotalSizeInGB", "totalSizeInGB"),
        disks / with_disks: Vec<DiskInfo> => ("Disks", "disks"),
    }
}

ec2_shape! {
    pub struct EbsInfo {
        ebs_optimized_support / with_ebs_optimized_support: EbsOptimizedSupport => ("EbsOptimizedSupport", "ebsOptimizedSupport"),
        encryption_support / with_encryption_support: EbsEncryptionSupport => ("EncryptionSupport", "encryptionSupport"),
    }
}

ec2_shape! {
    pub struct NetworkInfo {
        /// Free text, e.g. `Up to 5 Gigabit`.
        network_performance / with_network_performance: String => ("NetworkPerformance", "networkPerformance"),
        maximum_network_interfaces / with_maximum_network_interfaces: i32 => ("MaximumNetworkInterfaces", "maximumNetworkInterfaces"),
        ipv4_addresses_per_interface / with_ipv4_addresses_per_interface: i32 => ("Ipv4AddressesPerInterface", "ipv4AddressesPerInterface"),
        ipv6_addresses_per_interface / with_ipv6_addresses_per_interface: i32 => ("Ipv6AddressesPerInterface", "ipv6AddressesPerInterface"),
        ipv6_supported / with_ipv6_supported: bool => ("Ipv6Supported", "ipv6Supported"),
        ena_support / with_ena_support: EnaSupport => ("EnaSupport", "enaSupport"),
    }
}

ec2_shape! {
    pub struct GpuDeviceMemoryInfo {
        size_in_mib / with_size_in_mib: i32 => ("SizeInMiB", "sizeInMiB"),
    }
}

ec2_shape! {
    pub struct GpuDeviceInfo {
        name / with_name: String => ("Name", "name"),
        manufacturer / with_manufacturer: String => ("Manufacturer", "manufacturer"),
        count / with_count: i32 => ("Count", "count"),
        memory_info / with_memory_info: GpuDeviceMemoryInfo => ("MemoryInfo", "memoryInfo"),
    }
}

ec2_shape! {
    pub struct GpuInfo {
        gpus / with_gpus: Vec<GpuDeviceInfo> => ("Gpus", "gpus"),
        total_gpu_memory_in_mib / with_total_gpu_memory_in_mib: i32 => ("TotalGpuMemoryInMiB", "totalGpuMemoryInMiB"),
    }
}

ec2_shape! {
    pub struct FpgaDeviceMemoryInfo {
        size_in_mib / with_size_in_mib: i32 => ("SizeInMiB", "sizeInMiB"),
    }
}

ec2_shape! {
    pub struct FpgaDeviceInfo {
        name / with_name: String => ("Name", "name"),
        manufacturer / with_manufacturer: String => ("Manufacturer", "manufacturer"),
        count / with_count: i32 => ("Count", "count"),
        memory_info / with_memory_info: FpgaDeviceMemoryInfo => ("MemoryInfo", "memoryInfo"),
    }
}

ec2_shape! {
    pub struct FpgaInfo {
        fpgas / with_fpgas: Vec<FpgaDeviceInfo> => ("Fpgas", "fpgas"),
        total_fpga_memory_in_mib / with_total_fpga_memory_in_mib: i32 => ("TotalFpgaMemoryInMiB", "totalFpgaMemoryInMiB"),
    }
}

ec2_shape! {
    pub struct PlacementGroupInfo {
        supported_strategies / with_supported_strategies: Vec<PlacementGroupStrategy> => ("SupportedStrategies", "supportedStrategies"),
    }
}

ec2_shape! {
    pub struct InferenceDeviceInfo {
        count / with_count: i32 => ("Count", "count"),
        name / with_name: String => ("Name", "name"),
        manufacturer / with_manufacturer: String => ("Manufacturer", "manufacturer"),
    }
}

ec2_shape! {
    pub struct InferenceAcceleratorInfo {
        accelerators / with_accelerators: Vec<InferenceDeviceInfo> => ("Accelerators", "accelerators"),
    }
}

ec2_shape! {
    /// Hardware description of one instance type.
    pub struct InstanceTypeInfo {
        instance_type / with_instance_type: InstanceType => ("InstanceType", "instanceType"),
        current_generation / with_current_generation: bool => ("CurrentGeneration", "currentGeneration"),
        free_tier_eligible / with_free_tier_eligible: bool => ("FreeTierEligible", "freeTierEligible"),
        supported_usage_classes / with_supported_usage_classes: Vec<UsageClassType> => ("SupportedUsageClasses", "supportedUsageClasses"),
        supported_root_device_types / with_supported_root_device_types: Vec<DeviceType> => ("SupportedRootDeviceTypes", "supportedRootDeviceTypes"),
        supported_virtualization_types / with_supported_virtualization_types: Vec<VirtualizationType> => ("SupportedVirtualizationTypes", "supportedVirtualizationTypes"),
        bare_metal / with_bare_metal: bool => ("BareMetal", "bareMetal"),
        hypervisor / with_hypervisor: InstanceTypeHypervisor => ("Hypervisor", "hypervisor"),
        processor_info / with_processor_info: ProcessorInfo => ("ProcessorInfo", "processorInfo"),
        v_cpu_info / with_v_cpu_info: VCpuInfo => ("VCpuInfo", "vCpuInfo"),
        memory_info / with_memory_info: MemoryInfo => ("MemoryInfo", "memoryInfo"),
        instance_storage_supported / with_instance_storage_supported: bool => ("InstanceStorageSupported", "instanceStorageSupported"),
        instance_storage_info / with_instance_storage_info: InstanceStorageInfo => ("InstanceStorageInfo", "instanceStorageInfo"),
        ebs_info / with_ebs_info: EbsInfo => ("EbsInfo", "ebsInfo"),
        network_info / with_network_info: NetworkInfo => ("NetworkInfo", "networkInfo"),
        gpu_info / with_gpu_info: GpuInfo => ("GpuInfo", "gpuInfo"),
        fpga_info / with_fpga_info: FpgaInfo => ("FpgaInfo", "fpgaInfo"),
        placement_group_info / with_placement_group_info: PlacementGroupInfo => ("PlacementGroupInfo", "placementGroupInfo"),
        inference_accelerator_info / with_inference_accelerator_info: InferenceAcceleratorInfo => ("InferenceAcceleratorInfo", "inferenceAcceleratorInfo"),
        hibernation_supported / with_hibernation_supported: bool => ("HibernationSupported", "hibernationSupported"),
        burstable_performance_supported / with_burstable_performance_supported: bool => ("BurstablePerformanceSupported", "burstablePerformanceSupported"),
        dedicated_hosts_supported / with_dedicated_hosts_supported: bool => ("DedicatedHostsSupported", "dedicatedHostsSupported"),
        auto_recovery_supported / with_auto_recovery_supported: bool => ("AutoRecoverySupported", "autoRecoverySupported"),
    }
}

ec2_shape! {
    pub struct DescribeInstanceTypesRequest {
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        instance_types / with_instance_types: Vec<InstanceType> => ("InstanceType", "InstanceType"),
        filters / with_filters: Vec<Filter> => ("Filter", "Filter"),
        max_results / with_max_results: i32 => ("MaxResults", "maxResults"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
    }
}

ec2_shape! {
    pub struct DescribeInstanceTypesResult {
        instance_types / with_instance_types: Vec<InstanceTypeInfo> => ("InstanceTypes", "instanceTypeSet"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::query::{QueryParams, QueryValue};
    use crate::protocol::xml::{XmlNode, XmlValue};

    #[test]
    fn instance_type_wire_values() {
        assert_eq!(InstanceType::T2Micro.as_str(), "t2.micro");
        assert_eq!(InstanceType::from("m5d.24xlarge"), InstanceType::M5d24xlarge);
        assert_eq!(InstanceType::from("u-6tb1.metal"), InstanceType::U6tb1Metal);
        assert!(InstanceType::values().contains(&"inf1.xlarge"));
        assert_eq!(
            InstanceType::from("m7i.large"),
            InstanceType::Unknown("m7i.large".into())
        );
    }

    #[test]
    fn request_lists_instance_types() {
        let req = DescribeInstanceTypesRequest::new()
            .with_instance_types(vec![InstanceType::T3Nano, InstanceType::C5Large])
            .with_max_results(20);
        let mut params = QueryParams::new();
        req.write_query("", &mut params);
        assert_eq!(params.get("InstanceType.1"), Some("t3.nano"));
        assert_eq!(params.get("InstanceType.2"), Some("c5.large"));
        assert_eq!(params.get("MaxResults"), Some("20"));
    }

    #[test]
    fn parse_instance_type_info() {
        let xml = r#"<DescribeInstanceTypesResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/">
            <requestId>a1b2</requestId>
            <instanceTypeSet>
                <item>
                    <instanceType>t2.micro</instanceType>
                    <currentGeneration>true</currentGeneration>
                    <freeTierEligible>true</freeTierEligible>
                    <supportedUsageClasses><item>on-demand</item><item>spot</item></supportedUsageClasses>
                    <supportedRootDeviceTypes><item>ebs</item></supportedRootDeviceTypes>
                    <bareMetal>false</bareMetal>
                    <hypervisor>xen</hypervisor>
                    <processorInfo>
                        <supportedArchitectures><item>i386</item><item>x86_64</item></supportedArchitectures>
                        <sustainedClockSpeedInGhz>2.5</sustainedClockSpeedInGhz>
                    </processorInfo>
                    <vCpuInfo><defaultVCpus>1</defaultVCpus><defaultCores>1</defaultCores><defaultThreadsPerCore>1</defaultThreadsPerCore><validCores><item>1</item></validCores></vCpuInfo>
                    <memoryInfo><sizeInMiB>1024</sizeInMiB></memoryInfo>
                    <instanceStorageSupported>false</instanceStorageSupported>
                    <ebsInfo><ebsOptimizedSupport>unsupported</ebsOptimizedSupport><encryptionSupport>supported</encryptionSupport></ebsInfo>
                    <networkInfo><networkPerformance>Low to Moderate</networkPerformance><maximumNetworkInterfaces>2</maximumNetworkInterfaces><ipv6Supported>true</ipv6Supported><enaSupport>unsupported</enaSupport></networkInfo>
                    <placementGroupInfo><supportedStrategies><item>partition</item><item>spread</item></supportedStrategies></placementGroupInfo>
                    <burstablePerformanceSupported>true</burstablePerformanceSupported>
                </item>
            </instanceTypeSet>
            <nextToken>AAAA</nextToken>
        </DescribeInstanceTypesResponse>"#;
        let result = DescribeInstanceTypesResult::read_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        assert_eq!(result.next_token.as_deref(), Some("AAAA"));

        let info = &result.instance_types.unwrap()[0];
        assert_eq!(info.instance_type, Some(InstanceType::T2Micro));
        assert_eq!(
            info.supported_usage_classes,
            Some(vec![UsageClassType::OnDemand, UsageClassType::Spot])
        );
        let processor = info.processor_info.as_ref().unwrap();
        assert_eq!(processor.sustained_clock_speed_in_ghz, Some(2.5));
        assert_eq!(processor.supported_architectures.as_ref().map(Vec::len), Some(2));
        assert_eq!(info.v_cpu_info.as_ref().and_then(|v| v.valid_cores.clone()), Some(vec![1]));
        assert_eq!(info.memory_info.as_ref().and_then(|m| m.size_in_mib), Some(1024));
        assert_eq!(
            info.network_info.as_ref().and_then(|n| n.ena_support.clone()),
            Some(EnaSupport::Unsupported)
        );
        assert_eq!(info.gpu_info, None);
    }
}
