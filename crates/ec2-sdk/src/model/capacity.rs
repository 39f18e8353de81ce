//! On-Demand Capacity Reservations.

use super::common::*;
use crate::shape::{ec2_enum, ec2_shape};
use chrono::{DateTime, Utc};

ec2_enum! {
    pub enum CapacityReservationInstancePlatform {
        LinuxUnix => "Linux/UNIX",
        RedHatEnterpriseLinux => "Red Hat Enterprise Linux",
        SuseLinux => "SUSE Linux",
        Windows => "Windows",
        WindowsWithSqlServer => "Windows with SQL Server",
        WindowsWithSqlServerEnterprise => "Windows with SQL Server Enterprise",
        WindowsWithSqlServerStandard => "Windows with SQL Server Standard",
        WindowsWithSqlServerWeb => "Windows with SQL Server Web",
        LinuxWithSqlServerStandard => "Linux with SQL Server Standard",
        LinuxWithSqlServerWeb => "Linux with SQL Server Web",
        LinuxWithSqlServerEnterprise => "Linux with SQL Server Enterprise",
    }
}

ec2_enum! {
    pub enum CapacityReservationTenancy {
        Default => "default",
        Dedicated => "dedicated",
    }
}

ec2_enum! {
    /// `unlimited` reservations stay active until cancelled; `limited`
    /// ones end at `end_date`.
    pub enum EndDateType {
        Unlimited => "unlimited",
        Limited => "limited",
    }
}

ec2_enum! {
    pub enum InstanceMatchCriteria {
        Open => "open",
        Targeted => "targeted",
    }
}

ec2_enum! {
    pub enum CapacityReservationState {
        Active => "active",
        Expired => "expired",
        Cancelled => "cancelled",
        Pending => "pending",
        Failed => "failed",
    }
}

ec2_shape! {
    pub struct CreateCapacityReservationRequest {
        /// Idempotency token; generated when left unset.
        client_token / with_client_token: String => ("ClientToken", "ClientToken"),
        instance_type / with_instance_type: String => ("InstanceType", "InstanceType"),
        instance_platform / with_instance_platform: CapacityReservationInstancePlatform => ("InstancePlatform", "InstancePlatform"),
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "AvailabilityZone"),
        availability_zone_id / with_availability_zone_id: String => ("AvailabilityZoneId", "AvailabilityZoneId"),
        tenancy / with_tenancy: CapacityReservationTenancy => ("Tenancy", "Tenancy"),
        instance_count / with_instance_count: i32 => ("InstanceCount", "InstanceCount"),
        ebs_optimized / with_ebs_optimized: bool => ("EbsOptimized", "EbsOptimized"),
        ephemeral_storage / with_ephemeral_storage: bool => ("EphemeralStorage", "EphemeralStorage"),
        end_date / with_end_date: DateTime<Utc> => ("EndDate", "EndDate"),
        end_date_type / with_end_date_type: EndDateType => ("EndDateType", "EndDateType"),
        instance_match_criteria / with_instance_match_criteria: InstanceMatchCriteria => ("InstanceMatchCriteria", "InstanceMatchCriteria"),
        // Plural here, unlike every other operation.
        tag_specifications / with_tag_specifications: Vec<TagSpecification> => ("TagSpecifications", "TagSpecifications"),
        dry_run / with_dry_run: bool => ("DryRun", "DryRun"),
    }
}

ec2_shape! {
    /// A Capacity Reservation.
    pub struct CapacityReservation {
        capacity_reservation_id / with_capacity_reservation_id: String => ("CapacityReservationId", "capacityReservationId"),
        owner_id / with_owner_id: String => ("OwnerId", "ownerId"),
        capacity_reservation_arn / with_capacity_reservation_arn: String => ("CapacityReservationArn", "capacityReservationArn"),
        availability_zone_id / with_availability_zone_id: String => ("AvailabilityZoneId", "availabilityZoneId"),
        instance_type / with_instance_type: String => ("InstanceType", "instanceType"),
        instance_platform / with_instance_platform: CapacityReservationInstancePlatform => ("InstancePlatform", "instancePlatform"),
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "availabilityZone"),
        tenancy / with_tenancy: CapacityReservationTenancy => ("Tenancy", "tenancy"),
        total_instance_count / with_total_instance_count: i32 => ("TotalInstanceCount", "totalInstanceCount"),
        available_instance_count / with_available_instance_count: i32 => ("AvailableInstanceCount", "availableInstanceCount"),
        ebs_optimized / with_ebs_optimized: bool => ("EbsOptimized", "ebsOptimized"),
        ephemeral_storage / with_ephemeral_storage: bool => ("EphemeralStorage", "ephemeralStorage"),
        state / with_state: CapacityReservationState => ("State", "state"),
        end_date / with_end_date: DateTime<Utc> => ("EndDate", "endDate"),
        end_date_type / with_end_date_type: EndDateType => ("EndDateType", "endDateType"),
        instance_match_criteria / with_instance_match_criteria: InstanceMatchCriteria => ("InstanceMatchCriteria", "instanceMatchCriteria"),
        create_date / with_create_date: DateTime<Utc> => ("CreateDate", "createDate"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
    }
}

ec2_shape! {
    pub struct CreateCapacityReservationResult {
        capacity_reservation / with_capacity_reservation: CapacityReservation => ("CapacityReservation", "capacityReservation"),
    }
}

ec2_shape! {
    pub struct DescribeCapacityReservationsRequest {
        capacity_reservation_ids / with_capacity_reservation_ids: Vec<String> => ("CapacityReservationId", "CapacityReservationId"),
        next_token / with_next_token: String => ("NextToken", "NextToken"),
        max_results / with_max_results: i32 => ("MaxResults", "MaxResults"),
        filters / with_filters: Vec<Filter> => ("Filter", "Filter"),
        dry_run / with_dry_run: bool => ("DryRun", "DryRun"),
    }
}

ec2_shape! {
    pub struct DescribeCapacityReservationsResult {
        next_token / with_next_token: String => ("NextToken", "nextToken"),
        capacity_reservations / with_capacity_reservations: Vec<CapacityReservation> => ("CapacityReservations", "capacityReservationSet"),
    }
}
