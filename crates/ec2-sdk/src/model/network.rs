//! VPC networking: security groups, network interfaces, route tables.

use super::common::*;
use super::instances::NetworkInterfaceStatus;
use crate::shape::{ec2_enum, ec2_shape};
use chrono::{DateTime, Utc};

ec2_enum! {
    pub enum NetworkInterfaceType {
        Interface => "interface",
        NatGateway => "natGateway",
        Efa => "efa",
    }
}

ec2_enum! {
    pub enum RouteOrigin {
        CreateRouteTable => "CreateRouteTable",
        CreateRoute => "CreateRoute",
        EnableVgwRoutePropagation => "EnableVgwRoutePropagation",
    }
}

ec2_enum! {
    pub enum RouteState {
        Active => "active",
        Blackhole => "blackhole",
    }
}

ec2_enum! {
    pub enum RouteTableAssociationStateCode {
        Associating => "associating",
        Associated => "associated",
        Disassociating => "disassociating",
        Disassociated => "disassociated",
        Failed => "failed",
    }
}

// Security groups

ec2_shape! {
    pub struct IpRange {
        cidr_ip / with_cidr_ip: String => ("CidrIp", "cidrIp"),
        description / with_description: String => ("Description", "description"),
    }
}

ec2_shape! {
    pub struct Ipv6Range {
        cidr_ipv6 / with_cidr_ipv6: String => ("CidrIpv6", "cidrIpv6"),
        description / with_description: String => ("Description", "description"),
    }
}

ec2_shape! {
    pub struct PrefixListId {
        description / with_description: String => ("Description", "description"),
        prefix_list_id / with_prefix_list_id: String => ("PrefixListId", "prefixListId"),
    }
}

ec2_shape! {
    /// A security group and account a rule refers to.
    pub struct UserIdGroupPair {
        description / with_description: String => ("Description", "description"),
        group_id / with_group_id: String => ("GroupId", "groupId"),
        group_name / with_group_name: String => ("GroupName", "groupName"),
        peering_status / with_peering_status: String => ("PeeringStatus", "peeringStatus"),
        user_id / with_user_id: String => ("UserId", "userId"),
        vpc_id / with_vpc_id: String => ("VpcId", "vpcId"),
        vpc_peering_connection_id / with_vpc_peering_connection_id: String => ("VpcPeeringConnectionId", "vpcPeeringConnectionId"),
    }
}

ec2_shape! {
    /// One security group rule.
    pub struct IpPermission {
        /// Start of the port range, or the ICMP type. `-1` means all.
        from_port / with_from_port: i32 => ("FromPort", "fromPort"),
        /// Protocol name or number. `-1` means all protocols.
        ip_protocol / with_ip_protocol: String => ("IpProtocol", "ipProtocol"),
        ip_ranges / with_ip_ranges: Vec<IpRange> => ("IpRanges", "ipRanges"),
        ipv6_ranges / with_ipv6_ranges: Vec<Ipv6Range> => ("Ipv6Ranges", "ipv6Ranges"),
        prefix_list_ids / with_prefix_list_ids: Vec<PrefixListId> => ("PrefixListIds", "prefixListIds"),
        to_port / with_to_port: i32 => ("ToPort", "toPort"),
        user_id_group_pairs / with_user_id_group_pairs: Vec<UserIdGroupPair> => ("Groups", "groups"),
    }
}

ec2_shape! {
    pub struct SecurityGroup {
        description / with_description: String => ("Description", "groupDescription"),
        group_name / with_group_name: String => ("GroupName", "groupName"),
        ip_permissions / with_ip_permissions: Vec<IpPermission> => ("IpPermissions", "ipPermissions"),
        owner_id / with_owner_id: String => ("OwnerId", "ownerId"),
        group_id / with_group_id: String => ("GroupId", "groupId"),
        ip_permissions_egress / with_ip_permissions_egress: Vec<IpPermission> => ("IpPermissionsEgress", "ipPermissionsEgress"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
        vpc_id / with_vpc_id: String => ("VpcId", "vpcId"),
    }
}

ec2_shape! {
    pub struct DescribeSecurityGroupsRequest {
        filters / with_filters: Vec<Filter> => ("Filter", "Filter"),
        group_ids / with_group_ids: Vec<String> => ("GroupId", "groupId"),
        /// Default VPC only. Use a `group-name` filter elsewhere.
        group_names / with_group_names: Vec<String> => ("GroupName", "groupName"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
        max_results / with_max_results: i32 => ("MaxResults", "maxResults"),
    }
}

ec2_shape! {
    pub struct DescribeSecurityGroupsResult {
        security_groups / with_security_groups: Vec<SecurityGroup> => ("SecurityGroups", "securityGroupInfo"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
    }
}

// Network interfaces

ec2_shape! {
    pub struct NetworkInterfaceAssociation {
        allocation_id / with_allocation_id: String => ("AllocationId", "allocationId"),
        association_id / with_association_id: String => ("AssociationId", "associationId"),
        ip_owner_id / with_ip_owner_id: String => ("IpOwnerId", "ipOwnerId"),
        public_dns_name / with_public_dns_name: String => ("PublicDnsName", "publicDnsName"),
        public_ip / with_public_ip: String => ("PublicIp", "publicIp"),
    }
}

ec2_shape! {
    pub struct NetworkInterfaceAttachment {
        attach_time / with_attach_time: DateTime<Utc> => ("AttachTime", "attachTime"),
        attachment_id / with_attachment_id: String => ("AttachmentId", "attachmentId"),
        delete_on_termination / with_delete_on_termination: bool => ("DeleteOnTermination", "deleteOnTermination"),
        device_index / with_device_index: i32 => ("DeviceIndex", "deviceIndex"),
        instance_id / with_instance_id: String => ("InstanceId", "instanceId"),
        instance_owner_id / with_instance_owner_id: String => ("InstanceOwnerId", "instanceOwnerId"),
        status / with_status: AttachmentStatus => ("Status", "status"),
    }
}

ec2_shape! {
    pub struct NetworkInterfaceIpv6Address {
        ipv6_address / with_ipv6_address: String => ("Ipv6Address", "ipv6Address"),
    }
}

ec2_shape! {
    pub struct NetworkInterfacePrivateIpAddress {
        association / with_association: NetworkInterfaceAssociation => ("Association", "association"),
        primary / with_primary: bool => ("Primary", "primary"),
        private_dns_name / with_private_dns_name: String => ("PrivateDnsName", "privateDnsName"),
        private_ip_address / with_private_ip_address: String => ("PrivateIpAddress", "privateIpAddress"),
    }
}

ec2_shape! {
    /// An elastic network interface.
    pub struct NetworkInterface {
        association / with_association: NetworkInterfaceAssociation => ("Association", "association"),
        attachment / with_attachment: NetworkInterfaceAttachment => ("Attachment", "attachment"),
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "availabilityZone"),
        description / with_description: String => ("Description", "description"),
        groups / with_groups: Vec<GroupIdentifier> => ("Groups", "groupSet"),
        interface_type / with_interface_type: NetworkInterfaceType => ("InterfaceType", "interfaceType"),
        ipv6_addresses / with_ipv6_addresses: Vec<NetworkInterfaceIpv6Address> => ("Ipv6Addresses", "ipv6AddressesSet"),
        mac_address / with_mac_address: String => ("MacAddress", "macAddress"),
        network_interface_id / with_network_interface_id: String => ("NetworkInterfaceId", "networkInterfaceId"),
        outpost_arn / with_outpost_arn: String => ("OutpostArn", "outpostArn"),
        owner_id / with_owner_id: String => ("OwnerId", "ownerId"),
        private_dns_name / with_private_dns_name: String => ("PrivateDnsName", "privateDnsName"),
        private_ip_address / with_private_ip_address: String => ("PrivateIpAddress", "privateIpAddress"),
        private_ip_addresses / with_private_ip_addresses: Vec<NetworkInterfacePrivateIpAddress> => ("PrivateIpAddresses", "privateIpAddressesSet"),
        /// Alias or account of the service that created the interface on
        /// your behalf.
        requester_id / with_requester_id: String => ("RequesterId", "requesterId"),
        requester_managed / with_requester_managed: bool => ("RequesterManaged", "requesterManaged"),
        source_dest_check / with_source_dest_check: bool => ("SourceDestCheck", "sourceDestCheck"),
        status / with_status: NetworkInterfaceStatus => ("Status", "status"),
        subnet_id / with_subnet_id: String => ("SubnetId", "subnetId"),
        tag_set / with_tag_set: Vec<Tag> => ("TagSet", "tagSet"),
        vpc_id / with_vpc_id: String => ("VpcId", "vpcId"),
    }
}

ec2_shape! {
    pub struct DescribeNetworkInterfacesRequest {
        filters / with_filters: Vec<Filter> => ("Filter", "filter"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        network_interface_ids / with_network_interface_ids: Vec<String> => ("NetworkInterfaceId", "NetworkInterfaceId"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
        max_results / with_max_results: i32 => ("MaxResults", "maxResults"),
    }
}

ec2_shape! {
    pub struct DescribeNetworkInterfacesResult {
        network_interfaces / with_network_interfaces: Vec<NetworkInterface> => ("NetworkInterfaces", "networkInterfaceSet"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
    }
}

// Route tables

ec2_shape! {
    pub struct RouteTableAssociationState {
        state / with_state: RouteTableAssociationStateCode => ("State", "state"),
        status_message / with_status_message: String => ("StatusMessage", "statusMessage"),
    }
}

ec2_shape! {
    /// Links a route table to a subnet or gateway.
    pub struct RouteTableAssociation {
        /// Set on the main route table's implicit association.
        main / with_main: bool => ("Main", "main"),
        route_table_association_id / with_route_table_association_id: String => ("RouteTableAssociationId", "routeTableAssociationId"),
        route_table_id / with_route_table_id: String => ("RouteTableId", "routeTableId"),
        subnet_id / with_subnet_id: String => ("SubnetId", "subnetId"),
        gateway_id / with_gateway_id: String => ("GatewayId", "gatewayId"),
        association_state / with_association_state: RouteTableAssociationState => ("AssociationState", "associationState"),
    }
}

ec2_shape! {
    pub struct PropagatingVgw {
        gateway_id / with_gateway_id: String => ("GatewayId", "gatewayId"),
    }
}

ec2_shape! {
    /// One route. Exactly one target field is set.
    pub struct Route {
        destination_cidr_block / with_destination_cidr_block: String => ("DestinationCidrBlock", "destinationCidrBlock"),
        destination_ipv6_cidr_block / with_destination_ipv6_cidr_block: String => ("DestinationIpv6CidrBlock", "destinationIpv6CidrBlock"),
        destination_prefix_list_id / with_destination_prefix_list_id: String => ("DestinationPrefixListId", "destinationPrefixListId"),
        egress_only_internet_gateway_id / with_egress_only_internet_gateway_id: String => ("EgressOnlyInternetGatewayId", "egressOnlyInternetGatewayId"),
        gateway_id / with_gateway_id: String => ("GatewayId", "gatewayId"),
        instance_id / with_instance_id: String => ("InstanceId", "instanceId"),
        instance_owner_id / with_instance_owner_id: String => ("InstanceOwnerId", "instanceOwnerId"),
        nat_gateway_id / with_nat_gateway_id: String => ("NatGatewayId", "natGatewayId"),
        transit_gateway_id / with_transit_gateway_id: String => ("TransitGatewayId", "transitGatewayId"),
        local_gateway_id / with_local_gateway_id: String => ("LocalGatewayId", "localGatewayId"),
        network_interface_id / with_network_interface_id: String => ("NetworkInterfaceId", "networkInterfaceId"),
        origin / with_origin: RouteOrigin => ("Origin", "origin"),
        state / with_state: RouteState => ("State", "state"),
        vpc_peering_connection_id / with_vpc_peering_connection_id: String => ("VpcPeeringConnectionId", "vpcPeeringConnectionId"),
    }
}

ec2_shape! {
    pub struct RouteTable {
        associations / with_associations: Vec<RouteTableAssociation> => ("Associations", "associationSet"),
        propagating_vgws / with_propagating_vgws: Vec<PropagatingVgw> => ("PropagatingVgws", "propagatingVgwSet"),
        route_table_id / with_route_table_id: String => ("RouteTableId", "routeTableId"),
        routes / with_routes: Vec<Route> => ("Routes", "routeSet"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
        vpc_id / with_vpc_id: String => ("VpcId", "vpcId"),
        owner_id / with_owner_id: String => ("OwnerId", "ownerId"),
    }
}

impl RouteTable {
    pub fn is_main(&self) -> bool {
        self.associations
            .iter()
            .flatten()
            .any(|a| a.main == Some(true))
    }
}

ec2_shape! {
    pub struct DescribeRouteTablesRequest {
        filters / with_filters: Vec<Filter> => ("Filter", "Filter"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        route_table_ids / with_route_table_ids: Vec<String> => ("RouteTableId", "RouteTableId"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
        max_results / with_max_results: i32 => ("MaxResults", "maxResults"),
    }
}

ec2_shape! {
    pub struct DescribeRouteTablesResult {
        route_tables / with_route_tables: Vec<RouteTable> => ("RouteTables", "routeTableSet"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
    }
}
