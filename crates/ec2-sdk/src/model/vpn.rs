//! Site-to-Site VPN connections: `CreateVpnConnection`.

use super::common::*;
use crate::shape::{ec2_enum, ec2_shape};
use chrono::{DateTime, Utc};

ec2_enum! {
    pub enum GatewayType {
        Ipsec1 => "ipsec.1",
    }
}

ec2_enum! {
    pub enum VpnState {
        Pending => "pending",
        Available => "available",
        Deleting => "deleting",
        Deleted => "deleted",
    }
}

ec2_enum! {
    pub enum VpnStaticRouteSource {
        Static => "Static",
    }
}

ec2_enum! {
    pub enum TelemetryStatus {
        Up => "UP",
        Down => "DOWN",
    }
}

ec2_shape! {
    pub struct StringValueRequest {
        value / with_value: String => ("Value", "Value"),
    }
}

ec2_shape! {
    pub struct IntegerValueRequest {
        value / with_value: i32 => ("Value", "Value"),
    }
}

ec2_shape! {
    pub struct StringValue {
        value / with_value: String => ("Value", "value"),
    }
}

ec2_shape! {
    pub struct IntegerValue {
        value / with_value: i32 => ("Value", "value"),
    }
}

ec2_shape! {
    /// IKE and IPsec settings of one tunnel.
    pub struct VpnTunnelOptionsSpecification {
        /// A /30 from 169.254.0.0/16.
        tunnel_inside_cidr / with_tunnel_inside_cidr: String => ("TunnelInsideCidr", "TunnelInsideCidr"),
        pre_shared_key / with_pre_shared_key: String => ("PreSharedKey", "PreSharedKey"),
        phase1_lifetime_seconds / with_phase1_lifetime_seconds: i32 => ("Phase1LifetimeSeconds", "Phase1LifetimeSeconds"),
        phase2_lifetime_seconds / with_phase2_lifetime_seconds: i32 => ("Phase2LifetimeSeconds", "Phase2LifetimeSeconds"),
        rekey_margin_time_seconds / with_rekey_margin_time_seconds: i32 => ("RekeyMarginTimeSeconds", "RekeyMarginTimeSeconds"),
        rekey_fuzz_percentage / with_rekey_fuzz_percentage: i32 => ("RekeyFuzzPercentage", "RekeyFuzzPercentage"),
        replay_window_size / with_replay_window_size: i32 => ("ReplayWindowSize", "ReplayWindowSize"),
        dpd_timeout_seconds / with_dpd_timeout_seconds: i32 => ("DPDTimeoutSeconds", "DPDTimeoutSeconds"),
        phase1_encryption_algorithms / with_phase1_encryption_algorithms: Vec<StringValueRequest> => ("Phase1EncryptionAlgorithm", "Phase1EncryptionAlgorithm"),
        phase2_encryption_algorithms / with_phase2_encryption_algorithms: Vec<StringValueRequest> => ("Phase2EncryptionAlgorithm", "Phase2EncryptionAlgorithm"),
        phase1_integrity_algorithms / with_phase1_integrity_algorithms: Vec<StringValueRequest> => ("Phase1IntegrityAlgorithm", "Phase1IntegrityAlgorithm"),
        phase2_integrity_algorithms / with_phase2_integrity_algorithms: Vec<StringValueRequest> => ("Phase2IntegrityAlgorithm", "Phase2IntegrityAlgorithm"),
        phase1_dh_group_numbers / with_phase1_dh_group_numbers: Vec<IntegerValueRequest> => ("Phase1DHGroupNumber", "Phase1DHGroupNumber"),
        phase2_dh_group_numbers / with_phase2_dh_group_numbers: Vec<IntegerValueRequest> => ("Phase2DHGroupNumber", "Phase2DHGroupNumber"),
        ike_versions / with_ike_versions: Vec<StringValueRequest> => ("IKEVersion", "IKEVersion"),
    }
}

ec2_shape! {
    pub struct VpnConnectionOptionsSpecification {
        enable_acceleration / with_enable_acceleration: bool => ("EnableAcceleration", "EnableAcceleration"),
        static_routes_only / with_static_routes_only: bool => ("StaticRoutesOnly", "staticRoutesOnly"),
        /// At most two, one per tunnel.
        tunnel_options / with_tunnel_options: Vec<VpnTunnelOptionsSpecification> => ("TunnelOptions", "TunnelOptions"),
    }
}

ec2_shape! {
    pub struct CreateVpnConnectionRequest {
        customer_gateway_id / with_customer_gateway_id: String => ("CustomerGatewayId", "CustomerGatewayId"),
        /// Always `ipsec.1`.
        connection_type / with_connection_type: GatewayType => ("Type", "Type"),
        vpn_gateway_id / with_vpn_gateway_id: String => ("VpnGatewayId", "VpnGatewayId"),
        transit_gateway_id / with_transit_gateway_id: String => ("TransitGatewayId", "TransitGatewayId"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        options / with_options: VpnConnectionOptionsSpecification => ("Options", "options"),
    }
}

ec2_shape! {
    pub struct TunnelOption {
        outside_ip_address / with_outside_ip_address: String => ("OutsideIpAddress", "outsideIpAddress"),
        tunnel_inside_cidr / with_tunnel_inside_cidr: String => ("TunnelInsideCidr", "tunnelInsideCidr"),
        pre_shared_key / with_pre_shared_key: String => ("PreSharedKey", "preSharedKey"),
        phase1_lifetime_seconds / with_phase1_lifetime_seconds: i32 => ("Phase1LifetimeSeconds", "phase1LifetimeSeconds"),
        phase2_lifetime_seconds / with_phase2_lifetime_seconds: i32 => ("Phase2LifetimeSeconds", "phase2LifetimeSeconds"),
        rekey_margin_time_seconds / with_rekey_margin_time_seconds: i32 => ("RekeyMarginTimeSeconds", "rekeyMarginTimeSeconds"),
        rekey_fuzz_percentage / with_rekey_fuzz_percentage: i32 => ("RekeyFuzzPercentage", "rekeyFuzzPercentage"),
        replay_window_size / with_replay_window_size: i32 => ("ReplayWindowSize", "replayWindowSize"),
        dpd_timeout_seconds / with_dpd_timeout_seconds: i32 => ("DpdTimeoutSeconds", "dpdTimeoutSeconds"),
        phase1_encryption_algorithms / with_phase1_encryption_algorithms: Vec<StringValue> => ("Phase1EncryptionAlgorithms", "phase1EncryptionAlgorithmSet"),
        phase2_encryption_algorithms / with_phase2_encryption_algorithms: Vec<StringValue> => ("Phase2EncryptionAlgorithms", "phase2EncryptionAlgorithmSet"),
        phase1_integrity_algorithms / with_phase1_integrity_algorithms: Vec<StringValue> => ("Phase1IntegrityAlgorithms", "phase1IntegrityAlgorithmSet"),
        phase2_integrity_algorithms / with_phase2_integrity_algorithms: Vec<StringValue> => ("Phase2IntegrityAlgorithms", "phase2IntegrityAlgorithmSet"),
        phase1_dh_group_numbers / with_phase1_dh_group_numbers: Vec<IntegerValue> => ("Phase1DHGroupNumbers", "phase1DHGroupNumberSet"),
        phase2_dh_group_numbers / with_phase2_dh_group_numbers: Vec<IntegerValue> => ("Phase2DHGroupNumbers", "phase2DHGroupNumberSet"),
        ike_versions / with_ike_versions: Vec<StringValue> => ("IkeVersions", "ikeVersionSet"),
    }
}

ec2_shape! {
    pub struct VpnConnectionOptions {
        enable_acceleration / with_enable_acceleration: bool => ("EnableAcceleration", "enableAcceleration"),
        static_routes_only / with_static_routes_only: bool => ("StaticRoutesOnly", "staticRoutesOnly"),
        tunnel_options / with_tunnel_options: Vec<TunnelOption> => ("TunnelOptions", "tunnelOptionSet"),
    }
}

ec2_shape! {
    pub struct VpnStaticRoute {
        destination_cidr_block / with_destination_cidr_block: String => ("DestinationCidrBlock", "destinationCidrBlock"),
        source / with_source: VpnStaticRouteSource => ("Source", "source"),
        state / with_state: VpnState => ("State", "state"),
    }
}

ec2_shape! {
    /// Tunnel health as last reported by the virtual private gateway.
    pub struct VgwTelemetry {
        accepted_route_count / with_accepted_route_count: i32 => ("AcceptedRouteCount", "acceptedRouteCount"),
        last_status_change / with_last_status_change: DateTime<Utc> => ("LastStatusChange", "lastStatusChange"),
        outside_ip_address / with_outside_ip_address: String => ("OutsideIpAddress", "outsideIpAddress"),
        status / with_status: TelemetryStatus => ("Status", "status"),
        status_message / with_status_message: String => ("StatusMessage", "statusMessage"),
        certificate_arn / with_certificate_arn: String => ("CertificateArn", "certificateArn"),
    }
}

ec2_shape! {
    /// A VPN connection.
    pub struct VpnConnection {
        /// Device configuration in the native XML format, returned only
        /// on creation and while the connection is pending or available.
        customer_gateway_configuration / with_customer_gateway_configuration: String => ("CustomerGatewayConfiguration", "customerGatewayConfiguration"),
        customer_gateway_id / with_customer_gateway_id: String => ("CustomerGatewayId", "customerGatewayId"),
        category / with_category: String => ("Category", "category"),
        state / with_state: VpnState => ("State", "state"),
        connection_type / with_connection_type: GatewayType => ("Type", "type"),
        vpn_connection_id / with_vpn_connection_id: String => ("VpnConnectionId", "vpnConnectionId"),
        vpn_gateway_id / with_vpn_gateway_id: String => ("VpnGatewayId", "vpnGatewayId"),
        transit_gateway_id / with_transit_gateway_id: String => ("TransitGatewayId", "transitGatewayId"),
        options / with_options: VpnConnectionOptions => ("Options", "options"),
        routes / with_routes: Vec<VpnStaticRoute> => ("Routes", "routes"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
        vgw_telemetry / with_vgw_telemetry: Vec<VgwTelemetry> => ("VgwTelemetry", "vgwTelemetry"),
    }
}

ec2_shape! {
    pub struct CreateVpnConnectionResult {
        vpn_connection / with_vpn_connection: VpnConnection => ("VpnConnection", "vpnConnection"),
    }
}
