//! EC2 client over a pluggable HTTP transport.
//!
//! The client marshals an [`Operation`] into a form-encoded Query API
//! request, hands it to a [`Transport`], and unmarshalls the XML answer
//! into the operation's result type. Signing and retries belong to the
//! transport.

use crate::config::Ec2Config;
use crate::error::{Ec2Error, Ec2Result, ServiceError};
use crate::model::*;
use crate::operation::{Operation, Paginated};
use crate::protocol::xml::{XmlNode, XmlValue};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// An HTTP request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// An HTTP response as received from EC2.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn request_id(&self) -> Option<&str> {
        self.header("x-amzn-requestid")
            .or_else(|| self.header("x-amz-request-id"))
    }
}

/// Sends HTTP requests. Implementations own connection handling, request
/// signing and retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Ec2Result<HttpResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Ec2Result<HttpResponse> {
        (**self).send(request).await
    }
}

/// EC2 API client.
#[derive(Debug, Clone)]
pub struct Ec2Client<T> {
    config: Ec2Config,
    transport: T,
}

impl<T: Transport> Ec2Client<T> {
    pub fn new(config: Ec2Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Ec2Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Marshal `operation` into an HTTP request against the configured
    /// endpoint. The operation is taken as is; [`Operation::prepare`] is
    /// not applied.
    pub fn build_request<O: Operation>(&self, operation: &O) -> Ec2Result<HttpRequest> {
        let query = operation.to_query_request(&self.config.api_version);
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), FORM_CONTENT_TYPE.to_string());
        headers.insert("host".to_string(), self.config.host()?);
        headers.insert("user-agent".to_string(), self.config.user_agent.clone());

        Ok(HttpRequest {
            method: "POST".to_string(),
            url: format!("{}/", self.config.endpoint()),
            headers,
            body: query.to_form_body(),
        })
    }

    /// Send one request and unmarshall its result.
    pub async fn send<O: Operation>(&self, mut operation: O) -> Ec2Result<O::Output> {
        operation.prepare();
        let request = self.build_request(&operation)?;
        log::debug!("EC2 {} -> {}", O::ACTION, request.url);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let mut error =
                ServiceError::parse_xml_error(response.status, &response.body).with_action(O::ACTION);
            if error.request_id.is_none() {
                if let Some(id) = response.request_id() {
                    error = error.with_request_id(id);
                }
            }
            log::warn!("EC2 {} failed: {}", O::ACTION, error);
            return Err(Ec2Error::Service(error));
        }

        let root = XmlNode::parse(&response.body)?;
        log::debug!(
            "EC2 {} <- HTTP {} [RequestId: {}]",
            O::ACTION,
            response.status,
            root.child_text("requestId")
                .or_else(|| response.request_id())
                .unwrap_or("-")
        );
        O::Output::read_xml(&root)
    }

    /// Send `operation` and follow `NextToken` until the last page.
    pub async fn send_all<O: Paginated>(&self, operation: O) -> Ec2Result<Vec<O::Output>> {
        let mut operation = operation;
        let mut pages = Vec::new();
        let mut seen = HashSet::new();

        loop {
            let page = self.send(operation.clone()).await?;
            let next = O::next_token(&page).map(str::to_string);
            pages.push(page);

            let Some(token) = next else { break };
            if !seen.insert(token.clone()) {
                log::warn!(
                    "EC2 {} returned NextToken '{}' twice; stopping after {} pages",
                    O::ACTION,
                    token,
                    pages.len()
                );
                break;
            }
            operation.set_next_token(token);
        }

        Ok(pages)
    }
}

macro_rules! named_operations {
    ($( $(#[$meta:meta])* $method:ident($request:ty) -> $output:ty; )+) => {
        impl<T: Transport> Ec2Client<T> {
            $(
                $(#[$meta])*
                pub async fn $method(&self, request: $request) -> Ec2Result<$output> {
                    self.send(request).await
                }
            )+
        }
    };
}

named_operations! {
    /// Describes instances, one page at a time. See [`Ec2Client::send_all`].
    describe_instances(DescribeInstancesRequest) -> DescribeInstancesResult;
    /// Launches instances. A `ClientToken` is generated when unset.
    run_instances(RunInstancesRequest) -> RunInstancesResult;
    start_instances(StartInstancesRequest) -> StartInstancesResult;
    stop_instances(StopInstancesRequest) -> StopInstancesResult;
    terminate_instances(TerminateInstancesRequest) -> TerminateInstancesResult;
    describe_images(DescribeImagesRequest) -> DescribeImagesResult;
    describe_instance_types(DescribeInstanceTypesRequest) -> DescribeInstanceTypesResult;
    describe_security_groups(DescribeSecurityGroupsRequest) -> DescribeSecurityGroupsResult;
    describe_network_interfaces(DescribeNetworkInterfacesRequest) -> DescribeNetworkInterfacesResult;
    describe_route_tables(DescribeRouteTablesRequest) -> DescribeRouteTablesResult;
    create_volume(CreateVolumeRequest) -> CreateVolumeResult;
    create_capacity_reservation(CreateCapacityReservationRequest) -> CreateCapacityReservationResult;
    describe_capacity_reservations(DescribeCapacityReservationsRequest) -> DescribeCapacityReservationsResult;
    create_flow_logs(CreateFlowLogsRequest) -> CreateFlowLogsResult;
    describe_reserved_instances(DescribeReservedInstancesRequest) -> DescribeReservedInstancesResult;
    describe_reserved_instances_offerings(DescribeReservedInstancesOfferingsRequest) -> DescribeReservedInstancesOfferingsResult;
    describe_spot_instance_requests(DescribeSpotInstanceRequestsRequest) -> DescribeSpotInstanceRequestsResult;
    describe_spot_fleet_requests(DescribeSpotFleetRequestsRequest) -> DescribeSpotFleetRequestsResult;
    describe_fleets(DescribeFleetsRequest) -> DescribeFleetsResult;
    create_launch_template(CreateLaunchTemplateRequest) -> CreateLaunchTemplateResult;
    describe_launch_template_versions(DescribeLaunchTemplateVersionsRequest) -> DescribeLaunchTemplateVersionsResult;
    create_vpn_connection(CreateVpnConnectionRequest) -> CreateVpnConnectionResult;
}
