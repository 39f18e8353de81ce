//! Binding of each request type to its action name and result type.

use crate::model::*;
use crate::protocol::query::{QueryRequest, QueryValue};
use crate::protocol::xml::XmlValue;

/// An EC2 API action.
pub trait Operation: QueryValue + Send + Sync {
    /// Value of the `Action` parameter.
    const ACTION: &'static str;

    type Output: XmlValue + Send;

    /// Called once before the request is marshalled.
    fn prepare(&mut self) {}

    /// Marshal into a complete query request.
    fn to_query_request(&self, version: &str) -> QueryRequest {
        let mut request = QueryRequest::new(Self::ACTION, version);
        self.write_query("", &mut request.params);
        request
    }
}

/// An operation whose results are split into pages by `NextToken`.
pub trait Paginated: Operation + Clone {
    fn set_next_token(&mut self, token: String);

    /// Token for the page after `output`, if there is one.
    fn next_token(output: &Self::Output) -> Option<&str>;
}

fn fill_client_token(token: &mut Option<String>) {
    if token.is_none() {
        *token = Some(uuid::Uuid::new_v4().to_string());
    }
}

macro_rules! operation {
    ($request:ty => $output:ty, $action:literal) => {
        impl Operation for $request {
            const ACTION: &'static str = $action;
            type Output = $output;
        }
    };
    ($request:ty => $output:ty, $action:literal, idempotent) => {
        impl Operation for $request {
            const ACTION: &'static str = $action;
            type Output = $output;

            fn prepare(&mut self) {
                fill_client_token(&mut self.client_token);
            }
        }
    };
}

macro_rules! paginated {
    ($($request:ty),+ $(,)?) => {
        $(
            impl Paginated for $request {
                fn set_next_token(&mut self, token: String) {
                    self.next_token = Some(token);
                }

                fn next_token(output: &Self::Output) -> Option<&str> {
                    output.next_token.as_deref().filter(|token| !token.is_empty())
                }
            }
        )+
    };
}

operation!(DescribeInstancesRequest => DescribeInstancesResult, "DescribeInstances");
operation!(RunInstancesRequest => RunInstancesResult, "RunInstances", idempotent);
operation!(StartInstancesRequest => StartInstancesResult, "StartInstances");
operation!(StopInstancesRequest => StopInstancesResult, "StopInstances");
operation!(TerminateInstancesRequest => TerminateInstancesResult, "TerminateInstances");
operation!(DescribeImagesRequest => DescribeImagesResult, "DescribeImages");
operation!(DescribeInstanceTypesRequest => DescribeInstanceTypesResult, "DescribeInstanceTypes");
operation!(DescribeSecurityGroupsRequest => DescribeSecurityGroupsResult, "DescribeSecurityGroups");
operation!(DescribeNetworkInterfacesRequest => DescribeNetworkInterfacesResult, "DescribeNetworkInterfaces");
operation!(DescribeRouteTablesRequest => DescribeRouteTablesResult, "DescribeRouteTables");
operation!(CreateVolumeRequest => CreateVolumeResult, "CreateVolume");
operation!(CreateCapacityReservationRequest => CreateCapacityReservationResult, "CreateCapacityReservation", idempotent);
operation!(DescribeCapacityReservationsRequest => DescribeCapacityReservationsResult, "DescribeCapacityReservations");
operation!(CreateFlowLogsRequest => CreateFlowLogsResult, "CreateFlowLogs", idempotent);
operation!(DescribeReservedInstancesRequest => DescribeReservedInstancesResult, "DescribeReservedInstances");
operation!(DescribeReservedInstancesOfferingsRequest => DescribeReservedInstancesOfferingsResult, "DescribeReservedInstancesOfferings");
operation!(DescribeSpotInstanceRequestsRequest => DescribeSpotInstanceRequestsResult, "DescribeSpotInstanceRequests");
operation!(DescribeSpotFleetRequestsRequest => DescribeSpotFleetRequestsResult, "DescribeSpotFleetRequests");
operation!(DescribeFleetsRequest => DescribeFleetsResult, "DescribeFleets");
operation!(CreateLaunchTemplateRequest => CreateLaunchTemplateResult, "CreateLaunchTemplate", idempotent);
operation!(DescribeLaunchTemplateVersionsRequest => DescribeLaunchTemplateVersionsResult, "DescribeLaunchTemplateVersions");
operation!(CreateVpnConnectionRequest => CreateVpnConnectionResult, "CreateVpnConnection");

paginated!(
    DescribeInstancesRequest,
    DescribeInstanceTypesRequest,
    DescribeSecurityGroupsRequest,
    DescribeNetworkInterfacesRequest,
    DescribeRouteTablesRequest,
    DescribeCapacityReservationsRequest,
    DescribeReservedInstancesOfferingsRequest,
    DescribeSpotInstanceRequestsRequest,
    DescribeSpotFleetRequestsRequest,
    DescribeFleetsRequest,
    DescribeLaunchTemplateVersionsRequest,
);
