mod common;

use common::{client, ok, MockTransport};
use ec2_sdk::model::*;
use ec2_sdk::protocol::QueryParams;
use ec2_sdk::{Ec2Error, HttpResponse};

const DESCRIBE_INSTANCES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DescribeInstancesResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/">
    <requestId>8f7724cf-496f-496e-8fe3-example</requestId>
    <reservationSet>
        <item>
            <reservationId>r-1234567890abcdef0</reservationId>
            <ownerId>123456789012</ownerId>
            <groupSet/>
            <instancesSet>
                <item>
                    <instanceId>i-1234567890abcdef0</instanceId>
                    <imageId>ami-bff32ccc</imageId>
                    <instanceState><code>16</code><name>running</name></instanceState>
                    <privateDnsName>ip-192-168-1-88.eu-west-1.compute.internal</privateDnsName>
                    <dnsName>ec2-54-194-252-215.eu-west-1.compute.amazonaws.com</dnsName>
                    <instanceType>t2.micro</instanceType>
                    <launchTime>2018-05-08T16:46:19.000Z</launchTime>
                    <placement><availabilityZone>eu-west-1c</availabilityZone><tenancy>default</tenancy></placement>
                    <ipAddress>54.194.252.215</ipAddress>
                    <tagSet><item><key>Name</key><value>MyInstance</value></item></tagSet>
                </item>
            </instancesSet>
        </item>
    </reservationSet>
</DescribeInstancesResponse>"#;

fn page(token: Option<&str>, reservation: &str) -> HttpResponse {
    let token = token
        .map(|t| format!("<nextToken>{}</nextToken>", t))
        .unwrap_or_default();
    ok(&format!(
        "<DescribeInstancesResponse><reservationSet><item><reservationId>{}</reservationId></item></reservationSet>{}</DescribeInstancesResponse>",
        reservation, token
    ))
}

fn sent_params(transport: &MockTransport, index: usize) -> QueryParams {
    QueryParams::from_form_body(&transport.requests()[index].body).unwrap()
}

#[tokio::test]
async fn test_describe_instances() {
    let transport = MockTransport::with_responses(vec![ok(DESCRIBE_INSTANCES)]);
    let ec2 = client(&transport);

    let result = ec2
        .describe_instances(
            DescribeInstancesRequest::new()
                .with_filters(vec![Filter::named("instance-type", ["t2.micro"])]),
        )
        .await
        .unwrap();

    let instance = result.instances().next().unwrap();
    assert_eq!(instance.instance_id.as_deref(), Some("i-1234567890abcdef0"));
    assert_eq!(instance.instance_type, Some(InstanceType::T2Micro));
    assert_eq!(
        instance.state.as_ref().and_then(|s| s.name.clone()),
        Some(InstanceStateName::Running)
    );
    assert_eq!(instance.public_ip_address.as_deref(), Some("54.194.252.215"));
    assert_eq!(instance.tag("Name"), Some("MyInstance"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "https://ec2.us-east-1.amazonaws.com/");
    let params = sent_params(&transport, 0);
    assert_eq!(params.get("Action"), Some("DescribeInstances"));
    assert_eq!(params.get("Version"), Some("2016-11-15"));
    assert_eq!(params.get("Filter.1.Name"), Some("instance-type"));
    assert_eq!(params.get("Filter.1.Value.1"), Some("t2.micro"));
}

#[tokio::test]
async fn test_service_error_carries_code_and_request_id() {
    let body = r#"<Response><Errors><Error><Code>InvalidInstanceID.NotFound</Code><Message>The instance ID 'i-1' does not exist</Message></Error></Errors><RequestID>ea966190-f9aa-478e-9ede-example</RequestID></Response>"#;
    let transport = MockTransport::with_responses(vec![HttpResponse::new(400, body)]);
    let ec2 = client(&transport);

    let err = ec2
        .terminate_instances(
            TerminateInstancesRequest::new().with_instance_ids(vec!["i-1".to_string()]),
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("InvalidInstanceID.NotFound"));
    assert!(!err.is_retryable());
    match err {
        Ec2Error::Service(service) => {
            assert_eq!(service.status_code, 400);
            assert_eq!(service.action.as_deref(), Some("TerminateInstances"));
            assert_eq!(
                service.request_id.as_deref(),
                Some("ea966190-f9aa-478e-9ede-example")
            );
        }
        other => panic!("expected service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_request_id_header_fills_missing_body_id() {
    let response = HttpResponse::new(503, "Service Unavailable")
        .with_header("x-amzn-RequestId", "hdr-request-id");
    let transport = MockTransport::with_responses(vec![response]);
    let ec2 = client(&transport);

    let err = ec2
        .describe_images(DescribeImagesRequest::new())
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    match err {
        Ec2Error::Service(service) => {
            assert_eq!(service.code, "UnknownError");
            assert_eq!(service.request_id.as_deref(), Some("hdr-request-id"));
        }
        other => panic!("expected service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_xml_error() {
    let transport = MockTransport::with_responses(vec![ok("<DescribeImagesResponse><imagesSet>")]);
    let ec2 = client(&transport);
    let err = ec2
        .describe_images(DescribeImagesRequest::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Ec2Error::Xml(_)));
}

#[tokio::test]
async fn test_bad_scalar_is_unmarshall_error() {
    let body = "<CreateVolumeResponse><volumeId>vol-1</volumeId><size>eighty</size></CreateVolumeResponse>";
    let transport = MockTransport::with_responses(vec![ok(body)]);
    let ec2 = client(&transport);
    let err = ec2
        .create_volume(CreateVolumeRequest::new().with_size(80))
        .await
        .unwrap_err();
    match err {
        Ec2Error::Unmarshall { path, .. } => assert_eq!(path, "size"),
        other => panic!("expected unmarshall error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_send_all_follows_next_token() {
    let transport = MockTransport::with_responses(vec![
        page(Some("token-2"), "r-1"),
        page(Some("token-3"), "r-2"),
        page(None, "r-3"),
    ]);
    let ec2 = client(&transport);

    let pages = ec2
        .send_all(DescribeInstancesRequest::new().with_max_results(5))
        .await
        .unwrap();

    let ids: Vec<_> = pages
        .iter()
        .flat_map(|p| p.reservations.iter().flatten())
        .filter_map(|r| r.reservation_id.as_deref())
        .collect();
    assert_eq!(ids, ["r-1", "r-2", "r-3"]);

    assert_eq!(sent_params(&transport, 0).get("NextToken"), None);
    assert_eq!(sent_params(&transport, 1).get("NextToken"), Some("token-2"));
    assert_eq!(sent_params(&transport, 2).get("NextToken"), Some("token-3"));
    assert_eq!(sent_params(&transport, 2).get("MaxResults"), Some("5"));
}

#[tokio::test]
async fn test_send_all_stops_on_empty_token() {
    let transport = MockTransport::with_responses(vec![page(Some("t"), "r-1"), page(Some(""), "r-2")]);
    let ec2 = client(&transport);
    let pages = ec2.send_all(DescribeInstancesRequest::new()).await.unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_send_all_stops_on_repeated_token() {
    let transport = MockTransport::with_responses(vec![
        page(Some("same"), "r-1"),
        page(Some("same"), "r-2"),
        page(None, "r-3"),
    ]);
    let ec2 = client(&transport);
    let pages = ec2.send_all(DescribeInstancesRequest::new()).await.unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_send_all_propagates_page_error() {
    let transport = MockTransport::with_responses(vec![page(Some("t"), "r-1")]);
    let ec2 = client(&transport);
    let err = ec2.send_all(DescribeInstancesRequest::new()).await.unwrap_err();
    assert!(matches!(err, Ec2Error::Transport(_)));
}

#[tokio::test]
async fn test_run_instances_generates_client_token() {
    let body = r#"<RunInstancesResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/">
        <requestId>59dbff89-35bd-4eac-99ed-be587EXAMPLE</requestId>
        <reservationId>r-1234567890abcdef0</reservationId>
        <ownerId>123456789012</ownerId>
        <instancesSet>
            <item>
                <instanceId>i-1234567890abcdef0</instanceId>
                <imageId>ami-1</imageId>
                <instanceState><code>0</code><name>pending</name></instanceState>
                <instanceType>t2.micro</instanceType>
            </item>
        </instancesSet>
    </RunInstancesResponse>"#;
    let transport = MockTransport::with_responses(vec![ok(body), ok(body)]);
    let ec2 = client(&transport);

    let reservation = ec2
        .run_instances(
            RunInstancesRequest::launch("ami-1", 1)
                .with_instance_type(InstanceType::T2Micro)
                .with_security_group_ids(vec!["sg-1".to_string()]),
        )
        .await
        .unwrap();
    assert_eq!(reservation.reservation_id.as_deref(), Some("r-1234567890abcdef0"));
    let instances = reservation.instances.unwrap();
    assert_eq!(
        instances[0].state.as_ref().and_then(|s| s.name.clone()),
        Some(InstanceStateName::Pending)
    );

    let params = sent_params(&transport, 0);
    let token = params.get("ClientToken").unwrap();
    assert!(uuid::Uuid::parse_str(token).is_ok());
    assert_eq!(params.get("MinCount"), Some("1"));
    assert_eq!(params.get("SecurityGroupId.1"), Some("sg-1"));

    ec2.run_instances(RunInstancesRequest::launch("ami-1", 1).with_client_token("mine"))
        .await
        .unwrap();
    assert_eq!(sent_params(&transport, 1).get("ClientToken"), Some("mine"));
}

#[tokio::test]
async fn test_stop_instances_state_changes() {
    let body = r#"<StopInstancesResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/">
        <requestId>59dbff89-35bd-4eac-99ed-be587EXAMPLE</requestId>
        <instancesSet>
            <item>
                <instanceId>i-1234567890abcdef0</instanceId>
                <currentState><code>64</code><name>stopping</name></currentState>
                <previousState><code>16</code><name>running</name></previousState>
            </item>
        </instancesSet>
    </StopInstancesResponse>"#;
    let transport = MockTransport::with_responses(vec![ok(body)]);
    let ec2 = client(&transport);

    let result = ec2
        .stop_instances(
            StopInstancesRequest::new()
                .with_instance_ids(vec!["i-1234567890abcdef0".to_string()])
                .with_force(true),
        )
        .await
        .unwrap();
    let change = &result.stopping_instances.unwrap()[0];
    assert_eq!(change.current_state.as_ref().and_then(|s| s.state_code()), Some(64));
    assert_eq!(
        change.previous_state.as_ref().and_then(|s| s.name.clone()),
        Some(InstanceStateName::Running)
    );
    assert_eq!(sent_params(&transport, 0).get("Force"), Some("true"));
}
