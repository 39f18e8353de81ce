mod common;

use chrono::{TimeZone, Utc};
use common::{client, ok, MockTransport};
use ec2_sdk::model::*;
use ec2_sdk::protocol::xml::write_response;
use ec2_sdk::protocol::{QueryParams, QueryValue, XmlNode, XmlValue};
use ec2_sdk::{Operation, API_VERSION};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Marshal through a real form body and read the parameters back.
fn form_round_trip<O: Operation + PartialEq + std::fmt::Debug>(request: &O) {
    let body = request.to_query_request(API_VERSION).to_form_body();
    let params = QueryParams::from_form_body(&body).unwrap();
    assert_eq!(params.get("Action"), Some(O::ACTION));
    assert_eq!(O::read_query("", &params).unwrap().as_ref(), Some(request));
}

fn sample_instance() -> Instance {
    Instance::new()
        .with_instance_id("i-0abc")
        .with_image_id("ami-1")
        .with_instance_type(InstanceType::M5Large)
        .with_launch_time(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap())
        .with_state(InstanceState::new().with_code(16).with_name(InstanceStateName::Running))
        .with_placement(Placement::new().with_availability_zone("us-east-1a").with_tenancy(Tenancy::Default))
        .with_security_groups(vec![GroupIdentifier::new().with_group_id("sg-1").with_group_name("web")])
        .with_block_device_mappings(vec![InstanceBlockDeviceMapping::new()
            .with_device_name("/dev/xvda")
            .with_ebs(EbsInstanceBlockDevice::new()
                .with_volume_id("vol-1")
                .with_delete_on_termination(true))])
        .with_tags(vec![Tag::pair("Name", "a < b & c")])
        .with_ebs_optimized(false)
}

#[test]
fn test_run_instances_wire_names() {
    let request = RunInstancesRequest::launch("ami-12345678", 2)
        .with_instance_type(InstanceType::C5Large)
        .with_block_device_mappings(vec![BlockDeviceMapping::new()
            .with_device_name("/dev/sdh")
            .with_ebs(EbsBlockDevice::new().with_volume_size(100).with_volume_type(VolumeType::Gp2))])
        .with_network_interfaces(vec![InstanceNetworkInterfaceSpecification::new()
            .with_device_index(0)
            .with_subnet_id("subnet-1")
            .with_groups(vec!["sg-1".to_string(), "sg-2".to_string()])])
        .with_tag_specifications(vec![TagSpecification::new()
            .with_resource_type(ResourceType::Instance)
            .with_tags(vec![Tag::pair("Name", "web server")])])
        .with_client_token("token-1");

    let query = request.to_query_request(API_VERSION);
    let params = &query.params;
    assert_eq!(params.get("BlockDeviceMapping.1.Ebs.VolumeSize"), Some("100"));
    assert_eq!(params.get("BlockDeviceMapping.1.Ebs.VolumeType"), Some("gp2"));
    assert_eq!(params.get("NetworkInterface.1.SecurityGroupId.2"), Some("sg-2"));
    assert_eq!(params.get("TagSpecification.1.ResourceType"), Some("instance"));
    assert_eq!(params.get("TagSpecification.1.Tag.1.Key"), Some("Name"));
    assert!(query.to_form_body().contains("TagSpecification.1.Tag.1.Value=web%20server"));

    form_round_trip(&request);
}

#[test]
fn test_request_form_round_trips() {
    form_round_trip(
        &DescribeSecurityGroupsRequest::new()
            .with_group_ids(vec!["sg-1".to_string()])
            .with_filters(vec![Filter::named("vpc-id", ["vpc-1", "vpc-2"])])
            .with_max_results(50),
    );
    form_round_trip(
        &CreateCapacityReservationRequest::new()
            .with_client_token("cr-token")
            .with_instance_type("m5.large")
            .with_instance_platform(CapacityReservationInstancePlatform::Windows)
            .with_instance_count(2)
            .with_end_date(Utc.with_ymd_and_hms(2021, 6, 30, 0, 0, 0).unwrap()),
    );
    form_round_trip(
        &DescribeLaunchTemplateVersionsRequest::new()
            .with_launch_template_id("lt-1")
            .with_versions(vec!["$Latest".to_string(), "3".to_string()]),
    );
    form_round_trip(
        &StopInstancesRequest::new()
            .with_instance_ids(vec!["i-1".to_string(), "i-2".to_string()])
            .with_hibernate(true),
    );
}

#[test]
fn test_empty_leading_filter_keeps_later_filters() {
    let request = DescribeInstancesRequest::new().with_filters(vec![
        Filter::new(),
        Filter::named("instance-type", ["t2.micro"]),
    ]);
    let params = request.to_query_request(API_VERSION).params;
    assert_eq!(params.get("Filter.2.Name"), Some("instance-type"));
    assert_eq!(params.get("Filter.2.Value.1"), Some("t2.micro"));
    form_round_trip(&request);
}

#[test]
fn test_unknown_enum_value_survives() {
    let request = DescribeInstanceTypesRequest::new()
        .with_instance_types(vec![InstanceType::from("z99.mega"), InstanceType::T3Nano]);
    let params = request.to_query_request(API_VERSION).params;
    assert_eq!(params.get("InstanceType.1"), Some("z99.mega"));
    assert_eq!(params.get("InstanceType.2"), Some("t3.nano"));
    form_round_trip(&request);
}

#[test]
fn test_describe_instances_xml_round_trip() {
    let result = DescribeInstancesResult::new()
        .with_reservations(vec![Reservation::new()
            .with_reservation_id("r-1")
            .with_owner_id("123456789012")
            .with_instances(vec![sample_instance()])])
        .with_next_token("next");

    let xml = write_response("DescribeInstances", "req-1", &result).unwrap();
    assert!(xml.starts_with(
        r#"<DescribeInstancesResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/"><requestId>req-1</requestId>"#
    ));
    assert!(xml.contains("<value>a &lt; b &amp; c</value>"));

    let root = XmlNode::parse(&xml).unwrap();
    assert_eq!(root.child_text("requestId"), Some("req-1"));
    assert_eq!(DescribeInstancesResult::read_xml(&root).unwrap(), result);
}

#[test]
fn test_reservation_result_round_trip() {
    let reservation = Reservation::new()
        .with_reservation_id("r-2")
        .with_groups(vec![GroupIdentifier::new().with_group_id("sg-9")])
        .with_instances(vec![sample_instance(), sample_instance().with_instance_id("i-0def")]);
    let xml = write_response("RunInstances", "req-2", &reservation).unwrap();
    let parsed = RunInstancesResult::read_xml(&XmlNode::parse(&xml).unwrap()).unwrap();
    assert_eq!(parsed, reservation);
    assert_eq!(hash_of(&parsed), hash_of(&reservation));
}

#[test]
fn test_json_round_trip() {
    let instance = sample_instance();
    let json = serde_json::to_string(&instance).unwrap();
    assert!(json.contains(r#""instance_type":"m5.large""#));
    assert!(!json.contains("kernel_id"));
    let back: Instance = serde_json::from_str(&json).unwrap();
    assert_eq!(back, instance);
}

#[tokio::test]
async fn test_client_reads_rendered_response() {
    let offering = ReservedInstancesOffering::new()
        .with_reserved_instances_offering_id("438012d3-example")
        .with_instance_type(InstanceType::M5Large)
        .with_fixed_price(530.5f32)
        .with_duration(31_536_000i64)
        .with_offering_class(OfferingClassType::Standard)
        .with_recurring_charges(vec![RecurringCharge::new()
            .with_amount(0.025)
            .with_frequency(RecurringChargeFrequency::Hourly)]);
    let result = DescribeReservedInstancesOfferingsResult::new()
        .with_reserved_instances_offerings(vec![offering]);
    let body = write_response("DescribeReservedInstancesOfferings", "req-3", &result).unwrap();

    let transport = MockTransport::with_responses(vec![ok(&body)]);
    let ec2 = client(&transport);
    let pages = ec2
        .send_all(DescribeReservedInstancesOfferingsRequest::new().with_instance_type(InstanceType::M5Large))
        .await
        .unwrap();
    assert_eq!(pages, vec![result]);
}

#[tokio::test]
async fn test_launch_template_flow() {
    let created = CreateLaunchTemplateResult::new().with_launch_template(
        LaunchTemplate::new()
            .with_launch_template_id("lt-0abc")
            .with_launch_template_name("web")
            .with_default_version_number(1i64)
            .with_latest_version_number(1i64),
    );
    let versions = DescribeLaunchTemplateVersionsResult::new().with_launch_template_versions(vec![
        LaunchTemplateVersion::new()
            .with_launch_template_id("lt-0abc")
            .with_version_number(1i64)
            .with_default_version(true)
            .with_launch_template_data(
                ResponseLaunchTemplateData::new()
                    .with_image_id("ami-1")
                    .with_security_group_ids(vec!["sg-1".to_string()]),
            ),
    ]);
    let transport = MockTransport::with_responses(vec![
        ok(&write_response("CreateLaunchTemplate", "a", &created).unwrap()),
        ok(&write_response("DescribeLaunchTemplateVersions", "b", &versions).unwrap()),
    ]);
    let ec2 = client(&transport);

    let template = ec2
        .create_launch_template(
            CreateLaunchTemplateRequest::new()
                .with_launch_template_name("web")
                .with_launch_template_data(
                    RequestLaunchTemplateData::new()
                        .with_image_id("ami-1")
                        .with_security_group_ids(vec!["sg-1".to_string()])
                        .with_user_script("#!/bin/sh\n"),
                ),
        )
        .await
        .unwrap()
        .launch_template
        .unwrap();
    let listed = ec2
        .describe_launch_template_versions(
            DescribeLaunchTemplateVersionsRequest::new()
                .with_launch_template_id(template.launch_template_id.clone().unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(listed, versions);

    let first = QueryParams::from_form_body(&transport.requests()[0].body).unwrap();
    assert!(first.get("ClientToken").is_some());
    assert_eq!(first.get("LaunchTemplateData.SecurityGroupId.1"), Some("sg-1"));
    assert_eq!(first.get("LaunchTemplateData.UserData"), Some("IyEvYmluL3NoCg=="));
    let second = QueryParams::from_form_body(&transport.requests()[1].body).unwrap();
    assert_eq!(second.get("LaunchTemplateId"), Some("lt-0abc"));
}
