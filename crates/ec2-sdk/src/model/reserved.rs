//! Reserved Instances and their offerings.

use super::common::*;
use super::instance_types::InstanceType;
use crate::shape::{ec2_enum, ec2_shape};
use chrono::{DateTime, Utc};

ec2_enum! {
    pub enum ReservedInstanceState {
        PaymentPending => "payment-pending",
        Active => "active",
        PaymentFailed => "payment-failed",
        Retired => "retired",
        Queued => "queued",
        QueuedDeleted => "queued-deleted",
    }
}

ec2_enum! {
    pub enum OfferingClassType {
        Standard => "standard",
        Convertible => "convertible",
    }
}

ec2_enum! {
    pub enum OfferingTypeValues {
        HeavyUtilization => "Heavy Utilization",
        MediumUtilization => "Medium Utilization",
        LightUtilization => "Light Utilization",
        NoUpfront => "No Upfront",
        PartialUpfront => "Partial Upfront",
        AllUpfront => "All Upfront",
    }
}

ec2_enum! {
    pub enum Scope {
        AvailabilityZone => "Availability Zone",
        Region => "Region",
    }
}

ec2_enum! {
    pub enum RecurringChargeFrequency {
        Hourly => "Hourly",
    }
}

ec2_shape! {
    pub struct RecurringCharge {
        amount / with_amount: f64 => ("Amount", "amount"),
        frequency / with_frequency: RecurringChargeFrequency => ("Frequency", "frequency"),
    }
}

ec2_shape! {
    /// A purchased Reserved Instance.
    pub struct ReservedInstances {
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "availabilityZone"),
        /// Term in seconds.
        duration / with_duration: i64 => ("Duration", "duration"),
        end / with_end: DateTime<Utc> => ("End", "end"),
        fixed_price / with_fixed_price: f32 => ("FixedPrice", "fixedPrice"),
        instance_count / with_instance_count: i32 => ("InstanceCount", "instanceCount"),
        instance_type / with_instance_type: InstanceType => ("InstanceType", "instanceType"),
        product_description / with_product_description: RIProductDescription => ("ProductDescription", "productDescription"),
        reserved_instances_id / with_reserved_instances_id: String => ("ReservedInstancesId", "reservedInstancesId"),
        start / with_start: DateTime<Utc> => ("Start", "start"),
        state / with_state: ReservedInstanceState => ("State", "state"),
        usage_price / with_usage_price: f32 => ("UsagePrice", "usagePrice"),
        currency_code / with_currency_code: CurrencyCodeValues => ("CurrencyCode", "currencyCode"),
        instance_tenancy / with_instance_tenancy: Tenancy => ("InstanceTenancy", "instanceTenancy"),
        offering_class / with_offering_class: OfferingClassType => ("OfferingClass", "offeringClass"),
        offering_type / with_offering_type: OfferingTypeValues => ("OfferingType", "offeringType"),
        recurring_charges / with_recurring_charges: Vec<RecurringCharge> => ("RecurringCharges", "recurringCharges"),
        scope / with_scope: Scope => ("Scope", "scope"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
    }
}

ec2_shape! {
    pub struct DescribeReservedInstancesRequest {
        filters / with_filters: Vec<Filter> => ("Filter", "Filter"),
        offering_class / with_offering_class: OfferingClassType => ("OfferingClass", "OfferingClass"),
        reserved_instances_ids / with_reserved_instances_ids: Vec<String> => ("ReservedInstancesId", "ReservedInstancesId"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        offering_type / with_offering_type: OfferingTypeValues => ("OfferingType", "offeringType"),
    }
}

ec2_shape! {
    pub struct DescribeReservedInstancesResult {
        reserved_instances / with_reserved_instances: Vec<ReservedInstances> => ("ReservedInstances", "reservedInstancesSet"),
    }
}

ec2_shape! {
    pub struct PricingDetail {
        count / with_count: i32 => ("Count", "count"),
        price / with_price: f64 => ("Price", "price"),
    }
}

ec2_shape! {
    /// A Reserved Instance offering, from AWS or the Marketplace.
    pub struct ReservedInstancesOffering {
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "availabilityZone"),
        duration / with_duration: i64 => ("Duration", "duration"),
        fixed_price / with_fixed_price: f32 => ("FixedPrice", "fixedPrice"),
        instance_type / with_instance_type: InstanceType => ("InstanceType", "instanceType"),
        product_description / with_product_description: RIProductDescription => ("ProductDescription", "productDescription"),
        reserved_instances_offering_id / with_reserved_instances_offering_id: String => ("ReservedInstancesOfferingId", "reservedInstancesOfferingId"),
        usage_price / with_usage_price: f32 => ("UsagePrice", "usagePrice"),
        currency_code / with_currency_code: CurrencyCodeValues => ("CurrencyCode", "currencyCode"),
        instance_tenancy / with_instance_tenancy: Tenancy => ("InstanceTenancy", "instanceTenancy"),
        marketplace / with_marketplace: bool => ("Marketplace", "marketplace"),
        offering_class / with_offering_class: OfferingClassType => ("OfferingClass", "offeringClass"),
        offering_type / with_offering_type: OfferingTypeValues => ("OfferingType", "offeringType"),
        pricing_details / with_pricing_details: Vec<PricingDetail> => ("PricingDetails", "pricingDetailsSet"),
        recurring_charges / with_recurring_charges: Vec<RecurringCharge> => ("RecurringCharges", "recurringCharges"),
        scope / with_scope: Scope => ("Scope", "scope"),
    }
}

ec2_shape! {
    pub struct DescribeReservedInstancesOfferingsRequest {
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "AvailabilityZone"),
        filters / with_filters: Vec<Filter> => ("Filter", "Filter"),
        include_marketplace / with_include_marketplace: bool => ("IncludeMarketplace", "IncludeMarketplace"),
        instance_type / with_instance_type: InstanceType => ("InstanceType", "InstanceType"),
        /// Seconds.
        max_duration / with_max_duration: i64 => ("MaxDuration", "MaxDuration"),
        max_instance_count / with_max_instance_count: i32 => ("MaxInstanceCount", "MaxInstanceCount"),
        min_duration / with_min_duration: i64 => ("MinDuration", "MinDuration"),
        offering_class / with_offering_class: OfferingClassType => ("OfferingClass", "OfferingClass"),
        product_description / with_product_description: RIProductDescription => ("ProductDescription", "ProductDescription"),
        reserved_instances_offering_ids / with_reserved_instances_offering_ids: Vec<String> => ("ReservedInstancesOfferingId", "ReservedInstancesOfferingId"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        instance_tenancy / with_instance_tenancy: Tenancy => ("InstanceTenancy", "instanceTenancy"),
        max_results / with_max_results: i32 => ("MaxResults", "maxResults"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
        offering_type / with_offering_type: OfferingTypeValues => ("OfferingType", "offeringType"),
    }
}

ec2_shape! {
    pub struct DescribeReservedInstancesOfferingsResult {
        reserved_instances_offerings / with_reserved_instances_offerings: Vec<ReservedInstancesOffering> => ("ReservedInstancesOfferings", "reservedInstancesOfferingsSet"),
        next_token / with_next_token: String => ("NextToken", "nextToken"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::query::{QueryParams, QueryValue};
    use crate::protocol::xml::{XmlNode, XmlValue};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn offerings_query() {
        let req = DescribeReservedInstancesOfferingsRequest::new()
            .with_instance_type(InstanceType::M5Large)
            .with_offering_class(OfferingClassType::Convertible)
            .with_offering_type(OfferingTypeValues::NoUpfront)
            .with_min_duration(31_536_000i64)
            .with_include_marketplace(false)
            .with_product_description(RIProductDescription::LinuxUnix);
        let mut params = QueryParams::new();
        req.write_query("", &mut params);
        assert_eq!(params.get("InstanceType"), Some("m5.large"));
        assert_eq!(params.get("OfferingType"), Some("No Upfront"));
        assert_eq!(params.get("MinDuration"), Some("31536000"));
        assert_eq!(params.get("ProductDescription"), Some("Linux/UNIX"));
        assert_eq!(params.get("IncludeMarketplace"), Some("false"));
        assert_eq!(
            DescribeReservedInstancesOfferingsRequest::read_query("", &params).unwrap(),
            Some(req)
        );
    }

    #[test]
    fn parse_reserved_instances() {
        let xml = r#"<DescribeReservedInstancesResponse>
            <reservedInstancesSet>
                <item>
                    <reservedInstancesId>e5a2ff3b-7d14-494f-90af-0b5d0EXAMPLE</reservedInstancesId>
                    <instanceType>m1.xlarge</instanceType>
                    <availabilityZone>us-east-1b</availabilityZone>
                    <start>2015-07-14T11:00:00Z</start>
                    <end>2016-07-13T12:00:00Z</end>
                    <duration>31536000</duration>
                    <fixedPrice>0.0</fixedPrice>
                    <usagePrice>0.034</usagePrice>
                    <instanceCount>2</instanceCount>
                    <productDescription>Linux/UNIX (Amazon VPC)</productDescription>
                    <state>active</state>
                    <instanceTenancy>default</instanceTenancy>
                    <currencyCode>USD</currencyCode>
                    <offeringType>Partial Upfront</offeringType>
                    <recurringCharges><item><frequency>Hourly</frequency><amount>0.05</amount></item></recurringCharges>
                    <offeringClass>standard</offeringClass>
                    <scope>Availability Zone</scope>
                </item>
            </reservedInstancesSet>
        </DescribeReservedInstancesResponse>"#;
        let result = DescribeReservedInstancesResult::read_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        let ri = &result.reserved_instances.unwrap()[0];
        assert_eq!(ri.duration, Some(31_536_000));
        assert_eq!(ri.usage_price, Some(0.034));
        assert_eq!(ri.product_description, Some(RIProductDescription::LinuxUnixAmazonVpc));
        assert_eq!(ri.offering_type, Some(OfferingTypeValues::PartialUpfront));
        assert_eq!(ri.scope, Some(Scope::AvailabilityZone));
        assert_eq!(
            ri.recurring_charges.as_ref().unwrap()[0].amount,
            Some(0.05)
        );
    }

    #[test]
    fn float_fields_hash_consistently() {
        let a = ReservedInstances::new().with_fixed_price(0.0f32).with_usage_price(0.034f32);
        let b = ReservedInstances::new().with_fixed_price(-0.0f32).with_usage_price(0.034f32);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
