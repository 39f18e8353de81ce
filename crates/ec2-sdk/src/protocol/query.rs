//! EC2 query protocol marshalling.
//!
//! A request becomes a flat, ordered set of `key=value` pairs:
//!
//! ```text
//! Action=DescribeInstances
//! Version=2016-11-15
//! Filter.1.Name=instance-state-name
//! Filter.1.Value.1=running
//! Filter.1.Value.2=pending
//! InstanceId.1=i-0598c7d356eba48d7
//! ```
//!
//! Nested members are joined with `.`, lists are always flattened and
//! 1-indexed, and an empty list contributes nothing.

use crate::error::{Ec2Error, Ec2Result};
use crate::protocol::timestamp;
use chrono::{DateTime, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;
use std::str::FromStr;

/// RFC 3986 unreserved characters are left alone, everything else is encoded.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

fn decode(input: &str) -> Ec2Result<String> {
    let plus_decoded = input.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| Ec2Error::unmarshall(input, e))
}

/// Join a member name onto a parent prefix.
pub fn member(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// True when `prefix` itself or any `prefix.*` key is present. The empty
    /// prefix matches everything.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        let dotted = format!("{}.", prefix);
        self.0
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .any(|(k, _)| k == prefix || k.starts_with(&dotted))
    }

    /// Highest `N` among the `name.N` and `name.N.*` keys, or 0.
    pub fn max_list_index(&self, name: &str) -> usize {
        let prefix = format!("{}.", name);
        self.0
            .range(prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&prefix))
            .filter_map(|(k, _)| k[prefix.len()..].split('.').next()?.parse::<usize>().ok())
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` body, keys in sorted order.
    pub fn to_form_body(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn from_form_body(body: &str) -> Ec2Result<Self> {
        let mut params = Self::new();
        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.insert(decode(key)?, decode(value)?);
        }
        Ok(params)
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A value that can be written to, and read back from, query parameters.
pub trait QueryValue: Sized {
    fn write_query(&self, name: &str, params: &mut QueryParams);

    /// `Ok(None)` when nothing is stored under `name`.
    fn read_query(name: &str, params: &QueryParams) -> Ec2Result<Option<Self>>;

    /// The value a list element had when it wrote no parameters at all.
    /// Only structures can do that; scalars always write their key.
    fn empty_element() -> Option<Self> {
        None
    }
}

fn read_scalar<T>(name: &str, params: &QueryParams) -> Ec2Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    params
        .get(name)
        .map(|raw| raw.parse::<T>().map_err(|e| Ec2Error::unmarshall(name, e)))
        .transpose()
}

macro_rules! display_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn write_query(&self, name: &str, params: &mut QueryParams) {
                    params.insert(name, self.to_string());
                }

                fn read_query(name: &str, params: &QueryParams) -> Ec2Result<Option<Self>> {
                    read_scalar(name, params)
                }
            }
        )*
    };
}

display_query_value!(String, bool, i32, i64, f32, f64);

impl QueryValue for DateTime<Utc> {
    fn write_query(&self, name: &str, params: &mut QueryParams) {
        params.insert(name, timestamp::format(self));
    }

    fn read_query(name: &str, params: &QueryParams) -> Ec2Result<Option<Self>> {
        params
            .get(name)
            .map(|raw| timestamp::parse(raw).map_err(|e| Ec2Error::unmarshall(name, e)))
            .transpose()
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn write_query(&self, name: &str, params: &mut QueryParams) {
        for (i, item) in self.iter().enumerate() {
            item.write_query(&format!("{}.{}", name, i + 1), params);
        }
    }

    /// Indices are read up to the highest one present, so an element that
    /// wrote nothing does not cut off the ones after it.
    fn read_query(name: &str, params: &QueryParams) -> Ec2Result<Option<Self>> {
        let last = params.max_list_index(name);
        let mut items = Vec::with_capacity(last);
        for index in 1..=last {
            match T::read_query(&format!("{}.{}", name, index), params)? {
                Some(item) => items.push(item),
                None => items.extend(T::empty_element()),
            }
        }
        Ok(if items.is_empty() { None } else { Some(items) })
    }
}

/// A fully marshalled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub action: String,
    pub version: String,
    pub params: QueryParams,
}

impl QueryRequest {
    pub fn new(action: &str, version: &str) -> Self {
        let mut params = QueryParams::new();
        params.insert("Action", action);
        params.insert("Version", version);
        Self {
            action: action.to_string(),
            version: version.to_string(),
            params,
        }
    }

    pub fn to_form_body(&self) -> String {
        self.params.to_form_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn member_joins_prefix() {
        assert_eq!(member("", "DryRun"), "DryRun");
        assert_eq!(member("Filter.1", "Name"), "Filter.1.Name");
    }

    #[test]
    fn encode_unreserved_untouched() {
        assert_eq!(encode("abcXYZ019-_.~"), "abcXYZ019-_.~");
    }

    #[test]
    fn encode_reserved() {
        assert_eq!(encode("a b"), "a%20b");
        assert_eq!(encode("10.0.0.0/16"), "10.0.0.0%2F16");
        assert_eq!(encode("k=v&x"), "k%3Dv%26x");
    }

    #[test]
    fn form_body_sorted_and_encoded() {
        let mut params = QueryParams::new();
        params.insert("Version", "2016-11-15");
        params.insert("Action", "DescribeImages");
        params.insert("Filter.1.Value.1", "amzn2-ami-hvm-*");
        assert_eq!(
            params.to_form_body(),
            "Action=DescribeImages&Filter.1.Value.1=amzn2-ami-hvm-%2A&Version=2016-11-15"
        );
    }

    #[test]
    fn form_body_decode() {
        let params = QueryParams::from_form_body("Action=RunInstances&UserData=a%2Bb&Name=my+box").unwrap();
        assert_eq!(params.get("Action"), Some("RunInstances"));
        assert_eq!(params.get("UserData"), Some("a+b"));
        assert_eq!(params.get("Name"), Some("my box"));
    }

    #[test]
    fn contains_prefix_is_segment_aware() {
        let mut params = QueryParams::new();
        params.insert("Filter.10.Name", "x");
        assert!(params.contains_prefix("Filter.10"));
        assert!(!params.contains_prefix("Filter.1"));
        assert!(params.contains_prefix("Filter"));
        assert!(params.contains_prefix(""));
    }

    #[test]
    fn scalar_values() {
        let mut params = QueryParams::new();
        true.write_query("DryRun", &mut params);
        5i32.write_query("MaxResults", &mut params);
        0.25f64.write_query("Price", &mut params);
        assert_eq!(params.get("DryRun"), Some("true"));
        assert_eq!(bool::read_query("DryRun", &params).unwrap(), Some(true));
        assert_eq!(i32::read_query("MaxResults", &params).unwrap(), Some(5));
        assert_eq!(f64::read_query("Price", &params).unwrap(), Some(0.25));
        assert_eq!(i64::read_query("Missing", &params).unwrap(), None);
    }

    #[test]
    fn scalar_parse_error_names_key() {
        let mut params = QueryParams::new();
        params.insert("MaxResults", "lots");
        match i32::read_query("MaxResults", &params) {
            Err(Ec2Error::Unmarshall { path, .. }) => assert_eq!(path, "MaxResults"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn timestamp_value() {
        let ts = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        let mut params = QueryParams::new();
        ts.write_query("EndDate", &mut params);
        assert_eq!(params.get("EndDate"), Some("2021-03-04T05:06:07.000Z"));
        assert_eq!(DateTime::<Utc>::read_query("EndDate", &params).unwrap(), Some(ts));
    }

    #[test]
    fn list_flattening() {
        let ids = vec!["i-1".to_string(), "i-2".to_string()];
        let mut params = QueryParams::new();
        ids.write_query("InstanceId", &mut params);
        assert_eq!(params.get("InstanceId.1"), Some("i-1"));
        assert_eq!(params.get("InstanceId.2"), Some("i-2"));
        assert_eq!(Vec::<String>::read_query("InstanceId", &params).unwrap(), Some(ids));
    }

    #[test]
    fn empty_list_writes_nothing() {
        let mut params = QueryParams::new();
        Vec::<String>::new().write_query("InstanceId", &mut params);
        assert!(params.is_empty());
        assert_eq!(Vec::<String>::read_query("InstanceId", &params).unwrap(), None);
    }

    #[test]
    fn max_list_index_reads_first_segment() {
        let mut params = QueryParams::new();
        params.insert("Filter.2.Name", "a");
        params.insert("Filter.10.Value.3", "b");
        params.insert("FilterX.40", "c");
        assert_eq!(params.max_list_index("Filter"), 10);
        assert_eq!(params.max_list_index("Missing"), 0);
    }

    #[test]
    fn list_with_missing_scalar_index_skips_it() {
        let mut params = QueryParams::new();
        params.insert("InstanceId.1", "i-1");
        params.insert("InstanceId.3", "i-3");
        assert_eq!(
            Vec::<String>::read_query("InstanceId", &params).unwrap(),
            Some(vec!["i-1".to_string(), "i-3".to_string()])
        );
    }

    #[test]
    fn query_request_has_action_and_version() {
        let req = QueryRequest::new("DescribeRouteTables", "2016-11-15");
        assert_eq!(
            req.to_form_body(),
            "Action=DescribeRouteTables&Version=2016-11-15"
        );
    }
}
