//! Region handling and client configuration.
//!
//! Follows the shape of `aws-config`: a region resolves to the regional EC2
//! endpoint unless an explicit endpoint URL overrides it (LocalStack, VPC
//! endpoints, test servers).

use crate::error::{Ec2Error, Ec2Result};
use serde::{Deserialize, Serialize};

/// EC2 API version spoken by every request.
pub const API_VERSION: &str = "2016-11-15";

/// XML namespace of EC2 response documents.
pub const XML_NAMESPACE: &str = "http://ec2.amazonaws.com/doc/2016-11-15/";

const DEFAULT_USER_AGENT: &str = concat!("ec2-sdk/", env!("CARGO_PKG_VERSION"));

/// All standard AWS regions as of 2025.
pub const AWS_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "af-south-1",
    "ap-east-1",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ca-central-1",
    "ca-west-1",
    "eu-central-1",
    "eu-central-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-south-1",
    "eu-south-2",
    "eu-north-1",
    "il-central-1",
    "me-south-1",
    "me-central-1",
    "sa-east-1",
    // GovCloud
    "us-gov-east-1",
    "us-gov-west-1",
    // China
    "cn-north-1",
    "cn-northwest-1",
];

/// An AWS region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Region {
    /// Region code (e.g. "us-east-1").
    pub name: String,
}

impl Region {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Regional EC2 endpoint: `https://ec2.{region}.amazonaws.com`, with the
    /// `.com.cn` suffix in the China partition.
    pub fn endpoint(&self) -> String {
        if self.name.starts_with("cn-") {
            format!("https://ec2.{}.amazonaws.com.cn", self.name)
        } else {
            format!("https://ec2.{}.amazonaws.com", self.name)
        }
    }

    pub fn is_known(&self) -> bool {
        AWS_REGIONS.contains(&self.name.as_str())
    }

    /// Partition the region belongs to (aws, aws-cn, aws-us-gov).
    pub fn partition(&self) -> &str {
        if self.name.starts_with("cn-") {
            "aws-cn"
        } else if self.name.starts_with("us-gov-") {
            "aws-us-gov"
        } else {
            "aws"
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new("us-east-1")
    }
}

/// Configuration of an [`Ec2Client`](crate::client::Ec2Client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ec2Config {
    pub region: Region,
    /// Overrides the regional endpoint when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for Ec2Config {
    fn default() -> Self {
        Self::new(Region::default())
    }
}

impl Ec2Config {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            endpoint_url: None,
            api_version: default_api_version(),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resolve configuration from the standard AWS environment variables.
    ///
    /// Region: `AWS_REGION`, then `AWS_DEFAULT_REGION`, then `us-east-1`.
    /// Endpoint: `AWS_ENDPOINT_URL_EC2`, then `AWS_ENDPOINT_URL`.
    pub fn from_env() -> Self {
        let region = std::env::var("AWS_REGION")
            .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
            .ok()
            .filter(|r| !r.trim().is_empty())
            .map(|r| Region::new(r.trim()))
            .unwrap_or_default();
        let endpoint_url = std::env::var("AWS_ENDPOINT_URL_EC2")
            .or_else(|_| std::env::var("AWS_ENDPOINT_URL"))
            .ok()
            .filter(|u| !u.trim().is_empty());

        Self {
            endpoint_url,
            ..Self::new(region)
        }
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> String {
        match self.endpoint_url {
            Some(ref url) => url.trim_end_matches('/').to_string(),
            None => self.region.endpoint(),
        }
    }

    /// Host component of the endpoint.
    pub fn host(&self) -> Ec2Result<String> {
        let endpoint = self.endpoint();
        url::Url::parse(&endpoint)
            .ok()
            .and_then(|u| {
                let host = u.host_str()?.to_string();
                Some(match u.port() {
                    Some(port) => format!("{}:{}", host, port),
                    None => host,
                })
            })
            .ok_or_else(|| Ec2Error::Config(format!("endpoint '{}' has no host", endpoint)))
    }

    pub fn validate(&self) -> Ec2Result<()> {
        if self.region.name.trim().is_empty() {
            return Err(Ec2Error::Config("region is required".to_string()));
        }
        if self.api_version.is_empty() {
            return Err(Ec2Error::Config("API version is required".to_string()));
        }
        if let Some(ref endpoint) = self.endpoint_url {
            let parsed = url::Url::parse(endpoint).map_err(|e| {
                Ec2Error::Config(format!("invalid endpoint URL '{}': {}", endpoint, e))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Ec2Error::Config(format!(
                    "endpoint URL '{}' must use http or https",
                    endpoint
                )));
            }
        } else if !self.region.is_known() {
            log::warn!(
                "Region '{}' is not in the known region table; using {}",
                self.region.name,
                self.region.endpoint()
            );
        }
        Ok(())
    }
}
