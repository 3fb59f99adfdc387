use serde::{Deserialize, Serialize};
use sysdwitch_domain::ServiceStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatusResponse {
    pub name: String,
    pub status: String,
    pub active: bool,
}

impl ServiceStatusResponse {
    pub fn from_status(s: &ServiceStatus) -> Self {
        Self {
            name: s.name().to_string(),
            status: s.status().to_string(),
            active: s.is_active(),
        }
    }
}

/// Envelope shared by every JSON endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceStatusResponse>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceStatusResponse>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn service(status: &ServiceStatus) -> Self {
        Self {
            success: true,
            service: Some(ServiceStatusResponse::from_status(status)),
            services: None,
            error: None,
        }
    }

    pub fn services(statuses: &[ServiceStatus]) -> Self {
        Self {
            success: true,
            service: None,
            services: Some(
                statuses
                    .iter()
                    .map(ServiceStatusResponse::from_status)
                    .collect(),
            ),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            service: None,
            services: None,
            error: Some(message.into()),
        }
    }
}
