use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeStruct};
use utoipa::ToSchema;

/// Response envelope shared by every API endpoint.
///
/// On the wire this is `{"success": true, "data": ...}` or
/// `{"success": false, "error": "...", "details": [...]}`; the `success`
/// flag is the discriminant.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: Option<T> },
    Failure { error: String, details: Vec<String> },
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::Success { data: Some(data) }
    }

    /// A success envelope without a payload (`{"success": true}`).
    pub fn empty() -> Self {
        Self::Success { data: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            details: Vec::new(),
        }
    }

    /// Convert into a plain `Result`, yielding `None` for payload-less successes.
    pub fn into_result(self) -> Result<Option<T>, String> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { error, .. } => Err(error),
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { data } => {
                let len = if data.is_some() { 2 } else { 1 };
                let mut state = serializer.serialize_struct("ApiResponse", len)?;
                state.serialize_field("success", &true)?;
                if let Some(data) = data {
                    state.serialize_field("data", data)?;
                }
                state.end()
            }
            Self::Failure { error, details } => {
                let len = if details.is_empty() { 2 } else { 3 };
                let mut state = serializer.serialize_struct("ApiResponse", len)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                if !details.is_empty() {
                    state.serialize_field("details", details)?;
                }
                state.end()
            }
        }
    }
}

#[derive(Deserialize)]
struct RawEnvelope<T> {
    success: bool,
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Vec<String>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;

        if raw.success {
            Ok(Self::Success { data: raw.data })
        } else {
            Ok(Self::Failure {
                error: raw.error.unwrap_or_else(|| "Unknown error".to_string()),
                details: raw.details,
            })
        }
    }
}

/// Response for a completed image upload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}
