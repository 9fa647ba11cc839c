use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Problem type used when no more specific problem URI applies (RFC 7807).
pub const PROBLEM_TYPE_BLANK: &str = "about:blank";

/// RFC 7807 problem details returned by every failing endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProblemDto {
    #[serde(rename = "type")]
    #[schema(example = "about:blank")]
    pub problem_type: String,
    #[schema(example = "Bad Request")]
    pub title: String,
    #[schema(example = 400)]
    pub status: u16,
    pub detail: String,
}
