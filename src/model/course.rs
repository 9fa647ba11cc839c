use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::date;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CourseDto {
    #[schema(minimum = 1)]
    pub id: i32,
    pub name: String,
    #[serde(deserialize_with = "date::deserialize")]
    #[schema(value_type = String, format = Date, example = "2021-04-04")]
    pub start: NaiveDate,
    #[serde(deserialize_with = "date::deserialize")]
    #[schema(value_type = String, format = Date, example = "2023-12-22")]
    pub end: NaiveDate,
    #[schema(minimum = 0)]
    pub lectures: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCourseDto {
    #[schema(min_length = 1, example = "Level one")]
    pub name: String,
    #[serde(deserialize_with = "date::deserialize")]
    #[schema(value_type = String, format = Date, example = "2021-04-04")]
    pub start: NaiveDate,
    #[serde(deserialize_with = "date::deserialize")]
    #[schema(value_type = String, format = Date, example = "2023-12-22")]
    pub end: NaiveDate,
    #[schema(minimum = 0, example = 37)]
    pub lectures: i32,
}

/// Full replacement of a course, every field is required.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCourseDto {
    #[schema(min_length = 1)]
    pub name: String,
    #[serde(deserialize_with = "date::deserialize")]
    #[schema(value_type = String, format = Date)]
    pub start: NaiveDate,
    #[serde(deserialize_with = "date::deserialize")]
    #[schema(value_type = String, format = Date)]
    pub end: NaiveDate,
    #[schema(minimum = 0)]
    pub lectures: i32,
}

/// Partial update of a course; absent or null fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct PatchCourseDto {
    #[serde(default)]
    #[schema(min_length = 1)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "date::option::deserialize")]
    #[schema(value_type = Option<String>, format = Date)]
    pub start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "date::option::deserialize")]
    #[schema(value_type = Option<String>, format = Date)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    #[schema(minimum = 0)]
    pub lectures: Option<i32>,
}

/// Search filters, accepted both as query parameters and as a JSON body.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchCoursesDto {
    /// Substring of the course name
    #[serde(default)]
    #[param(min_length = 1)]
    #[schema(min_length = 1, example = "Python")]
    pub name: Option<String>,
    /// Earliest start date (inclusive)
    #[serde(default, deserialize_with = "date::option::deserialize")]
    #[param(value_type = Option<String>, format = Date)]
    #[schema(value_type = Option<String>, format = Date, example = "2021-06-17")]
    pub start: Option<NaiveDate>,
    /// Latest end date (inclusive)
    #[serde(default, deserialize_with = "date::option::deserialize")]
    #[param(value_type = Option<String>, format = Date)]
    #[schema(value_type = Option<String>, format = Date, example = "2024-04-24")]
    pub end: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedCoursesDto {
    pub courses: Vec<CourseDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
