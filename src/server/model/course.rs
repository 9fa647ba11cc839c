//! Domain and parameter models for course operations.
//!
//! The controller converts request DTOs into the parameter types defined here, which is
//! where field validation happens. Repositories accept these parameters and return the
//! `Course` domain model, so entity models never leave the data layer.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::course::{
        CourseDto, CreateCourseDto, PaginatedCoursesDto, PatchCourseDto, SearchCoursesDto,
        UpdateCourseDto,
    },
    server::error::AppError,
};

/// Page size used when the client does not specify one.
pub const DEFAULT_ENTRIES: u64 = 10;

/// Largest page size a client may request.
pub const MAX_ENTRIES: u64 = 100;

/// A course as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub lectures: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Converts the course to its API representation.
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            start: self.start_date,
            end: self.end_date,
            lectures: self.lectures,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a course.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            lectures: entity.lectures,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Checks that a path ID refers to a possible row.
pub fn validate_id(id: i32) -> Result<i32, AppError> {
    if id < 1 {
        return Err(AppError::BadRequest(format!(
            "Course ID must be a positive integer, got {}",
            id
        )));
    }

    Ok(id)
}

fn validate_name(name: String) -> Result<String, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Course name must not be empty".to_string(),
        ));
    }

    Ok(name)
}

fn validate_lectures(lectures: i32) -> Result<i32, AppError> {
    if lectures < 0 {
        return Err(AppError::BadRequest(format!(
            "Number of lectures must not be negative, got {}",
            lectures
        )));
    }

    Ok(lectures)
}

/// Parameters for inserting a new course.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCourseParam {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub lectures: i32,
}

impl CreateCourseParam {
    /// Validates a creation DTO.
    ///
    /// # Returns
    /// - `Ok(CreateCourseParam)` - All fields are valid
    /// - `Err(AppError::BadRequest)` - Empty name or negative lecture count
    pub fn from_dto(dto: CreateCourseDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(dto.name)?,
            start_date: dto.start,
            end_date: dto.end,
            lectures: validate_lectures(dto.lectures)?,
        })
    }
}

/// Parameters for replacing every field of an existing course.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCourseParam {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub lectures: i32,
}

impl UpdateCourseParam {
    pub fn from_dto(id: i32, dto: UpdateCourseDto) -> Result<Self, AppError> {
        Ok(Self {
            id: validate_id(id)?,
            name: validate_name(dto.name)?,
            start_date: dto.start,
            end_date: dto.end,
            lectures: validate_lectures(dto.lectures)?,
        })
    }
}

/// Parameters for a partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchCourseParam {
    pub id: i32,
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub lectures: Option<i32>,
}

impl PatchCourseParam {
    pub fn from_dto(id: i32, dto: PatchCourseDto) -> Result<Self, AppError> {
        Ok(Self {
            id: validate_id(id)?,
            name: dto.name.map(validate_name).transpose()?,
            start_date: dto.start,
            end_date: dto.end,
            lectures: dto.lectures.map(validate_lectures).transpose()?,
        })
    }
}

/// Search filters combined with AND; `None` disables a filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCoursesParam {
    /// Substring the course name must contain
    pub name: Option<String>,
    /// Courses must start on or after this date
    pub start: Option<NaiveDate>,
    /// Courses must end on or before this date
    pub end: Option<NaiveDate>,
}

impl SearchCoursesParam {
    /// Validates search filters.
    ///
    /// An explicitly empty name is rejected rather than treated as "no filter".
    pub fn from_dto(dto: SearchCoursesDto) -> Result<Self, AppError> {
        if dto.name.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest(
                "Search name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name: dto.name,
            start: dto.start,
            end: dto.end,
        })
    }
}

/// Page selection for listing courses.
#[derive(Debug, Clone, PartialEq)]
pub struct GetPaginatedCoursesParam {
    /// Zero-indexed page number
    pub page: u64,
    pub per_page: u64,
}

impl GetPaginatedCoursesParam {
    pub fn new(page: u64, entries: u64) -> Result<Self, AppError> {
        if !(1..=MAX_ENTRIES).contains(&entries) {
            return Err(AppError::BadRequest(format!(
                "entries must be between 1 and {}, got {}",
                MAX_ENTRIES, entries
            )));
        }

        // The row offset is bound as a signed 64-bit integer
        if page
            .checked_mul(entries)
            .is_none_or(|offset| offset > i64::MAX as u64)
        {
            return Err(AppError::BadRequest(format!(
                "page {} is out of range for {} entries per page",
                page, entries
            )));
        }

        Ok(Self {
            page,
            per_page: entries,
        })
    }
}

/// One page of courses together with the total row count.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCourses {
    pub courses: Vec<Course>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedCourses {
    pub fn into_dto(self) -> PaginatedCoursesDto {
        let total_pages = if self.per_page > 0 {
            self.total.div_ceil(self.per_page)
        } else {
            0
        };

        PaginatedCoursesDto {
            courses: self.courses.into_iter().map(Course::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}
