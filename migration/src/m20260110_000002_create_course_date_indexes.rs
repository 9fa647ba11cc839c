use sea_orm_migration::prelude::*;

use super::m20260110_000001_create_course_table::Course;

const START_DATE_INDEX: &str = "idx_course_start_date";
const END_DATE_INDEX: &str = "idx_course_end_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(START_DATE_INDEX)
                    .table(Course::Table)
                    .col(Course::StartDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(END_DATE_INDEX)
                    .table(Course::Table)
                    .col(Course::EndDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(END_DATE_INDEX)
                    .table(Course::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(START_DATE_INDEX)
                    .table(Course::Table)
                    .to_owned(),
            )
            .await
    }
}
