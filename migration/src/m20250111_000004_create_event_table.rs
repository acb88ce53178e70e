use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250110_000001_create_user_table::User,
    m20250110_000002_create_classroom_table::Classroom,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Name))
                    .col(timestamp_with_time_zone(Event::StartDatetime))
                    .col(timestamp_with_time_zone(Event::EndDatetime))
                    .col(integer(Event::MaxParticipants))
                    .col(integer_null(Event::MinAge))
                    .col(text_null(Event::Info))
                    .col(integer(Event::OrganizerId))
                    .col(integer(Event::ClassroomId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_organizer_id")
                            .from(Event::Table, Event::OrganizerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_classroom_id")
                            .from(Event::Table, Event::ClassroomId)
                            .to(Classroom::Table, Classroom::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Availability lookups filter by classroom and time range
        manager
            .create_index(
                Index::create()
                    .name("idx_event_classroom_time")
                    .table(Event::Table)
                    .col(Event::ClassroomId)
                    .col(Event::StartDatetime)
                    .col(Event::EndDatetime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Name,
    StartDatetime,
    EndDatetime,
    MaxParticipants,
    MinAge,
    Info,
    OrganizerId,
    ClassroomId,
}
