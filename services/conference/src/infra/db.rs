use std::collections::HashMap;

use anyhow::Context as _;
use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select, SqlErr,
    TransactionTrait, sea_query::Expr,
};

use podium_conference_schema::{authors, presentations, roles, rooms, schedule, users};
use podium_domain::role::Scope;

use crate::domain::repository::{
    AuthorRepository, PresentationRepository, RoleRepository, RoomRepository,
    ScheduleRepository, UserRepository,
};
use crate::domain::types::{
    AuthorLink, AuthorRow, NewUser, Presentation, PresentationDraft, RoleRecord, Room,
    ScheduleEntry, ScheduleRow, ScheduleSlot, User,
};
use crate::error::ConferenceError;

/// Map a unique-constraint violation to `conflict`; anything else is internal.
fn conflict_or_internal(
    err: DbErr,
    conflict: ConferenceError,
    context: &'static str,
) -> ConferenceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict,
        _ => ConferenceError::Internal(anyhow::Error::new(err).context(context)),
    }
}

/// Ids of the presentations `user_id` is an author of.
fn authored_presentation_ids(user_id: i32) -> sea_orm::sea_query::SelectStatement {
    authors::Entity::find()
        .select_only()
        .column(authors::Column::IdPresentation)
        .filter(authors::Column::IdUser.eq(user_id))
        .into_query()
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ConferenceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, ConferenceError> {
        let model = users::Entity::find()
            .filter(users::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find user by name")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self) -> Result<Vec<User>, ConferenceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Name)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &NewUser) -> Result<User, ConferenceError> {
        let model = users::ActiveModel {
            name: Set(user.name.clone()),
            password_hash: Set(user.password_hash.clone()),
            role_id: Set(user.role_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            conflict_or_internal(e, ConferenceError::UserAlreadyExists, "create user")
        })?;
        Ok(user_from_model(model))
    }

    async fn update_role(&self, id: i32, role_id: Option<i32>) -> Result<bool, ConferenceError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::RoleId, Expr::value(role_id))
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update user role")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, ConferenceError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        password_hash: model.password_hash,
        role_id: model.role_id,
    }
}

// ── Role repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: DatabaseConnection,
}

impl RoleRepository for DbRoleRepository {
    async fn list(&self) -> Result<Vec<RoleRecord>, ConferenceError> {
        let models = roles::Entity::find()
            .order_by_asc(roles::Column::Id)
            .all(&self.db)
            .await
            .context("list roles")?;
        Ok(models
            .into_iter()
            .map(|m| RoleRecord {
                id: m.id,
                name: m.name,
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<RoleRecord>, ConferenceError> {
        let model = roles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find role by id")?;
        Ok(model.map(|m| RoleRecord {
            id: m.id,
            name: m.name,
        }))
    }
}

// ── Room repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoomRepository {
    pub db: DatabaseConnection,
}

impl RoomRepository for DbRoomRepository {
    async fn list(&self) -> Result<Vec<Room>, ConferenceError> {
        let models = rooms::Entity::find()
            .order_by_asc(rooms::Column::Id)
            .all(&self.db)
            .await
            .context("list rooms")?;
        Ok(models.into_iter().map(room_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Room>, ConferenceError> {
        let model = rooms::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find room by id")?;
        Ok(model.map(room_from_model))
    }

    async fn create(&self, name: Option<&str>) -> Result<Room, ConferenceError> {
        let model = rooms::ActiveModel {
            name: Set(name.map(str::to_owned)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create room")?;
        Ok(room_from_model(model))
    }

    async fn update(&self, id: i32, name: Option<&str>) -> Result<bool, ConferenceError> {
        let result = rooms::Entity::update_many()
            .col_expr(rooms::Column::Name, Expr::value(name.map(str::to_owned)))
            .filter(rooms::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update room")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, ConferenceError> {
        let result = rooms::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete room")?;
        Ok(result.rows_affected > 0)
    }
}

fn room_from_model(model: rooms::Model) -> Room {
    Room {
        id: model.id,
        name: model.name,
    }
}

// ── Presentation repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPresentationRepository {
    pub db: DatabaseConnection,
}

fn scoped_presentations(scope: Scope) -> Select<presentations::Entity> {
    let select = presentations::Entity::find();
    match scope {
        Scope::All => select,
        Scope::AuthoredBy(user_id) => select.filter(
            presentations::Column::Id.in_subquery(authored_presentation_ids(user_id)),
        ),
    }
}

impl PresentationRepository for DbPresentationRepository {
    async fn list(&self, scope: Scope) -> Result<Vec<Presentation>, ConferenceError> {
        let models = scoped_presentations(scope)
            .order_by_asc(presentations::Column::Name)
            .order_by_asc(presentations::Column::Id)
            .all(&self.db)
            .await
            .context("list presentations")?;
        Ok(models.into_iter().map(presentation_from_model).collect())
    }

    async fn find(&self, id: i32, scope: Scope) -> Result<Option<Presentation>, ConferenceError> {
        let model = scoped_presentations(scope)
            .filter(presentations::Column::Id.eq(id))
            .one(&self.db)
            .await
            .context("find presentation")?;
        Ok(model.map(presentation_from_model))
    }

    async fn create(
        &self,
        draft: &PresentationDraft,
        author: Option<i32>,
    ) -> Result<Presentation, ConferenceError> {
        let txn = self.db.begin().await.context("begin transaction")?;

        let model = presentations::ActiveModel {
            name: Set(draft.name.clone()),
            text: Set(draft.text.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("create presentation")?;

        if let Some(user_id) = author {
            authors::Entity::insert(authors::ActiveModel {
                id_presentation: Set(model.id),
                id_user: Set(user_id),
            })
            .exec_without_returning(&txn)
            .await
            .context("link presentation author")?;
        }

        txn.commit().await.context("commit transaction")?;
        Ok(presentation_from_model(model))
    }

    async fn update(&self, id: i32, draft: &PresentationDraft) -> Result<bool, ConferenceError> {
        let result = presentations::Entity::update_many()
            .col_expr(presentations::Column::Name, Expr::value(draft.name.clone()))
            .col_expr(presentations::Column::Text, Expr::value(draft.text.clone()))
            .filter(presentations::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update presentation")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, ConferenceError> {
        let result = presentations::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete presentation")?;
        Ok(result.rows_affected > 0)
    }
}

fn presentation_from_model(model: presentations::Model) -> Presentation {
    Presentation {
        id: model.id,
        name: model.name,
        text: model.text,
    }
}

// ── Schedule repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbScheduleRepository {
    pub db: DatabaseConnection,
}

fn scoped_schedule(scope: Scope) -> Select<schedule::Entity> {
    let select = schedule::Entity::find();
    match scope {
        Scope::All => select,
        Scope::AuthoredBy(user_id) => select.filter(
            schedule::Column::IdPresentation.in_subquery(authored_presentation_ids(user_id)),
        ),
    }
}

impl ScheduleRepository for DbScheduleRepository {
    async fn list(&self, scope: Scope) -> Result<Vec<ScheduleRow>, ConferenceError> {
        let entries = scoped_schedule(scope)
            .order_by_asc(schedule::Column::DateStart)
            .order_by_asc(schedule::Column::IdRoom)
            .order_by_asc(schedule::Column::Id)
            .all(&self.db)
            .await
            .context("list schedule")?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let presentation_ids: Vec<i32> = entries.iter().map(|e| e.id_presentation).collect();
        let room_ids: Vec<i32> = entries.iter().map(|e| e.id_room).collect();

        let names: HashMap<i32, String> = presentations::Entity::find()
            .filter(presentations::Column::Id.is_in(presentation_ids))
            .all(&self.db)
            .await
            .context("load scheduled presentations")?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();
        let room_by_id: HashMap<i32, Room> = rooms::Entity::find()
            .filter(rooms::Column::Id.is_in(room_ids))
            .all(&self.db)
            .await
            .context("load scheduled rooms")?
            .into_iter()
            .map(|m| (m.id, room_from_model(m)))
            .collect();

        Ok(entries
            .into_iter()
            .map(|model| {
                let room = room_by_id.get(&model.id_room).cloned().unwrap_or(Room {
                    id: model.id_room,
                    name: None,
                });
                let presentation_name = names
                    .get(&model.id_presentation)
                    .cloned()
                    .unwrap_or_default();
                ScheduleRow {
                    entry: entry_from_model(model),
                    presentation_name,
                    room,
                }
            })
            .collect())
    }

    async fn find(&self, id: i32, scope: Scope) -> Result<Option<ScheduleEntry>, ConferenceError> {
        let model = scoped_schedule(scope)
            .filter(schedule::Column::Id.eq(id))
            .one(&self.db)
            .await
            .context("find schedule entry")?;
        Ok(model.map(entry_from_model))
    }

    async fn is_room_busy(
        &self,
        room_id: i32,
        date_start: NaiveDateTime,
        exclude: Option<i32>,
    ) -> Result<bool, ConferenceError> {
        let mut query = schedule::Entity::find()
            .filter(schedule::Column::IdRoom.eq(room_id))
            .filter(schedule::Column::DateStart.eq(date_start));
        if let Some(id) = exclude {
            query = query.filter(schedule::Column::Id.ne(id));
        }
        let count = query
            .count(&self.db)
            .await
            .context("check room availability")?;
        Ok(count > 0)
    }

    async fn create(&self, slot: &ScheduleSlot) -> Result<ScheduleEntry, ConferenceError> {
        let model = schedule::ActiveModel {
            date_start: Set(slot.date_start),
            id_presentation: Set(slot.presentation_id),
            id_room: Set(slot.room_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            conflict_or_internal(e, ConferenceError::RoomBusy, "create schedule entry")
        })?;
        Ok(entry_from_model(model))
    }

    async fn update(&self, id: i32, slot: &ScheduleSlot) -> Result<bool, ConferenceError> {
        let result = schedule::Entity::update_many()
            .col_expr(schedule::Column::DateStart, Expr::value(slot.date_start))
            .col_expr(
                schedule::Column::IdPresentation,
                Expr::value(slot.presentation_id),
            )
            .col_expr(schedule::Column::IdRoom, Expr::value(slot.room_id))
            .filter(schedule::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                conflict_or_internal(e, ConferenceError::RoomBusy, "update schedule entry")
            })?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, ConferenceError> {
        let result = schedule::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete schedule entry")?;
        Ok(result.rows_affected > 0)
    }
}

fn entry_from_model(model: schedule::Model) -> ScheduleEntry {
    ScheduleEntry {
        id: model.id,
        date_start: model.date_start,
        presentation_id: model.id_presentation,
        room_id: model.id_room,
    }
}

// ── Author repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuthorRepository {
    pub db: DatabaseConnection,
}

impl AuthorRepository for DbAuthorRepository {
    async fn list(&self) -> Result<Vec<AuthorRow>, ConferenceError> {
        let links = authors::Entity::find()
            .order_by_asc(authors::Column::IdPresentation)
            .order_by_asc(authors::Column::IdUser)
            .all(&self.db)
            .await
            .context("list authors")?;
        if links.is_empty() {
            return Ok(Vec::new());
        }

        let titles: HashMap<i32, String> = presentations::Entity::find()
            .filter(presentations::Column::Id.is_in(links.iter().map(|l| l.id_presentation)))
            .all(&self.db)
            .await
            .context("load authored presentations")?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();
        let names: HashMap<i32, String> = users::Entity::find()
            .filter(users::Column::Id.is_in(links.iter().map(|l| l.id_user)))
            .all(&self.db)
            .await
            .context("load authoring users")?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();

        Ok(links
            .into_iter()
            .map(|m| AuthorRow {
                link: AuthorLink {
                    presentation_id: m.id_presentation,
                    user_id: m.id_user,
                },
                presentation_name: titles
                    .get(&m.id_presentation)
                    .cloned()
                    .unwrap_or_default(),
                user_name: names.get(&m.id_user).cloned().unwrap_or_default(),
            })
            .collect())
    }

    async fn exists(&self, link: AuthorLink) -> Result<bool, ConferenceError> {
        let model = authors::Entity::find_by_id((link.presentation_id, link.user_id))
            .one(&self.db)
            .await
            .context("find author link")?;
        Ok(model.is_some())
    }

    async fn link(&self, link: AuthorLink) -> Result<(), ConferenceError> {
        authors::Entity::insert(authors::ActiveModel {
            id_presentation: Set(link.presentation_id),
            id_user: Set(link.user_id),
        })
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| {
            conflict_or_internal(e, ConferenceError::AuthorAlreadyLinked, "link author")
        })?;
        Ok(())
    }

    async fn unlink(&self, link: AuthorLink) -> Result<bool, ConferenceError> {
        let result = authors::Entity::delete_by_id((link.presentation_id, link.user_id))
            .exec(&self.db)
            .await
            .context("unlink author")?;
        Ok(result.rows_affected > 0)
    }
}
