use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use podium_conference::domain::repository::{
    AuthorRepository, PresentationRepository, RoleRepository, RoomRepository,
    ScheduleRepository, UserRepository,
};
use podium_conference::domain::types::{
    AuthorLink, AuthorRow, NewUser, Presentation, PresentationDraft, RoleRecord, Room,
    ScheduleEntry, ScheduleRow, ScheduleSlot, User,
};
use podium_conference::error::ConferenceError;
use podium_conference::password::hash_password;
use podium_domain::role::{Role, Scope};

pub const TEST_PASSWORD: &str = "correct horse";

/// Hashed once; Argon2 is slow in debug builds.
static TEST_PASSWORD_HASH: Lazy<String> = Lazy::new(|| hash_password(TEST_PASSWORD).unwrap());

// ── InMemoryStore ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct StoreData {
    pub users: Vec<User>,
    pub roles: Vec<RoleRecord>,
    pub rooms: Vec<Room>,
    pub presentations: Vec<Presentation>,
    pub authors: Vec<AuthorLink>,
    pub schedule: Vec<ScheduleEntry>,
    next_id: i32,
}

impl StoreData {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn in_scope(&self, presentation_id: i32, scope: Scope) -> bool {
        match scope {
            Scope::All => true,
            Scope::AuthoredBy(user_id) => self
                .authors
                .iter()
                .any(|a| a.presentation_id == presentation_id && a.user_id == user_id),
        }
    }

    fn slot_taken(&self, slot: &ScheduleSlot, exclude: Option<i32>) -> bool {
        self.schedule.iter().any(|e| {
            e.room_id == slot.room_id
                && e.date_start == slot.date_start
                && Some(e.id) != exclude
        })
    }
}

/// Shared in-memory tables implementing every repository trait.
///
/// Clones share state, so one store can back several repositories of a use
/// case and still be inspected afterwards.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub data: Arc<Mutex<StoreData>>,
}

impl InMemoryStore {
    /// Store with the two seeded roles.
    pub fn seeded() -> Self {
        let store = Self::default();
        store.data.lock().unwrap().roles = vec![
            RoleRecord {
                id: Role::Presenter.id(),
                name: Role::Presenter.name().into(),
            },
            RoleRecord {
                id: Role::Administrator.id(),
                name: Role::Administrator.name().into(),
            },
        ];
        store
    }

    pub fn add_user(&self, name: &str, role_id: Option<i32>) -> User {
        let mut data = self.data.lock().unwrap();
        let user = User {
            id: data.next_id(),
            name: name.into(),
            password_hash: TEST_PASSWORD_HASH.clone(),
            role_id,
        };
        data.users.push(user.clone());
        user
    }

    pub fn add_room(&self, name: Option<&str>) -> Room {
        let mut data = self.data.lock().unwrap();
        let room = Room {
            id: data.next_id(),
            name: name.map(str::to_owned),
        };
        data.rooms.push(room.clone());
        room
    }

    /// Presentation linked to each of `authors`.
    pub fn add_presentation(&self, name: &str, authors: &[i32]) -> Presentation {
        let mut data = self.data.lock().unwrap();
        let presentation = Presentation {
            id: data.next_id(),
            name: name.into(),
            text: None,
        };
        data.presentations.push(presentation.clone());
        for &user_id in authors {
            data.authors.push(AuthorLink {
                presentation_id: presentation.id,
                user_id,
            });
        }
        presentation
    }

    pub fn add_entry(
        &self,
        date_start: NaiveDateTime,
        presentation_id: i32,
        room_id: i32,
    ) -> ScheduleEntry {
        let mut data = self.data.lock().unwrap();
        let entry = ScheduleEntry {
            id: data.next_id(),
            date_start,
            presentation_id,
            room_id,
        };
        data.schedule.push(entry.clone());
        entry
    }

    pub fn entries(&self) -> Vec<ScheduleEntry> {
        self.data.lock().unwrap().schedule.clone()
    }

    pub fn authors(&self) -> Vec<AuthorLink> {
        self.data.lock().unwrap().authors.clone()
    }
}

impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ConferenceError> {
        Ok(self.data.lock().unwrap().users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, ConferenceError> {
        Ok(self
            .data
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.name == name)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, ConferenceError> {
        let mut users = self.data.lock().unwrap().users.clone();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    async fn create(&self, user: &NewUser) -> Result<User, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        if data.users.iter().any(|u| u.name == user.name) {
            return Err(ConferenceError::UserAlreadyExists);
        }
        let created = User {
            id: data.next_id(),
            name: user.name.clone(),
            password_hash: user.password_hash.clone(),
            role_id: user.role_id,
        };
        data.users.push(created.clone());
        Ok(created)
    }

    async fn update_role(&self, id: i32, role_id: Option<i32>) -> Result<bool, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        match data.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.role_id = role_id;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        let before = data.users.len();
        data.users.retain(|u| u.id != id);
        data.authors.retain(|a| a.user_id != id);
        Ok(data.users.len() < before)
    }
}

impl RoleRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<RoleRecord>, ConferenceError> {
        Ok(self.data.lock().unwrap().roles.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<RoleRecord>, ConferenceError> {
        Ok(self.data.lock().unwrap().roles.iter().find(|r| r.id == id).cloned())
    }
}

impl RoomRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Room>, ConferenceError> {
        Ok(self.data.lock().unwrap().rooms.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Room>, ConferenceError> {
        Ok(self.data.lock().unwrap().rooms.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, name: Option<&str>) -> Result<Room, ConferenceError> {
        Ok(self.add_room(name))
    }

    async fn update(&self, id: i32, name: Option<&str>) -> Result<bool, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        match data.rooms.iter_mut().find(|r| r.id == id) {
            Some(room) => {
                room.name = name.map(str::to_owned);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        let before = data.rooms.len();
        data.rooms.retain(|r| r.id != id);
        data.schedule.retain(|e| e.room_id != id);
        Ok(data.rooms.len() < before)
    }
}

impl PresentationRepository for InMemoryStore {
    async fn list(&self, scope: Scope) -> Result<Vec<Presentation>, ConferenceError> {
        let data = self.data.lock().unwrap();
        Ok(data
            .presentations
            .iter()
            .filter(|p| data.in_scope(p.id, scope))
            .cloned()
            .collect())
    }

    async fn find(&self, id: i32, scope: Scope) -> Result<Option<Presentation>, ConferenceError> {
        let data = self.data.lock().unwrap();
        Ok(data
            .presentations
            .iter()
            .find(|p| p.id == id && data.in_scope(p.id, scope))
            .cloned())
    }

    async fn create(
        &self,
        draft: &PresentationDraft,
        author: Option<i32>,
    ) -> Result<Presentation, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        let presentation = Presentation {
            id: data.next_id(),
            name: draft.name.clone(),
            text: draft.text.clone(),
        };
        data.presentations.push(presentation.clone());
        if let Some(user_id) = author {
            data.authors.push(AuthorLink {
                presentation_id: presentation.id,
                user_id,
            });
        }
        Ok(presentation)
    }

    async fn update(&self, id: i32, draft: &PresentationDraft) -> Result<bool, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        match data.presentations.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.name = draft.name.clone();
                p.text = draft.text.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        let before = data.presentations.len();
        data.presentations.retain(|p| p.id != id);
        data.authors.retain(|a| a.presentation_id != id);
        data.schedule.retain(|e| e.presentation_id != id);
        Ok(data.presentations.len() < before)
    }
}

impl ScheduleRepository for InMemoryStore {
    async fn list(&self, scope: Scope) -> Result<Vec<ScheduleRow>, ConferenceError> {
        let data = self.data.lock().unwrap();
        let mut entries: Vec<ScheduleEntry> = data
            .schedule
            .iter()
            .filter(|e| data.in_scope(e.presentation_id, scope))
            .cloned()
            .collect();
        entries.sort_by_key(|e| (e.date_start, e.room_id, e.id));
        Ok(entries
            .into_iter()
            .map(|entry| ScheduleRow {
                presentation_name: data
                    .presentations
                    .iter()
                    .find(|p| p.id == entry.presentation_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                room: data
                    .rooms
                    .iter()
                    .find(|r| r.id == entry.room_id)
                    .cloned()
                    .unwrap_or(Room {
                        id: entry.room_id,
                        name: None,
                    }),
                entry,
            })
            .collect())
    }

    async fn find(&self, id: i32, scope: Scope) -> Result<Option<ScheduleEntry>, ConferenceError> {
        let data = self.data.lock().unwrap();
        Ok(data
            .schedule
            .iter()
            .find(|e| e.id == id && data.in_scope(e.presentation_id, scope))
            .cloned())
    }

    async fn is_room_busy(
        &self,
        room_id: i32,
        date_start: NaiveDateTime,
        exclude: Option<i32>,
    ) -> Result<bool, ConferenceError> {
        let data = self.data.lock().unwrap();
        Ok(data.schedule.iter().any(|e| {
            e.room_id == room_id && e.date_start == date_start && Some(e.id) != exclude
        }))
    }

    async fn create(&self, slot: &ScheduleSlot) -> Result<ScheduleEntry, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        if data.slot_taken(slot, None) {
            return Err(ConferenceError::RoomBusy);
        }
        let entry = ScheduleEntry {
            id: data.next_id(),
            date_start: slot.date_start,
            presentation_id: slot.presentation_id,
            room_id: slot.room_id,
        };
        data.schedule.push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, id: i32, slot: &ScheduleSlot) -> Result<bool, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        if data.slot_taken(slot, Some(id)) {
            return Err(ConferenceError::RoomBusy);
        }
        match data.schedule.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.date_start = slot.date_start;
                entry.presentation_id = slot.presentation_id;
                entry.room_id = slot.room_id;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        let before = data.schedule.len();
        data.schedule.retain(|e| e.id != id);
        Ok(data.schedule.len() < before)
    }
}

impl AuthorRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<AuthorRow>, ConferenceError> {
        let data = self.data.lock().unwrap();
        Ok(data
            .authors
            .iter()
            .map(|&link| AuthorRow {
                link,
                presentation_name: data
                    .presentations
                    .iter()
                    .find(|p| p.id == link.presentation_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                user_name: data
                    .users
                    .iter()
                    .find(|u| u.id == link.user_id)
                    .map(|u| u.name.clone())
                    .unwrap_or_default(),
            })
            .collect())
    }

    async fn exists(&self, link: AuthorLink) -> Result<bool, ConferenceError> {
        Ok(self.data.lock().unwrap().authors.contains(&link))
    }

    async fn link(&self, link: AuthorLink) -> Result<(), ConferenceError> {
        let mut data = self.data.lock().unwrap();
        if data.authors.contains(&link) {
            return Err(ConferenceError::AuthorAlreadyLinked);
        }
        data.authors.push(link);
        Ok(())
    }

    async fn unlink(&self, link: AuthorLink) -> Result<bool, ConferenceError> {
        let mut data = self.data.lock().unwrap();
        let before = data.authors.len();
        data.authors.retain(|a| *a != link);
        Ok(data.authors.len() < before)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 11, 7)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// A store with a presenter, an administrator, two rooms and one
/// presentation authored by the presenter.
pub struct Fixture {
    pub store: InMemoryStore,
    pub presenter: User,
    pub admin: User,
    pub hall: Room,
    pub annex: Room,
    pub talk: Presentation,
}

pub fn fixture() -> Fixture {
    let store = InMemoryStore::seeded();
    let presenter = store.add_user("alice", Some(Role::Presenter.id()));
    let admin = store.add_user("root", Some(Role::Administrator.id()));
    let hall = store.add_room(Some("Hall"));
    let annex = store.add_room(None);
    let talk = store.add_presentation("Ownership in practice", &[presenter.id]);
    Fixture {
        store,
        presenter,
        admin,
        hall,
        annex,
        talk,
    }
}
