use podium_conference::domain::types::AuthorLink;
use podium_conference::error::ConferenceError;
use podium_conference::usecase::author::{
    LinkAuthorUseCase, ListAuthorsUseCase, UnlinkAuthorUseCase,
};
use podium_conference::usecase::listing::{MainScheduleUseCase, PresenterPageUseCase};
use podium_conference::usecase::room::{CreateRoomUseCase, DeleteRoomUseCase, UpdateRoomUseCase};
use podium_conference::usecase::user::{
    DeleteUserUseCase, GetUserUseCase, ListRolesUseCase, UpdateUserRoleUseCase,
};
use podium_domain::role::Role;

use crate::helpers::{InMemoryStore, at, fixture};

fn link_usecase(
    store: &InMemoryStore,
) -> LinkAuthorUseCase<InMemoryStore, InMemoryStore, InMemoryStore> {
    LinkAuthorUseCase {
        authors: store.clone(),
        users: store.clone(),
        presentations: store.clone(),
    }
}

// ── Users and roles ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_seeded_roles() {
    let roles = ListRolesUseCase {
        repo: InMemoryStore::seeded(),
    }
    .execute()
    .await
    .unwrap();
    let names: Vec<_> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["presenter", "administrator"]);
}

#[tokio::test]
async fn should_promote_presenter() {
    let f = fixture();
    UpdateUserRoleUseCase {
        users: f.store.clone(),
        roles: f.store.clone(),
    }
    .execute(f.presenter.id, Some(Role::Administrator.id()))
    .await
    .unwrap();

    let user = GetUserUseCase {
        repo: f.store.clone(),
    }
    .execute(f.presenter.id)
    .await
    .unwrap();
    assert!(user.is_admin());
}

#[tokio::test]
async fn should_reject_unknown_role() {
    let f = fixture();
    let result = UpdateUserRoleUseCase {
        users: f.store.clone(),
        roles: f.store.clone(),
    }
    .execute(f.presenter.id, Some(99))
    .await;
    assert!(matches!(result, Err(ConferenceError::MissingData)));
}

#[tokio::test]
async fn should_clear_role() {
    let f = fixture();
    UpdateUserRoleUseCase {
        users: f.store.clone(),
        roles: f.store.clone(),
    }
    .execute(f.presenter.id, None)
    .await
    .unwrap();

    let user = GetUserUseCase {
        repo: f.store.clone(),
    }
    .execute(f.presenter.id)
    .await
    .unwrap();
    assert_eq!(user.scope(), None);
}

#[tokio::test]
async fn should_refuse_self_deletion() {
    let f = fixture();
    let result = DeleteUserUseCase {
        repo: f.store.clone(),
    }
    .execute(f.admin.id, f.admin.id)
    .await;
    assert!(matches!(result, Err(ConferenceError::Forbidden)));
}

#[tokio::test]
async fn should_delete_other_user_and_their_links() {
    let f = fixture();
    DeleteUserUseCase {
        repo: f.store.clone(),
    }
    .execute(f.admin.id, f.presenter.id)
    .await
    .unwrap();

    let gone = GetUserUseCase {
        repo: f.store.clone(),
    }
    .execute(f.presenter.id)
    .await;
    assert!(matches!(gone, Err(ConferenceError::UserNotFound)));
    assert!(f.store.authors().is_empty());
}

// ── Rooms ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_blank_room_name_as_null() {
    let store = InMemoryStore::seeded();
    let room = CreateRoomUseCase {
        repo: store.clone(),
    }
    .execute("   ")
    .await
    .unwrap();
    assert_eq!(room.name, None);
    assert_eq!(room.label(), format!("Room #{}", room.id));
}

#[tokio::test]
async fn should_rename_room() {
    let f = fixture();
    UpdateRoomUseCase {
        repo: f.store.clone(),
    }
    .execute(f.annex.id, " Annex ")
    .await
    .unwrap();
    let rooms = f.store.data.lock().unwrap().rooms.clone();
    let annex = rooms.iter().find(|r| r.id == f.annex.id).unwrap();
    assert_eq!(annex.name.as_deref(), Some("Annex"));
}

#[tokio::test]
async fn should_report_missing_room_on_delete() {
    let result = DeleteRoomUseCase {
        repo: InMemoryStore::seeded(),
    }
    .execute(404)
    .await;
    assert!(matches!(result, Err(ConferenceError::RoomNotFound)));
}

// ── Authors ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_link_additional_author() {
    let f = fixture();
    let link = AuthorLink {
        presentation_id: f.talk.id,
        user_id: f.admin.id,
    };
    link_usecase(&f.store).execute(link).await.unwrap();

    let rows = ListAuthorsUseCase {
        repo: f.store.clone(),
    }
    .execute()
    .await
    .unwrap();
    let row = rows.iter().find(|r| r.link == link).unwrap();
    assert_eq!(row.user_name, "root");
    assert_eq!(row.presentation_name, "Ownership in practice");
}

#[tokio::test]
async fn should_reject_duplicate_author_link() {
    let f = fixture();
    let result = link_usecase(&f.store)
        .execute(AuthorLink {
            presentation_id: f.talk.id,
            user_id: f.presenter.id,
        })
        .await;
    assert!(matches!(result, Err(ConferenceError::AuthorAlreadyLinked)));
}

#[tokio::test]
async fn should_reject_link_to_unknown_user_or_presentation() {
    let f = fixture();
    let unknown_user = link_usecase(&f.store)
        .execute(AuthorLink {
            presentation_id: f.talk.id,
            user_id: 999,
        })
        .await;
    assert!(matches!(unknown_user, Err(ConferenceError::UserNotFound)));

    let unknown_presentation = link_usecase(&f.store)
        .execute(AuthorLink {
            presentation_id: 999,
            user_id: f.admin.id,
        })
        .await;
    assert!(matches!(
        unknown_presentation,
        Err(ConferenceError::PresentationNotFound)
    ));
}

#[tokio::test]
async fn should_report_missing_link_on_unlink() {
    let f = fixture();
    let result = UnlinkAuthorUseCase {
        repo: f.store.clone(),
    }
    .execute(AuthorLink {
        presentation_id: f.talk.id,
        user_id: f.admin.id,
    })
    .await;
    assert!(matches!(result, Err(ConferenceError::AuthorNotFound)));
}

// ── Public listings ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_full_schedule_on_main() {
    let f = fixture();
    let other = f.store.add_presentation("Someone else's talk", &[f.admin.id]);
    f.store.add_entry(at(10, 0), f.talk.id, f.hall.id);
    f.store.add_entry(at(11, 0), other.id, f.annex.id);

    let rows = MainScheduleUseCase {
        repo: f.store.clone(),
    }
    .execute()
    .await
    .unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn should_build_presenter_page_from_own_rows() {
    let f = fixture();
    let other = f.store.add_presentation("Someone else's talk", &[f.admin.id]);
    f.store.add_entry(at(10, 0), f.talk.id, f.hall.id);
    f.store.add_entry(at(11, 0), other.id, f.annex.id);

    let page = PresenterPageUseCase {
        users: f.store.clone(),
        presentations: f.store.clone(),
        schedule: f.store.clone(),
    }
    .execute("alice")
    .await
    .unwrap();
    assert_eq!(page.user.id, f.presenter.id);
    assert_eq!(page.presentations, vec![f.talk.clone()]);
    assert_eq!(page.schedule.len(), 1);
    assert_eq!(page.schedule[0].presentation_name, "Ownership in practice");
}

#[tokio::test]
async fn should_report_unknown_presenter() {
    let f = fixture();
    let result = PresenterPageUseCase {
        users: f.store.clone(),
        presentations: f.store.clone(),
        schedule: f.store.clone(),
    }
    .execute("mallory")
    .await;
    assert!(matches!(result, Err(ConferenceError::UserNotFound)));
}
