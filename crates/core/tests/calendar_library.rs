//! Saved-calendar library integration tests

mod support;

use std::sync::Arc;

use contentplan_core::{CalendarLibrary, CalendarRepository};
use contentplan_domain::{ContentPlanError, NewCalendar, PostSlot};
use support::repositories::InMemoryCalendarRepository;

fn posts(count: usize) -> Vec<PostSlot> {
    (0..count)
        .map(|i| PostSlot {
            day: "Friday".into(),
            date: format!("Apr {}", i + 1),
            time: "6:45 PM".into(),
            image_prompt: format!("prompt {i}"),
            caption: format!("caption {i}"),
        })
        .collect()
}

async fn seeded_repository() -> InMemoryCalendarRepository {
    let repository = InMemoryCalendarRepository::new();
    for (owner, name, count) in
        [("owner-1", "January", 4), ("owner-2", "Other", 2), ("owner-1", "February", 10)]
    {
        repository
            .save_calendar(NewCalendar { owner_id: owner.into(), name: name.into(), posts: posts(count) })
            .await
            .unwrap();
    }
    repository
}

#[tokio::test]
async fn load_lists_owned_calendars_newest_first() {
    let repository = seeded_repository().await;
    let mut library = CalendarLibrary::new(Arc::new(repository), "owner-1");
    assert!(!library.has_calendars());

    let names: Vec<String> = library.load().await.unwrap().iter().map(|c| c.name.clone()).collect();

    assert_eq!(names, ["February", "January"]);
    assert!(library.has_calendars());
}

#[tokio::test]
async fn open_builds_a_paginated_view() {
    let mut library = CalendarLibrary::new(Arc::new(seeded_repository().await), "owner-1");
    library.load().await.unwrap();

    let view = library.open("cal-3").unwrap();
    assert_eq!(view.week_count(), 2);
    assert_eq!(view.visible_posts().len(), 7);

    assert!(matches!(library.open("cal-2"), Err(ContentPlanError::NotFound(_))));
}

#[tokio::test]
async fn delete_removes_locally_and_remotely() {
    let repository = seeded_repository().await;
    let mut library = CalendarLibrary::new(Arc::new(repository.clone()), "owner-1");
    library.load().await.unwrap();

    library.delete("cal-1").await.unwrap();

    assert_eq!(library.calendars().len(), 1);
    assert!(repository.stored().iter().all(|c| c.id != "cal-1"));
}

#[tokio::test]
async fn failed_delete_restores_snapshot() {
    let repository = seeded_repository().await;
    let mut library = CalendarLibrary::new(Arc::new(repository.clone()), "owner-1");
    let before = library.load().await.unwrap().to_vec();

    repository.fail_deletes(true);
    let err = library.delete("cal-1").await.unwrap_err();

    assert!(matches!(err, ContentPlanError::Collaborator(_)));
    assert_eq!(library.calendars(), before.as_slice());
}

#[tokio::test]
async fn failed_load_keeps_previous_list() {
    let repository = seeded_repository().await;
    let mut library = CalendarLibrary::new(Arc::new(repository.clone()), "owner-1");
    library.load().await.unwrap();

    repository.fail_lists(true);
    assert!(library.load().await.is_err());
    assert_eq!(library.calendars().len(), 2);
}

#[tokio::test]
async fn deleting_unknown_id_is_not_found() {
    let mut library = CalendarLibrary::new(Arc::new(seeded_repository().await), "owner-1");
    library.load().await.unwrap();

    assert!(matches!(library.delete("cal-2").await, Err(ContentPlanError::NotFound(_))));
    assert_eq!(library.calendars().len(), 2);
}
