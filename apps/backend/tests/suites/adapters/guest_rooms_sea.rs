use hotel_backend::adapters::guest_rooms_sea::{self, GuestRoomLink};
use hotel_backend::db::txn::with_txn;
use hotel_backend::entities::guest_rooms;
use hotel_backend::errors::domain::{ConflictKind, DomainError};
use hotel_backend::infra::db_errors::map_db_err;
use hotel_backend::AppError;
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};

use crate::support::build_test_state;
use crate::support::factory::{lodge_with_room, lone_guest, vail_inn};

#[tokio::test]
async fn link_returns_true_then_false() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let vail = vail_inn(txn).await?;
            let pair = GuestRoomLink::new(vail.ezzy.id, vail.basic.id);

            assert!(!guest_rooms_sea::is_linked(txn, pair).await?);
            assert!(guest_rooms_sea::link(txn, pair).await?);
            assert!(!guest_rooms_sea::link(txn, pair).await?);
            assert!(guest_rooms_sea::is_linked(txn, pair).await?);

            let rows = guest_rooms_sea::rooms_with_hotel_for_guest(txn, vail.ezzy.id).await?;
            let basic_rows = rows.iter().filter(|(r, _)| r.id == vail.basic.id).count();
            assert_eq!(basic_rows, 1);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn room_history_is_ordered_by_room_id_with_hotels() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let vail = vail_inn(txn).await?;
            let (lodge, chalet) = lodge_with_room(txn, "Chalet", 210).await?;
            let guest = lone_guest(txn, "Traveler").await?;

            // Link out of id order
            for room_id in [chalet.id, vail.basic.id, vail.presidential.id] {
                guest_rooms_sea::link(txn, GuestRoomLink::new(guest.id, room_id)).await?;
            }

            let rows = guest_rooms_sea::rooms_with_hotel_for_guest(txn, guest.id).await?;
            let ids: Vec<i64> = rows.iter().map(|(room, _)| room.id).collect();
            assert_eq!(ids, vec![vail.presidential.id, vail.basic.id, chalet.id]);

            let hotel_names: Vec<String> = rows
                .into_iter()
                .map(|(_, hotel)| hotel.expect("room has a hotel").name)
                .collect();
            assert_eq!(hotel_names, vec!["Vail Inn", "Vail Inn", lodge.name.as_str()]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn guests_for_room_is_ordered_by_guest_id() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let vail = vail_inn(txn).await?;
            let guests = guest_rooms_sea::guests_for_room(txn, vail.executive.id).await?;
            let ids: Vec<i64> = guests.iter().map(|g| g.id).collect();
            assert_eq!(ids, vec![vail.ethan.id, vail.ezzy.id]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn plain_duplicate_insert_hits_the_primary_key() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let vail = vail_inn(txn).await?;

            // Savepoint so the failed insert doesn't poison the outer txn
            let sp = txn.begin().await?;
            let dup = guest_rooms::ActiveModel {
                guest_id: Set(vail.zahava.id),
                room_id: Set(vail.presidential.id),
                created_at: Set(time::OffsetDateTime::now_utc()),
            };
            let err = dup.insert(&sp).await.expect_err("pair already linked");
            sp.rollback().await?;

            match map_db_err(err) {
                DomainError::Conflict(ConflictKind::Unique, detail) => {
                    assert_eq!(detail, "Room is already linked to this guest");
                }
                other => panic!("expected unique conflict, got {other:?}"),
            }
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn link_to_missing_room_is_rejected_by_foreign_key() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let guest = lone_guest(txn, "Dangling").await?;

            let sp = txn.begin().await?;
            let err = guest_rooms_sea::link(&sp, GuestRoomLink::new(guest.id, 123_456))
                .await
                .expect_err("room does not exist");
            sp.rollback().await?;

            assert!(matches!(map_db_err(err), DomainError::Validation(_, _)));
            Ok(())
        })
    })
    .await
}
