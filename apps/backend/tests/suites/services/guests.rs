use hotel_backend::db::txn::with_txn;
use hotel_backend::errors::domain::{DomainError, NotFoundKind};
use hotel_backend::repos::guests;
use hotel_backend::services::guests::{AddRoomOutcome, AddRoomRejection, GuestService};
use hotel_backend::AppError;

use crate::support::build_test_state;
use crate::support::factory::{lodge_with_room, lone_guest, vail_inn};

#[tokio::test]
async fn show_guest_partitions_vail_inn() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let vail = vail_inn(txn).await?;
            let service = GuestService::new();

            let ids = |view: &hotel_backend::services::guests::GuestView| {
                view.rooms.iter().map(|s| s.room.id).collect::<Vec<_>>()
            };

            let ethan = service.show_guest(txn, vail.ethan.id).await?;
            assert_eq!(ethan.guest.name, "Ethan");
            assert_eq!(
                ids(&ethan),
                vec![vail.presidential.id, vail.executive.id, vail.basic.id]
            );

            let zahava = service.show_guest(txn, vail.zahava.id).await?;
            assert_eq!(ids(&zahava), vec![vail.presidential.id]);

            let ezzy = service.show_guest(txn, vail.ezzy.id).await?;
            assert_eq!(ids(&ezzy), vec![vail.executive.id]);
            assert!(ezzy.rooms.iter().all(|s| s.hotel_name == "Vail Inn"));

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn show_guest_without_rooms_is_empty() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let guest = lone_guest(txn, "Nobody").await?;
            let view = GuestService::new().show_guest(txn, guest.id).await?;
            assert_eq!(view.guest, guest);
            assert!(view.rooms.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn show_missing_guest_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let err = GuestService::new()
                .show_guest(txn, 4040)
                .await
                .expect_err("guest 4040 does not exist");
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Guest, _)));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn add_room_attaches_then_reports_already_linked() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let vail = vail_inn(txn).await?;
            let service = GuestService::new();
            let raw = vail.executive.id.to_string();

            let first = service.add_room(txn, vail.zahava.id, &raw).await?;
            assert!(matches!(first, AddRoomOutcome::Attached(id) if id.get() == vail.executive.id));

            let second = service.add_room(txn, vail.zahava.id, &raw).await?;
            assert!(
                matches!(second, AddRoomOutcome::AlreadyLinked(id) if id.get() == vail.executive.id)
            );

            let view = service.show_guest(txn, vail.zahava.id).await?;
            assert_eq!(view.rooms.len(), 2);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn add_room_accepts_surrounding_whitespace() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let vail = vail_inn(txn).await?;
            let raw = format!("  {} ", vail.basic.id);
            let outcome = GuestService::new().add_room(txn, vail.ezzy.id, &raw).await?;
            assert!(matches!(outcome, AddRoomOutcome::Attached(_)));
            assert!(guests::has_room(txn, vail.ezzy.id, vail.basic.id).await?);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn add_room_rejections_leave_rooms_unchanged() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let vail = vail_inn(txn).await?;
            let service = GuestService::new();

            for (raw, expected) in [
                ("", AddRoomRejection::InvalidRoomId),
                ("abc", AddRoomRejection::InvalidRoomId),
                ("0", AddRoomRejection::InvalidRoomId),
                ("-7", AddRoomRejection::InvalidRoomId),
                ("500000", AddRoomRejection::RoomNotFound),
            ] {
                let outcome = service.add_room(txn, vail.ezzy.id, raw).await?;
                assert_eq!(outcome, AddRoomOutcome::Rejected(expected), "raw={raw:?}");
            }

            let view = service.show_guest(txn, vail.ezzy.id).await?;
            assert_eq!(view.rooms.len(), 1);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn add_room_for_missing_guest_is_error() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let vail = vail_inn(txn).await?;
            let raw = vail.basic.id.to_string();
            let err = GuestService::new()
                .add_room(txn, 777_777, &raw)
                .await
                .expect_err("guest does not exist");
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Guest, _)));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn rooms_from_other_hotels_show_their_hotel_name() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let vail = vail_inn(txn).await?;
            let (lodge, chalet) = lodge_with_room(txn, "Chalet", 210).await?;
            let service = GuestService::new();

            service
                .add_room(txn, vail.zahava.id, &chalet.id.to_string())
                .await?;

            let view = service.show_guest(txn, vail.zahava.id).await?;
            let stay = view
                .rooms
                .iter()
                .find(|s| s.room.id == chalet.id)
                .expect("chalet linked");
            assert_eq!(stay.hotel_name, lodge.name);
            assert_eq!(stay.room.rate, 210);
            Ok(())
        })
    })
    .await
}
