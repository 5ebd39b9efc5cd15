use hotel_backend::adapters::hotels_sea::{self, HotelCreate};
use hotel_backend::db::txn::with_txn;
use hotel_backend::AppError;

use crate::support::build_test_state;

#[tokio::test]
async fn create_then_find_by_id_and_name() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let created =
                hotels_sea::create_hotel(txn, HotelCreate::new("Vail Inn", "Vail")).await?;
            assert!(created.id > 0);

            let by_id = hotels_sea::find_by_id(txn, created.id)
                .await?
                .expect("hotel by id");
            assert_eq!(by_id.name, "Vail Inn");
            assert_eq!(by_id.location, "Vail");

            let by_name = hotels_sea::find_by_name(txn, "Vail Inn")
                .await?
                .expect("hotel by name");
            assert_eq!(by_name.id, created.id);

            assert!(hotels_sea::find_by_name(txn, "Nowhere").await?.is_none());
            assert!(hotels_sea::find_by_id(txn, created.id + 100).await?.is_none());
            Ok(())
        })
    })
    .await
}
