    use super::*;
    use crate::model::{FieldError, Numeric};
    use crate::test_support::{Call, FakeApi, hotel};

    fn loaded() -> Console<FakeApi> {
        let mut c = Console::new(
            FakeApi::with_hotels(vec![hotel(1, "Anjappar", true), hotel(2, "Ponnusamy", true)]),
            false,
        );
        c.load_all().expect("load");
        c.api().clear_calls();
        c
    }

    fn id(n: i64) -> HotelId {
        HotelId::Int(n)
    }

    #[test]
    fn commit_sends_full_record_and_updates_row() {
        let mut c = loaded();
        c.begin_edit(&id(1)).expect("begin");
        c.update_field(HotelField::Name, "Anjappar Chettinad").expect("name");
        c.update_field(HotelField::Latitude, "13.04").expect("lat");

        assert_eq!(c.commit().expect("commit"), id(1));

        let calls = c.api().calls();
        let Call::Update(sent) = &calls[0] else {
            panic!("expected update, got {:?}", calls);
        };
        assert_eq!(sent.hotel_name.as_deref(), Some("Anjappar Chettinad"));
        assert_eq!(sent.hotel_city.as_deref(), Some("Chennai"));
        assert_eq!(sent.latitude, Some(Numeric::Parsed(13.04)));

        let row = c.table().get(&id(1)).expect("row");
        assert_eq!(row.display_name(), "Anjappar Chettinad");
        assert_eq!(c.edit_session(), &EditSession::Idle);
        assert!(!c.table().is_busy(&id(1)));
    }

    #[test]
    fn draft_is_invisible_until_commit() {
        let mut c = loaded();
        c.begin_edit(&id(2)).expect("begin");
        c.update_field(HotelField::City, "Madurai").expect("city");
        assert_eq!(
            c.table().get(&id(2)).and_then(|h| h.hotel_city.as_deref()),
            Some("Chennai")
        );
        assert_eq!(
            c.edit_session().draft().and_then(|h| h.hotel_city.as_deref()),
            Some("Madurai")
        );
    }

    #[test]
    fn cleared_coordinate_is_sent_as_null() {
        let mut c = loaded();
        c.begin_edit(&id(1)).expect("begin");
        c.update_field(HotelField::Latitude, "13.04").expect("lat");
        c.commit().expect("commit");

        c.begin_edit(&id(1)).expect("begin again");
        c.update_field(HotelField::Latitude, "").expect("clear lat");
        c.update_field(HotelField::Address, "").expect("clear address");
        c.commit().expect("commit");

        let calls = c.api().calls();
        let Some(Call::Update(sent)) = calls.last() else {
            panic!("expected update, got {:?}", calls);
        };
        let body = serde_json::to_value(sent).expect("serialize");
        assert_eq!(body.get("latitude"), Some(&serde_json::Value::Null));
        assert_eq!(body["hotelAddress"], "");
        assert_eq!(c.table().get(&id(1)).and_then(|h| h.latitude.clone()), None);
    }

    #[test]
    fn cancel_leaves_every_row_untouched() {
        let mut c = loaded();
        let before = c.table().hotels().to_vec();
        c.begin_edit(&id(2)).expect("begin");
        c.update_field(HotelField::Name, "Ponnusamy Hotel").expect("name");
        c.update_field(HotelField::City, "Madurai").expect("city");
        c.update_field(HotelField::Longitude, "78.12").expect("lng");
        c.update_field(HotelField::Category, "Veg").expect("category");

        assert!(c.cancel_edit());
        assert_eq!(c.table().hotels(), before.as_slice());
        assert_eq!(c.edit_session(), &EditSession::Idle);
        assert!(c.api().calls().is_empty());
    }

    #[test]
    fn failed_commit_keeps_pre_edit_row() {
        let mut c = loaded();
        c.api().fail("update");
        let before = c.table().hotels().to_vec();
        c.begin_edit(&id(1)).expect("begin");
        c.update_field(HotelField::Name, "Renamed").expect("name");
        c.update_field(HotelField::City, "Coimbatore").expect("city");
        c.update_field(HotelField::Latitude, "11.01").expect("lat");
        c.update_field(HotelField::MapLocationLink, "https://maps.app.goo.gl/x1")
            .expect("map");

        let err = c.commit().unwrap_err();
        assert_eq!(err.to_string(), "Failed to update the hotel details");
        assert_eq!(c.table().hotels(), before.as_slice());
        assert_eq!(c.edit_session(), &EditSession::Idle);
        assert!(!c.table().is_busy(&id(1)));
    }

    #[test]
    fn only_one_edit_at_a_time() {
        let mut c = loaded();
        c.begin_edit(&id(1)).expect("begin");
        let err = c.begin_edit(&id(2)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConsoleError>(),
            Some(&ConsoleError::EditInProgress(id(1)))
        );
        assert!(c.cancel_edit());
        assert!(!c.cancel_edit());
        c.begin_edit(&id(2)).expect("begin after cancel");
    }

    #[test]
    fn invalid_values_are_rejected_without_request() {
        let mut c = loaded();
        c.begin_edit(&id(1)).expect("begin");
        let err = c.update_field(HotelField::Category, "Bakery").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConsoleError>(),
            Some(ConsoleError::InvalidField(FieldError::UnknownCategory(_)))
        ));
        assert!(c.api().calls().is_empty());
    }

    #[test]
    fn edit_requires_loaded_row_and_open_session() {
        let mut c = loaded();
        assert!(c.begin_edit(&id(9)).is_err());
        assert!(c.update_field(HotelField::Name, "x").is_err());
        assert_eq!(
            c.commit().unwrap_err().downcast_ref::<ConsoleError>(),
            Some(&ConsoleError::NoEditSession)
        );
    }
