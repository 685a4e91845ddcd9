    use super::*;
    use crate::model::Numeric;
    use crate::test_support::{Call, FakeApi, hotel};

    fn id(n: i64) -> HotelId {
        HotelId::Int(n)
    }

    fn loaded(hotels: Vec<Hotel>) -> Console<FakeApi> {
        let mut c = Console::new(FakeApi::with_hotels(hotels), false);
        c.load_all().expect("load");
        c.api().clear_calls();
        c
    }

    fn verified_trio() -> Console<FakeApi> {
        loaded(vec![
            hotel(1, "Dindigul Thalappakatti", true),
            hotel(2, "Dindigul Thalapakatti", true),
            hotel(3, "Thalappakatti Dindigul", true),
        ])
    }

    fn select(c: &mut Console<FakeApi>, ids: &[i64], canonical: i64) {
        for n in ids {
            assert!(c.toggle_select(&id(*n)).expect("select"));
        }
        c.set_canonical(&id(canonical)).expect("canonical");
    }

    fn console_err(err: &anyhow::Error) -> Option<&ConsoleError> {
        err.downcast_ref::<ConsoleError>()
    }

    #[test]
    fn merge_moves_each_duplicate_video_to_canonical() {
        let mut c = verified_trio();
        select(&mut c, &[1, 2, 3], 1);

        let report = c.merge().expect("merge");
        assert_eq!(report.canonical, id(1));
        let mut merged = report.merged.clone();
        merged.sort();
        assert_eq!(merged, vec![id(2), id(3)]);

        let mut videos: Vec<HotelVideo> = c
            .api()
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Video(v) => Some(v),
                _ => None,
            })
            .collect();
        videos.sort_by(|a, b| a.video_id.cmp(&b.video_id));
        assert_eq!(videos.len(), 2);
        assert!(videos.iter().all(|v| v.hotel_id == id(1)));
        assert_eq!(videos[0].video_id.as_deref(), Some("v2"));
        assert_eq!(videos[0].vlog_video_view_count, Some(Numeric::Parsed(1200)));
        assert_eq!(videos[1].hotel_vlog_video_link.as_deref(), Some("https://youtu.be/v3"));

        assert!(matches!(
            c.merge_stage(),
            MergeStage::AwaitingDeleteConfirmation { .. }
        ));
    }

    #[test]
    fn two_rows_make_exactly_one_create() {
        let mut c = verified_trio();
        select(&mut c, &[1, 2], 1);
        c.merge().expect("merge");
        assert_eq!(c.api().calls().len(), 1);
    }

    #[test]
    fn merge_refuses_any_unverified_row() {
        let mut c = loaded(vec![hotel(1, "A", true), hotel(2, "B", false)]);
        select(&mut c, &[1, 2], 1);
        let err = c.merge().unwrap_err();
        assert_eq!(
            console_err(&err),
            Some(&ConsoleError::NotVerified(vec![id(2)]))
        );
        assert!(err.to_string().starts_with("One of the hotel is not verified"));

        c.set_canonical(&id(2)).expect("canonical");
        assert!(c.merge().is_err());
        assert!(c.api().calls().is_empty());
    }

    #[test]
    fn merge_preconditions() {
        let mut c = verified_trio();
        c.toggle_select(&id(1)).expect("select");
        c.toggle_select(&id(2)).expect("select");
        assert_eq!(
            console_err(&c.merge().unwrap_err()),
            Some(&ConsoleError::NoOriginalSelected)
        );

        c.set_canonical(&id(3)).expect("canonical");
        assert_eq!(
            console_err(&c.merge().unwrap_err()),
            Some(&ConsoleError::OriginalNotSelected(id(3)))
        );

        assert!(!c.toggle_select(&id(2)).expect("deselect"));
        c.set_canonical(&id(1)).expect("canonical");
        assert_eq!(
            console_err(&c.merge().unwrap_err()),
            Some(&ConsoleError::TooFewSelected)
        );
        assert!(c.api().calls().is_empty());
    }

    #[test]
    fn failed_create_keeps_selection_for_retry() {
        let mut c = verified_trio();
        select(&mut c, &[1, 2, 3], 1);
        c.api().fail("video:3");

        let err = c.merge().unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("1 of 2 failed"), "{}", msg);
        assert!(msg.contains("hotel 3"), "{}", msg);
        assert_eq!(c.merge_stage(), &MergeStage::Idle);
        assert_eq!(c.selection().selected(), &[id(1), id(2), id(3)]);

        c.api().heal("video:3");
        c.merge().expect("retry");
    }

    #[test]
    fn confirm_deletes_duplicates_but_never_canonical() {
        let mut c = verified_trio();
        c.search("dindigul").expect("search");
        select(&mut c, &[1, 2, 3], 2);
        c.merge().expect("merge");
        c.api().clear_calls();

        let outcome = c.confirm_delete(true).expect("delete");
        assert_eq!(outcome.message(), "Record deleted successfully.");
        let DeleteOutcome::Deleted(mut deleted) = outcome else {
            panic!("expected deletion");
        };
        deleted.sort();
        assert_eq!(deleted, vec![id(1), id(3)]);

        let calls = c.api().calls();
        assert!(!calls.contains(&Call::Delete(id(2))));
        assert_eq!(calls.last(), Some(&Call::Search("dindigul".to_string())));

        assert!(c.selection().selected().is_empty());
        assert!(c.selection().canonical().is_none());
        assert_eq!(c.merge_stage(), &MergeStage::Idle);
        assert_eq!(c.table().hotels().len(), 1);
    }

    #[test]
    fn declining_keeps_duplicates_and_selection() {
        let mut c = verified_trio();
        select(&mut c, &[1, 2], 1);
        c.merge().expect("merge");
        c.api().clear_calls();

        assert_eq!(
            c.confirm_delete(false).expect("decline"),
            DeleteOutcome::Kept(vec![id(2)])
        );
        assert!(c.api().calls().is_empty());
        assert_eq!(c.selection().selected(), &[id(1), id(2)]);
        assert_eq!(c.merge_stage(), &MergeStage::Idle);
    }

    #[test]
    fn pending_confirmation_blocks_selection_changes() {
        let mut c = verified_trio();
        select(&mut c, &[1, 2], 1);
        c.merge().expect("merge");

        for err in [
            c.toggle_select(&id(3)).map(|_| ()).unwrap_err(),
            c.select_all(true).map(|_| ()).unwrap_err(),
            c.set_canonical(&id(2)).unwrap_err(),
            c.merge().map(|_| ()).unwrap_err(),
        ] {
            assert_eq!(
                console_err(&err),
                Some(&ConsoleError::MergeAwaitingConfirmation)
            );
        }
    }

    #[test]
    fn failed_delete_keeps_selection() {
        let mut c = verified_trio();
        select(&mut c, &[1, 2, 3], 1);
        c.merge().expect("merge");
        c.api().fail("delete:3");

        let err = c.confirm_delete(true).unwrap_err();
        assert!(format!("{:#}", err).contains("delete duplicate hotels"));
        assert_eq!(c.selection().selected().len(), 3);
        assert_eq!(
            console_err(&c.confirm_delete(true).unwrap_err()),
            Some(&ConsoleError::NothingToConfirm)
        );
    }

    #[test]
    fn select_all_and_clear() {
        let mut c = verified_trio();
        c.set_canonical(&id(2)).expect("canonical");
        assert_eq!(c.select_all(true).expect("all"), 3);
        assert!(c.selection().is_selected(&id(3)));
        assert_eq!(c.select_all(false).expect("none"), 0);
        assert!(c.selection().is_canonical(&id(2)));
        assert!(c.toggle_select(&id(42)).is_err());
    }
