    use super::*;
    use crate::test_support::{Call, FakeApi, hotel};

    fn loaded() -> Console<FakeApi> {
        let mut c = Console::new(
            FakeApi::with_hotels(vec![hotel(1, "Sangeetha", false), hotel(2, "Adyar Ananda", true)]),
            true,
        );
        c.load_all().expect("load");
        c.api().clear_calls();
        c
    }

    #[test]
    fn approve_sends_verified_and_reloads() {
        let mut c = loaded();
        assert_eq!(c.table().hotels().len(), 1);

        c.approve(&HotelId::Int(1), true).expect("approve");

        assert_eq!(
            c.api().calls(),
            vec![
                Call::Verify(VerifyRequest {
                    hotel_id: HotelId::Int(1),
                    verified: true,
                    valid: true,
                }),
                Call::List(true),
            ]
        );
        assert_eq!(c.table().hotels().len(), 2);
        assert!(!c.table().is_busy(&HotelId::Int(1)));
    }

    #[test]
    fn approve_as_invalid() {
        let mut c = loaded();
        c.approve(&HotelId::Int(2), false).expect("approve");
        let stored = c.api().stored();
        assert!(stored.iter().any(|h| h.hotel_id == HotelId::Int(2) && h.verified && !h.valid));
    }

    #[test]
    fn approve_closes_open_edit() {
        let mut c = loaded();
        c.begin_edit(&HotelId::Int(2)).expect("begin");
        c.approve(&HotelId::Int(2), true).expect("approve");
        assert_eq!(c.edit_session(), &EditSession::Idle);
    }

    #[test]
    fn failed_approve_does_not_reload() {
        let mut c = loaded();
        c.api().fail("verify");
        let err = c.approve(&HotelId::Int(2), true).unwrap_err();
        assert_eq!(err.to_string(), "Failed to approve the hotel");
        assert_eq!(c.api().calls().len(), 1);
        assert!(!c.table().is_busy(&HotelId::Int(2)));
    }

    #[test]
    fn reload_failure_after_approve_is_not_an_error() {
        let mut c = loaded();
        c.api().fail("list");
        c.approve(&HotelId::Int(2), true).expect("approve");
        assert!(matches!(c.table().load_state(), LoadState::Failed(_)));
    }
