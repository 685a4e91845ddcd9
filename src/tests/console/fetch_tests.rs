    use super::*;
    use crate::test_support::{Call, FakeApi, hotel};

    fn console() -> Console<FakeApi> {
        Console::new(
            FakeApi::with_hotels(vec![
                hotel(1, "Saravana Bhavan", true),
                hotel(2, "Saravana Bhavan Annex", false),
                hotel(3, "Buhari", true),
            ]),
            false,
        )
    }

    #[test]
    fn load_all_respects_verified_filter() {
        let mut c = console();
        assert_eq!(c.load_all().expect("load"), 3);
        assert_eq!(c.set_verified_only(true).expect("load verified"), 2);
        assert_eq!(c.table().load_state(), &LoadState::Ready);
        assert_eq!(c.api().calls(), vec![Call::List(false), Call::List(true)]);
    }

    #[test]
    fn long_query_hits_search_endpoint() {
        let mut c = console();
        assert_eq!(c.search("  saravana ").expect("search"), 2);
        assert_eq!(c.table().search_term(), "  saravana ");
        assert_eq!(c.api().calls(), vec![Call::Search("saravana".to_string())]);
    }

    #[test]
    fn short_query_reloads_full_list() {
        let mut c = console();
        assert_eq!(c.search("bu").expect("search"), 3);
        assert_eq!(c.search("abcd").expect("search"), 3);
        assert_eq!(c.api().calls(), vec![Call::List(false), Call::List(false)]);
    }

    #[test]
    fn empty_query_refreshes_count_and_reloads() {
        let mut c = console();
        c.search("saravana").expect("search");
        c.api().clear_calls();

        c.search("   ").expect("reset");
        assert_eq!(c.table().search_term(), "");
        assert_eq!(c.api().calls(), vec![Call::Count(None), Call::List(false)]);
        assert_eq!(c.last_count(), Some(&serde_json::json!({"count": 3})));
    }

    #[test]
    fn count_failure_does_not_block_reset() {
        let mut c = console();
        c.api().fail("count");
        assert_eq!(c.search("").expect("reset"), 3);
        assert!(c.last_count().is_none());
    }

    #[test]
    fn failed_fetch_empties_the_list() {
        let mut c = console();
        c.load_all().expect("load");
        c.api().fail("search");

        let err = c.search("saravana").unwrap_err();
        assert!(format!("{:#}", err).contains("search hotels"), "{:#}", err);
        assert!(c.table().hotels().is_empty());
        match c.table().load_state() {
            LoadState::Failed(msg) => assert!(msg.contains("search failed"), "{}", msg),
            other => panic!("expected failed state, got {:?}", other),
        }
    }

    #[test]
    fn stats_count_verified_and_valid() {
        let mut c = console();
        c.load_all().expect("load");
        assert_eq!(
            c.table().stats(),
            HotelStats {
                total: 3,
                verified: 2,
                valid: 3
            }
        );
    }
