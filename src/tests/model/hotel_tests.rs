    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Hotel {
        serde_json::from_value(value).expect("parse hotel")
    }

    #[test]
    fn backend_row_with_loose_types_parses() {
        let h = row(json!({
            "hotelId": 7,
            "hotelName": "Murugan Idli",
            "latitude": "13.05",
            "longitude": 80.2,
            "vlogVideoViewCount": "1500",
            "verified": null,
            "valid": true,
            "hotelSignatureDishes": [{"dishName": "Idli", "dishPrice": 40}],
            "hotelTimings": null,
        }));
        assert_eq!(h.hotel_id, HotelId::Int(7));
        assert_eq!(h.latitude, Some(Numeric::Parsed(13.05)));
        assert_eq!(h.longitude, Some(Numeric::Parsed(80.2)));
        assert_eq!(h.vlog_video_view_count, Some(Numeric::Parsed(1500)));
        assert!(!h.verified);
        assert!(h.valid);
        assert_eq!(h.hotel_signature_dishes[0].dish_price, "40");
        assert!(h.hotel_timings.is_empty());
    }

    #[test]
    fn unknown_columns_survive_a_round_trip() {
        let h = row(json!({
            "hotelId": "abc",
            "hotelName": "X",
            "ownerNote": "call first",
        }));
        assert_eq!(h.hotel_id, HotelId::Text("abc".to_string()));
        let back = serde_json::to_value(&h).expect("serialize");
        assert_eq!(back["ownerNote"], "call first");
        assert_eq!(back["hotelId"], "abc");
        assert!(back.get("createdDate").is_none());
    }

    #[test]
    fn cleared_editable_columns_serialize_as_null() {
        let mut h = row(json!({
            "hotelId": 3,
            "hotelName": "Sangeetha",
            "hotelCity": "Chennai",
            "latitude": 13.1,
        }));
        h.set_field(HotelField::Latitude, "").expect("clear lat");
        h.set_field(HotelField::City, "").expect("clear city");
        let back = serde_json::to_value(&h).expect("serialize");
        assert_eq!(back.get("latitude"), Some(&serde_json::Value::Null));
        assert_eq!(back.get("longitude"), Some(&serde_json::Value::Null));
        assert_eq!(back["hotelCity"], "");
        assert_eq!(back.get("hotelAddress"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn non_numeric_coordinates_load_and_round_trip_verbatim() {
        let h = row(json!({
            "hotelId": 9,
            "latitude": "N/A",
            "longitude": "",
            "vlogVideoViewCount": "1.2K",
        }));
        assert_eq!(h.latitude, Some(Numeric::Raw(json!("N/A"))));
        assert_eq!(h.field_value(HotelField::Latitude), "N/A");
        assert_eq!(h.latitude.as_ref().and_then(Numeric::parsed), None);

        let back = serde_json::to_value(&h).expect("serialize");
        assert_eq!(back["latitude"], "N/A");
        assert_eq!(back["longitude"], "");
        assert_eq!(back["vlogVideoViewCount"], "1.2K");

        let rows: Vec<Hotel> = serde_json::from_value(json!([
            {"hotelId": 1, "latitude": 13.0},
            {"hotelId": 2, "latitude": "unknown"},
        ]))
        .expect("one bad coordinate does not fail the list");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn set_field_parses_coordinates_and_clears_on_empty() {
        let mut h = row(json!({"hotelId": 1, "latitude": 1.5}));
        h.set_field(HotelField::Longitude, " 80.25 ").expect("set lng");
        assert_eq!(h.longitude, Some(Numeric::Parsed(80.25)));
        h.set_field(HotelField::Latitude, "").expect("clear lat");
        assert_eq!(h.latitude, None);

        let err = h.set_field(HotelField::Latitude, "north").unwrap_err();
        assert_eq!(
            err,
            FieldError::NotANumber {
                field: "latitude",
                value: "north".to_string()
            }
        );
    }

    #[test]
    fn category_is_normalized_and_checked() {
        let mut h = row(json!({"hotelId": 1}));
        h.set_field(HotelField::Category, "fast food").expect("set category");
        assert_eq!(h.hotel_category.as_deref(), Some("Fast Food"));
        assert!(matches!(
            h.set_field(HotelField::Category, "Bakery"),
            Err(FieldError::UnknownCategory(_))
        ));
    }

    #[test]
    fn field_names_accept_wire_names_labels_and_aliases() {
        assert_eq!("hotelName".parse::<HotelField>(), Ok(HotelField::Name));
        assert_eq!("lat".parse::<HotelField>(), Ok(HotelField::Latitude));
        assert_eq!("lon".parse::<HotelField>(), Ok(HotelField::Longitude));
        assert_eq!("Map".parse::<HotelField>(), Ok(HotelField::MapLocationLink));
        assert!("rating".parse::<HotelField>().is_err());
    }

    #[test]
    fn video_preview_depends_on_type_and_id() {
        let yt = row(json!({"hotelId": 1, "videoId": "abc", "videoType": "Youtube Shorts"}));
        match yt.video_preview() {
            VideoPreview::YouTube {
                thumbnail,
                fallback,
            } => {
                assert_eq!(thumbnail, "https://img.youtube.com/vi/abc/maxresdefault.jpg");
                assert_eq!(fallback, "https://img.youtube.com/vi/abc/hqdefault.jpg");
            }
            other => panic!("expected youtube preview, got {:?}", other),
        }

        let insta = row(json!({"hotelId": 2, "videoId": "r1", "videoType": "Instagram"}));
        assert_eq!(insta.video_preview().to_string(), "Instagram Video");

        let none = row(json!({"hotelId": 3, "videoType": "Youtube"}));
        assert_eq!(none.video_preview().to_string(), "No Video");
    }

    #[test]
    fn url_shape_check() {
        assert!(looks_like_url("https://maps.app.goo.gl/abc123"));
        assert!(looks_like_url("maps.google.com/?q=13.0"));
        assert!(looks_like_url("http://10.0.0.1:8080/x"));
        assert!(!looks_like_url("near the bus stand"));
        assert!(!looks_like_url("localhost"));
        assert!(!looks_like_url(""));
    }
