use super::*;

pub(super) fn print_hotels(hotels: &[Hotel], json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(hotels).context("serialize hotels json")?
        );
        return Ok(());
    }
    if hotels.is_empty() {
        println!("No hotels");
        return Ok(());
    }
    for h in hotels {
        println!("{}", hotel_line(h));
    }
    Ok(())
}

pub(super) fn print_hotel(hotel: &Hotel, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(hotel).context("serialize hotel json")?
        );
    } else {
        println!("{}", hotel_line(hotel));
    }
    Ok(())
}

fn hotel_line(h: &Hotel) -> String {
    let flag = match (h.verified, h.valid) {
        (true, true) => "verified",
        (true, false) => "invalid",
        (false, _) => "pending",
    };
    format!(
        "{} [{}] {} ({}) {}",
        h.hotel_id,
        flag,
        h.display_name(),
        h.hotel_city.as_deref().unwrap_or("-"),
        h.video_preview()
    )
}
