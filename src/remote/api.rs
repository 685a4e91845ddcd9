use super::*;

/// The backend surface the console drives.
///
/// `Sync` because batch steps fan requests out over scoped threads that share
/// one client.
pub trait HotelApi: Sync {
    fn list_hotels(&self, verified_only: bool) -> Result<Vec<Hotel>>;
    fn search_hotels(&self, name: &str) -> Result<Vec<Hotel>>;
    fn count(&self, mobile: Option<&str>) -> Result<serde_json::Value>;
    fn verify_hotel(&self, req: &VerifyRequest) -> Result<()>;
    fn update_hotel(&self, hotel: &Hotel) -> Result<()>;
    fn create_hotel_video(&self, video: &HotelVideo) -> Result<()>;
    fn delete_hotel(&self, id: &HotelId) -> Result<()>;
    fn create_dish(&self, dish: &NewDish) -> Result<()>;
}

impl<T: HotelApi + ?Sized> HotelApi for &T {
    fn list_hotels(&self, verified_only: bool) -> Result<Vec<Hotel>> {
        (**self).list_hotels(verified_only)
    }
    fn search_hotels(&self, name: &str) -> Result<Vec<Hotel>> {
        (**self).search_hotels(name)
    }
    fn count(&self, mobile: Option<&str>) -> Result<serde_json::Value> {
        (**self).count(mobile)
    }
    fn verify_hotel(&self, req: &VerifyRequest) -> Result<()> {
        (**self).verify_hotel(req)
    }
    fn update_hotel(&self, hotel: &Hotel) -> Result<()> {
        (**self).update_hotel(hotel)
    }
    fn create_hotel_video(&self, video: &HotelVideo) -> Result<()> {
        (**self).create_hotel_video(video)
    }
    fn delete_hotel(&self, id: &HotelId) -> Result<()> {
        (**self).delete_hotel(id)
    }
    fn create_dish(&self, dish: &NewDish) -> Result<()> {
        (**self).create_dish(dish)
    }
}

impl HotelApi for RemoteClient {
    fn list_hotels(&self, verified_only: bool) -> Result<Vec<Hotel>> {
        RemoteClient::list_hotels(self, verified_only)
    }
    fn search_hotels(&self, name: &str) -> Result<Vec<Hotel>> {
        RemoteClient::search_hotels(self, name)
    }
    fn count(&self, mobile: Option<&str>) -> Result<serde_json::Value> {
        RemoteClient::count(self, mobile)
    }
    fn verify_hotel(&self, req: &VerifyRequest) -> Result<()> {
        RemoteClient::verify_hotel(self, req)
    }
    fn update_hotel(&self, hotel: &Hotel) -> Result<()> {
        RemoteClient::update_hotel(self, hotel)
    }
    fn create_hotel_video(&self, video: &HotelVideo) -> Result<()> {
        RemoteClient::create_hotel_video(self, video)
    }
    fn delete_hotel(&self, id: &HotelId) -> Result<()> {
        RemoteClient::delete_hotel(self, id)
    }
    fn create_dish(&self, dish: &NewDish) -> Result<()> {
        RemoteClient::create_dish(self, dish)
    }
}
